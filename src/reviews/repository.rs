//! Repository layer for review database operations

use super::models::{Review, ReviewStats};
use sqlx::{PgPool, Row};

const REVIEW_COLS: &str = "r.review_id, r.product_id, r.user_id, u.username AS user_name, \
                           r.message, r.rating, r.image, r.created_at";

/// Optional filters for review listing
#[derive(Debug, Default, Clone)]
pub struct ReviewFilter {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rating: Option<i16>,
    pub search: Option<String>,
}

/// Review repository
pub struct ReviewRepository;

impl ReviewRepository {
    /// List reviews, newest first, with optional filters
    pub async fn list(
        pool: &PgPool,
        filter: &ReviewFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as(&format!(
            r#"SELECT {REVIEW_COLS}
               FROM reviews r JOIN users u ON u.user_id = r.user_id
               WHERE ($1::bigint IS NULL OR r.product_id = $1)
                 AND ($2::bigint IS NULL OR r.user_id = $2)
                 AND ($3::smallint IS NULL OR r.rating = $3)
                 AND ($4::text IS NULL OR r.message ILIKE '%' || $4 || '%')
               ORDER BY r.created_at DESC
               LIMIT $5 OFFSET $6"#,
        ))
        .bind(filter.product_id)
        .bind(filter.user_id)
        .bind(filter.rating)
        .bind(filter.search.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Count reviews matching the same filter as [`Self::list`]
    pub async fn count(pool: &PgPool, filter: &ReviewFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"SELECT COUNT(*)
               FROM reviews r
               WHERE ($1::bigint IS NULL OR r.product_id = $1)
                 AND ($2::bigint IS NULL OR r.user_id = $2)
                 AND ($3::smallint IS NULL OR r.rating = $3)
                 AND ($4::text IS NULL OR r.message ILIKE '%' || $4 || '%')"#,
        )
        .bind(filter.product_id)
        .bind(filter.user_id)
        .bind(filter.rating)
        .bind(filter.search.as_deref())
        .fetch_one(pool)
        .await
    }

    /// Create a new review
    pub async fn create(
        pool: &PgPool,
        product_id: i64,
        user_id: i64,
        message: &str,
        rating: i16,
        image: Option<&str>,
    ) -> Result<Review, sqlx::Error> {
        let review_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO reviews (product_id, user_id, message, rating, image)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING review_id"#,
        )
        .bind(product_id)
        .bind(user_id)
        .bind(message)
        .bind(rating)
        .bind(image)
        .fetch_one(pool)
        .await?;

        // Re-read through the join so user_name is populated
        sqlx::query_as(&format!(
            r#"SELECT {REVIEW_COLS}
               FROM reviews r JOIN users u ON u.user_id = r.user_id
               WHERE r.review_id = $1"#,
        ))
        .bind(review_id)
        .fetch_one(pool)
        .await
    }

    /// Most recent reviews for a product (product detail embeds up to 5)
    pub async fn recent_for_product(
        pool: &PgPool,
        product_id: i64,
        limit: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as(&format!(
            r#"SELECT {REVIEW_COLS}
               FROM reviews r JOIN users u ON u.user_id = r.user_id
               WHERE r.product_id = $1
               ORDER BY r.created_at DESC
               LIMIT $2"#,
        ))
        .bind(product_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Aggregate rating stats for a product
    pub async fn stats_for_product(
        pool: &PgPool,
        product_id: i64,
    ) -> Result<ReviewStats, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT COUNT(*) AS review_count,
                      COALESCE(ROUND(AVG(rating)::numeric, 1), 0)::float8 AS average_rating
               FROM reviews WHERE product_id = $1"#,
        )
        .bind(product_id)
        .fetch_one(pool)
        .await?;

        Ok(ReviewStats {
            review_count: row.get("review_count"),
            average_rating: row.get("average_rating"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_filter_default_is_unfiltered() {
        let filter = ReviewFilter::default();
        assert!(filter.product_id.is_none());
        assert!(filter.user_id.is_none());
        assert!(filter.rating.is_none());
        assert!(filter.search.is_none());
    }
}
