//! Repository layer for order database operations

use super::models::{BuyerInfo, Order, OrderUpdate};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

const ORDER_COLS: &str = "order_id, user_id, product_id, full_name, phone, address, quantity, \
                          total_price, created_at, updated_at";

/// Order list ordering keys accepted by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderOrdering {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    TotalPriceAsc,
    TotalPriceDesc,
}

impl OrderOrdering {
    /// Parse an API ordering key ("created_at", "-total_price", ...)
    pub fn parse(key: Option<&str>) -> Option<Self> {
        match key {
            None => Some(Self::CreatedAtDesc),
            Some("created_at") => Some(Self::CreatedAtAsc),
            Some("-created_at") => Some(Self::CreatedAtDesc),
            Some("total_price") => Some(Self::TotalPriceAsc),
            Some("-total_price") => Some(Self::TotalPriceDesc),
            Some(_) => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::CreatedAtDesc => "created_at DESC",
            Self::CreatedAtAsc => "created_at ASC",
            Self::TotalPriceAsc => "total_price ASC",
            Self::TotalPriceDesc => "total_price DESC",
        }
    }
}

/// Optional filters for a user's order listing
#[derive(Debug, Default, Clone)]
pub struct OrderFilter {
    pub product_id: Option<i64>,
    /// Matches against the buyer's full name or phone
    pub search: Option<String>,
}

/// Order repository
///
/// `insert` takes any executor so the placement service can run it inside
/// the same transaction that decrements stock.
pub struct OrderRepository;

impl OrderRepository {
    /// Insert a new order row with its computed total
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Option<i64>,
        product_id: i64,
        buyer: &BuyerInfo,
        quantity: i32,
        total_price: Decimal,
    ) -> Result<Order, sqlx::Error> {
        sqlx::query_as(&format!(
            r#"INSERT INTO orders (user_id, product_id, full_name, phone, address, quantity, total_price)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {ORDER_COLS}"#,
        ))
        .bind(user_id)
        .bind(product_id)
        .bind(&buyer.full_name)
        .bind(&buyer.phone)
        .bind(&buyer.address)
        .bind(quantity)
        .bind(total_price)
        .fetch_one(executor)
        .await
    }

    /// Get order by ID
    pub async fn get_by_id(pool: &PgPool, order_id: i64) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as(&format!("SELECT {ORDER_COLS} FROM orders WHERE order_id = $1"))
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's orders with optional filters and whitelisted ordering
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: i64,
        filter: &OrderFilter,
        ordering: OrderOrdering,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Order>, sqlx::Error> {
        sqlx::query_as(&format!(
            r#"SELECT {ORDER_COLS} FROM orders
               WHERE user_id = $1
                 AND ($2::bigint IS NULL OR product_id = $2)
                 AND ($3::text IS NULL
                      OR full_name ILIKE '%' || $3 || '%'
                      OR phone ILIKE '%' || $3 || '%')
               ORDER BY {}
               LIMIT $4 OFFSET $5"#,
            ordering.as_sql(),
        ))
        .bind(user_id)
        .bind(filter.product_id)
        .bind(filter.search.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Count a user's orders matching the same filter as [`Self::list_for_user`]
    pub async fn count_for_user(
        pool: &PgPool,
        user_id: i64,
        filter: &OrderFilter,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM orders
               WHERE user_id = $1
                 AND ($2::bigint IS NULL OR product_id = $2)
                 AND ($3::text IS NULL
                      OR full_name ILIKE '%' || $3 || '%'
                      OR phone ILIKE '%' || $3 || '%')"#,
        )
        .bind(user_id)
        .bind(filter.product_id)
        .bind(filter.search.as_deref())
        .fetch_one(pool)
        .await
    }

    /// Apply buyer-field updates to an existing order
    ///
    /// `total_price` and `created_at` are never part of the SET list, which
    /// is what makes them immutable at this layer regardless of input.
    pub async fn update(
        pool: &PgPool,
        order_id: i64,
        update: &OrderUpdate,
    ) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as(&format!(
            r#"UPDATE orders
               SET full_name = COALESCE($2, full_name),
                   phone = COALESCE($3, phone),
                   address = COALESCE($4, address),
                   quantity = COALESCE($5, quantity),
                   updated_at = NOW()
               WHERE order_id = $1
               RETURNING {ORDER_COLS}"#,
        ))
        .bind(order_id)
        .bind(update.full_name.as_deref())
        .bind(update.phone.as_deref())
        .bind(update.address.as_deref())
        .bind(update.quantity)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ordering_parse() {
        assert_eq!(
            OrderOrdering::parse(None),
            Some(OrderOrdering::CreatedAtDesc)
        );
        assert_eq!(
            OrderOrdering::parse(Some("total_price")),
            Some(OrderOrdering::TotalPriceAsc)
        );
        assert_eq!(
            OrderOrdering::parse(Some("-total_price")),
            Some(OrderOrdering::TotalPriceDesc)
        );
        assert_eq!(OrderOrdering::parse(Some("total_price; --")), None);
    }

    #[test]
    fn test_order_filter_default_is_unfiltered() {
        let filter = OrderFilter::default();
        assert!(filter.product_id.is_none());
        assert!(filter.search.is_none());
    }
}
