//! Data models for product reviews

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A user review of a product
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Review {
    pub review_id: i64,
    pub product_id: i64,
    pub user_id: i64,
    /// Username denormalized into the response for display
    pub user_name: String,
    pub message: String,
    /// 1-5 stars
    pub rating: i16,
    /// Optional attachment URL
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate review stats for one product
#[derive(Debug, Clone, Copy, Default, Serialize, ToSchema)]
pub struct ReviewStats {
    pub review_count: i64,
    /// Mean rating rounded to 1 decimal place; 0.0 when there are no reviews
    pub average_rating: f64,
}
