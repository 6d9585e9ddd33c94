//! Data models for the product catalog

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Top-level taxonomy node
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Category {
    pub category_id: i64,
    pub title: String,
    /// Image URL (upload handling is out of scope, records store the URL)
    pub image: Option<String>,
    pub slug: String,
}

/// Second-level taxonomy node, always belongs to a category
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct SubCategory {
    pub subcategory_id: i64,
    pub category_id: i64,
    pub name: String,
    pub slug: String,
}

/// Sellable item
///
/// `quantity` is the contended stock counter; it is only ever decremented
/// inside the order placement transaction (see [`crate::orders::OrderService`]).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub product_id: i64,
    pub subcategory_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Unit price before discount, 2 decimal places
    #[schema(value_type = String, example = "100.00")]
    pub price: Decimal,
    /// Percent discount, 0-100
    pub discount: i16,
    /// Sellable units in stock, never negative
    pub quantity: i32,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product joined with like data for the viewing user
///
/// `liked` is always false for anonymous viewers.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductWithLikes {
    #[sqlx(flatten)]
    pub product: Product,
    pub like_count: i64,
    pub liked: bool,
}

/// Image record attached to a product
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ProductImage {
    pub image_id: i64,
    pub product_id: i64,
    pub url: String,
    pub alt_text: Option<String>,
}
