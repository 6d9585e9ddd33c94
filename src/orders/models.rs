//! Data models for orders

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A placed order
///
/// `total_price` and `created_at` are computed at placement time and
/// immutable afterwards; updates only touch buyer fields and quantity and
/// never re-run the stock decrement.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    pub order_id: i64,
    /// Present when the order was placed by an authenticated user
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub quantity: i32,
    /// Derived at placement, never user-supplied
    #[schema(value_type = String, example = "240.00")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Buyer contact details captured with an order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BuyerInfo {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Aziz Karimov")]
    pub full_name: String,
    #[validate(length(min = 7, max = 32))]
    #[schema(example = "+998901234567")]
    pub phone: String,
    #[validate(length(min = 1))]
    #[schema(example = "Tashkent, Chilonzor 9")]
    pub address: String,
}

/// Input to [`crate::orders::OrderService::place_order`]
#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    pub product_id: i64,
    pub quantity: i32,
    pub buyer: BuyerInfo,
    pub user_id: Option<i64>,
}

/// Mutable order fields; everything absent keeps its current value.
/// `total_price` and `created_at` are deliberately not representable here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub quantity: Option<i32>,
}
