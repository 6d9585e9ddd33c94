//! Order handlers
//!
//! Placement accepts anonymous or authenticated callers; the rest of the
//! order surface requires a JWT and only ever exposes the caller's own
//! orders.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::orders::{
    BuyerInfo, Order, OrderFilter, OrderOrdering, OrderUpdate, PlaceOrderRequest,
};
use crate::user_auth::{Claims, MaybeUser};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, PageParams, Paginated, created, ok};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub product_id: i64,
    /// Units to order, positive
    #[validate(range(min = 1))]
    #[schema(example = 3)]
    pub quantity: i32,
    #[validate(nested)]
    #[serde(flatten)]
    pub buyer: BuyerInfo,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OrderListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Restrict to orders of one product
    pub product: Option<i64>,
    /// Buyer name/phone search term
    pub search: Option<String>,
    /// Ordering key: created_at | -created_at | total_price | -total_price
    pub ordering: Option<String>,
}

fn claims_user_id(claims: &Claims) -> Result<i64, ApiError> {
    claims
        .user_id()
        .ok_or_else(|| ApiError::unauthorized("Malformed token subject"))
}

/// Place an order
///
/// Atomically checks stock, decrements inventory and persists the order
/// with its computed total. Fails with 400 on insufficient stock, leaving
/// inventory untouched.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<Order>),
        (status = 400, description = "Invalid quantity or insufficient stock"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Concurrent conflict, retry")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<MaybeUser>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Order> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let user_id = match &user.0 {
        Some(claims) => Some(claims_user_id(claims)?),
        None => None,
    };

    let place = PlaceOrderRequest {
        product_id: req.product_id,
        quantity: req.quantity,
        buyer: req.buyer,
        user_id,
    };

    let order = state.orders.place_order_with_retry(&place).await?;
    created(order)
}

/// List own orders (authenticated)
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Paginated orders", body = ApiResponse<Paginated<Order>>),
        (status = 400, description = "Unknown ordering key"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<OrderListParams>,
) -> ApiResult<Paginated<Order>> {
    let user_id = claims_user_id(&claims)?;
    let ordering = OrderOrdering::parse(params.ordering.as_deref())
        .ok_or_else(|| ApiError::bad_request("Unknown ordering key"))?;
    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    };
    let filter = OrderFilter {
        product_id: params.product,
        search: params.search.clone(),
    };

    let (orders, count) = state
        .orders
        .list_orders(user_id, &filter, ordering, page.limit(), page.offset())
        .await?;
    ok(Paginated::new(&page, count, orders))
}

/// Fetch one of the caller's orders (authenticated)
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}",
    params(("order_id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
) -> ApiResult<Order> {
    let user_id = claims_user_id(&claims)?;
    let order = state.orders.get_order(order_id).await?;

    // Orders of other users are indistinguishable from missing ones
    if order.user_id != Some(user_id) {
        return ApiError::not_found(format!("Order {} not found", order_id)).into_err();
    }
    ok(order)
}

/// Update buyer fields of one of the caller's orders (authenticated)
///
/// `total_price` and `created_at` are immutable; stock is never touched.
#[utoipa::path(
    put,
    path = "/api/v1/orders/{order_id}",
    params(("order_id" = i64, Path, description = "Order ID")),
    request_body = OrderUpdate,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<Order>),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
    Json(req): Json<OrderUpdate>,
) -> ApiResult<Order> {
    let user_id = claims_user_id(&claims)?;

    let existing = state.orders.get_order(order_id).await?;
    if existing.user_id != Some(user_id) {
        return ApiError::not_found(format!("Order {} not found", order_id)).into_err();
    }

    let order = state.orders.update_order(order_id, &req).await?;
    ok(order)
}
