//! Review handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::catalog::ProductRepository;
use crate::reviews::{Review, ReviewFilter, ReviewRepository};
use crate::user_auth::Claims;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, PageParams, Paginated, created, ok};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReviewListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Restrict to one product
    pub product: Option<i64>,
    /// Restrict to one author
    pub user: Option<i64>,
    /// Exact star rating filter (1-5)
    pub rating: Option<i16>,
    /// Message search term
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1))]
    #[schema(example = "Great value for money")]
    pub message: String,
    /// 1-5 stars
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    /// Optional attachment URL
    pub image: Option<String>,
}

/// List reviews across all products
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    params(ReviewListParams),
    responses(
        (status = 200, description = "Paginated reviews", body = ApiResponse<Paginated<Review>>)
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewListParams>,
) -> ApiResult<Paginated<Review>> {
    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    };
    let filter = ReviewFilter {
        product_id: params.product,
        user_id: params.user,
        rating: params.rating,
        search: params.search.clone(),
    };

    let results =
        ReviewRepository::list(state.pool(), &filter, page.limit(), page.offset()).await?;
    let count = ReviewRepository::count(state.pool(), &filter).await?;
    ok(Paginated::new(&page, count, results))
}

/// List one product's reviews
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/reviews",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        ReviewListParams
    ),
    responses(
        (status = 200, description = "Paginated reviews", body = ApiResponse<Paginated<Review>>),
        (status = 404, description = "Product not found")
    ),
    tag = "Reviews"
)]
pub async fn list_product_reviews(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
    Query(params): Query<ReviewListParams>,
) -> ApiResult<Paginated<Review>> {
    ProductRepository::get_by_id(state.pool(), product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    };
    let filter = ReviewFilter {
        product_id: Some(product_id),
        user_id: params.user,
        rating: params.rating,
        search: params.search.clone(),
    };

    let results =
        ReviewRepository::list(state.pool(), &filter, page.limit(), page.offset()).await?;
    let count = ReviewRepository::count(state.pool(), &filter).await?;
    ok(Paginated::new(&page, count, results))
}

/// Create a review for a product (authenticated)
#[utoipa::path(
    post,
    path = "/api/v1/products/{product_id}/reviews",
    params(("product_id" = i64, Path, description = "Product ID")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<Review>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<Review> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::unauthorized("Malformed token subject"))?;

    ProductRepository::get_by_id(state.pool(), product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let review = ReviewRepository::create(
        state.pool(),
        product_id,
        user_id,
        &req.message,
        req.rating,
        req.image.as_deref(),
    )
    .await?;
    created(review)
}
