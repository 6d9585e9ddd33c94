//! SubCategory handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::catalog::{SubCategory, SubCategoryRepository};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, PageParams, Paginated, created, ok};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SubCategoryListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Restrict to one parent category
    pub category: Option<i64>,
    /// Name search term
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubCategoryRequest {
    pub category_id: i64,
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Washing Machines")]
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSubCategoryRequest {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// List subcategories
#[utoipa::path(
    get,
    path = "/api/v1/subcategories",
    params(SubCategoryListParams),
    responses(
        (status = 200, description = "Paginated subcategories", body = ApiResponse<Paginated<SubCategory>>)
    ),
    tag = "Catalog"
)]
pub async fn list_subcategories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SubCategoryListParams>,
) -> ApiResult<Paginated<SubCategory>> {
    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    };
    let search = params.search.as_deref();
    let results = SubCategoryRepository::list(
        state.pool(),
        params.category,
        search,
        page.limit(),
        page.offset(),
    )
    .await?;
    let count = SubCategoryRepository::count(state.pool(), params.category, search).await?;
    ok(Paginated::new(&page, count, results))
}

/// SubCategory detail
#[utoipa::path(
    get,
    path = "/api/v1/subcategories/{subcategory_id}",
    params(("subcategory_id" = i64, Path, description = "SubCategory ID")),
    responses(
        (status = 200, description = "SubCategory", body = ApiResponse<SubCategory>),
        (status = 404, description = "SubCategory not found")
    ),
    tag = "Catalog"
)]
pub async fn get_subcategory(
    State(state): State<Arc<AppState>>,
    Path(subcategory_id): Path<i64>,
) -> ApiResult<SubCategory> {
    let subcategory = SubCategoryRepository::get_by_id(state.pool(), subcategory_id)
        .await?
        .ok_or_else(|| ApiError::not_found("SubCategory not found"))?;
    ok(subcategory)
}

/// Create subcategory (authenticated)
#[utoipa::path(
    post,
    path = "/api/v1/subcategories",
    request_body = CreateSubCategoryRequest,
    responses(
        (status = 201, description = "SubCategory created", body = ApiResponse<SubCategory>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_subcategory(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSubCategoryRequest>,
) -> ApiResult<SubCategory> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let subcategory = SubCategoryRepository::create(
        state.pool(),
        req.category_id,
        &req.name,
        req.slug.as_deref(),
    )
    .await?;
    created(subcategory)
}

/// Update subcategory (authenticated)
#[utoipa::path(
    put,
    path = "/api/v1/subcategories/{subcategory_id}",
    params(("subcategory_id" = i64, Path, description = "SubCategory ID")),
    request_body = UpdateSubCategoryRequest,
    responses(
        (status = 200, description = "SubCategory updated", body = ApiResponse<SubCategory>),
        (status = 404, description = "SubCategory not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_subcategory(
    State(state): State<Arc<AppState>>,
    Path(subcategory_id): Path<i64>,
    Json(req): Json<UpdateSubCategoryRequest>,
) -> ApiResult<SubCategory> {
    let subcategory = SubCategoryRepository::update(
        state.pool(),
        subcategory_id,
        req.category_id,
        req.name.as_deref(),
        req.slug.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("SubCategory not found"))?;
    ok(subcategory)
}

/// Delete subcategory (authenticated)
#[utoipa::path(
    delete,
    path = "/api/v1/subcategories/{subcategory_id}",
    params(("subcategory_id" = i64, Path, description = "SubCategory ID")),
    responses(
        (status = 200, description = "SubCategory deleted"),
        (status = 404, description = "SubCategory not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_subcategory(
    State(state): State<Arc<AppState>>,
    Path(subcategory_id): Path<i64>,
) -> ApiResult<()> {
    if SubCategoryRepository::delete(state.pool(), subcategory_id).await? {
        ok(())
    } else {
        ApiError::not_found("SubCategory not found").into_err()
    }
}
