//! Category handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::catalog::{Category, CategoryRepository, SubCategory};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, PageParams, Paginated, created, ok};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CategoryListParams {
    /// 1-based page number
    pub page: Option<i64>,
    /// Items per page (1-100, default 20)
    pub page_size: Option<i64>,
    /// Title search term
    pub search: Option<String>,
}

impl CategoryListParams {
    fn pagination(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Category with its subcategories, for the detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetail {
    pub category: Category,
    pub subcategories_count: usize,
    pub subcategories: Vec<SubCategory>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Home Appliances")]
    pub title: String,
    pub image: Option<String>,
    /// Derived from title when absent
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub title: Option<String>,
    pub image: Option<String>,
    pub slug: Option<String>,
}

/// List categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "Paginated categories", body = ApiResponse<Paginated<Category>>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryListParams>,
) -> ApiResult<Paginated<Category>> {
    let page = params.pagination();
    let search = params.search.as_deref();
    let results =
        CategoryRepository::list(state.pool(), search, page.limit(), page.offset()).await?;
    let count = CategoryRepository::count(state.pool(), search).await?;
    ok(Paginated::new(&page, count, results))
}

/// Category detail with subcategories
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryDetail>),
        (status = 404, description = "Category not found")
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
) -> ApiResult<CategoryDetail> {
    let category = CategoryRepository::get_by_id(state.pool(), category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;
    let subcategories = CategoryRepository::subcategories(state.pool(), category_id).await?;

    ok(CategoryDetail {
        category,
        subcategories_count: subcategories.len(),
        subcategories,
    })
}

/// Create category (authenticated)
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<Category> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let category = CategoryRepository::create(
        state.pool(),
        &req.title,
        req.image.as_deref(),
        req.slug.as_deref(),
    )
    .await?;
    created(category)
}

/// Update category (authenticated)
#[utoipa::path(
    put,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i64, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> ApiResult<Category> {
    let category = CategoryRepository::update(
        state.pool(),
        category_id,
        req.title.as_deref(),
        req.image.as_deref(),
        req.slug.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Category not found"))?;
    ok(category)
}

/// Delete category (authenticated)
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
) -> ApiResult<()> {
    if CategoryRepository::delete(state.pool(), category_id).await? {
        ok(())
    } else {
        ApiError::not_found("Category not found").into_err()
    }
}
