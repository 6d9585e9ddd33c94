//! Product handlers
//!
//! List/detail responses expose `discounted_price`, computed with the same
//! rounding rule the order placement path uses.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::catalog::repository::{ProductFilter, ProductOrdering};
use crate::catalog::{
    CategoryRepository, Product, ProductImage, ProductRepository, ProductWithLikes,
    SubCategoryRepository,
};
use crate::orders::pricing;
use crate::reviews::{Review, ReviewRepository, ReviewStats};
use crate::user_auth::{Claims, MaybeUser};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, PageParams, Paginated, created, ok};

/// How many recent reviews a product detail embeds
const DETAIL_REVIEW_LIMIT: i64 = 5;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Restrict to one subcategory
    pub subcategory: Option<i64>,
    /// Exact percent discount filter
    pub discount: Option<i16>,
    /// Name/description search term
    pub search: Option<String>,
    /// Ordering key: created_at | -created_at | price | -price | name | -name
    pub ordering: Option<String>,
}

/// Product plus its computed discounted price and like data
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductData {
    #[serde(flatten)]
    pub product: Product,
    /// Unit price after discount, same rounding as order placement
    #[schema(value_type = String, example = "80.00")]
    pub discounted_price: Decimal,
    pub like_count: i64,
    /// Whether the viewing user has liked this product; false for anonymous
    pub liked: bool,
}

impl ProductData {
    fn new(product: Product, like_count: i64, liked: bool) -> Self {
        let discounted_price = pricing::discounted_unit_price(product.price, product.discount);
        Self {
            product,
            discounted_price,
            like_count,
            liked,
        }
    }

    fn from_row(row: ProductWithLikes) -> Self {
        Self::new(row.product, row.like_count, row.liked)
    }
}

/// Like state after a toggle
#[derive(Debug, Serialize, ToSchema)]
pub struct LikeStatus {
    pub liked: bool,
    pub like_count: i64,
}

/// Product detail with taxonomy context, images and recent reviews
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductData,
    pub subcategory_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub images: Vec<ProductImage>,
    /// Up to 5 most recent reviews
    pub reviews: Vec<Review>,
    pub review_count: i64,
    pub average_rating: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    pub subcategory_id: Option<i64>,
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Samsung WW90T")]
    pub name: String,
    pub description: Option<String>,
    /// Unit price, non-negative
    #[schema(value_type = String, example = "100.00")]
    pub price: Decimal,
    /// Percent discount, 0-100
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub discount: i16,
    /// Initial stock, non-negative
    #[validate(range(min = 0))]
    #[serde(default)]
    pub quantity: i32,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub subcategory_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    #[validate(range(min = 0, max = 100))]
    pub discount: Option<i16>,
    /// Restock value; sale decrements never go through this path
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddImageRequest {
    #[validate(length(min = 1))]
    #[schema(example = "https://cdn.example.com/p/123.jpg")]
    pub url: String,
    pub alt_text: Option<String>,
}

/// List products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Paginated products", body = ApiResponse<Paginated<ProductData>>),
        (status = 400, description = "Unknown ordering key")
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<MaybeUser>,
    Query(params): Query<ProductListParams>,
) -> ApiResult<Paginated<ProductData>> {
    let ordering = ProductOrdering::parse(params.ordering.as_deref())
        .ok_or_else(|| ApiError::bad_request("Unknown ordering key"))?;
    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    };
    let filter = ProductFilter {
        subcategory_id: params.subcategory,
        discount: params.discount,
        search: params.search.clone(),
    };
    let viewer = user.0.as_ref().and_then(Claims::user_id);

    let products = ProductRepository::list(
        state.pool(),
        &filter,
        ordering,
        viewer,
        page.limit(),
        page.offset(),
    )
    .await?;
    let count = ProductRepository::count(state.pool(), &filter).await?;

    let results = products.into_iter().map(ProductData::from_row).collect();
    ok(Paginated::new(&page, count, results))
}

/// Product detail
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<MaybeUser>,
    Path(product_id): Path<i64>,
) -> ApiResult<ProductDetail> {
    let viewer = user.0.as_ref().and_then(Claims::user_id);
    let row = ProductRepository::get_with_likes(state.pool(), product_id, viewer)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    // Taxonomy context
    let mut subcategory_name = None;
    let mut category_id = None;
    let mut category_name = None;
    if let Some(sub_id) = row.product.subcategory_id {
        if let Some(sub) = SubCategoryRepository::get_by_id(state.pool(), sub_id).await? {
            if let Some(cat) = CategoryRepository::get_by_id(state.pool(), sub.category_id).await? {
                category_id = Some(cat.category_id);
                category_name = Some(cat.title);
            }
            subcategory_name = Some(sub.name);
        }
    }

    let images = ProductRepository::images(state.pool(), product_id).await?;
    let reviews =
        ReviewRepository::recent_for_product(state.pool(), product_id, DETAIL_REVIEW_LIMIT).await?;
    let ReviewStats {
        review_count,
        average_rating,
    } = ReviewRepository::stats_for_product(state.pool(), product_id).await?;

    ok(ProductDetail {
        product: ProductData::from_row(row),
        subcategory_name,
        category_id,
        category_name,
        images,
        reviews,
        review_count,
        average_rating,
    })
}

/// Create product (authenticated)
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductData>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<ProductData> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    if req.price.is_sign_negative() {
        return ApiError::bad_request("Price must be non-negative").into_err();
    }

    let product = ProductRepository::create(
        state.pool(),
        req.subcategory_id,
        &req.name,
        req.description.as_deref(),
        req.price,
        req.discount,
        req.quantity,
        req.slug.as_deref(),
    )
    .await?;
    // A freshly created product has no likes yet
    created(ProductData::new(product, 0, false))
}

/// Update product (authenticated)
#[utoipa::path(
    put,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductData>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<ProductData> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    if let Some(price) = req.price {
        if price.is_sign_negative() {
            return ApiError::bad_request("Price must be non-negative").into_err();
        }
    }

    let product = ProductRepository::update(
        state.pool(),
        product_id,
        req.subcategory_id,
        req.name.as_deref(),
        req.description.as_deref(),
        req.price,
        req.discount,
        req.quantity,
        req.slug.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let (like_count, liked) =
        ProductRepository::like_summary(state.pool(), product_id, claims.user_id()).await?;
    ok(ProductData::new(product, like_count, liked))
}

/// Delete product (authenticated)
#[utoipa::path(
    delete,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> ApiResult<()> {
    if ProductRepository::delete(state.pool(), product_id).await? {
        ok(())
    } else {
        ApiError::not_found("Product not found").into_err()
    }
}

/// Toggle a like on a product (authenticated)
///
/// First call likes the product for the calling user, the next one removes
/// the like. Returns the resulting state and total count.
#[utoipa::path(
    post,
    path = "/api/v1/products/{product_id}/like",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Like toggled", body = ApiResponse<LikeStatus>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn toggle_product_like(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
) -> ApiResult<LikeStatus> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::unauthorized("Malformed token subject"))?;
    ProductRepository::get_by_id(state.pool(), product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let liked = ProductRepository::toggle_like(state.pool(), product_id, user_id).await?;
    let (like_count, _) = ProductRepository::like_summary(state.pool(), product_id, None).await?;
    ok(LikeStatus { liked, like_count })
}

/// List product images
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/images",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Image records", body = ApiResponse<Vec<ProductImage>>),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn list_product_images(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Vec<ProductImage>> {
    ProductRepository::get_by_id(state.pool(), product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    let images = ProductRepository::images(state.pool(), product_id).await?;
    ok(images)
}

/// Attach an image record to a product (authenticated)
#[utoipa::path(
    post,
    path = "/api/v1/products/{product_id}/images",
    params(("product_id" = i64, Path, description = "Product ID")),
    request_body = AddImageRequest,
    responses(
        (status = 201, description = "Image attached", body = ApiResponse<ProductImage>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn add_product_image(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
    Json(req): Json<AddImageRequest>,
) -> ApiResult<ProductImage> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    ProductRepository::get_by_id(state.pool(), product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let image =
        ProductRepository::add_image(state.pool(), product_id, &req.url, req.alt_text.as_deref())
            .await?;
    created(image)
}

/// Remove an image record (authenticated)
#[utoipa::path(
    delete,
    path = "/api/v1/products/{product_id}/images/{image_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        ("image_id" = i64, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image removed"),
        (status = 404, description = "Image not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_product_image(
    State(state): State<Arc<AppState>>,
    Path((_product_id, image_id)): Path<(i64, i64)>,
) -> ApiResult<()> {
    if ProductRepository::delete_image(state.pool(), image_id).await? {
        ok(())
    } else {
        ApiError::not_found("Image not found").into_err()
    }
}
