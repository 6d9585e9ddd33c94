//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::catalog::{Category, Product, ProductImage, SubCategory};
use crate::gateway::handlers::{
    CategoryDetail, HealthData, LikeStatus, ProductData, ProductDetail,
};
use crate::orders::{BuyerInfo, Order, OrderUpdate};
use crate::reviews::{Review, ReviewStats};
use crate::user_auth::service::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Savdo Catalog & Ordering API",
        version = "0.1.0",
        description = "E-commerce catalog, reviews and race-free order placement.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        // Catalog
        crate::gateway::handlers::list_categories,
        crate::gateway::handlers::get_category,
        crate::gateway::handlers::create_category,
        crate::gateway::handlers::update_category,
        crate::gateway::handlers::delete_category,
        crate::gateway::handlers::list_subcategories,
        crate::gateway::handlers::get_subcategory,
        crate::gateway::handlers::create_subcategory,
        crate::gateway::handlers::update_subcategory,
        crate::gateway::handlers::delete_subcategory,
        crate::gateway::handlers::list_products,
        crate::gateway::handlers::get_product,
        crate::gateway::handlers::create_product,
        crate::gateway::handlers::update_product,
        crate::gateway::handlers::delete_product,
        crate::gateway::handlers::toggle_product_like,
        crate::gateway::handlers::list_product_images,
        crate::gateway::handlers::add_product_image,
        crate::gateway::handlers::delete_product_image,
        // Reviews
        crate::gateway::handlers::list_reviews,
        crate::gateway::handlers::list_product_reviews,
        crate::gateway::handlers::create_review,
        // Orders
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::update_order,
        // Auth
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::user_auth::handlers::me,
    ),
    components(
        schemas(
            HealthData,
            Category,
            CategoryDetail,
            SubCategory,
            Product,
            ProductData,
            ProductDetail,
            ProductImage,
            LikeStatus,
            Review,
            ReviewStats,
            Order,
            OrderUpdate,
            BuyerInfo,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UserProfile,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Catalog", description = "Categories, subcategories, products and images"),
        (name = "Reviews", description = "Product reviews and ratings"),
        (name = "Orders", description = "Order placement and management"),
        (name = "Auth", description = "Registration, login, current user"),
        (name = "Health", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Savdo Catalog & Ordering API");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("/api/v1/orders"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/products"));
        assert!(paths.paths.contains_key("/api/v1/products/{product_id}/like"));
        assert!(paths.paths.contains_key("/api/v1/orders/{order_id}"));
        assert!(paths.paths.contains_key("/api/v1/auth/login"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
