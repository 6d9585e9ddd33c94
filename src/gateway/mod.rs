pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::db::Database;
use crate::user_auth::{jwt_auth_middleware, jwt_optional_middleware};
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, db: Arc<Database>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db, config));

    // ==========================================================================
    // Auth routes (no token required)
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/register", post(crate::user_auth::handlers::register))
        .route("/login", post(crate::user_auth::handlers::login))
        .route(
            "/me",
            get(crate::user_auth::handlers::me).layer(from_fn_with_state(
                state.clone(),
                jwt_auth_middleware,
            )),
        );

    // ==========================================================================
    // Public catalog reads. The optional-JWT layer lets product responses
    // carry `liked` for authenticated viewers without requiring a token.
    // ==========================================================================
    let public_routes = Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/categories/{category_id}", get(handlers::get_category))
        .route("/subcategories", get(handlers::list_subcategories))
        .route(
            "/subcategories/{subcategory_id}",
            get(handlers::get_subcategory),
        )
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product))
        .route(
            "/products/{product_id}/images",
            get(handlers::list_product_images),
        )
        .route(
            "/products/{product_id}/reviews",
            get(handlers::list_product_reviews),
        )
        .route("/reviews", get(handlers::list_reviews))
        .layer(from_fn_with_state(state.clone(), jwt_optional_middleware));

    // ==========================================================================
    // Catalog writes, reviews and order queries (JWT required)
    // ==========================================================================
    let private_routes = Router::new()
        .route("/categories", post(handlers::create_category))
        .route("/categories/{category_id}", put(handlers::update_category))
        .route(
            "/categories/{category_id}",
            delete(handlers::delete_category),
        )
        .route("/subcategories", post(handlers::create_subcategory))
        .route(
            "/subcategories/{subcategory_id}",
            put(handlers::update_subcategory),
        )
        .route(
            "/subcategories/{subcategory_id}",
            delete(handlers::delete_subcategory),
        )
        .route("/products", post(handlers::create_product))
        .route("/products/{product_id}", put(handlers::update_product))
        .route("/products/{product_id}", delete(handlers::delete_product))
        .route(
            "/products/{product_id}/images",
            post(handlers::add_product_image),
        )
        .route(
            "/products/{product_id}/images/{image_id}",
            delete(handlers::delete_product_image),
        )
        .route(
            "/products/{product_id}/reviews",
            post(handlers::create_review),
        )
        .route(
            "/products/{product_id}/like",
            post(handlers::toggle_product_like),
        )
        .route("/orders", get(handlers::list_orders))
        .route("/orders/{order_id}", get(handlers::get_order))
        .route("/orders/{order_id}", put(handlers::update_order))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Order placement accepts anonymous callers; a valid token attaches the user
    let order_placement = Router::new()
        .route("/orders", post(handlers::create_order))
        .layer(from_fn_with_state(state.clone(), jwt_optional_middleware));

    // Build complete router
    let app = Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest(
            "/api/v1",
            public_routes.merge(private_routes).merge(order_placement),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
