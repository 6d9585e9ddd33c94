//! Savdo - E-Commerce Catalog & Ordering Backend
//!
//! A PostgreSQL-backed REST service for a product catalog with an
//! oversell-proof order placement core.
//!
//! # Modules
//!
//! - [`config`] - Per-environment YAML configuration
//! - [`logging`] - tracing subscriber / rolling file setup
//! - [`db`] - PostgreSQL connection pool
//! - [`catalog`] - Categories, subcategories, products, product images
//! - [`reviews`] - Product reviews with 1-5 ratings
//! - [`orders`] - Order placement service (atomic stock decrement)
//! - [`user_auth`] - Registration, login, JWT verification
//! - [`gateway`] - Axum HTTP API

pub mod config;
pub mod db;
pub mod logging;

pub mod catalog;
pub mod orders;
pub mod reviews;

pub mod gateway;
pub mod user_auth;

// Convenient re-exports at crate root
pub use catalog::{Category, Product, ProductImage, SubCategory};
pub use db::Database;
pub use orders::{Order, OrderError, OrderService};
pub use reviews::Review;
