//! Order placement module
//!
//! The one part of the system with a hard invariant: cumulative ordered
//! quantity must never exceed stock, no matter how many placements race on
//! the same product. The whole read-check-decrement-insert sequence runs in
//! a single transaction holding a row lock on the product.

pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod service;

pub use error::OrderError;
pub use models::{BuyerInfo, Order, OrderUpdate, PlaceOrderRequest};
pub use repository::{OrderFilter, OrderOrdering, OrderRepository};
pub use service::OrderService;
