//! Product reviews module
//!
//! Reviews carry a message and a 1-5 rating; product detail responses embed
//! the most recent reviews plus aggregate stats.

pub mod models;
pub mod repository;

pub use models::{Review, ReviewStats};
pub use repository::{ReviewFilter, ReviewRepository};
