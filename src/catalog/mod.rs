//! Product catalog module
//!
//! PostgreSQL-backed taxonomy (categories, subcategories) and product
//! listings with image records.

pub mod models;
pub mod repository;
pub mod slug;

// Re-export commonly used types
pub use models::{Category, Product, ProductImage, ProductWithLikes, SubCategory};
pub use repository::{CategoryRepository, ProductRepository, SubCategoryRepository};
pub use slug::slugify;
