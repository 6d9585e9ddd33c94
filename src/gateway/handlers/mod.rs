//! HTTP handlers, one module per resource

pub mod category;
pub mod health;
pub mod order;
pub mod product;
pub mod review;
pub mod subcategory;

pub use category::*;
pub use health::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use subcategory::*;
