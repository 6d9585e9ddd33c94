//! Gateway types module
//!
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`ApiError`] / [`ApiResult`]: typed handler errors with status mapping
//! - [`PageParams`] / [`Paginated<T>`]: pagination envelope
//! - [`error_codes`]: standard error code constants

pub mod pagination;
pub mod response;

pub use pagination::{PageParams, Paginated};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
