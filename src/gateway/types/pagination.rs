//! Page-number pagination
//!
//! Defaults to 20 items per page, capped at 100.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination query parameters (`?page=2&page_size=50`)
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number
    pub page: Option<i64>,
    /// Items per page (1-100, default 20)
    pub page_size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn limit(&self) -> i64 {
        self.page_size()
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    /// Total matching rows across all pages
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(params: &PageParams, count: i64, results: Vec<T>) -> Self {
        Self {
            count,
            page: params.page(),
            page_size: params.page_size(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = PageParams::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_clamping() {
        let p = PageParams {
            page: Some(0),
            page_size: Some(100_000),
        };
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), MAX_PAGE_SIZE);

        let p = PageParams {
            page: Some(-5),
            page_size: Some(0),
        };
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn test_offset() {
        let p = PageParams {
            page: Some(3),
            page_size: Some(25),
        };
        assert_eq!(p.offset(), 50);
        assert_eq!(p.limit(), 25);
    }
}
