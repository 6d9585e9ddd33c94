//! API response types and error codes
//!
//! All responses share one envelope: `code` 0 on success, a stable non-zero
//! code on errors; `data` present only on success. Typed service errors map
//! onto HTTP status + code pairs here, in one place.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orders::OrderError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_STOCK: i32 = 1002;
    pub const INVALID_QUANTITY: i32 = 1003;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;

    // Resource errors (4xxx)
    pub const PRODUCT_NOT_FOUND: i32 = 4001;
    pub const ORDER_NOT_FOUND: i32 = 4002;
    pub const NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const PERSISTENCE_CONFLICT: i32 = 5002;
}

// ============================================================================
// Handler Error Type
// ============================================================================

/// Handler-level error carrying HTTP status, API code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    /// Shorthand to use as the Err arm of an [`ApiResult`]
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        )
            .into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::ProductNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::PRODUCT_NOT_FOUND,
                err.to_string(),
            ),
            OrderError::OrderNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::ORDER_NOT_FOUND,
                err.to_string(),
            ),
            OrderError::InvalidQuantity(_) => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_QUANTITY,
                err.to_string(),
            ),
            OrderError::InsufficientStock { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_STOCK,
                err.to_string(),
            ),
            OrderError::PersistenceConflict(_) => Self::new(
                StatusCode::CONFLICT,
                error_codes::PERSISTENCE_CONFLICT,
                "Placement conflicted with a concurrent request, please retry",
            ),
            OrderError::Database(e) => {
                tracing::error!("Order database error: {:?}", e);
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::internal("Internal server error")
    }
}

/// Handler result: success tuple or [`ApiError`]
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created success response
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_status_mapping() {
        let e: ApiError = OrderError::InsufficientStock {
            requested: 3,
            available: 1,
        }
        .into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::INSUFFICIENT_STOCK);

        let e: ApiError = OrderError::ProductNotFound(9).into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, error_codes::PRODUCT_NOT_FOUND);

        let e: ApiError = OrderError::InvalidQuantity(-1).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::INVALID_QUANTITY);

        let e: ApiError = OrderError::PersistenceConflict("40001".into()).into();
        assert_eq!(e.status, StatusCode::CONFLICT);
        assert_eq!(e.code, error_codes::PERSISTENCE_CONFLICT);
    }

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(5);
        assert_eq!(resp.code, error_codes::SUCCESS);
        assert_eq!(resp.data, Some(5));

        let err = ApiResponse::<()>::error(error_codes::NOT_FOUND, "missing");
        assert_eq!(err.code, error_codes::NOT_FOUND);
        assert!(err.data.is_none());
    }
}
