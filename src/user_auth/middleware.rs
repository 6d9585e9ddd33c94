use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::service::Claims;
use crate::gateway::{
    state::AppState,
    types::{ApiResponse, error_codes},
};

/// Authenticated user slot for routes that accept anonymous callers.
/// Inserted by [`jwt_optional_middleware`] on every request.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Claims>);

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Require a valid JWT; injects [`Claims`] into request extensions.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let token = bearer_token(&request).ok_or((
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(
            error_codes::MISSING_AUTH,
            "Missing or malformed Authorization header",
        )),
    ))?;

    match state.user_auth.verify_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                error_codes::AUTH_FAILED,
                "Invalid or expired token",
            )),
        )),
    }
}

/// Accept anonymous or authenticated callers: a valid token attaches the
/// user, a missing header passes through, an invalid token is still
/// rejected rather than silently downgraded to anonymous.
pub async fn jwt_optional_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let user = match bearer_token(&request) {
        Some(token) => match state.user_auth.verify_token(token) {
            Ok(claims) => MaybeUser(Some(claims)),
            Err(_) => {
                return Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponse::<()>::error(
                        error_codes::AUTH_FAILED,
                        "Invalid or expired token",
                    )),
                ));
            }
        },
        None => MaybeUser(None),
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
