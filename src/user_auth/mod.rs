//! User authentication module
//!
//! Registration with argon2 password hashing, login issuing HS256 JWTs,
//! and axum middleware that verifies tokens and injects [`Claims`].
//! Refresh tokens and blacklisting are out of scope.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use middleware::{MaybeUser, jwt_auth_middleware, jwt_optional_middleware};
pub use service::{Claims, UserAuthService};
