use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db::Database;
use crate::orders::OrderService;
use crate::user_auth::UserAuthService;

/// Shared gateway state
pub struct AppState {
    pub db: Arc<Database>,
    /// Order placement core
    pub orders: OrderService,
    /// JWT issue/verify + user profiles
    pub user_auth: UserAuthService,
}

impl AppState {
    pub fn new(db: Arc<Database>, config: &AppConfig) -> Self {
        let pool = db.pool().clone();
        let orders = OrderService::new(pool.clone(), config.orders.clone());
        let user_auth = UserAuthService::new(
            pool,
            config.auth.jwt_secret.clone(),
            config.auth.token_ttl_hours,
        );
        Self {
            db,
            orders,
            user_auth,
        }
    }

    /// Shared connection pool for repository calls
    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}
