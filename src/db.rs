//! PostgreSQL access for the catalog/order store

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::{Duration, Instant};

const MAX_CONNECTIONS: u32 = 16;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a [`Database::readiness`] probe
#[derive(Debug, Clone, Copy)]
pub struct Readiness {
    /// Round trip time of the probe query
    pub latency_ms: u64,
    /// Products currently in the catalog
    pub products: i64,
}

/// Connection pool to the catalog/order store
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Probe the catalog schema with a real query.
    ///
    /// Fails both when the database is unreachable and when the schema has
    /// not been applied, so a green readiness means orders can actually be
    /// placed.
    pub async fn readiness(&self) -> Result<Readiness, sqlx::Error> {
        let started = Instant::now();
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(Readiness {
            latency_ms: started.elapsed().as_millis() as u64,
            products,
        })
    }
}
