//! Savdo - E-Commerce Catalog & Ordering Backend
//!
//! Entry point: load per-environment config, set up logging, connect to
//! PostgreSQL and serve the REST API.

use std::sync::Arc;

use savdo::config::AppConfig;
use savdo::db::Database;
use savdo::gateway;
use savdo::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);

    let _log_guard = init_logging(&config);
    tracing::info!("Starting savdo (env: {})", env);

    let db = Database::connect(&config.postgres_url).await?;
    let ready = db.readiness().await?;
    tracing::info!(
        products = ready.products,
        latency_ms = ready.latency_ms,
        "Catalog store ready"
    );
    let db = Arc::new(db);

    gateway::run_server(&config, db).await
}
