use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_api::{config, db, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, ADMIN_PASSWORD, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::config();
    info!("Starting Research Portfolio API in {:?} mode", config.environment);

    if config.security.jwt_secret == config::DEV_JWT_SECRET {
        warn!("JWT_SECRET is unset; using the insecure development secret");
    }

    let pool = db::connect(&config.database)
        .await
        .context("Database connection failed")?;
    db::init_schema(&pool).await.context("Schema initialization failed")?;
    db::seed_initial_data(&pool).await.context("Seeding failed")?;

    let app = routes::app(config, AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    info!("Research Portfolio API listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
