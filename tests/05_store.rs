use anyhow::{Context, Result};

use portfolio_api::config::DatabaseConfig;
use portfolio_api::db;

async fn memory_pool() -> Result<sqlx::SqlitePool> {
    let config = DatabaseConfig {
        path: String::new(),
        in_memory: true,
        max_connections: 1,
    };
    let pool = db::connect(&config).await.context("connect")?;
    db::init_schema(&pool).await.context("init schema")?;
    Ok(pool)
}

async fn count(pool: &sqlx::SqlitePool, table: &str) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[tokio::test]
async fn schema_init_can_run_repeatedly() -> Result<()> {
    let pool = memory_pool().await?;
    db::init_schema(&pool).await?;
    assert_eq!(count(&pool, "articles").await?, 0);
    Ok(())
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate_rows() -> Result<()> {
    let pool = memory_pool().await?;

    db::seed_initial_data(&pool).await?;
    db::seed_initial_data(&pool).await?;

    assert_eq!(count(&pool, "articles").await?, 2);
    assert_eq!(count(&pool, "stocks").await?, 4);
    assert_eq!(count(&pool, "indicators").await?, 4);
    assert_eq!(count(&pool, "books").await?, 3);
    Ok(())
}
