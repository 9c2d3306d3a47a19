//! Migrate command - applies the registration schema and exits

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::storage::{connect_pool, run_migrations, PostgresMigrator};

/// Apply pending migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging, &config.observability.tracing);

    let pool = connect_pool(&config.database).await?;
    let applied = run_migrations(&pool).await?;
    let version = PostgresMigrator::new(pool.clone())
        .current_version()
        .await?
        .unwrap_or_default();

    info!(applied, version, "Database schema is up to date");
    println!("Applied {} migration(s); schema version {}", applied, version);

    pool.close().await;

    Ok(())
}
