use anyhow::Context;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    DatabaseManager::run_migrations(&pool)
        .await
        .context("error during migration")?;

    pool.close().await;
    println!("✓ Migrations applied");
    Ok(())
}
