use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use crate::schemas::AppState;

/// Initialize application state: connect to the store and ensure the
/// schema exists. The bootstrap is idempotent; a store-open failure is
/// fatal to startup.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    tracing::debug!("Ensuring schema exists");
    Migrator::up(&db, None).await?;

    Ok(AppState { db })
}
