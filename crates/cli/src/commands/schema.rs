//! Schema bootstrap command.

use tracing::info;

use holocron_api::config::ApiConfig;
use holocron_api::db;

/// Create the catalog tables if they do not already exist.
///
/// Uses the same configuration (and file-backed fallback) as the API
/// itself, so the tool and the service always agree on the store.
///
/// # Errors
///
/// Returns an error if configuration is invalid or a DDL statement fails.
pub async fn create() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Creating catalog tables...");
    db::init_schema(&pool).await?;

    info!("Schema ready");
    Ok(())
}
