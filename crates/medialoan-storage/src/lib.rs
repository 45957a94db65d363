pub mod error;
pub mod fleet;
pub mod pagination;
pub mod partner;

pub use error::{Result, StorageError};
pub use fleet::SqliteFleetRepository;
pub use partner::SqlitePartnerRepository;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::str::FromStr;

/// Initialize the scheduler database, creating it if missing and applying
/// migrations.
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_path)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Scheduler DB initialized: {db_path}");

    Ok(pool)
}
