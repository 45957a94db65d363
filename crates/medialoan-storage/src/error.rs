use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(
        "Table '{table}' returned exactly {rows} rows - likely a truncated read; \
         use the paged fetch path"
    )]
    SuspectTruncation { table: &'static str, rows: usize },

    #[error("Bad row in '{table}': {reason}")]
    BadRow { table: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;
