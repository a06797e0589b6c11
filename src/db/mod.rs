pub mod store;

pub use store::SqliteStore;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("tictactoe-rewind");

    std::fs::create_dir_all(&path)
        .context("Failed to create tictactoe-rewind data directory")?;

    path.push("game.db");
    Ok(path)
}

/// Create a connection pool to the default database
pub async fn create_pool() -> Result<SqlitePool> {
    let db_path = get_db_path()?;
    create_pool_at(&db_path).await
}

/// Create a connection pool to the database at `db_path`, running migrations
pub async fn create_pool_at(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Opened game database at {}", db_path.display());
    Ok(pool)
}
