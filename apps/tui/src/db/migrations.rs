use crate::config::init_app_config;
use color_eyre::Result;
use sqlx::{
    migrate::MigrateDatabase, query, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};
use tracing::debug;

/// Sets up the database by creating the necessary tables if they don't exist
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Create the expense table. `seq` preserves arrival order across
    // processes; `id` is the document identifier the feed keys on.
    query(
        "CREATE TABLE IF NOT EXISTS expense (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            cost REAL NOT NULL,
            created TEXT NOT NULL,
            seq INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Creates a database connection pool using the database URL from config
pub async fn create_database_pool() -> Result<SqlitePool> {
    let database_url = init_app_config()?;
    create_pool_at(&database_url).await
}

/// Creates a database connection pool with a specified URL
#[allow(dead_code)]
pub async fn create_database_pool_with_url(database_url: &str) -> Result<SqlitePool> {
    create_pool_at(database_url).await
}

async fn create_pool_at(database_url: &str) -> Result<SqlitePool> {
    debug!(url = %database_url, "initializing ledger database");

    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        debug!("database does not exist, creating it now");
        Sqlite::create_database(database_url).await.map_err(|e| {
            color_eyre::eyre::eyre!("Failed to create SQLite database: {e}")
        })?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        // SQLite connection options shared with any seed process writing
        // to the same file.
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                // WAL lets the watcher read while a writer commits.
                conn.execute("PRAGMA journal_mode = WAL;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to connect to SQLite database: {e}"))?;

    setup_database(&pool)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to set up database schema: {e}"))?;

    debug!("database initialization completed");
    Ok(pool)
}
