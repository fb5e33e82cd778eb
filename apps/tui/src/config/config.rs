use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::feed::DEFAULT_POLL_INTERVAL;

/// Initializes the application configuration.
/// Returns the ledger database URL.
pub fn init_app_config() -> color_eyre::eyre::Result<String> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;

    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "expenses.db".to_string());

    // Ledger path relative to the current directory, shared with any seed
    // process started from the same place.
    let database_path = base_dir.join(&db_name);

    if let Some(parent) = database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // No canonicalize() here: the file may not exist yet.
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?
        .to_string();

    // SQLx URL format:
    // - absolute paths: sqlite:///absolute/path/to/file.db (3 slashes total)
    // - relative paths: sqlite://relative/path/to/file.db (2 slashes total)
    let clean_path = path_str.trim_start_matches('/');

    let database_url = if database_path.is_absolute() {
        format!("sqlite:///{clean_path}")
    } else {
        format!("sqlite://{clean_path}")
    };

    Ok(database_url)
}

/// How often the watcher polls the ledger for changes.
pub fn get_poll_interval() -> Duration {
    env::var("POLL_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map_or(DEFAULT_POLL_INTERVAL, Duration::from_millis)
}
