use color_eyre::Result;
use sqlx::SqlitePool;

use crate::db::{create_database_pool, queries};
use crate::domain::Expense;
use crate::feed::fetch_snapshot;

/// The app's handle on the shared ledger: initial loads, counts for the
/// headless report, and the delete requests the click handler issues.
#[derive(Debug)]
pub struct AppActions {
    pub db_pool: Option<SqlitePool>,
}

impl AppActions {
    pub fn new() -> Self {
        Self { db_pool: None }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        self.db_pool = Some(create_database_pool().await?);
        Ok(())
    }

    pub async fn load_expenses(&self) -> Result<Vec<Expense>> {
        let pool = self.pool()?;
        fetch_snapshot(pool).await.map_err(Into::into)
    }

    /// Ask the ledger to delete a record. Returns whether the ledger knew
    /// the id; the visible removal arrives later through the change feed.
    pub async fn delete_expense(&self, id: &str) -> Result<bool> {
        let pool = self.pool()?;
        queries::delete_expense(pool, id).await.map_err(Into::into)
    }

    pub async fn count_expenses(&self) -> Result<i64> {
        let pool = self.pool()?;
        queries::count_expenses(pool).await.map_err(Into::into)
    }

    pub async fn total_cost(&self) -> Result<f64> {
        let pool = self.pool()?;
        queries::total_cost(pool).await.map_err(Into::into)
    }

    fn pool(&self) -> Result<&SqlitePool> {
        self.db_pool
            .as_ref()
            .ok_or_else(|| color_eyre::eyre::eyre!("Database not initialized"))
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}
