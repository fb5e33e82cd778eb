use std::time::Duration;

use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::db::models::ExpenseRow;
use crate::db::queries;
use crate::domain::{ChangeBatch, Expense};
use crate::feed::diff::diff;

/// How often the watcher observes the ledger when nothing else is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Failure while observing the ledger. Polls are retried on the next tick,
/// so these only surface in logs.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("ledger poll failed: {0}")]
    Poll(#[from] sqlx::Error),
}

/// Fetches the current ledger contents in arrival order.
pub async fn fetch_snapshot(pool: &SqlitePool) -> Result<Vec<Expense>, FeedError> {
    let rows = queries::get_expenses(pool).await?;
    Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
}

/// Subscribes to the ledger, delivering one change batch per observed
/// difference. The first poll reports the full contents as additions, the
/// way a fresh subscription sees an existing collection.
///
/// The watcher task ends when the receiver is dropped.
pub fn watch(pool: SqlitePool, poll_interval: Duration) -> mpsc::Receiver<ChangeBatch> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut last: Vec<Expense> = Vec::new();

        loop {
            ticker.tick().await;

            let snapshot = match fetch_snapshot(&pool).await {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    warn!(%error, "skipping feed tick");
                    continue;
                }
            };

            let batch = diff(&last, &snapshot);
            last = snapshot;

            if batch.is_empty() {
                continue;
            }

            debug!(changes = batch.len(), "delivering change batch");
            if tx.send(batch).await.is_err() {
                // Receiver gone, the app is shutting down.
                break;
            }
        }
    });

    rx
}
