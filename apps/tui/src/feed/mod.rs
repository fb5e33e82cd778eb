pub mod diff;
pub mod watcher;

pub use diff::diff;
pub use watcher::{fetch_snapshot, watch, FeedError, DEFAULT_POLL_INTERVAL};
