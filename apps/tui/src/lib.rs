// Export our modules for use in binaries and tests
pub mod chart;
pub mod config;
pub mod db;
pub mod domain;
pub mod feed;
pub mod store;

pub use domain::{ChangeBatch, ChangeKind, DocChange, Expense};
