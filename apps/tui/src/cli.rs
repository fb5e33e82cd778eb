use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "spendwheel", version, about = "Live expense pie chart")]
pub struct CliArgs {
    /// Print the ledger breakdown and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override ledger database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override feed poll interval in milliseconds
    #[arg(long = "poll-ms", value_name = "MS")]
    pub poll_ms: Option<u64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(poll_ms) = self.poll_ms {
            std::env::set_var("POLL_INTERVAL_MS", poll_ms.to_string());
        }
    }
}
