mod app;
mod chart;
mod cli;
mod config;
mod db;
mod domain;
mod event;
mod feed;
mod store;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    init_tracing(args.debug);

    // Initialize application state
    let mut app = App::new();

    // Headless when asked for, or when stdout is not a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    app.initialize_db().await?;
    let pool = app
        .actions
        .db_pool
        .clone()
        .ok_or_else(|| color_eyre::eyre::eyre!("Database not initialized"))?;

    // Subscribe to ledger changes before the first frame so the initial
    // contents arrive as the opening change batch.
    let mut feed = feed::watch(pool, config::get_poll_interval());

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &mut feed).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug {
        "spendwheel=debug"
    } else {
        "spendwheel=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
