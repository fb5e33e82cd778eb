//! Ledger writer used for demos and manual testing: the "remote" process
//! whose writes the chart picks up through the change feed.

use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use sqlx::SqlitePool;

use spendwheel::db::models::NewExpense;
use spendwheel::db::{create_database_pool, queries};

#[derive(Debug, Parser)]
#[command(name = "seed", version, about = "Write to the shared expense ledger")]
struct SeedArgs {
    /// Override ledger database path
    #[arg(long, value_name = "PATH")]
    db: Option<String>,

    #[command(subcommand)]
    command: SeedCommand,
}

#[derive(Debug, Subcommand)]
enum SeedCommand {
    /// Add an expense
    Add { name: String, cost: f64 },
    /// Replace an expense's name and cost
    Set { id: String, name: String, cost: f64 },
    /// Delete an expense
    Remove { id: String },
    /// Print the ledger contents
    List,
    /// Scripted write sequence that exercises every chart transition
    Demo {
        /// Pause between writes in milliseconds
        #[arg(long, default_value_t = 1500)]
        pause_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = SeedArgs::parse();
    if let Some(db) = &args.db {
        std::env::set_var("DATABASE_NAME", db);
    }

    let pool = create_database_pool().await?;

    match args.command {
        SeedCommand::Add { name, cost } => {
            let id = add_expense(&pool, &name, cost).await?;
            println!("added {id}");
        }
        SeedCommand::Set { id, name, cost } => {
            if queries::update_expense(&pool, &id, &name, cost).await? {
                println!("updated {id}");
            } else {
                println!("no such expense: {id}");
            }
        }
        SeedCommand::Remove { id } => {
            if queries::delete_expense(&pool, &id).await? {
                println!("removed {id}");
            } else {
                println!("no such expense: {id}");
            }
        }
        SeedCommand::List => {
            for row in queries::get_expenses(&pool).await? {
                println!("{} | {} | {:.2} | {}", row.id, row.name, row.cost, row.created);
            }
        }
        SeedCommand::Demo { pause_ms } => {
            run_demo(&pool, Duration::from_millis(pause_ms)).await?;
        }
    }

    Ok(())
}

async fn add_expense(pool: &SqlitePool, name: &str, cost: f64) -> Result<String> {
    let id = next_id(name);
    let params = NewExpense {
        id: id.clone(),
        name: name.to_string(),
        cost,
        created: chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string(),
    };
    queries::insert_expense(pool, &params).await?;
    Ok(id)
}

fn next_id(name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let tag: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect::<String>()
        .to_lowercase();
    format!("{tag}-{millis:x}")
}

/// Walks the chart through enter, update and exit sweeps: three additions,
/// a collapse to zero cost, an edit and two removals.
async fn run_demo(pool: &SqlitePool, pause: Duration) -> Result<()> {
    let food = add_expense(pool, "Food", 30.0).await?;
    println!("added Food ({food})");
    tokio::time::sleep(pause).await;

    let rent = add_expense(pool, "Rent", 70.0).await?;
    println!("added Rent ({rent})");
    tokio::time::sleep(pause).await;

    let fun = add_expense(pool, "Fun", 20.0).await?;
    println!("added Fun ({fun})");
    tokio::time::sleep(pause).await;

    queries::update_expense(pool, &food, "Food", 0.0).await?;
    println!("Food collapses to zero cost");
    tokio::time::sleep(pause).await;

    queries::update_expense(pool, &food, "Groceries", 45.0).await?;
    println!("Food becomes Groceries at 45");
    tokio::time::sleep(pause).await;

    queries::delete_expense(pool, &rent).await?;
    println!("removed Rent");
    tokio::time::sleep(pause).await;

    queries::delete_expense(pool, &fun).await?;
    println!("removed Fun");

    Ok(())
}
