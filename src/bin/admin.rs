//! CLI administration tool for citations.
//!
//! Seeds users, checks the store and prints counts without going through
//! the HTTP API or the admin key.
//!
//! # Usage
//!
//! ```bash
//! # Seed users from the CSV file if the users set is empty
//! cargo run --bin admin -- seed
//!
//! # Reload a specific file even if users already exist
//! cargo run --bin admin -- seed --file ./users.csv --force
//!
//! # Show user and quote counts
//! cargo run --bin admin -- stats
//!
//! # Check store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL`, or `REDIS_HOST` / `REDIS_PORT` / `REDIS_PASSWORD` / `REDIS_DB`
//! - `SEED_FILE`: default seed path (default: `initial_data_users.csv`)

use citations::application::bootstrap::{SeedOutcome, load_seed_file, seed_users_if_empty};
use citations::config::{Config, mask_connection_string};
use citations::domain::entities::{QUOTES_SET, USERS_SET};
use citations::infrastructure::persistence::KvUserRepository;
use citations::infrastructure::store::{RedisStore, StoreGateway};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing citations.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Seed users from a CSV file
    Seed {
        /// CSV file with a header row (defaults to SEED_FILE)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Load the file even if users already exist
        #[arg(long)]
        force: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show user and quote counts
    Stats,

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let redis_url = Config::load_redis_url();
    let store: Arc<dyn StoreGateway> = Arc::new(
        RedisStore::connect(&redis_url)
            .await
            .with_context(|| format!("Failed to connect to {}", mask_connection_string(&redis_url)))?,
    );

    match cli.command {
        Commands::Seed { file, force, yes } => handle_seed(store, file, force, yes).await?,
        Commands::Stats => handle_stats(store.as_ref()).await?,
        Commands::Store { action } => handle_store_action(action, store.as_ref(), &redis_url).await?,
    }

    Ok(())
}

async fn handle_seed(
    store: Arc<dyn StoreGateway>,
    file: Option<PathBuf>,
    force: bool,
    yes: bool,
) -> Result<()> {
    let path = file.unwrap_or_else(|| {
        std::env::var("SEED_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("initial_data_users.csv"))
    });

    println!("{}", "🌱 Seeding users".bold().cyan());
    println!("  {}: {}", "File".bold(), path.display());
    println!();

    let repository = KvUserRepository::new(store);

    let outcome = if force {
        if !yes {
            let confirmed = Confirm::new()
                .with_prompt("Overwrite users with the same id from this file?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }

        load_seed_file(&repository, &path).await?
    } else {
        seed_users_if_empty(&repository, &path).await?
    };

    match outcome {
        SeedOutcome::AlreadySeeded => {
            println!("{}", "ℹ️  Users already present, nothing loaded".yellow());
            println!("   Use {} to load the file anyway", "--force".bold());
        }
        SeedOutcome::NoSeedFile => {
            println!("{} {}", "❌ Seed file not found:".red(), path.display());
        }
        SeedOutcome::Seeded { users, skipped } => {
            println!("{} {} user(s) loaded", "✅".green(), users.to_string().bold());
            if skipped > 0 {
                println!(
                    "{} {} row(s) without id skipped",
                    "⚠️ ".yellow(),
                    skipped.to_string().bold()
                );
            }
        }
    }

    Ok(())
}

async fn handle_stats(store: &dyn StoreGateway) -> Result<()> {
    let users = store
        .set_members(USERS_SET)
        .await
        .context("Failed to read users set")?
        .len();
    let quotes = store
        .set_members(QUOTES_SET)
        .await
        .context("Failed to read quotes set")?
        .len();

    println!("{}", "📊 Store Statistics".bold().cyan());
    println!();
    println!("  {:<10} {}", "Users:".bold(), users.to_string().green());
    println!("  {:<10} {}", "Quotes:".bold(), quotes.to_string().green());

    Ok(())
}

async fn handle_store_action(
    action: StoreAction,
    store: &dyn StoreGateway,
    redis_url: &str,
) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("  {}: {}", "URL".bold(), mask_connection_string(redis_url));

            if store.health_check().await {
                println!("{}", "✅ Store connection OK".green());
            } else {
                anyhow::bail!("Store did not answer PING");
            }
        }
    }

    Ok(())
}
