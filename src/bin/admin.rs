//! CLI administration tool for base62-shortener.
//!
//! Runs link operations directly against the configured store, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the short code for an id, and back
//! cargo run --bin admin -- encode 125
//! cargo run --bin admin -- decode 00021
//!
//! # Create and resolve links
//! cargo run --bin admin -- link create example.com
//! cargo run --bin admin -- link get 00001
//!
//! # Inspect a record by id (shows codeless records left by failed creates)
//! cargo run --bin admin -- link inspect 42
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `base62_shortener::config`.

use base62_shortener::application::services::LinkService;
use base62_shortener::config::{self, Config};
use base62_shortener::domain::entities::Link;
use base62_shortener::server;
use base62_shortener::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing base62-shortener.
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
    /// Print the short code for a record id
    Encode { id: u64 },

    /// Print the record id a short code was derived from
    Decode { code: String },

    /// Create, resolve and inspect links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Resolve a short code
    Get { code: String },

    /// Look up a record by id, including records without a short code
    Inspect { id: i64 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => println!("{}", base62::encode(id).bright_green().bold()),
        Commands::Decode { code } => {
            let id = base62::decode(&code).with_context(|| format!("Cannot decode '{code}'"))?;
            println!("{}", id.to_string().bright_green().bold());
        }
        Commands::Link { action } => {
            let config = config::load_from_env()?;
            handle_link_action(action, &config).await?;
        }
        Commands::Db { action } => {
            let config = config::load_from_env()?;
            handle_db_action(action, &config).await?;
        }
    }

    Ok(())
}

/// Dispatches link commands through the link service.
async fn handle_link_action(action: LinkAction, config: &Config) -> Result<()> {
    let service = LinkService::new(server::build_repository(config).await?);

    match action {
        LinkAction::Create { url, yes } => {
            println!("{}", "🔗 Create Short Link".bright_blue().bold());
            println!();

            let url = match url {
                Some(u) => u,
                None => Input::new()
                    .with_prompt("Original URL")
                    .interact_text()?,
            };

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Shorten {url}?"))
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let link = service
                .create_short_link(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!();
            println!("{}", "✅ Link created".green().bold());
            print_link(&link);
        }
        LinkAction::Get { code } => {
            let link = service
                .resolve(&code)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", code, e))?;
            print_link(&link);
        }
        LinkAction::Inspect { id } => {
            let link = service
                .find_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to look up id {}: {}", id, e))?;
            print_link(&link);
        }
    }

    Ok(())
}

/// Prints a link record, flagging records that never got a short code.
fn print_link(link: &Link) {
    let state = if link.is_coded() {
        "CODED".green()
    } else {
        "NO CODE (orphan)".red()
    };

    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  Code:     {}", link.code().cyan());
    println!("  URL:      {}", link.original_url.bright_white());
    println!("  Owner:    {}", link.owner_id.to_string().bright_black());
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
    );
    println!(
        "  Updated:  {}",
        link.updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_black()
    );
    println!("  State:    {}", state);
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let pool = server::connect_pool(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(&pool).await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(&pool)
                .await
                .context("Failed to count links (run `admin db migrate`?)")?;
            let orphans: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE short_code IS NULL")
                    .fetch_one(&pool)
                    .await
                    .context("Failed to count links without code")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links:              {}", links.to_string().bright_green().bold());
            println!("  Links without code: {}", orphans.to_string().yellow());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            server::migrate(&pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
