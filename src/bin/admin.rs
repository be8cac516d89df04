//! CLI administration tool for url-shortener.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Show statistics for a short code
//! cargo run --bin admin -- stats aB3xY9
//!
//! # List the most recent mappings
//! cargo run --bin admin -- list --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_shortener::config`. `DATABASE_URL` defaults
//! to `sqlite://url_database.db`.

use url_shortener::application::services::MappingService;
use url_shortener::config;
use url_shortener::infrastructure::database;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

type Service = MappingService<SqliteUrlRepository>;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL (or show its existing short code)
    Shorten {
        /// URL to shorten; prompted for when omitted
        url: Option<String>,
    },

    /// Show hit statistics for a short code
    Stats {
        /// Short code, e.g. aB3xY9
        code: String,
    },

    /// List the most recently created mappings
    List {
        /// Maximum number of rows to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = database::connect(&config.database_url, &config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    database::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = MappingService::with_max_attempts(repository, config.code_allocation_attempts);

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await?,
        Commands::Stats { code } => show_stats(&service, &code).await?,
        Commands::List { limit } => list_mappings(&service, limit).await?,
        Commands::Db { action } => handle_db_action(action, &service, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Allocates a short code, prompting for the URL if none was given.
async fn shorten(service: &Service, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Long URL").interact_text()?,
    };

    let allocation = service
        .allocate_or_find(&long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    if allocation.is_new {
        println!("{}", "✅ New short code allocated".green().bold());
    } else {
        println!("{}", "ℹ️  URL was already mapped".yellow());
    }

    println!();
    println!("  URL:      {}", long_url.cyan());
    println!(
        "  Code:     {}",
        allocation.short_code().bright_yellow().bold()
    );
    println!("  Location: {}", allocation.record.location().bright_white());
    println!();

    Ok(())
}

/// Prints hits, target and creation time of a short code.
async fn show_stats(service: &Service, code: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let record = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Code:    {}", record.short_code.bright_yellow().bold());
    println!("  URL:     {}", record.long_url.cyan());
    println!(
        "  Hits:    {}",
        record.hit_count.to_string().bright_green().bold()
    );
    println!(
        "  Created: {}",
        record
            .created_on
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Lists recent mappings.
///
/// # Output Format
///
/// ```text
/// 📋 Recent mappings
///
///   Code    Hits    Created            URL
///   ──────────────────────────────────────────────────────────────────────────
///   aB3xY9  12      2024-01-15 10:30   https://example.com/a
/// ```
async fn list_mappings(service: &Service, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent mappings".bright_blue().bold());
    println!();

    let records = service
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<7} {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<7} {:<7} {:<18} {}",
            record.short_code.bright_yellow(),
            record.hit_count.to_string().bright_green(),
            record
                .created_on
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.long_url.cyan()
        );
    }

    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        records.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service
                .check_store()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let mappings = service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("  SQLite:   {}", version.bright_white());
            println!("  Mappings: {}", mappings.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
