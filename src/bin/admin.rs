//! CLI administration tool for document-register.
//!
//! Manages document types and checks the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a document type (prompts for missing values)
//! cargo run --bin admin -- doctype create
//! cargo run --bin admin -- doctype create --short-code TST --long-name "Test Document" -y
//!
//! # List document types
//! cargo run --bin admin -- doctype list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//!
//! `doctype` commands apply pending migrations first, so a fresh database can
//! be seeded with document types before the server first starts.

use document_register::api::dto::document_type::CreateDocumentTypeRequest;
use document_register::application::services::DocumentTypeService;
use document_register::domain::validation::FieldErrors;
use document_register::config::{Config, StoreBackend, mask_connection_string};
use document_register::infrastructure::persistence::PgDocumentTypeRepository;
use document_register::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing document-register.
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
    /// Manage document types
    Doctype {
        #[command(subcommand)]
        action: DoctypeAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Document type subcommands.
#[derive(Subcommand)]
enum DoctypeAction {
    /// Create a new document type
    Create {
        /// Short code used as the tag prefix (up to 5 letters or digits, e.g. "TST")
        #[arg(short, long)]
        short_code: Option<String>,

        /// Human readable name (e.g. "Test Document")
        #[arg(short, long)]
        long_name: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all document types
    List,
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

    let mut config = Config::from_env().context("Failed to load configuration")?;
    // The admin tool only ever talks to PostgreSQL.
    config.store_backend = StoreBackend::Postgres;
    config.validate()?;

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Doctype { action } => {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            handle_doctype_action(action, &pool).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches document type commands.
async fn handle_doctype_action(action: DoctypeAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgDocumentTypeRepository::new(Arc::new(pool.clone())));
    let service = DocumentTypeService::new(repo);

    match action {
        DoctypeAction::Create {
            short_code,
            long_name,
            description,
            yes,
        } => {
            create_document_type(&service, short_code, long_name, description, yes).await?;
        }
        DoctypeAction::List => {
            list_document_types(&service).await?;
        }
    }

    Ok(())
}

/// Creates a document type, prompting for any value not given as a flag.
///
/// # Flow
///
/// 1. Prompt for short code, long name and description (or use provided)
/// 2. Validate the same way as `POST /api/document-types`
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store in database
async fn create_document_type(
    service: &DocumentTypeService,
    short_code: Option<String>,
    long_name: Option<String>,
    description: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📄 Create Document Type".bright_blue().bold());
    println!();

    let short_code = match short_code {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Short code (max 5 characters)")
            .interact_text()?,
    };

    let long_name = match long_name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Long name (max 50 characters)")
            .interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new().with_prompt("Description").interact_text()?,
    };

    let request = CreateDocumentTypeRequest {
        short_code,
        long_name,
        description,
    }
    .normalized();

    if let Err(errors) = request.validate() {
        println!("{}", "❌ Invalid document type:".red().bold());
        let fields = FieldErrors::from(errors);
        for field in fields.fields() {
            println!("  {}: {}", field.yellow(), fields.message_for(field));
        }
        anyhow::bail!("Document type not created");
    }

    println!();
    println!("{}", "Document type details:".bright_white().bold());
    println!("  Short code:  {}", request.short_code.cyan());
    println!("  Long name:   {}", request.long_name.cyan());
    println!("  Description: {}", request.description.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this document type?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let document_type = service
        .create(request.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create document type: {}", e))?;

    println!();
    println!("{}", "✅ Document type created successfully!".green().bold());
    println!(
        "  {} (id {})",
        document_type.to_string().bright_white(),
        document_type.id.to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Lists all document types.
///
/// # Output Format
///
/// ```text
/// 📋 Document Types
///
///   ID  Code   Name                                               Description
///   ──────────────────────────────────────────────────────────────────────────
///   1   SPEC   Specification                                      Technical specifications
///   2   TST    Test Document                                      Test plans and reports
/// ```
async fn list_document_types(service: &DocumentTypeService) -> Result<()> {
    println!("{}", "📋 Document Types".bright_blue().bold());
    println!();

    let types = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list document types: {}", e))?;

    if types.is_empty() {
        println!("{}", "  No document types found".yellow());
        println!();
        println!(
            "  Create one with: {} admin doctype create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<6} {:<50} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Name".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for document_type in &types {
        println!(
            "  {:<3} {:<6} {:<50} {}",
            document_type.id.to_string().bright_black(),
            document_type.short_code.cyan(),
            document_type.long_name,
            document_type.description.bright_black()
        );
    }

    println!();
    println!("  Total: {}", types.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let documents: Option<i64> =
                sqlx::query_scalar("SELECT COUNT(*) FROM documents")
                    .fetch_one(pool)
                    .await
                    .ok();

            if let Some(ref url) = config.database_url {
                println!("  Connection: {}", mask_connection_string(url).bright_white());
            }
            println!("  PostgreSQL: {}", version.bright_white());
            match documents {
                Some(count) => println!(
                    "  Documents:  {}",
                    count.to_string().bright_green().bold()
                ),
                None => println!("  Documents:  {}", "not migrated".yellow()),
            }
            println!();
        }
    }

    Ok(())
}
