//! Saldo CLI - Personal finance dashboard
//!
//! Usage:
//!   saldo init                          Initialize database
//!   saldo import --file statement.csv   Ingest a statement CSV
//!   saldo teach Transport uber          Bind a keyword to a category
//!   saldo report by-category            Totals per category

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Import { file } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_import(&db, &file)
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_categories_list(&db),
                Some(CategoriesAction::Add { name }) => commands::cmd_categories_add(&db, &name),
                Some(CategoriesAction::Delete { name }) => {
                    commands::cmd_categories_delete(&db, &name)
                }
            }
        }
        Commands::Keywords { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_keywords_list(&db),
                Some(KeywordsAction::Remove { word }) => commands::cmd_keywords_remove(&db, &word),
            }
        }
        Commands::Teach { category, keyword } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_teach(&db, &category, &keyword)
        }
        Commands::Classify { title } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_classify(&db, &title)
        }
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_transactions_list(&db, None, 50),
                Some(TransactionsAction::List { from, to, limit }) => {
                    let range = commands::resolve_range(from.as_deref(), to.as_deref())?;
                    commands::cmd_transactions_list(&db, range, limit)
                }
                Some(TransactionsAction::SetCategory { id, category }) => {
                    commands::cmd_transactions_set_category(&db, id, &category)
                }
            }
        }
        Commands::Report { report_type } => {
            let db = commands::open_db(&cli.db)?;
            match report_type {
                ReportType::ByCategory { from, to, json } => {
                    let range = commands::resolve_range(from.as_deref(), to.as_deref())?;
                    commands::cmd_report_by_category(&db, range, json)
                }
                ReportType::Monthly {
                    year,
                    from,
                    to,
                    json,
                } => {
                    let range = match year {
                        Some(y) => Some(commands::year_range(y)),
                        None => commands::resolve_range(from.as_deref(), to.as_deref())?,
                    };
                    commands::cmd_report_monthly(&db, range, json)
                }
            }
        }
        Commands::Status => commands::cmd_status(&cli.db),
    }
}
