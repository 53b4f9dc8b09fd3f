//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Saldo - Categorize statement exports and see where the money goes
#[derive(Parser)]
#[command(name = "saldo")]
#[command(about = "Personal finance dashboard for bank statement CSVs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "saldo.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Ingest a statement CSV
    Import {
        /// CSV file with date, title, and amount columns
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Manage categories (list, add, delete)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Manage taught keywords (list, remove)
    Keywords {
        #[command(subcommand)]
        action: Option<KeywordsAction>,
    },

    /// Bind a keyword to a category and reclassify matching transactions
    Teach {
        /// Category name (created if missing)
        category: String,
        /// Keyword text (matched against whole normalized titles)
        keyword: String,
    },

    /// Show which category a title would land in
    Classify {
        /// Transaction title to test
        title: String,
    },

    /// List transactions or edit a transaction's category
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Generate spending reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Show database status
    Status,
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category (its transactions fall back to Uncategorized)
    Delete {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum KeywordsAction {
    /// Remove a keyword so it can be taught again
    Remove {
        /// Keyword text
        word: String,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List transactions
    List {
        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Maximum rows to show
        #[arg(long, default_value = "50")]
        limit: i64,
    },

    /// Set a transaction's category, teaching its title as a keyword
    SetCategory {
        /// Transaction ID
        id: i64,
        /// Category name (created if missing)
        category: String,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Totals per category, descending
    ByCategory {
        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Totals per calendar month, ascending
    Monthly {
        /// Restrict to one year
        #[arg(long)]
        year: Option<i32>,

        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long, conflicts_with = "year")]
        from: Option<String>,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long, conflicts_with = "year")]
        to: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
