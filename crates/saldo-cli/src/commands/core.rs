//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `resolve_range` / `year_range` - Date-range helpers for filters
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use saldo_core::db::Database;

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_str().unwrap();
    Database::new(path_str).context("Failed to open database")
}

/// Parse optional --from/--to flags into an inclusive date range
///
/// Both bounds must be given together; a half-open range is rejected.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Option<(NaiveDate, NaiveDate)>> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) => {
            let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d")
                .context("Invalid --from date format (use YYYY-MM-DD)")?;
            let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d")
                .context("Invalid --to date format (use YYYY-MM-DD)")?;
            if to_date < from_date {
                anyhow::bail!("--to must not be before --from");
            }
            Ok(Some((from_date, to_date)))
        }
        _ => anyhow::bail!("--from and --to must be used together"),
    }
}

/// Inclusive date range covering one calendar year
pub fn year_range(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
    )
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let categories = db.list_categories()?;
    println!("   Seeded default category '{}'", categories[0].name);

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Ingest a statement: saldo import --file statement.csv");
    println!("  2. Teach a keyword:    saldo teach Transport uber");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 Saldo Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Database: {}", db_path.display());

    // Check if database file exists and get size
    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    if db_path.exists() {
        let db = open_db(db_path)?;
        println!();
        println!("   Categories:   {}", db.list_categories()?.len());
        println!("   Keywords:     {}", db.list_keywords()?.len());
        println!("   Transactions: {}", db.count_transactions()?);
    }

    Ok(())
}
