//! Statement ingestion command implementation

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use saldo_core::db::Database;
use saldo_core::ingest::ingest;

pub fn cmd_import(db: &Database, file: &Path) -> Result<()> {
    println!("📥 Ingesting {}...", file.display());

    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;

    let summary = ingest(db, csv_file)?;

    println!("   Parsed {} rows", summary.parsed);
    if summary.skipped > 0 {
        println!("   Skipped {} ledger-noise rows", summary.skipped);
    }
    println!("✅ Inserted {} transactions", summary.inserted);
    println!();
    println!("   Review them with 'saldo transactions' and correct categories");
    println!("   with 'saldo transactions set-category <id> <category>'.");

    Ok(())
}
