//! Report command implementations

use anyhow::Result;
use chrono::NaiveDate;
use saldo_core::db::Database;
use saldo_core::report::{totals_by_category, totals_by_month};

pub fn cmd_report_by_category(
    db: &Database,
    date_range: Option<(NaiveDate, NaiveDate)>,
    json: bool,
) -> Result<()> {
    let snapshot = db.list_transactions(date_range, None)?;
    let totals = totals_by_category(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    println!();
    println!("📊 Totals by Category");
    if let Some((from, to)) = date_range {
        println!("   Period: {} to {}", from, to);
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if totals.is_empty() {
        println!("   No transactions in this period.");
        return Ok(());
    }

    for entry in &totals {
        println!("   {:25} │ {:>12.2}", entry.category, entry.total);
    }

    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:25} │ {:>12.2}", "Total", grand_total);

    Ok(())
}

pub fn cmd_report_monthly(
    db: &Database,
    date_range: Option<(NaiveDate, NaiveDate)>,
    json: bool,
) -> Result<()> {
    let snapshot = db.list_transactions(date_range, None)?;
    let totals = totals_by_month(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    println!();
    println!("📅 Totals by Month");
    if let Some((from, to)) = date_range {
        println!("   Period: {} to {}", from, to);
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if totals.is_empty() {
        println!("   No transactions in this period.");
        return Ok(());
    }

    for entry in &totals {
        println!("   {} │ {:>12.2}", entry.month, entry.total);
    }

    Ok(())
}
