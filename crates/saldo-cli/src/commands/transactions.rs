//! Transaction command implementations

use anyhow::Result;
use chrono::NaiveDate;
use saldo_core::db::Database;

use super::truncate;

pub fn cmd_transactions_list(
    db: &Database,
    date_range: Option<(NaiveDate, NaiveDate)>,
    limit: i64,
) -> Result<()> {
    let transactions = db.list_transactions(date_range, Some(limit))?;

    if transactions.is_empty() {
        println!("No transactions found. Ingest a statement with:");
        println!("  saldo import --file statement.csv");
        return Ok(());
    }

    println!();
    println!("📝 Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = if tx.amount < 0.0 {
            format!("\x1b[32m{:.2}\x1b[0m", tx.amount) // Green for credits
        } else {
            format!("{:.2}", tx.amount)
        };

        println!(
            "   [{}] {} │ {:>10} │ {:20} │ {}",
            tx.id,
            tx.date,
            amount_str,
            truncate(&tx.category, 20),
            truncate(&tx.title, 40)
        );
    }

    Ok(())
}

pub fn cmd_transactions_set_category(db: &Database, id: i64, category: &str) -> Result<()> {
    let result = db.recategorize_transaction(id, category)?;

    println!("✅ Transaction {} moved to '{}'", id, category);
    match result.keyword {
        Some(kw) => {
            println!(
                "   Learned keyword '{}' ({} other transactions reclassified)",
                kw.word, result.reclassified
            );
        }
        None => {
            println!("   Title already belongs to another category's keyword; only this");
            println!("   transaction changed. Use 'saldo keywords remove <word>' to re-teach.");
        }
    }

    Ok(())
}
