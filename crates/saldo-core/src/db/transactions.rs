//! Transaction operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::keywords::{get_or_create_category, reclassify_in_tx, row_to_keyword};
use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, RecategorizeResult, TransactionRecord};

impl Database {
    /// Insert a batch of transactions as one SQL transaction
    ///
    /// All rows land or none do. No dedup against prior batches: re-ingesting
    /// the same statement creates duplicate rows.
    pub fn insert_transactions(&self, batch: &[NewTransaction]) -> Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO transactions (date, title, amount, category_id) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for new_tx in batch {
                stmt.execute(params![
                    new_tx.date.to_string(),
                    new_tx.title,
                    new_tx.amount,
                    new_tx.category_id,
                ])?;
            }
        }

        tx.commit()?;
        info!("Inserted {} transactions", batch.len());
        Ok(batch.len())
    }

    /// List transactions joined with their category name
    ///
    /// Ordered by date then id. The date range is inclusive on both ends.
    pub fn list_transactions(
        &self,
        date_range: Option<(NaiveDate, NaiveDate)>,
        limit: Option<i64>,
    ) -> Result<Vec<TransactionRecord>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut query_params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some((from, to)) = date_range {
            conditions.push("t.date >= ? AND t.date <= ?");
            query_params.push(Box::new(from.to_string()));
            query_params.push(Box::new(to.to_string()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit_clause = match limit {
            Some(n) => {
                query_params.push(Box::new(n));
                "LIMIT ?"
            }
            None => "",
        };

        let sql = format!(
            r#"
            SELECT t.id, t.date, t.title, t.amount, t.category_id, c.name, t.created_at
            FROM transactions t
            JOIN categories c ON c.id = t.category_id
            {}
            ORDER BY t.date, t.id
            {}
            "#,
            where_clause, limit_clause
        );

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            query_params.iter().map(|p| p.as_ref()).collect();

        let transactions = stmt
            .query_map(params_refs.as_slice(), row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<TransactionRecord>> {
        let conn = self.conn()?;
        let transaction = conn
            .query_row(
                r#"
                SELECT t.id, t.date, t.title, t.amount, t.category_id, c.name, t.created_at
                FROM transactions t
                JOIN categories c ON c.id = t.category_id
                WHERE t.id = ?1
                "#,
                params![id],
                row_to_transaction,
            )
            .optional()?;
        Ok(transaction)
    }

    /// Count total transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Edit a transaction's category, teaching its title as a keyword
    ///
    /// In one SQL transaction: the row's category is updated, then the row's
    /// title is taught to the target category so future ingests and existing
    /// siblings follow the correction. When the title already belongs to a
    /// different category the single-row edit still applies but no keyword is
    /// re-pointed; the outcome's `keyword` field reports which happened.
    pub fn recategorize_transaction(
        &self,
        id: i64,
        category_name: &str,
    ) -> Result<RecategorizeResult> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let title: String = tx
            .query_row(
                "SELECT title FROM transactions WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", id)))?;

        let category_id = get_or_create_category(&tx, category_name)?;
        tx.execute(
            "UPDATE transactions SET category_id = ?1 WHERE id = ?2",
            params![category_id, id],
        )?;

        let word = title.trim().to_lowercase();
        let (keyword, reclassified) = if word.is_empty() {
            (None, 0)
        } else {
            let existing = tx
                .query_row(
                    "SELECT id, word, category_id, created_at FROM keywords WHERE word = ?1",
                    params![word],
                    row_to_keyword,
                )
                .optional()?;

            match existing {
                Some(kw) if kw.category_id == category_id => {
                    let n = reclassify_in_tx(&tx, &word, category_id)?;
                    (Some(kw), n)
                }
                // Owned by another category: the edit stands, the keyword does not move
                Some(_) => (None, 0),
                None => {
                    tx.execute(
                        "INSERT INTO keywords (word, category_id) VALUES (?1, ?2)",
                        params![word, category_id],
                    )?;
                    let kw_id = tx.last_insert_rowid();
                    let kw = tx.query_row(
                        "SELECT id, word, category_id, created_at FROM keywords WHERE id = ?1",
                        params![kw_id],
                        row_to_keyword,
                    )?;
                    let n = reclassify_in_tx(&tx, &word, category_id)?;
                    (Some(kw), n)
                }
            }
        };

        tx.commit()?;
        info!(
            "Recategorized transaction {} -> '{}' ({} siblings reclassified)",
            id, category_name, reclassified
        );

        Ok(RecategorizeResult {
            category_id,
            keyword,
            reclassified,
        })
    }
}

/// Helper to convert a row to TransactionRecord
/// Column order: id, date, title, amount, category_id, category name, created_at
fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<TransactionRecord> {
    let date_str: String = row.get(1)?;
    let created_at_str: String = row.get(6)?;
    Ok(TransactionRecord {
        id: row.get(0)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
        title: row.get(2)?,
        amount: row.get(3)?,
        category_id: row.get(4)?,
        category: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}
