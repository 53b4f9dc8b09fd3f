//! Domain models for Saldo

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Name of the reserved default category.
///
/// Seeded once at database construction; it can never be deleted and is the
/// fallback target for every title no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A user-defined spending bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// An exact-match string bound to one category
///
/// The word is stored trimmed and lower-cased; the store enforces uniqueness
/// across all categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub word: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A stored ledger entry joined with its category name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub date: NaiveDate,
    /// Normalized title (lower-cased, trimmed, installment suffix stripped)
    pub title: String,
    /// Negative = credit, positive = expense (as exported by the bank)
    pub amount: f64,
    pub category_id: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// A transaction ready for insertion (post-normalization, pre-persistence)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub title: String,
    pub amount: f64,
    pub category_id: i64,
}

/// A parsed statement row before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub title: String,
    pub amount: f64,
}

/// Outcome of teaching a keyword to a category
#[derive(Debug, Clone)]
pub struct TeachResult {
    pub keyword: Keyword,
    /// Existing transactions rewritten to the keyword's category
    pub reclassified: usize,
}

/// Outcome of editing a single transaction's category
#[derive(Debug, Clone)]
pub struct RecategorizeResult {
    pub category_id: i64,
    /// The keyword learned from the transaction title, when one was taught.
    /// None when the title is blank or already belongs to another category.
    pub keyword: Option<Keyword>,
    /// Sibling transactions rewritten alongside the edited row
    pub reclassified: usize,
}

/// Result of running the ingestion pipeline over one statement file
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    /// Rows parsed from the CSV
    pub parsed: usize,
    /// Rows dropped as ledger noise (payment-received / refund entries)
    pub skipped: usize,
    /// Rows persisted
    pub inserted: usize,
}

/// Per-category sum for presentation, descending by total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-month sum, ascending chronological order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// Calendar month in `YYYY-MM` form
    pub month: String,
    pub total: f64,
}
