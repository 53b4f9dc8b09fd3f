//! Saldo Core Library
//!
//! Shared functionality for the Saldo personal finance dashboard:
//! - Database access and migrations
//! - Statement CSV ingestion
//! - Title normalization (ledger-noise filtering, installment stripping)
//! - Exact-match keyword categorization with retroactive reclassification
//! - Category/month aggregate summaries

pub mod categorize;
pub mod db;
pub mod error;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod report;

pub use categorize::KeywordIndex;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    Category, CategoryTotal, IngestSummary, Keyword, MonthlyTotal, NewTransaction,
    RecategorizeResult, StatementRow, TeachResult, TransactionRecord, UNCATEGORIZED,
};
