//! Error types for Saldo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Category already exists: {0}")]
    DuplicateName(String),

    #[error("Keyword already taught: {0}")]
    DuplicateKeyword(String),

    #[error("Cannot delete protected category: {0}")]
    ProtectedCategory(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
