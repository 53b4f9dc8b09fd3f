//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `categories` - Category CRUD and the protected default category
//! - `keywords` - Keyword CRUD, teach, and retroactive reclassification
//! - `transactions` - Transaction batch insert, listing, recategorization

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use tracing::info;

use crate::error::Result;
use crate::models::UNCATEGORIZED;

mod categories;
mod keywords;
mod transactions;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool, running migrations and seeding
    /// the default category.
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because every
    /// pooled connection would otherwise see its own private database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/saldo_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations and bootstrap the default category
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- Categories (user-defined spending buckets)
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            -- Keywords (exact-match title -> category bindings)
            -- word is unique across the whole store: a keyword belongs to
            -- exactly one category at a time
            CREATE TABLE IF NOT EXISTS keywords (
                id INTEGER PRIMARY KEY,
                word TEXT NOT NULL UNIQUE,
                category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_keywords_category ON keywords(category_id);

            -- Transactions (titles stored already normalized)
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                category_id INTEGER NOT NULL REFERENCES categories(id),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
            CREATE INDEX IF NOT EXISTS idx_transactions_title ON transactions(title);
            CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category_id);
            "#,
        )?;

        // One-time bootstrap: the default category must exist before any
        // other operation runs
        conn.execute(
            "INSERT INTO categories (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
            params![UNCATEGORIZED],
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}
