//! Category operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Category, UNCATEGORIZED};

impl Database {
    /// Create a new category
    ///
    /// The name is trimmed before storage. Fails with `InvalidData` for an
    /// empty name and `DuplicateName` when the name is already taken.
    pub fn create_category(&self, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData("category name is empty".to_string()));
        }

        let conn = self.conn()?;
        match conn.execute(
            "INSERT INTO categories (name) VALUES (?1)",
            params![name],
        ) {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(Error::DuplicateName(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        info!("Created category '{}' (id {})", name, id);

        self.get_category_by_id(id)?
            .ok_or_else(|| Error::NotFound(format!("Category {}", id)))
    }

    /// Delete a category, reassigning its transactions to the default
    ///
    /// The category's keywords are removed with it (FK cascade); its
    /// transactions are re-pointed at Uncategorized so no row is left
    /// dangling. The whole operation is one SQL transaction.
    pub fn delete_category(&self, id: i64) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let name: String = tx
            .query_row(
                "SELECT name FROM categories WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Category {}", id)))?;

        if name == UNCATEGORIZED {
            return Err(Error::ProtectedCategory(name));
        }

        let fallback: i64 = tx.query_row(
            "SELECT id FROM categories WHERE name = ?1",
            params![UNCATEGORIZED],
            |row| row.get(0),
        )?;

        let reassigned = tx.execute(
            "UPDATE transactions SET category_id = ?1 WHERE category_id = ?2",
            params![fallback, id],
        )?;
        tx.execute("DELETE FROM categories WHERE id = ?1", params![id])?;

        tx.commit()?;
        info!(
            "Deleted category '{}' ({} transactions reassigned)",
            name, reassigned
        );
        Ok(())
    }

    /// List all categories ordered by id
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], row_to_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Look up a category by name
    pub fn get_category(&self, name: &str) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, name, created_at FROM categories WHERE name = ?1",
                params![name.trim()],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Look up a category by id
    pub fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, name, created_at FROM categories WHERE id = ?1",
                params![id],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Id of the reserved default category
    pub fn uncategorized_id(&self) -> Result<i64> {
        let conn = self.conn()?;
        let id = conn.query_row(
            "SELECT id FROM categories WHERE name = ?1",
            params![UNCATEGORIZED],
            |row| row.get(0),
        )?;
        Ok(id)
    }
}

/// Helper to convert a row to Category
/// Column order: id, name, created_at
fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    let created_at_str: String = row.get(2)?;
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&created_at_str),
    })
}

/// Whether a rusqlite error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: rusqlite::ffi::ErrorCode::ConstraintViolation,
                ..
            },
            _,
        )
    )
}
