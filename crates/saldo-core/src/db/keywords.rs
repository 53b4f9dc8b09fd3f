//! Keyword operations: teach, reclassify, and keyword CRUD

use rusqlite::{params, OptionalExtension, Transaction};
use tracing::{debug, info};

use super::{parse_datetime, Database};
use crate::categorize::KeywordIndex;
use crate::error::{Error, Result};
use crate::models::{Keyword, TeachResult};

impl Database {
    /// Teach a keyword to a category
    ///
    /// The word is trimmed and lower-cased; a word that is empty after
    /// trimming is not taught and `Ok(None)` is returned. The owning
    /// category is created when missing. Existing transactions whose title
    /// equals the word are rewritten to the category. Runs as one SQL
    /// transaction.
    ///
    /// Teaching a word that already belongs to a different category fails
    /// with `DuplicateKeyword` and leaves every mapping untouched; teaching
    /// it to its current category is an idempotent no-op that still re-runs
    /// the retroactive rewrite.
    pub fn teach_keyword(
        &self,
        category_name: &str,
        keyword_text: &str,
    ) -> Result<Option<TeachResult>> {
        let word = keyword_text.trim().to_lowercase();
        if word.is_empty() {
            debug!("Ignoring empty keyword for category '{}'", category_name);
            return Ok(None);
        }

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let category_id = get_or_create_category(&tx, category_name)?;

        let existing: Option<Keyword> = tx
            .query_row(
                "SELECT id, word, category_id, created_at FROM keywords WHERE word = ?1",
                params![word],
                row_to_keyword,
            )
            .optional()?;

        let keyword = match existing {
            Some(kw) if kw.category_id == category_id => kw,
            Some(kw) => {
                let owner: String = tx.query_row(
                    "SELECT name FROM categories WHERE id = ?1",
                    params![kw.category_id],
                    |row| row.get(0),
                )?;
                return Err(Error::DuplicateKeyword(format!(
                    "'{}' already belongs to '{}'",
                    kw.word, owner
                )));
            }
            None => {
                tx.execute(
                    "INSERT INTO keywords (word, category_id) VALUES (?1, ?2)",
                    params![word, category_id],
                )?;
                let id = tx.last_insert_rowid();
                tx.query_row(
                    "SELECT id, word, category_id, created_at FROM keywords WHERE id = ?1",
                    params![id],
                    row_to_keyword,
                )?
            }
        };

        let reclassified = reclassify_in_tx(&tx, &keyword.word, category_id)?;
        tx.commit()?;

        info!(
            "Taught '{}' -> '{}' ({} transactions reclassified)",
            keyword.word, category_name, reclassified
        );
        Ok(Some(TeachResult {
            keyword,
            reclassified,
        }))
    }

    /// Rewrite every transaction whose title equals an existing keyword
    ///
    /// Returns the number of rows updated. Fails with `NotFound` when the
    /// word was never taught. A single UPDATE statement, atomic as a whole.
    pub fn reclassify_by_keyword(&self, word: &str) -> Result<usize> {
        let word = word.trim().to_lowercase();
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let category_id: i64 = tx
            .query_row(
                "SELECT category_id FROM keywords WHERE word = ?1",
                params![word],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Keyword '{}'", word)))?;

        let updated = reclassify_in_tx(&tx, &word, category_id)?;
        tx.commit()?;
        Ok(updated)
    }

    /// List all keywords ordered by word
    pub fn list_keywords(&self) -> Result<Vec<Keyword>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, word, category_id, created_at FROM keywords ORDER BY word")?;

        let keywords = stmt
            .query_map([], row_to_keyword)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(keywords)
    }

    /// Remove a keyword so the word can be taught again
    pub fn remove_keyword(&self, word: &str) -> Result<()> {
        let word = word.trim().to_lowercase();
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM keywords WHERE word = ?1", params![word])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Keyword '{}'", word)));
        }
        info!("Removed keyword '{}'", word);
        Ok(())
    }

    /// Snapshot of the current keyword -> category mapping
    pub fn keyword_index(&self) -> Result<KeywordIndex> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT word, category_id FROM keywords")?;

        let entries = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(KeywordIndex::new(entries, self.uncategorized_id()?))
    }
}

/// Rewrite matching transactions within an open transaction
pub(crate) fn reclassify_in_tx(
    tx: &Transaction<'_>,
    word: &str,
    category_id: i64,
) -> Result<usize> {
    let updated = tx.execute(
        "UPDATE transactions SET category_id = ?1 WHERE title = ?2 AND category_id <> ?1",
        params![category_id, word],
    )?;
    Ok(updated)
}

/// Resolve a category by trimmed name, creating it when missing
pub(crate) fn get_or_create_category(tx: &Transaction<'_>, name: &str) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidData("category name is empty".to_string()));
    }

    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM categories WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            tx.execute("INSERT INTO categories (name) VALUES (?1)", params![name])?;
            Ok(tx.last_insert_rowid())
        }
    }
}

/// Helper to convert a row to Keyword
/// Column order: id, word, category_id, created_at
pub(crate) fn row_to_keyword(row: &rusqlite::Row) -> rusqlite::Result<Keyword> {
    let created_at_str: String = row.get(3)?;
    Ok(Keyword {
        id: row.get(0)?,
        word: row.get(1)?,
        category_id: row.get(2)?,
        created_at: parse_datetime(&created_at_str),
    })
}
