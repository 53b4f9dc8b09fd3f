//! Exact-match keyword categorization
//!
//! Classification is a lookup of the normalized title as an exact key in the
//! keyword -> category mapping. The whole title must equal the keyword; there
//! is no substring containment, stemming, or ranking. Titles that match
//! nothing fall back to the Uncategorized category.

use std::collections::HashMap;

/// Snapshot of the keyword -> category mapping at one point in time
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    map: HashMap<String, i64>,
    fallback: i64,
}

impl KeywordIndex {
    /// Build an index from (word, category id) pairs and the fallback id
    pub fn new(entries: Vec<(String, i64)>, fallback: i64) -> Self {
        Self {
            map: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Classify a title, returning the matched category id or the fallback
    pub fn classify(&self, title: &str) -> i64 {
        let key = title.trim().to_lowercase();
        self.map.get(&key).copied().unwrap_or(self.fallback)
    }

    /// Id of the fallback (Uncategorized) category
    pub fn fallback(&self) -> i64 {
        self.fallback
    }

    /// Number of keywords in the snapshot
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
