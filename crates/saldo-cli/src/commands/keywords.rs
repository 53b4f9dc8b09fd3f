//! Keyword command implementations: list, remove, teach, classify

use std::collections::HashMap;

use anyhow::Result;
use saldo_core::db::Database;

pub fn cmd_keywords_list(db: &Database) -> Result<()> {
    let keywords = db.list_keywords()?;

    if keywords.is_empty() {
        println!("No keywords taught yet. Teach one with:");
        println!("  saldo teach Transport uber");
        return Ok(());
    }

    let category_names: HashMap<i64, String> = db
        .list_categories()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    println!();
    println!("🔑 Keywords");
    println!("   ─────────────────────────────────────────────────────────────");

    for kw in keywords {
        let category = category_names
            .get(&kw.category_id)
            .map(|n| n.as_str())
            .unwrap_or("?");
        println!("   {:30} → {}", kw.word, category);
    }

    Ok(())
}

pub fn cmd_keywords_remove(db: &Database, word: &str) -> Result<()> {
    db.remove_keyword(word)?;
    println!("✅ Removed keyword '{}'", word.trim().to_lowercase());
    println!("   It can now be taught to another category.");
    Ok(())
}

pub fn cmd_teach(db: &Database, category: &str, keyword: &str) -> Result<()> {
    match db.teach_keyword(category, keyword)? {
        Some(result) => {
            println!(
                "✅ Taught '{}' → '{}' ({} transactions reclassified)",
                result.keyword.word, category, result.reclassified
            );
        }
        None => println!("Nothing to teach: the keyword is empty."),
    }
    Ok(())
}

pub fn cmd_classify(db: &Database, title: &str) -> Result<()> {
    let index = db.keyword_index()?;
    let category_id = index.classify(title);
    let category = db
        .get_category_by_id(category_id)?
        .ok_or_else(|| anyhow::anyhow!("Category {} not found", category_id))?;

    println!("'{}' → {}", title, category.name);
    Ok(())
}
