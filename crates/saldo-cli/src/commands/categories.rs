//! Category command implementations

use anyhow::Result;
use saldo_core::db::Database;

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;
    let keywords = db.list_keywords()?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");

    for category in categories {
        let words: Vec<&str> = keywords
            .iter()
            .filter(|kw| kw.category_id == category.id)
            .map(|kw| kw.word.as_str())
            .collect();

        if words.is_empty() {
            println!("   [{}] {}", category.id, category.name);
        } else {
            println!("   [{}] {} ({})", category.id, category.name, words.join(", "));
        }
    }

    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str) -> Result<()> {
    let category = db.create_category(name)?;
    println!("✅ Added category '{}' (id {})", category.name, category.id);
    Ok(())
}

pub fn cmd_categories_delete(db: &Database, name: &str) -> Result<()> {
    let category = db
        .get_category(name)?
        .ok_or_else(|| anyhow::anyhow!("Category '{}' not found", name))?;

    db.delete_category(category.id)?;
    println!("✅ Deleted category '{}'", category.name);
    println!("   Its transactions were moved to Uncategorized.");
    Ok(())
}
