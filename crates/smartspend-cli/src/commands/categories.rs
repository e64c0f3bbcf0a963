//! Category lookup commands (categorize, categories)

use anyhow::Result;
use smartspend_core::categories::{aliases, expense_type, normalize, FIXED_CATEGORIES};
use smartspend_core::ExpenseType;

use super::truncate;

/// Normalize each raw value, returning (raw, canonical, expense type)
pub fn categorize_values(values: &[String]) -> Vec<(String, String, ExpenseType)> {
    values
        .iter()
        .map(|raw| {
            let canonical = normalize(raw);
            let kind = expense_type(&canonical);
            (raw.clone(), canonical, kind)
        })
        .collect()
}

pub fn cmd_categorize(values: &[String]) -> Result<()> {
    println!();
    println!("🏷️  Category Normalization");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:30} │ {:18} │ {:8}", "Input", "Category", "Type");
    println!("   ───────────────────────────────┼────────────────────┼─────────");

    for (raw, canonical, kind) in categorize_values(values) {
        let shown = if raw.trim().is_empty() {
            "(empty)".to_string()
        } else {
            truncate(&raw, 30)
        };
        println!("   {:30} │ {:18} │ {:8}", shown, canonical, kind);
    }

    Ok(())
}

pub fn cmd_categories() -> Result<()> {
    println!();
    println!("🏷️  Category Aliases (first match wins)");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:14} │ {:16} │ {:8}", "Contains", "Category", "Type");
    println!("   ───────────────┼──────────────────┼─────────");

    for (pattern, canonical) in aliases() {
        println!(
            "   {:14} │ {:16} │ {:8}",
            pattern,
            canonical,
            expense_type(canonical)
        );
    }

    println!();
    println!("   Fixed expenses: {}", FIXED_CATEGORIES.join(", "));
    println!("   Anything else is title-cased and counted as Variable.");

    Ok(())
}
