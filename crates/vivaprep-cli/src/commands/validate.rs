//! The `vivaprep validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use vivaprep_core::parser;

pub fn execute(catalog: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&catalog)
        .with_context(|| format!("failed to read catalog file: {}", catalog.display()))?;
    let bank = parser::parse_catalog_str(&content)
        .with_context(|| format!("invalid catalog: {}", catalog.display()))?;

    println!(
        "Catalog: {} questions across {} categories",
        bank.len(),
        bank.categories().count()
    );

    let warnings = parser::validate_catalog(&bank);
    for w in &warnings {
        let prefix = w
            .category
            .map(|c| format!("  [{c}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
