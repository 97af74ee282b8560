//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};

use vivaprep_core::bank::QuestionBank;
use vivaprep_core::parser;

pub mod questions;
pub mod run;
pub mod validate;

/// Load a catalog file, or fall back to the built-in catalog.
pub fn load_bank(catalog: Option<&Path>) -> Result<QuestionBank> {
    match catalog {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
            parser::parse_catalog_str(&content)
                .with_context(|| format!("invalid catalog: {}", path.display()))
        }
        None => Ok(QuestionBank::builtin()),
    }
}
