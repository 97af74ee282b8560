//! TOML question catalog parser.
//!
//! Parses catalog documents into a `QuestionBank` and validates them.
//! Only string input is accepted here; reading catalog files is the
//! presentation shell's job, keeping the core free of I/O.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bank::QuestionBank;
use crate::model::{Category, Question};

/// Intermediate TOML structure for parsing catalog documents.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    category: String,
    text: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse a TOML catalog document into a `QuestionBank`.
///
/// The expected shape is a sequence of `[[questions]]` tables, each with a
/// `category`, a `text`, and a `keywords` list.
pub fn parse_catalog_str(content: &str) -> Result<QuestionBank> {
    let parsed: TomlCatalog = toml::from_str(content).context("failed to parse catalog TOML")?;

    let mut bank = QuestionBank::new();
    for q in parsed.questions {
        let category: Category = q
            .category
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{e}"))?;
        bank.add(
            category,
            Question {
                text: q.text,
                keywords: q.keywords,
            },
        );
    }

    Ok(bank)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The category the offending question belongs to, if applicable.
    pub category: Option<Category>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues. Warnings are non-fatal; a
/// question with no keywords parses fine but can never score.
pub fn validate_catalog(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for category in bank.categories() {
        let mut seen = std::collections::HashSet::new();
        for question in bank.questions(category) {
            if question.text.trim().is_empty() {
                warnings.push(ValidationWarning {
                    category: Some(category),
                    message: "question text is empty".into(),
                });
            } else if !seen.insert(question.text.as_str()) {
                warnings.push(ValidationWarning {
                    category: Some(category),
                    message: format!("duplicate question text: {}", question.text),
                });
            }

            if question.keywords.is_empty() {
                warnings.push(ValidationWarning {
                    category: Some(category),
                    message: format!("no keywords, question can never score: {}", question.text),
                });
            }
            if question.keywords.iter().any(|k| k.trim().is_empty()) {
                warnings.push(ValidationWarning {
                    category: Some(category),
                    message: format!("blank keyword in question: {}", question.text),
                });
            }
        }
    }

    warnings
}
