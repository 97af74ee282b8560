//! Core data model types for vivaprep.
//!
//! These are the fundamental types the rest of the system uses to represent
//! questions and the categories they are drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single interview question with the keywords an answer is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the candidate.
    pub text: String,
    /// Keywords whose presence in an answer counts toward the score.
    /// Matched case-insensitively; list order is preserved in scoring output.
    pub keywords: Vec<String>,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named grouping of questions, used for interleaving and per-category
/// score aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Hr,
    Behavioral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Technical => write!(f, "Technical"),
            Category::Hr => write!(f, "HR"),
            Category::Behavioral => write!(f, "Behavioral"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" | "tech" => Ok(Category::Technical),
            "hr" => Ok(Category::Hr),
            "behavioral" | "behavioural" => Ok(Category::Behavioral),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A question tagged with the category it was sampled from.
///
/// Owned by a session's question list for that session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedQuestion {
    pub category: Category,
    pub question: Question,
}
