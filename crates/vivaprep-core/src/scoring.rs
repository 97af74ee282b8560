//! Keyword scoring for free-text answers.
//!
//! Matching is deliberately coarse: a keyword counts as present when its
//! lowercased form occurs as a substring of the lowercased answer (so "log"
//! matches "logarithmic"). It is a proxy signal for answer completeness,
//! not semantic understanding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse qualitative label derived from the fraction of keywords matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    /// No expected keyword was found.
    #[default]
    None,
    /// Some, but not all, expected keywords were found.
    Partial,
    /// Every expected keyword was found.
    Full,
}

impl FeedbackTier {
    /// Classify a match count against the number of expected keywords.
    /// Zero matches are always `None`, even for an empty keyword list.
    pub fn from_counts(matched: usize, expected: usize) -> Self {
        if matched == 0 {
            FeedbackTier::None
        } else if matched == expected {
            FeedbackTier::Full
        } else {
            FeedbackTier::Partial
        }
    }

    /// The coaching line shown to the candidate after evaluation.
    pub fn feedback(self) -> &'static str {
        match self {
            FeedbackTier::None => "Needs improvement: missing important points.",
            FeedbackTier::Partial => "Good: some important points present, add more details.",
            FeedbackTier::Full => "Excellent: covered expected points!",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackTier::None => write!(f, "none"),
            FeedbackTier::Partial => write!(f, "partial"),
            FeedbackTier::Full => write!(f, "full"),
        }
    }
}

/// Outcome of scoring one answer against a keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Keywords found in the answer, in keyword-list order.
    pub matched_keywords: Vec<String>,
    /// Number of matched keywords. Duplicate entries in the keyword list
    /// count once per occurrence.
    pub match_count: usize,
    /// Qualitative tier for this evaluation.
    pub tier: FeedbackTier,
}

/// Score `answer` against `keywords`.
///
/// Case-insensitive substring containment; an empty answer never matches.
/// Pure and deterministic: no state, no I/O.
pub fn evaluate(answer: &str, keywords: &[String]) -> Evaluation {
    let haystack = answer.to_lowercase();

    let mut matched_keywords = Vec::new();
    if !haystack.is_empty() {
        for keyword in keywords {
            if haystack.contains(&keyword.to_lowercase()) {
                matched_keywords.push(keyword.clone());
            }
        }
    }

    let match_count = matched_keywords.len();
    Evaluation {
        tier: FeedbackTier::from_counts(match_count, keywords.len()),
        matched_keywords,
        match_count,
    }
}
