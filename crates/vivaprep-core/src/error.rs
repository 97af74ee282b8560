//! Error kinds for the interview core.
//!
//! Both kinds are synchronous and recoverable: they are returned to the
//! immediate caller, which decides whether to surface or ignore them. There
//! is no transient failure source, so nothing here is retryable.

use thiserror::Error;

use crate::model::Category;

/// Errors reported by the interview core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// An operation was attempted in a session state that does not support it.
    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    /// A sample was requested that exceeds the catalog size for a category.
    #[error("not enough {category} questions: requested {requested}, catalog has {available}")]
    InsufficientQuestions {
        category: Category,
        requested: usize,
        available: usize,
    },
}

impl InterviewError {
    /// Returns `true` for invalid-state errors, which a presentation shell
    /// should surface as a disabled control or a no-op notice rather than a
    /// failure dialog.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, InterviewError::InvalidState { .. })
    }
}
