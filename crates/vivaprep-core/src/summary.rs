//! Summary aggregation over a session.
//!
//! A `SummaryReport` is derived on demand from a session and is never stored
//! back into it; building one is read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Category;
use crate::session::InterviewSession;

/// Placeholder shown for questions with no usable answer text.
const NO_ANSWER: &str = "(No answer)";

/// Aggregated score for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub category: Category,
    /// Keywords matched across this category's questions.
    pub score: usize,
    /// Keywords expected across this category's questions.
    pub possible: usize,
}

/// One row of the per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub category: Category,
    pub question: String,
    /// The stored answer text, or a placeholder when blank.
    pub answer: String,
    pub match_count: usize,
    pub possible: usize,
}

/// Derived summary of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Identifier of the session this report was built from.
    pub session_id: Uuid,
    /// When the report was built.
    pub created_at: DateTime<Utc>,
    pub total_score: usize,
    pub total_possible: usize,
    /// Per-category tallies in first-seen session order.
    pub per_category: Vec<CategoryTally>,
    /// One row per question, in session order.
    pub per_question: Vec<QuestionOutcome>,
}

/// Aggregate a session into a `SummaryReport`.
///
/// Callable at any point; semantically meaningful once the session has
/// reached the summary position.
pub fn build_report(session: &InterviewSession) -> SummaryReport {
    let mut per_category: Vec<CategoryTally> = Vec::new();
    let mut per_question = Vec::with_capacity(session.len());
    let mut total_score = 0;
    let mut total_possible = 0;

    for (cq, record) in session.questions().iter().zip(session.answers()) {
        let possible = cq.question.keywords.len();
        total_score += record.match_count;
        total_possible += possible;

        match per_category.iter_mut().find(|t| t.category == cq.category) {
            Some(tally) => {
                tally.score += record.match_count;
                tally.possible += possible;
            }
            None => per_category.push(CategoryTally {
                category: cq.category,
                score: record.match_count,
                possible,
            }),
        }

        let answer = if record.raw_text.trim().is_empty() {
            NO_ANSWER.to_string()
        } else {
            record.raw_text.clone()
        };
        per_question.push(QuestionOutcome {
            category: cq.category,
            question: cq.question.text.clone(),
            answer,
            match_count: record.match_count,
            possible,
        });
    }

    SummaryReport {
        session_id: session.id(),
        created_at: Utc::now(),
        total_score,
        total_possible,
        per_category,
        per_question,
    }
}

impl SummaryReport {
    /// Render the report as plain text for terminal display.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Total Score: {} / {}", self.total_score, self.total_possible),
            String::new(),
        ];

        for tally in &self.per_category {
            lines.push(format!(
                "{} Score: {} / {}",
                tally.category, tally.score, tally.possible
            ));
        }

        lines.push(String::new());
        lines.push("Detailed answers and feedback:".to_string());

        for (i, row) in self.per_question.iter().enumerate() {
            lines.push(format!("Q{} ({}): {}", i + 1, row.category, row.question));
            lines.push(format!("  Your answer: {}", row.answer));
            lines.push(format!("  Score: {} / {}", row.match_count, row.possible));
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategorizedQuestion, Question};

    fn make_session(specs: &[(Category, &[&str])]) -> InterviewSession {
        let questions = specs
            .iter()
            .map(|(category, keywords)| CategorizedQuestion {
                category: *category,
                question: Question::new(format!("question about {keywords:?}"), keywords.iter().copied()),
            })
            .collect();
        InterviewSession::new(questions)
    }

    #[test]
    fn report_totals_and_categories() {
        // One technical question worth 2, one HR question worth 3.
        let mut session = make_session(&[
            (Category::Technical, &["mutable", "immutable"]),
            (Category::Hr, &["student", "experience", "project"]),
        ]);
        session.advance("everything is mutable").unwrap();
        session.advance("no relevant words").unwrap();

        let report = build_report(&session);
        assert_eq!(report.total_score, 1);
        assert_eq!(report.total_possible, 5);
        assert_eq!(
            report.per_category,
            vec![
                CategoryTally {
                    category: Category::Technical,
                    score: 1,
                    possible: 2,
                },
                CategoryTally {
                    category: Category::Hr,
                    score: 0,
                    possible: 3,
                },
            ]
        );
        assert_eq!(report.session_id, session.id());
    }

    #[test]
    fn totals_equal_per_category_sums() {
        let mut session = make_session(&[
            (Category::Technical, &["log", "logarithmic", "O(log n)"]),
            (Category::Hr, &["future", "goal", "career"]),
            (Category::Technical, &["inheritance", "subclass"]),
        ]);
        session.advance("it is logarithmic").unwrap();
        session.advance("my goal and career").unwrap();
        session.advance("a subclass inherits").unwrap();

        let report = build_report(&session);
        let category_score: usize = report.per_category.iter().map(|t| t.score).sum();
        let category_possible: usize = report.per_category.iter().map(|t| t.possible).sum();
        assert_eq!(report.total_score, category_score);
        assert_eq!(report.total_possible, category_possible);
    }

    #[test]
    fn per_category_keeps_first_seen_order() {
        let mut session = make_session(&[
            (Category::Hr, &["goal"]),
            (Category::Technical, &["mutable"]),
            (Category::Hr, &["career"]),
        ]);
        while session.current_question().is_ok() {
            session.advance("").unwrap();
        }

        let report = build_report(&session);
        let order: Vec<Category> = report.per_category.iter().map(|t| t.category).collect();
        assert_eq!(order, vec![Category::Hr, Category::Technical]);
    }

    #[test]
    fn blank_answers_get_a_placeholder() {
        let mut session = make_session(&[
            (Category::Technical, &["mutable"]),
            (Category::Hr, &["goal"]),
            (Category::Hr, &["career"]),
        ]);
        session.advance("").unwrap();
        session.advance("   ").unwrap();
        session.advance("a career in engineering").unwrap();

        let report = build_report(&session);
        assert_eq!(report.per_question[0].answer, "(No answer)");
        assert_eq!(report.per_question[1].answer, "(No answer)");
        assert_eq!(report.per_question[2].answer, "a career in engineering");
    }

    #[test]
    fn report_on_a_fresh_session_scores_zero() {
        let session = make_session(&[(Category::Technical, &["mutable", "immutable"])]);
        let report = build_report(&session);
        assert_eq!(report.total_score, 0);
        assert_eq!(report.total_possible, 2);
        assert_eq!(report.per_question[0].answer, "(No answer)");
        // Building a report never moves the session.
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn text_rendering_layout() {
        let mut session = make_session(&[
            (Category::Technical, &["mutable", "immutable"]),
            (Category::Hr, &["student", "experience", "project"]),
        ]);
        session.advance("everything is mutable").unwrap();
        session.advance("").unwrap();

        let text = build_report(&session).to_text();
        assert!(text.contains("Total Score: 1 / 5"));
        assert!(text.contains("Technical Score: 1 / 2"));
        assert!(text.contains("HR Score: 0 / 3"));
        assert!(text.contains("Detailed answers and feedback:"));
        assert!(text.contains("Q1 (Technical):"));
        assert!(text.contains("  Your answer: everything is mutable"));
        assert!(text.contains("  Your answer: (No answer)"));
        assert!(text.contains("  Score: 1 / 2"));
    }

    #[test]
    fn report_serializes_to_json() {
        let session = make_session(&[(Category::Technical, &["mutable"])]);
        let report = build_report(&session);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_possible\":1"));
        let parsed: SummaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_possible, 1);
        assert_eq!(parsed.per_question.len(), 1);
    }
}
