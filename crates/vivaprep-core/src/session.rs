//! The interview session state machine.
//!
//! A session owns an ordered question list fixed at construction, a 1:1
//! vector of answer records, and a cursor. The cursor ranges over `[0, N]`;
//! position `N` is the summary position, reached only by advancing past the
//! last question and left only by an explicit `reset`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InterviewError;
use crate::model::CategorizedQuestion;
use crate::scoring::{self, FeedbackTier};

/// Stored evaluation of one answer.
///
/// Overwritten whole on re-evaluation; a re-submitted answer leaves no
/// trace of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The raw answer text as submitted, possibly empty.
    pub raw_text: String,
    /// Keywords found in the answer, in keyword-list order.
    pub matched_keywords: Vec<String>,
    /// Number of keywords matched.
    pub match_count: usize,
    /// Qualitative tier for this answer.
    pub tier: FeedbackTier,
}

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Presenting the question at this index.
    Question(usize),
    /// Every question has been passed; only the summary remains.
    Summary,
}

/// Stateful sequencer over an ordered question list.
///
/// Mutated only through its own methods and not designed for concurrent
/// invocation; a caller embedded in an event loop must serialize calls into
/// one session instance.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: Uuid,
    questions: Vec<CategorizedQuestion>,
    answers: Vec<AnswerRecord>,
    current: usize,
}

impl InterviewSession {
    /// Create a session over `questions`, positioned at the first one.
    ///
    /// An empty list starts directly at the summary position.
    pub fn new(questions: Vec<CategorizedQuestion>) -> Self {
        let id = Uuid::new_v4();
        let answers = vec![AnswerRecord::default(); questions.len()];
        tracing::debug!(session = %id, questions = questions.len(), "session created");
        Self {
            id,
            questions,
            answers,
            current: 0,
        }
    }

    /// Unique identifier for this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of questions in this session.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The ordered question list, fixed for the session's lifetime.
    pub fn questions(&self) -> &[CategorizedQuestion] {
        &self.questions
    }

    /// Answer records, index-aligned with `questions()`.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Current cursor position; equals `len()` at the summary.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> SessionPhase {
        if self.current < self.questions.len() {
            SessionPhase::Question(self.current)
        } else {
            SessionPhase::Summary
        }
    }

    /// The question at the cursor.
    ///
    /// Fails with `InvalidState` at the summary position.
    pub fn current_question(&self) -> Result<&CategorizedQuestion, InterviewError> {
        self.questions
            .get(self.current)
            .ok_or(InterviewError::InvalidState {
                operation: "read the current question",
                reason: "the session is at the summary position",
            })
    }

    /// Evaluate `text` against the current question and store the result,
    /// replacing any previous record at this index.
    ///
    /// Repeated calls with the same text are idempotent; calls with
    /// different text overwrite, never accumulate.
    pub fn submit_answer(&mut self, text: &str) -> Result<&AnswerRecord, InterviewError> {
        let question = self
            .questions
            .get(self.current)
            .ok_or(InterviewError::InvalidState {
                operation: "submit an answer",
                reason: "the session is at the summary position",
            })?;

        let evaluation = scoring::evaluate(text, &question.question.keywords);
        tracing::debug!(
            session = %self.id,
            index = self.current,
            matched = evaluation.match_count,
            tier = %evaluation.tier,
            "answer evaluated"
        );

        self.answers[self.current] = AnswerRecord {
            raw_text: text.to_string(),
            match_count: evaluation.match_count,
            tier: evaluation.tier,
            matched_keywords: evaluation.matched_keywords,
        };
        Ok(&self.answers[self.current])
    }

    /// Evaluate the staged answer text for the current question, then move
    /// forward: to the next question, or to the summary from the last one.
    ///
    /// The staged text is passed explicitly so evaluation never depends on
    /// presentation-layer state; an empty string is a valid staged answer.
    pub fn advance(&mut self, staged_text: &str) -> Result<SessionPhase, InterviewError> {
        if self.current >= self.questions.len() {
            return Err(InterviewError::InvalidState {
                operation: "advance",
                reason: "the session is already at the summary position",
            });
        }

        self.submit_answer(staged_text)?;
        self.current += 1;
        Ok(self.phase())
    }

    /// Move back to the previous question.
    ///
    /// Fails with `InvalidState` at the first question and at the summary
    /// position; there is no summary-to-question transition.
    pub fn go_back(&mut self) -> Result<SessionPhase, InterviewError> {
        if self.current >= self.questions.len() {
            return Err(InterviewError::InvalidState {
                operation: "go back",
                reason: "the session is at the summary position",
            });
        }
        if self.current == 0 {
            return Err(InterviewError::InvalidState {
                operation: "go back",
                reason: "the session is at the first question",
            });
        }

        self.current -= 1;
        Ok(self.phase())
    }

    /// Fraction of the session completed, in `[0, 1]`.
    ///
    /// Exactly 1.0 at the summary position; an empty session reports 1.0.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.current as f64 / self.questions.len() as f64
    }

    /// Discard all answers and return to the first question. This is the
    /// only transition out of the summary position.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.id, "session reset");
        for record in &mut self.answers {
            *record = AnswerRecord::default();
        }
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Question};

    fn fixture_questions() -> Vec<CategorizedQuestion> {
        vec![
            CategorizedQuestion {
                category: Category::Technical,
                question: Question::new(
                    "What is the difference between list and tuple in Python?",
                    ["mutable", "immutable"],
                ),
            },
            CategorizedQuestion {
                category: Category::Hr,
                question: Question::new(
                    "Tell me about yourself.",
                    ["student", "experience", "project"],
                ),
            },
        ]
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let session = InterviewSession::new(fixture_questions());
        assert_eq!(session.phase(), SessionPhase::Question(0));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.answers().len(), session.len());
        assert!(session.answers().iter().all(|r| *r == AnswerRecord::default()));
    }

    #[test]
    fn current_question_fails_at_summary() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("").unwrap();
        session.advance("").unwrap();
        assert_eq!(session.phase(), SessionPhase::Summary);

        let err = session.current_question().unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn submit_answer_is_idempotent() {
        let mut session = InterviewSession::new(fixture_questions());
        let first = session.submit_answer("lists are mutable").unwrap().clone();
        let second = session.submit_answer("lists are mutable").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.match_count, 1);
    }

    #[test]
    fn submit_answer_overwrites_previous_record() {
        let mut session = InterviewSession::new(fixture_questions());
        session.submit_answer("mutable and immutable").unwrap();
        assert_eq!(session.answers()[0].match_count, 2);

        let record = session.submit_answer("no relevant words").unwrap();
        assert_eq!(record.raw_text, "no relevant words");
        assert_eq!(record.match_count, 0);
        assert_eq!(record.tier, FeedbackTier::None);
        assert!(record.matched_keywords.is_empty());
    }

    #[test]
    fn submit_answer_fails_at_summary() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("").unwrap();
        session.advance("").unwrap();
        assert!(session.submit_answer("late").unwrap_err().is_invalid_state());
    }

    #[test]
    fn advance_evaluates_the_staged_text() {
        let mut session = InterviewSession::new(fixture_questions());
        let phase = session.advance("Lists are mutable, tuples immutable.").unwrap();
        assert_eq!(phase, SessionPhase::Question(1));
        assert_eq!(session.answers()[0].match_count, 2);
        assert_eq!(session.answers()[0].tier, FeedbackTier::Full);
    }

    #[test]
    fn advance_from_last_question_reaches_summary_only_once() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("").unwrap();
        let phase = session.advance("").unwrap();
        assert_eq!(phase, SessionPhase::Summary);

        let err = session.advance("").unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(session.current_index(), session.len());
    }

    #[test]
    fn go_back_fails_at_first_question() {
        let mut session = InterviewSession::new(fixture_questions());
        assert!(session.go_back().unwrap_err().is_invalid_state());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn go_back_returns_to_the_previous_question() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("first try").unwrap();
        assert_eq!(session.go_back().unwrap(), SessionPhase::Question(0));

        // Re-answering after going back overwrites the stored record.
        session.advance("mutable this time").unwrap();
        assert_eq!(session.answers()[0].raw_text, "mutable this time");
        assert_eq!(session.answers()[0].match_count, 1);
    }

    #[test]
    fn go_back_fails_at_summary() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("").unwrap();
        session.advance("").unwrap();
        assert!(session.go_back().unwrap_err().is_invalid_state());
        assert_eq!(session.phase(), SessionPhase::Summary);
    }

    #[test]
    fn progress_is_monotonic_from_zero_to_one() {
        let mut session = InterviewSession::new(fixture_questions());
        let mut seen = vec![session.progress()];
        while session.phase() != SessionPhase::Summary {
            session.advance("answer").unwrap();
            seen.push(session.progress());
        }
        assert_eq!(seen.first(), Some(&0.0));
        assert_eq!(seen.last(), Some(&1.0));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reset_clears_answers_and_position() {
        let mut session = InterviewSession::new(fixture_questions());
        session.advance("mutable").unwrap();
        session.advance("student").unwrap();
        assert_eq!(session.phase(), SessionPhase::Summary);

        session.reset();
        assert_eq!(session.phase(), SessionPhase::Question(0));
        assert_eq!(session.progress(), 0.0);
        assert!(session.answers().iter().all(|r| *r == AnswerRecord::default()));
        assert_eq!(session.answers().len(), session.len());
    }

    #[test]
    fn empty_session_starts_at_summary() {
        let mut session = InterviewSession::new(Vec::new());
        assert_eq!(session.phase(), SessionPhase::Summary);
        assert_eq!(session.progress(), 1.0);
        assert!(session.current_question().unwrap_err().is_invalid_state());
        assert!(session.advance("").unwrap_err().is_invalid_state());
        assert!(session.go_back().unwrap_err().is_invalid_state());
    }
}
