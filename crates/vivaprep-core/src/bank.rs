//! Question catalog and per-category sampling.
//!
//! `QuestionBank` owns the read-only catalog that questions are drawn from
//! and builds the interleaved, fixed-for-the-session question list an
//! `InterviewSession` runs through. Randomness is injected by the caller so
//! sessions are reproducible under a seeded RNG.

use rand::seq::index;
use rand::Rng;

use crate::error::InterviewError;
use crate::model::{CategorizedQuestion, Category, Question};

/// Number of technical questions in a default session.
pub const DEFAULT_TECH_COUNT: usize = 3;

/// Number of HR questions in a default session.
pub const DEFAULT_HR_COUNT: usize = 2;

/// A read-only catalog of categorized questions.
///
/// Categories are kept in insertion order; the catalog is never mutated
/// after a session starts, so it needs no locking.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    catalog: Vec<(Category, Vec<Question>)>,
}

impl QuestionBank {
    /// An empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog shipped with vivaprep.
    pub fn builtin() -> Self {
        let mut bank = Self::new();

        bank.add(
            Category::Technical,
            Question::new(
                "What is the difference between list and tuple in Python?",
                ["mutable", "immutable"],
            ),
        );
        bank.add(
            Category::Technical,
            Question::new(
                "Explain the concept of inheritance in OOP.",
                ["inheritance", "base class", "derived", "subclass"],
            ),
        );
        bank.add(
            Category::Technical,
            Question::new(
                "What is the time complexity of binary search?",
                ["log", "logarithmic", "O(log n)"],
            ),
        );

        bank.add(
            Category::Hr,
            Question::new(
                "Tell me about yourself.",
                ["student", "experience", "project", "goal"],
            ),
        );
        bank.add(
            Category::Hr,
            Question::new(
                "What are your strengths and weaknesses?",
                ["strength", "weakness", "learning"],
            ),
        );
        bank.add(
            Category::Hr,
            Question::new(
                "Where do you see yourself in 5 years?",
                ["future", "goal", "career"],
            ),
        );

        bank
    }

    /// Add a question to the catalog under `category`.
    pub fn add(&mut self, category: Category, question: Question) {
        match self.catalog.iter_mut().find(|(c, _)| *c == category) {
            Some((_, questions)) => questions.push(question),
            None => self.catalog.push((category, vec![question])),
        }
    }

    /// Questions available for `category`, in catalog order.
    pub fn questions(&self, category: Category) -> &[Question] {
        self.catalog
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, questions)| questions.as_slice())
            .unwrap_or(&[])
    }

    /// Categories present in the catalog, in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.catalog.iter().map(|(category, _)| *category)
    }

    /// Total number of questions across all categories.
    pub fn len(&self) -> usize {
        self.catalog.iter().map(|(_, questions)| questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample `count` distinct questions from `category`, uniformly at
    /// random without replacement.
    ///
    /// Fails with `InsufficientQuestions` when `count` exceeds the catalog
    /// size for the category; the bank never clamps silently.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        category: Category,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Question>, InterviewError> {
        let pool = self.questions(category);
        if count > pool.len() {
            return Err(InterviewError::InsufficientQuestions {
                category,
                requested: count,
                available: pool.len(),
            });
        }

        Ok(index::sample(rng, pool.len(), count)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect())
    }

    /// Build the ordered question list for one session: `tech_count`
    /// technical and `hr_count` HR questions, interleaved round-robin by
    /// index with technical first on each round and the longer sample's
    /// tail appended once the other is exhausted.
    pub fn build_session_list<R: Rng + ?Sized>(
        &self,
        tech_count: usize,
        hr_count: usize,
        rng: &mut R,
    ) -> Result<Vec<CategorizedQuestion>, InterviewError> {
        let tech = self.sample(Category::Technical, tech_count, rng)?;
        let hr = self.sample(Category::Hr, hr_count, rng)?;

        let mut list = Vec::with_capacity(tech.len() + hr.len());
        for i in 0..tech.len().max(hr.len()) {
            if let Some(question) = tech.get(i) {
                list.push(CategorizedQuestion {
                    category: Category::Technical,
                    question: question.clone(),
                });
            }
            if let Some(question) = hr.get(i) {
                list.push(CategorizedQuestion {
                    category: Category::Hr,
                    question: question.clone(),
                });
            }
        }

        Ok(list)
    }
}
