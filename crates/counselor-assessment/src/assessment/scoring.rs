//! Category and overall scores derived from a section's responses.
//!
//! Self-report sections average normalized answers over the questions that have a
//! response. The knowledge section grades correctness against the full category size,
//! so unanswered questions count as incorrect.

use super::bank::QuestionBank;
use super::domain::{Question, QuestionFormat, ResponseMapping, ResponseValue};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Flat score for an answered, ungraded choice question.
pub const CHOICE_ANSWERED_SCORE: f64 = 75.0;

const LIKERT_POINTS: f64 = 5.0;

/// Aggregation rule applied to a question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule {
    SelfReport,
    Graded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: f64,
}

/// Category scores in bank order plus the synthetic overall entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMapping {
    categories: Vec<CategoryScore>,
    overall_label: &'static str,
    overall: f64,
}

impl ScoreMapping {
    pub fn categories(&self) -> &[CategoryScore] {
        &self.categories
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    pub fn overall_label(&self) -> &'static str {
        self.overall_label
    }

    /// Looks up a category score, or the overall score by its label.
    pub fn get(&self, label: &str) -> Option<f64> {
        if label == self.overall_label {
            return Some(self.overall);
        }
        self.categories
            .iter()
            .find(|entry| entry.category == label)
            .map(|entry| entry.score)
    }
}

impl Serialize for ScoreMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len() + 1))?;
        for entry in &self.categories {
            map.serialize_entry(entry.category, &entry.score)?;
        }
        map.serialize_entry(self.overall_label, &self.overall)?;
        map.end()
    }
}

pub fn likert_score(rating: u16) -> f64 {
    f64::from(rating) / LIKERT_POINTS * 100.0
}

/// Maps one answer onto 0-100. `None` when the value does not fit the format.
pub fn normalized_score(format: &QuestionFormat, value: &ResponseValue) -> Option<f64> {
    match (format, value) {
        (QuestionFormat::Likert, ResponseValue::Rating(rating)) => Some(likert_score(*rating)),
        (QuestionFormat::Scale, ResponseValue::Rating(rating)) => Some(f64::from(*rating)),
        (
            QuestionFormat::Choice { .. } | QuestionFormat::Graded { .. },
            ResponseValue::Choice(_),
        ) => Some(CHOICE_ANSWERED_SCORE),
        _ => None,
    }
}

pub fn is_correct(question: &Question, value: &ResponseValue) -> bool {
    match (question.correct_option(), value) {
        (Some(correct), ResponseValue::Choice(selected)) => selected == correct,
        _ => false,
    }
}

/// Self-report aggregation: per-category mean of answered questions, overall as the
/// equal-weighted mean of the category scores.
pub fn aggregate(responses: &ResponseMapping, bank: &QuestionBank) -> ScoreMapping {
    let categories: Vec<CategoryScore> = bank
        .categories()
        .iter()
        .map(|&category| {
            let answered: Vec<f64> = bank
                .questions_in(category)
                .into_iter()
                .filter_map(|question| {
                    responses
                        .get(question.id)
                        .and_then(|value| normalized_score(&question.format, value))
                })
                .collect();
            CategoryScore {
                category,
                score: mean(&answered),
            }
        })
        .collect();

    let group_scores: Vec<f64> = categories.iter().map(|entry| entry.score).collect();
    let overall = mean(&group_scores);

    ScoreMapping {
        categories,
        overall_label: bank.overall_label(),
        overall,
    }
}

/// Knowledge grading: correct answers over the fixed number of questions per category.
pub fn grade(responses: &ResponseMapping, bank: &QuestionBank) -> ScoreMapping {
    let categories = bank
        .categories()
        .iter()
        .map(|&category| {
            let questions = bank.questions_in(category);
            let correct = questions
                .iter()
                .filter(|question| answered_correctly(responses, question))
                .count();
            CategoryScore {
                category,
                score: percentage(correct, questions.len()),
            }
        })
        .collect();

    let total_correct = bank
        .questions()
        .iter()
        .filter(|question| answered_correctly(responses, question))
        .count();

    ScoreMapping {
        categories,
        overall_label: bank.overall_label(),
        overall: percentage(total_correct, bank.len()),
    }
}

fn answered_correctly(responses: &ResponseMapping, question: &Question) -> bool {
    responses
        .get(question.id)
        .is_some_and(|value| is_correct(question, value))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
