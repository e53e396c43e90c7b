use super::bank::QuestionBank;
use super::domain::{
    AssessmentError, NavigationOutcome, Question, QuestionFormat, ResponseMapping, ResponseValue,
    SectionData, SectionId,
};
use super::scoring::{self, ScoreMapping};
use tracing::{debug, warn};

/// Correctness feedback shown once a graded question has an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub correct_option: &'static str,
    pub explanation: &'static str,
}

/// Walks one section's question bank and owns its in-progress responses.
#[derive(Debug, Clone)]
pub struct SectionController {
    bank: QuestionBank,
    responses: ResponseMapping,
    scores: ScoreMapping,
    current: usize,
}

impl SectionController {
    pub fn new(bank: QuestionBank) -> Self {
        Self::resume(bank, ResponseMapping::new())
    }

    /// Mounts a section with previously collected answers, validating each one.
    pub fn restore(bank: QuestionBank, responses: ResponseMapping) -> Result<Self, AssessmentError> {
        for (question_id, value) in &responses {
            let question = bank
                .question(question_id)
                .ok_or_else(|| AssessmentError::InvalidQuestionId {
                    section: bank.section(),
                    question_id: question_id.clone(),
                })?;
            question.validate(value)?;
        }

        Ok(Self::resume(bank, responses))
    }

    /// Mounts with answers this crate already validated.
    pub(crate) fn resume(bank: QuestionBank, responses: ResponseMapping) -> Self {
        let scores = bank.score(&responses);
        Self {
            bank,
            responses,
            scores,
            current: 0,
        }
    }

    pub fn section(&self) -> SectionId {
        self.bank.section()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn responses(&self) -> &ResponseMapping {
        &self.responses
    }

    pub fn scores(&self) -> &ScoreMapping {
        &self.scores
    }

    pub fn data(&self) -> SectionData {
        SectionData {
            responses: self.responses.clone(),
            scores: self.scores.clone(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.questions().get(self.current)
    }

    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    pub fn response(&self, question_id: &str) -> Option<&ResponseValue> {
        self.responses.get(question_id)
    }

    pub fn current_answered(&self) -> bool {
        self.current_question()
            .is_some_and(|question| self.responses.contains_key(question.id))
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == self.bank.len()
    }

    /// Upserts an answer and recomputes the section scores from scratch.
    pub fn record_response(
        &mut self,
        question_id: &str,
        value: ResponseValue,
    ) -> Result<SectionData, AssessmentError> {
        let section = self.section();
        let question = self.bank.question(question_id).ok_or_else(|| {
            warn!(%section, question_id, "response rejected for unknown question");
            AssessmentError::InvalidQuestionId {
                section,
                question_id: question_id.to_string(),
            }
        })?;

        if let Err(err) = question.validate(&value) {
            warn!(%section, question_id, %value, "response rejected: {err}");
            return Err(err);
        }

        let category = question.category;
        self.responses.insert(question_id.to_string(), value);
        self.scores = self.bank.score(&self.responses);

        debug!(
            %section,
            question_id,
            category,
            category_score = self.scores.get(category).unwrap_or_default(),
            overall = self.scores.overall(),
            "response recorded"
        );

        Ok(self.data())
    }

    /// Records an answer for the question currently shown.
    pub fn record_current(&mut self, value: ResponseValue) -> Result<SectionData, AssessmentError> {
        let question_id = self
            .current_question()
            .map(|question| question.id)
            .ok_or(AssessmentError::NoCurrentQuestion {
                section: self.section(),
            })?;
        self.record_response(question_id, value)
    }

    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.bank.len() && self.current_answered()
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    /// Moves to the next question once the current one has an answer.
    pub fn advance(&mut self) -> NavigationOutcome {
        if self.current + 1 >= self.bank.len() {
            return NavigationOutcome::AtBoundary;
        }
        if !self.current_answered() {
            return NavigationOutcome::AwaitingResponse;
        }

        let from = self.current;
        self.current += 1;
        debug!(section = %self.section(), from, to = self.current, "question advanced");
        NavigationOutcome::Moved {
            from,
            to: self.current,
        }
    }

    pub fn retreat(&mut self) -> NavigationOutcome {
        if self.current == 0 {
            return NavigationOutcome::AtBoundary;
        }

        let from = self.current;
        self.current -= 1;
        debug!(section = %self.section(), from, to = self.current, "question retreated");
        NavigationOutcome::Moved {
            from,
            to: self.current,
        }
    }

    /// Feedback for the current question; `None` until a graded question is answered.
    pub fn feedback(&self) -> Option<Feedback> {
        let question = self.current_question()?;
        let value = self.responses.get(question.id)?;
        let QuestionFormat::Graded { explanation, .. } = &question.format else {
            return None;
        };

        Some(Feedback {
            correct: scoring::is_correct(question, value),
            correct_option: question.correct_option()?,
            explanation: *explanation,
        })
    }
}
