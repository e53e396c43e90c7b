use super::bank::QuestionBank;
use super::scoring::ScoreMapping;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Question-driven sections of the assessment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionId {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Personality & Interest",
            Self::Technical => "Technical & Aptitude",
            Self::Wiscar => "WISCAR",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "psychometric" => Ok(Self::Psychometric),
            "technical" => Ok(Self::Technical),
            "wiscar" => Ok(Self::Wiscar),
            other => Err(format!(
                "unknown section '{other}' (expected psychometric, technical or wiscar)"
            )),
        }
    }
}

/// Ordered steps of the assessment flow, ending with the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl AssessmentStep {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Psychometric,
            Self::Technical,
            Self::Wiscar,
            Self::Results,
        ]
    }

    pub const fn section(self) -> Option<SectionId> {
        match self {
            Self::Psychometric => Some(SectionId::Psychometric),
            Self::Technical => Some(SectionId::Technical),
            Self::Wiscar => Some(SectionId::Wiscar),
            Self::Results => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Psychometric => "Personality & Interest Assessment",
            Self::Technical => "Technical & Aptitude Evaluation",
            Self::Wiscar => "WISCAR Framework Analysis",
            Self::Results => "Results & Recommendations",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Psychometric => "Evaluate your psychological fit for mental health counseling",
            Self::Technical => "Test your foundational knowledge and cognitive abilities",
            Self::Wiscar => "Comprehensive readiness assessment across 6 key dimensions",
            Self::Results => "Your personalized career guidance and next steps",
        }
    }

    pub const fn estimated_time(self) -> &'static str {
        match self {
            Self::Psychometric => "8-10 min",
            Self::Technical => "10-12 min",
            Self::Wiscar => "5-8 min",
            Self::Results => "Review",
        }
    }
}

impl fmt::Display for AssessmentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Presentation variant of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceStyle {
    Binary,
    MultipleChoice,
    TrueFalse,
}

impl ChoiceStyle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
        }
    }
}

/// Answer format of a question; choice data only exists on the variants that need it.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionFormat {
    /// 1-5 ordinal agreement.
    Likert,
    /// 0-100 slider.
    Scale,
    /// Self-report selection, not graded.
    Choice {
        style: ChoiceStyle,
        options: Vec<&'static str>,
    },
    /// Knowledge item with an objectively correct option.
    Graded {
        style: ChoiceStyle,
        options: Vec<&'static str>,
        correct: usize,
        explanation: &'static str,
    },
}

impl QuestionFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::Scale => "scale",
            Self::Choice { style, .. } | Self::Graded { style, .. } => style.label(),
        }
    }

    pub fn options(&self) -> &[&'static str] {
        match self {
            Self::Likert | Self::Scale => &[],
            Self::Choice { options, .. } | Self::Graded { options, .. } => options,
        }
    }
}

/// Display labels for the five likert points, lowest first.
pub const LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: &'static str,
    pub format: QuestionFormat,
}

impl Question {
    /// Builds the choice response for the option at `index`.
    pub fn choice(&self, index: usize) -> Option<ResponseValue> {
        self.format
            .options()
            .get(index)
            .map(|option| ResponseValue::Choice((*option).to_string()))
    }

    pub fn correct_option(&self) -> Option<&'static str> {
        match &self.format {
            QuestionFormat::Graded {
                options, correct, ..
            } => options.get(*correct).copied(),
            _ => None,
        }
    }

    pub fn validate(&self, value: &ResponseValue) -> Result<(), AssessmentError> {
        let expected = match (&self.format, value) {
            (QuestionFormat::Likert, ResponseValue::Rating(rating)) if (1..=5).contains(rating) => {
                return Ok(())
            }
            (QuestionFormat::Likert, _) => "an integer rating between 1 and 5",
            (QuestionFormat::Scale, ResponseValue::Rating(rating)) if *rating <= 100 => {
                return Ok(())
            }
            (QuestionFormat::Scale, _) => "an integer between 0 and 100",
            (
                QuestionFormat::Choice { options, .. } | QuestionFormat::Graded { options, .. },
                ResponseValue::Choice(selected),
            ) if options.iter().any(|option| option == selected) => return Ok(()),
            (QuestionFormat::Choice { .. } | QuestionFormat::Graded { .. }, _) => {
                "one of the listed options"
            }
        };

        Err(AssessmentError::InvalidResponseValue {
            question_id: self.id.to_string(),
            value: value.clone(),
            expected,
        })
    }
}

/// A recorded answer: a likert/scale rating or the literal selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Rating(u16),
    Choice(String),
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Rating(value) => write!(f, "{value}"),
            ResponseValue::Choice(option) => write!(f, "\"{option}\""),
        }
    }
}

/// Question id to answer.
pub type ResponseMapping = BTreeMap<String, ResponseValue>;

/// Payload a section reports upward after every response edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionData {
    pub responses: ResponseMapping,
    pub scores: ScoreMapping,
}

/// Combined per-section payloads owned by the flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychometric: Option<SectionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<SectionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiscar: Option<SectionData>,
}

impl AssessmentData {
    /// Replaces one section's entry; the other sections are untouched.
    pub fn merge(&mut self, section: SectionId, data: SectionData) {
        *self.slot_mut(section) = Some(data);
    }

    pub fn get(&self, section: SectionId) -> Option<&SectionData> {
        match section {
            SectionId::Psychometric => self.psychometric.as_ref(),
            SectionId::Technical => self.technical.as_ref(),
            SectionId::Wiscar => self.wiscar.as_ref(),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &SectionData)> + '_ {
        SectionId::ordered()
            .into_iter()
            .filter_map(move |section| self.get(section).map(|data| (section, data)))
    }

    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }

    /// Share of all section questions that have an answer, as a percentage.
    pub fn answered_percent(&self) -> f64 {
        let (answered, total) =
            SectionId::ordered()
                .into_iter()
                .fold((0usize, 0usize), |(answered, total), section| {
                    let count = self.get(section).map_or(0, |data| data.responses.len());
                    (
                        answered + count,
                        total + QuestionBank::for_section(section).len(),
                    )
                });
        if total == 0 {
            return 0.0;
        }
        answered as f64 / total as f64 * 100.0
    }

    fn slot_mut(&mut self, section: SectionId) -> &mut Option<SectionData> {
        match section {
            SectionId::Psychometric => &mut self.psychometric,
            SectionId::Technical => &mut self.technical,
            SectionId::Wiscar => &mut self.wiscar,
        }
    }
}

/// Result of a navigation request. Boundaries are reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved { from: usize, to: usize },
    AtBoundary,
    AwaitingResponse,
}

impl NavigationOutcome {
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("question `{question_id}` is not part of the {section} question bank")]
    InvalidQuestionId {
        section: SectionId,
        question_id: String,
    },
    #[error("response {value} for question `{question_id}` is invalid: expected {expected}")]
    InvalidResponseValue {
        question_id: String,
        value: ResponseValue,
        expected: &'static str,
    },
    #[error("the {step} step does not accept responses")]
    NoActiveSection { step: AssessmentStep },
    #[error("the {section} section has no question to answer")]
    NoCurrentQuestion { section: SectionId },
}
