use super::super::domain::SectionId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Tier for an overall score on the 0-100 scale.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::Yes
        } else if score >= 50.0 {
            Self::Maybe
        } else {
            Self::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Maybe => "Maybe",
            Self::No => "No",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Excellent Fit!",
            Self::Maybe => "Potential Fit",
            Self::No => "Consider Alternatives",
        }
    }

    pub const fn narrative(self) -> &'static str {
        match self {
            Self::Yes => "Based on your comprehensive assessment, you show strong alignment with mental health counseling",
            Self::Maybe => "Based on your comprehensive assessment, you show partial alignment with mental health counseling; strengthen the lower-scoring areas before committing",
            Self::No => "Based on your comprehensive assessment, your current profile points toward exploring adjacent helping professions first",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Developing,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Strong
        } else if score >= 60.0 {
            Self::Developing
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Developing => "Developing",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionScoreCard {
    pub section: SectionId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub score: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreView {
    pub dimension: &'static str,
    pub score: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerMatchView {
    pub rank: usize,
    pub title: &'static str,
    pub match_percent: u8,
    pub description: &'static str,
    pub requirements: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningStageView {
    pub stage: usize,
    pub level: &'static str,
    pub courses: Vec<&'static str>,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStepView {
    pub horizon: &'static str,
    pub action: &'static str,
}

/// Flat score line used for CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub section: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub band: &'static str,
}
