use super::super::bank::QuestionBank;
use super::super::domain::{AssessmentData, SectionId};
use super::catalog::{fixed, CAREER_ROLES, LEARNING_PATH, NEXT_STEPS};
use super::views::{
    CareerMatchView, DimensionScoreView, LearningStageView, NextStepView, Recommendation,
    ScoreBand, ScoreRow, SectionScoreCard,
};
use serde::Serialize;
use std::io;
use std::str::FromStr;
use tracing::info;

/// Where the results page takes its numbers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsMode {
    /// Fixed showcase figures, independent of the answers.
    Static,
    /// Figures derived from the aggregated section scores.
    #[default]
    Computed,
}

impl ResultsMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Computed => "computed",
        }
    }
}

impl FromStr for ResultsMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" | "fixed" => Ok(Self::Static),
            "computed" | "live" => Ok(Self::Computed),
            other => Err(format!(
                "unknown results mode '{other}' (expected static or computed)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsReport {
    pub mode: ResultsMode,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub headline: &'static str,
    pub narrative: &'static str,
    pub overall_score: f64,
    pub confidence: f64,
    pub section_cards: Vec<SectionScoreCard>,
    pub dimensions: Vec<DimensionScoreView>,
    pub career_matches: Vec<CareerMatchView>,
    pub learning_path: Vec<LearningStageView>,
    pub next_steps: Vec<NextStepView>,
}

struct Figures {
    overall: f64,
    confidence: f64,
    recommendation: Recommendation,
    sections: [(SectionId, f64); 3],
    dimensions: Vec<(&'static str, f64)>,
}

impl ResultsReport {
    pub fn build(data: &AssessmentData, mode: ResultsMode) -> Self {
        let figures = match mode {
            ResultsMode::Static => fixed_figures(),
            ResultsMode::Computed => computed_figures(data),
        };

        let section_cards = figures
            .sections
            .iter()
            .map(|&(section, score)| {
                let (title, subtitle) = card_titles(section);
                let band = ScoreBand::from_score(score);
                SectionScoreCard {
                    section,
                    title,
                    subtitle,
                    score,
                    band,
                    band_label: band.label(),
                }
            })
            .collect();

        let dimensions = figures
            .dimensions
            .iter()
            .map(|&(dimension, score)| {
                let band = ScoreBand::from_score(score);
                DimensionScoreView {
                    dimension,
                    score,
                    band,
                    band_label: band.label(),
                }
            })
            .collect();

        info!(
            mode = mode.label(),
            overall = figures.overall,
            recommendation = figures.recommendation.label(),
            "results report built"
        );

        Self {
            mode,
            recommendation: figures.recommendation,
            recommendation_label: figures.recommendation.label(),
            headline: figures.recommendation.headline(),
            narrative: figures.recommendation.narrative(),
            overall_score: figures.overall,
            confidence: figures.confidence,
            section_cards,
            dimensions,
            career_matches: career_matches(),
            learning_path: learning_path(),
            next_steps: NEXT_STEPS
                .iter()
                .map(|step| NextStepView {
                    horizon: step.horizon,
                    action: step.action,
                })
                .collect(),
        }
    }

    pub fn section_card(&self, section: SectionId) -> Option<&SectionScoreCard> {
        self.section_cards
            .iter()
            .find(|card| card.section == section)
    }

    pub fn dimension(&self, name: &str) -> Option<f64> {
        self.dimensions
            .iter()
            .find(|view| view.dimension == name)
            .map(|view| view.score)
    }

    pub fn score_rows(&self) -> Vec<ScoreRow> {
        let mut rows = vec![
            score_row("overall", "Overall Score", self.overall_score),
            score_row("overall", "Confidence", self.confidence),
        ];
        rows.extend(
            self.section_cards
                .iter()
                .map(|card| score_row(card.section.as_str(), card.title, card.score)),
        );
        rows.extend(self.dimensions.iter().map(|view| {
            score_row(SectionId::Wiscar.as_str(), view.dimension, view.score)
        }));
        rows
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in self.score_rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn fixed_figures() -> Figures {
    let wiscar = fixed::WISCAR
        .iter()
        .map(|&(_, score)| score)
        .sum::<f64>()
        / fixed::WISCAR.len() as f64;

    Figures {
        overall: fixed::OVERALL,
        confidence: fixed::CONFIDENCE,
        recommendation: fixed::RECOMMENDATION,
        sections: [
            (SectionId::Psychometric, fixed::PSYCHOMETRIC),
            (SectionId::Technical, fixed::TECHNICAL),
            (SectionId::Wiscar, wiscar),
        ],
        dimensions: fixed::WISCAR.to_vec(),
    }
}

fn computed_figures(data: &AssessmentData) -> Figures {
    let section_score = |section: SectionId| {
        data.get(section)
            .map_or(0.0, |section_data| section_data.scores.overall())
    };
    let sections = SectionId::ordered().map(|section| (section, section_score(section)));
    let overall = sections.iter().map(|&(_, score)| score).sum::<f64>() / sections.len() as f64;

    let dimensions = match data.get(SectionId::Wiscar) {
        Some(wiscar) => wiscar
            .scores
            .categories()
            .iter()
            .map(|entry| (entry.category, entry.score))
            .collect(),
        None => QuestionBank::wiscar()
            .categories()
            .iter()
            .map(|&dimension| (dimension, 0.0))
            .collect(),
    };

    Figures {
        overall,
        confidence: data.answered_percent(),
        recommendation: Recommendation::from_score(overall),
        sections,
        dimensions,
    }
}

fn card_titles(section: SectionId) -> (&'static str, &'static str) {
    match section {
        SectionId::Psychometric => ("Psychological Fit", "Personality & Interest"),
        SectionId::Technical => ("Technical Readiness", "Knowledge & Aptitude"),
        SectionId::Wiscar => ("WISCAR Analysis", "Comprehensive Readiness"),
    }
}

/// Career roles ranked by match, highest first.
fn career_matches() -> Vec<CareerMatchView> {
    let mut roles: Vec<_> = CAREER_ROLES.iter().collect();
    roles.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    roles
        .into_iter()
        .enumerate()
        .map(|(index, role)| CareerMatchView {
            rank: index + 1,
            title: role.title,
            match_percent: role.match_percent,
            description: role.description,
            requirements: role.requirements,
        })
        .collect()
}

fn learning_path() -> Vec<LearningStageView> {
    LEARNING_PATH
        .iter()
        .enumerate()
        .map(|(index, stage)| LearningStageView {
            stage: index + 1,
            level: stage.level,
            courses: stage.courses.to_vec(),
            timeframe: stage.timeframe,
        })
        .collect()
}

fn score_row(section: &'static str, label: &'static str, score: f64) -> ScoreRow {
    ScoreRow {
        section,
        label,
        score,
        band: ScoreBand::from_score(score).label(),
    }
}
