use clap::ValueEnum;
use counselor_assessment::assessment::domain::{
    Question, QuestionFormat, ResponseValue, SectionId, LIKERT_LABELS,
};
use counselor_assessment::assessment::{AssessmentFlow, QuestionBank, ResultsReport, StepMarker};
use counselor_assessment::error::AppError;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub(crate) fn render_report(
    report: &ResultsReport,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => render_text_report(report, out)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => report.write_csv(&mut *out)?,
    }
    Ok(())
}

fn render_text_report(report: &ResultsReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\nAssessment Results ({} mode)", report.mode.label())?;
    writeln!(out, "{}", report.headline)?;
    writeln!(out, "{}", report.narrative)?;
    writeln!(
        out,
        "Should you pursue mental health counseling? {} | Overall score {:.0}% | Confidence {:.0}%",
        report.recommendation_label, report.overall_score, report.confidence
    )?;

    writeln!(out, "\nSection scores")?;
    for card in &report.section_cards {
        writeln!(
            out,
            "- {} ({}): {:.0}% [{}]",
            card.title, card.subtitle, card.score, card.band_label
        )?;
    }

    writeln!(out, "\nWISCAR dimensions")?;
    for view in &report.dimensions {
        writeln!(
            out,
            "- {:<11} {:>3.0}% {} [{}]",
            view.dimension,
            view.score,
            meter(view.score),
            view.band_label
        )?;
    }

    writeln!(out, "\nCareer matches")?;
    for career in &report.career_matches {
        writeln!(
            out,
            "{}. {} ({}% match)",
            career.rank, career.title, career.match_percent
        )?;
        writeln!(out, "   {}", career.description)?;
        writeln!(out, "   Requirements: {}", career.requirements)?;
    }

    writeln!(out, "\nLearning path")?;
    for stage in &report.learning_path {
        writeln!(
            out,
            "{}. {} ({})",
            stage.stage, stage.level, stage.timeframe
        )?;
        for course in &stage.courses {
            writeln!(out, "   - {course}")?;
        }
    }

    writeln!(out, "\nNext steps")?;
    for step in &report.next_steps {
        writeln!(out, "- {}: {}", step.horizon, step.action)?;
    }
    Ok(())
}

/// Ten-cell bar for a 0-100 score.
fn meter(score: f64) -> String {
    let filled = (score.clamp(0.0, 100.0) / 10.0).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

pub(crate) fn render_step_header(
    flow: &AssessmentFlow,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let step = flow.current_step();
    let markers: Vec<String> = flow
        .step_views()
        .iter()
        .map(|view| {
            let symbol = match view.marker {
                StepMarker::Completed => "x",
                StepMarker::Current => ">",
                StepMarker::Reached => "-",
                StepMarker::Upcoming => " ",
            };
            format!("[{symbol}] {}", view.title)
        })
        .collect();

    writeln!(out, "\n{}", markers.join("  "))?;
    writeln!(
        out,
        "Step {} of {} ({:.0}% through)",
        flow.current_step_index() + 1,
        flow.total_steps(),
        flow.progress_percent()
    )?;
    writeln!(out, "\n{}", step.title())?;
    writeln!(out, "{} | {}", step.description(), step.estimated_time())?;
    writeln!(
        out,
        "Type an answer, `back` to revisit, or `quit` to stop. Finishing this step: {}.",
        flow.forward_label()
    )?;
    Ok(())
}

pub(crate) fn render_question(
    question: &Question,
    (index, total): (usize, usize),
    current: Option<&ResponseValue>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    writeln!(
        out,
        "\nQuestion {} of {} [{}]",
        index + 1,
        total,
        question.category
    )?;
    writeln!(out, "{}", question.text)?;
    render_answer_format(&question.format, out)?;
    if let Some(value) = current {
        writeln!(out, "Current answer: {value} (press Enter to keep it)")?;
    }
    Ok(())
}

fn render_answer_format(format: &QuestionFormat, out: &mut impl Write) -> std::io::Result<()> {
    match format {
        QuestionFormat::Likert => {
            for (index, label) in LIKERT_LABELS.iter().enumerate() {
                writeln!(out, "  {}) {label}", index + 1)?;
            }
        }
        QuestionFormat::Scale => writeln!(out, "  Enter a value from 0 to 100")?,
        QuestionFormat::Choice { options, .. } | QuestionFormat::Graded { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                writeln!(out, "  {}) {option}", index + 1)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn render_question_banks(
    section: Option<SectionId>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let sections = match section {
        Some(section) => vec![section],
        None => SectionId::ordered().to_vec(),
    };

    for section in sections {
        let bank = QuestionBank::for_section(section);
        writeln!(out, "\n{} ({} questions)", section.label(), bank.len())?;
        for category in bank.categories() {
            writeln!(out, "{category}")?;
            for question in bank.questions_in(category) {
                writeln!(
                    out,
                    "  - {} [{}] {}",
                    question.id,
                    question.format.label(),
                    question.text
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use counselor_assessment::assessment::domain::AssessmentData;
    use counselor_assessment::assessment::ResultsMode;

    fn rendered(format: ReportFormat) -> String {
        let report = ResultsReport::build(&AssessmentData::default(), ResultsMode::Static);
        let mut out = Vec::new();
        render_report(&report, format, &mut out).expect("report renders");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn text_report_lists_every_panel() {
        let text = rendered(ReportFormat::Text);

        assert!(text.contains("Excellent Fit!"));
        assert!(text.contains("Overall score 78% | Confidence 85%"));
        assert!(text.contains("- Technical Readiness (Knowledge & Aptitude): 74% [Developing]"));
        assert!(text.contains("1. Licensed Mental Health Counselor (85% match)"));
        assert!(text.contains("3. Job-Ready (12-24 months)"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let json: serde_json::Value =
            serde_json::from_str(&rendered(ReportFormat::Json)).expect("valid json");

        assert_eq!(json["overall_score"], 78.0);
        assert_eq!(json["dimensions"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn csv_report_starts_with_header() {
        let csv = rendered(ReportFormat::Csv);

        assert_eq!(csv.lines().next(), Some("section,label,score,band"));
    }

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(0.0), "..........");
        assert_eq!(meter(75.0), "########..");
        assert_eq!(meter(100.0), "##########");
    }

    #[test]
    fn question_listing_can_be_filtered_by_section() {
        let mut out = Vec::new();
        render_question_banks(Some(SectionId::Technical), &mut out).expect("listing renders");
        let listing = String::from_utf8(out).expect("utf8 output");

        assert!(listing.contains("Technical & Aptitude (6 questions)"));
        assert!(listing.contains("knowledge_2 [true-false]"));
        assert!(!listing.contains("will_1"));
    }
}
