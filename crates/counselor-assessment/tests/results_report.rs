mod common;

use common::{approx_eq, completed_flow};
use counselor_assessment::assessment::domain::{AssessmentData, SectionId};
use counselor_assessment::assessment::report::views::{Recommendation, ScoreBand};
use counselor_assessment::assessment::{AssessmentFlow, ResultsMode, ResultsReport};

#[test]
fn static_mode_shows_the_showcase_figures_whatever_was_answered() {
    let empty = ResultsReport::build(&AssessmentData::default(), ResultsMode::Static);
    let answered = completed_flow().results(ResultsMode::Static);

    for report in [&empty, &answered] {
        assert_eq!(report.mode, ResultsMode::Static);
        assert_eq!(report.overall_score, 78.0);
        assert_eq!(report.confidence, 85.0);
        assert_eq!(report.recommendation, Recommendation::Yes);
        assert_eq!(report.headline, "Excellent Fit!");
        assert_eq!(
            report.section_card(SectionId::Psychometric).map(|card| card.score),
            Some(82.0)
        );
        assert_eq!(
            report.section_card(SectionId::Technical).map(|card| card.score),
            Some(74.0)
        );
        assert_eq!(report.dimension("Will"), Some(85.0));
        assert_eq!(report.dimension("Interest"), Some(90.0));
        assert_eq!(report.dimension("Skill"), Some(75.0));
        assert_eq!(report.dimension("Cognitive"), Some(80.0));
        assert_eq!(report.dimension("Ability"), Some(88.0));
        assert_eq!(report.dimension("Real-World"), Some(70.0));
    }
}

#[test]
fn computed_mode_derives_figures_from_section_scores() {
    let report = completed_flow().results(ResultsMode::Computed);

    let psychometric = report
        .section_card(SectionId::Psychometric)
        .expect("psychometric card");
    let technical = report
        .section_card(SectionId::Technical)
        .expect("technical card");
    let wiscar = report.section_card(SectionId::Wiscar).expect("wiscar card");

    assert!(approx_eq(psychometric.score, 87.5));
    assert!(approx_eq(technical.score, 100.0));
    assert!(approx_eq(wiscar.score, 560.0 / 6.0));
    assert!(approx_eq(
        report.overall_score,
        (87.5 + 100.0 + 560.0 / 6.0) / 3.0
    ));
    assert!(approx_eq(report.confidence, 100.0));
    assert_eq!(report.recommendation, Recommendation::Yes);
    assert_eq!(report.recommendation_label, "Yes");

    assert_eq!(report.dimension("Interest"), Some(90.0));
    assert_eq!(report.dimension("Skill"), Some(95.0));
    assert_eq!(report.dimension("Real-World"), Some(87.5));
    assert_eq!(psychometric.band, ScoreBand::Strong);
}

#[test]
fn computed_mode_with_no_answers_reports_zero_and_advises_alternatives() {
    let report = AssessmentFlow::standard().results(ResultsMode::Computed);

    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.confidence, 0.0);
    assert_eq!(report.recommendation, Recommendation::No);
    assert_eq!(report.headline, "Consider Alternatives");
    assert_eq!(report.dimensions.len(), 6);
    assert!(report
        .section_cards
        .iter()
        .all(|card| card.score == 0.0 && card.band == ScoreBand::Low));
}

#[test]
fn recommendation_and_band_thresholds() {
    assert_eq!(Recommendation::from_score(70.0), Recommendation::Yes);
    assert_eq!(Recommendation::from_score(69.9), Recommendation::Maybe);
    assert_eq!(Recommendation::from_score(50.0), Recommendation::Maybe);
    assert_eq!(Recommendation::from_score(49.9), Recommendation::No);

    assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Strong);
    assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Developing);
    assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Low);
}

#[test]
fn career_matches_are_ranked_by_match_percentage() {
    let report = completed_flow().results(ResultsMode::Computed);

    let ranked: Vec<_> = report
        .career_matches
        .iter()
        .map(|career| (career.rank, career.match_percent))
        .collect();
    assert_eq!(ranked, vec![(1, 85), (2, 80), (3, 78), (4, 72)]);
    assert_eq!(
        report.career_matches[0].title,
        "Licensed Mental Health Counselor"
    );
}

#[test]
fn guidance_lists_learning_path_and_next_steps() {
    let report = ResultsReport::build(&AssessmentData::default(), ResultsMode::Computed);

    let levels: Vec<_> = report
        .learning_path
        .iter()
        .map(|stage| (stage.stage, stage.level))
        .collect();
    assert_eq!(levels, vec![(1, "Beginner"), (2, "Intermediate"), (3, "Job-Ready")]);
    assert!(report.learning_path.iter().all(|stage| stage.courses.len() == 3));
    assert_eq!(report.next_steps.len(), 4);
}

#[test]
fn csv_export_lists_overall_section_and_dimension_rows() {
    let report = ResultsReport::build(&AssessmentData::default(), ResultsMode::Static);
    let mut buffer = Vec::new();
    report.write_csv(&mut buffer).expect("csv written");

    let csv = String::from_utf8(buffer).expect("utf8 output");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "section,label,score,band");
    assert_eq!(lines.len(), 1 + 11);
    assert_eq!(lines[1], "overall,Overall Score,78.0,Developing");
    assert!(lines.contains(&"technical,Technical Readiness,74.0,Developing"));
    assert!(lines.contains(&"wiscar,Real-World,70.0,Developing"));
}

#[test]
fn report_serializes_for_json_export() {
    let report = completed_flow().results(ResultsMode::Computed);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["mode"], "computed");
    assert_eq!(json["recommendation"], "yes");
    assert_eq!(json["section_cards"][1]["section"], "technical");
    assert_eq!(json["career_matches"].as_array().map(Vec::len), Some(4));
}
