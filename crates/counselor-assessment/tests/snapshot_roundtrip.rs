mod common;

use chrono::{TimeZone, Utc};
use common::{completed_flow, strong_answers};
use counselor_assessment::assessment::domain::{
    AssessmentStep, ResponseMapping, ResponseValue, SectionId,
};
use counselor_assessment::assessment::{
    AssessmentFlow, AssessmentSnapshot, QuestionBank, ResultsMode, SectionController,
    SnapshotError,
};
use tempfile::tempdir;

#[test]
fn saved_session_restores_identical_scores() {
    let flow = completed_flow();
    let saved_at = Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
    let snapshot = AssessmentSnapshot::capture(&flow, saved_at);

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("session.json");
    snapshot.write_to(&path).expect("snapshot written");

    let loaded = AssessmentSnapshot::read_from(&path).expect("snapshot read");
    assert_eq!(loaded, snapshot);

    let restored = loaded.restore().expect("responses valid");
    assert_eq!(restored.data(), flow.data());
    assert_eq!(restored.current_step(), AssessmentStep::Psychometric);

    let before = flow.results(ResultsMode::Computed);
    let after = restored.results(ResultsMode::Computed);
    assert_eq!(after.overall_score, before.overall_score);
    assert_eq!(after.confidence, before.confidence);
}

#[test]
fn snapshot_stores_responses_only() {
    let mut flow = AssessmentFlow::standard();
    for (question_id, value) in strong_answers(SectionId::Psychometric) {
        flow.record_response(question_id, value)
            .expect("valid answer");
    }
    let snapshot = AssessmentSnapshot::capture(&flow, Utc::now());

    let json: serde_json::Value =
        serde_json::from_str(&snapshot.to_json().expect("serializes")).expect("valid json");
    let responses = &json["responses"];
    assert_eq!(responses["psychometric"]["interest_1"], 5);
    assert_eq!(
        responses["psychometric"]["motivation_1"],
        "Making a meaningful impact on people's lives"
    );
    assert!(responses.get("technical").is_none());
    assert!(json.get("scores").is_none());
}

#[test]
fn hand_written_snapshot_is_accepted() {
    let raw = r#"{
        "saved_at": "2024-05-01T12:00:00Z",
        "responses": {
            "wiscar": { "will_1": 5, "will_2": 3, "interest_1": 0 }
        }
    }"#;

    let flow = AssessmentSnapshot::from_json(raw)
        .expect("parses")
        .restore()
        .expect("valid responses");
    let wiscar = flow.data().get(SectionId::Wiscar).expect("wiscar restored");

    assert_eq!(wiscar.responses.get("interest_1"), Some(&ResponseValue::Rating(0)));
    assert_eq!(wiscar.scores.get("Will"), Some(80.0));
}

#[test]
fn invalid_saved_answers_are_rejected_on_restore() {
    let raw = r#"{
        "saved_at": "2024-05-01T12:00:00Z",
        "responses": { "technical": { "aptitude_1": "42 hours" } }
    }"#;

    let err = AssessmentSnapshot::from_json(raw)
        .expect("parses")
        .restore()
        .expect_err("option is not listed");
    assert!(matches!(err, SnapshotError::Assessment(_)));
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = AssessmentSnapshot::read_from(dir.path().join("absent.json"))
        .expect_err("file does not exist");

    assert!(matches!(err, SnapshotError::Io(_)));
}

#[test]
fn serialized_responses_reproduce_the_score_mapping() {
    let mut controller = SectionController::new(QuestionBank::wiscar());
    for (question_id, value) in strong_answers(SectionId::Wiscar).into_iter().take(7) {
        controller
            .record_response(question_id, value)
            .expect("valid answer");
    }

    let stored = serde_json::to_string(controller.responses()).expect("responses serialize");
    let reloaded: ResponseMapping = serde_json::from_str(&stored).expect("responses parse");
    let fresh = SectionController::restore(QuestionBank::wiscar(), reloaded).expect("valid");

    assert_eq!(fresh.scores(), controller.scores());
}
