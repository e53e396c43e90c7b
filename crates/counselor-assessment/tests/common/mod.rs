#![allow(dead_code)]

use counselor_assessment::assessment::domain::{
    AssessmentStep, QuestionFormat, ResponseValue, SectionId,
};
use counselor_assessment::assessment::{AssessmentFlow, QuestionBank};

pub fn option(section: SectionId, question_id: &str, index: usize) -> ResponseValue {
    QuestionBank::for_section(section)
        .question(question_id)
        .and_then(|question| question.choice(index))
        .expect("question has the requested option")
}

/// Top marks everywhere: likert 5, first choice, every graded question correct.
pub fn strong_answers(section: SectionId) -> Vec<(&'static str, ResponseValue)> {
    QuestionBank::for_section(section)
        .questions()
        .iter()
        .map(|question| {
            let value = match &question.format {
                QuestionFormat::Likert => ResponseValue::Rating(5),
                QuestionFormat::Scale if question.id == "interest_1" => ResponseValue::Rating(80),
                QuestionFormat::Scale => ResponseValue::Rating(90),
                QuestionFormat::Choice { .. } => question.choice(0).expect("first option"),
                QuestionFormat::Graded { .. } => ResponseValue::Choice(
                    question
                        .correct_option()
                        .expect("graded question has a correct option")
                        .to_string(),
                ),
            };
            (question.id, value)
        })
        .collect()
}

/// Answers every section step and lands on the results step.
pub fn completed_flow() -> AssessmentFlow {
    let mut flow = AssessmentFlow::standard();
    while let Some(section) = flow.current_step().section() {
        for (question_id, value) in strong_answers(section) {
            flow.record_response(question_id, value)
                .expect("strong answer is valid");
        }
        flow.advance_step();
    }
    assert_eq!(flow.current_step(), AssessmentStep::Results);
    flow
}

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
