use super::bank::QuestionBank;
use super::domain::{
    AssessmentData, AssessmentError, AssessmentStep, NavigationOutcome, ResponseMapping,
    ResponseValue, SectionData, SectionId,
};
use super::report::{ResultsMode, ResultsReport};
use super::section::SectionController;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Progress marker for one step in the step header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarker {
    Completed,
    Current,
    Reached,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub index: usize,
    pub step: AssessmentStep,
    pub title: &'static str,
    pub marker: StepMarker,
}

/// One user's run through the ordered assessment steps.
///
/// The flow owns the combined section payloads. Only the active step's section
/// controller holds in-progress responses; it is remounted from the combined data
/// whenever the user navigates onto a section step.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    steps: Vec<AssessmentStep>,
    current: usize,
    completed: BTreeSet<usize>,
    data: AssessmentData,
    active: Option<SectionController>,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::standard()
    }
}

impl AssessmentFlow {
    pub fn standard() -> Self {
        let mut flow = Self {
            steps: AssessmentStep::ordered().to_vec(),
            current: 0,
            completed: BTreeSet::new(),
            data: AssessmentData::default(),
            active: None,
        };
        flow.mount_current();
        flow
    }

    /// Rebuilds a flow from saved responses, validating and rescoring every section.
    pub fn restore(
        responses: &BTreeMap<SectionId, ResponseMapping>,
    ) -> Result<Self, AssessmentError> {
        let mut flow = Self::standard();
        for (&section, answers) in responses {
            let controller =
                SectionController::restore(QuestionBank::for_section(section), answers.clone())?;
            flow.data.merge(section, controller.data());
        }
        flow.mount_current();
        Ok(flow)
    }

    pub fn steps(&self) -> &[AssessmentStep] {
        &self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> AssessmentStep {
        self.steps[self.current]
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    /// Label of the forward control: the step before the results reads "View Results".
    pub fn forward_label(&self) -> &'static str {
        if self.current + 2 == self.steps.len() {
            "View Results"
        } else {
            "Next"
        }
    }

    pub fn step_views(&self) -> Vec<StepView> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, &step)| {
                let marker = if self.completed.contains(&index) {
                    StepMarker::Completed
                } else if index == self.current {
                    StepMarker::Current
                } else if index < self.current {
                    StepMarker::Reached
                } else {
                    StepMarker::Upcoming
                };
                StepView {
                    index,
                    step,
                    title: step.title(),
                    marker,
                }
            })
            .collect()
    }

    pub fn data(&self) -> &AssessmentData {
        &self.data
    }

    pub fn active_section(&self) -> Option<&SectionController> {
        self.active.as_ref()
    }

    pub fn active_section_mut(&mut self) -> Option<&mut SectionController> {
        self.active.as_mut()
    }

    /// Marks the current step complete, then moves forward unless already on the last step.
    pub fn advance_step(&mut self) -> NavigationOutcome {
        if self.completed.insert(self.current) {
            info!(step = %self.current_step(), index = self.current, "step completed");
        }

        if self.is_last_step() {
            return NavigationOutcome::AtBoundary;
        }

        let from = self.current;
        self.current += 1;
        self.mount_current();
        debug!(from, to = self.current, "step advanced");
        NavigationOutcome::Moved {
            from,
            to: self.current,
        }
    }

    pub fn retreat_step(&mut self) -> NavigationOutcome {
        if self.current == 0 {
            return NavigationOutcome::AtBoundary;
        }

        let from = self.current;
        self.current -= 1;
        self.mount_current();
        debug!(from, to = self.current, "step retreated");
        NavigationOutcome::Moved {
            from,
            to: self.current,
        }
    }

    /// Shallow merge of one section's payload; other sections keep their entries.
    ///
    /// Responses are validated against the section's bank and rescored, so the
    /// scores carried by `data` are ignored. A rejected payload leaves the flow untouched.
    pub fn merge_section_data(
        &mut self,
        section: SectionId,
        data: SectionData,
    ) -> Result<(), AssessmentError> {
        let controller =
            SectionController::restore(QuestionBank::for_section(section), data.responses)?;
        self.data.merge(section, controller.data());
        if self.current_step().section() == Some(section) {
            self.mount_current();
        }
        Ok(())
    }

    /// Records an answer on the active section and merges the refreshed payload.
    pub fn record_response(
        &mut self,
        question_id: &str,
        value: ResponseValue,
    ) -> Result<SectionData, AssessmentError> {
        let step = self.current_step();
        let controller = self
            .active
            .as_mut()
            .ok_or(AssessmentError::NoActiveSection { step })?;
        let section = controller.section();
        let data = controller.record_response(question_id, value)?;
        self.data.merge(section, data.clone());
        Ok(data)
    }

    /// Records an answer for the question the active section is showing.
    pub fn record_current(&mut self, value: ResponseValue) -> Result<SectionData, AssessmentError> {
        let step = self.current_step();
        let question_id = self
            .active
            .as_ref()
            .and_then(|controller| controller.current_question())
            .map(|question| question.id)
            .ok_or(AssessmentError::NoActiveSection { step })?;
        self.record_response(question_id, value)
    }

    pub fn next_question(&mut self) -> NavigationOutcome {
        self.active
            .as_mut()
            .map_or(NavigationOutcome::AtBoundary, SectionController::advance)
    }

    pub fn previous_question(&mut self) -> NavigationOutcome {
        self.active
            .as_mut()
            .map_or(NavigationOutcome::AtBoundary, SectionController::retreat)
    }

    pub fn answered_percent(&self) -> f64 {
        self.data.answered_percent()
    }

    pub fn results(&self, mode: ResultsMode) -> ResultsReport {
        ResultsReport::build(&self.data, mode)
    }

    fn mount_current(&mut self) {
        self.active = self.current_step().section().map(|section| {
            let responses = self
                .data
                .get(section)
                .map(|data| data.responses.clone())
                .unwrap_or_default();
            SectionController::resume(QuestionBank::for_section(section), responses)
        });
    }
}
