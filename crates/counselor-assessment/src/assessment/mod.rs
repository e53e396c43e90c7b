mod bank;
pub mod domain;
mod flow;
pub mod report;
pub mod scoring;
mod section;
mod snapshot;

pub use bank::QuestionBank;
pub use flow::{AssessmentFlow, StepMarker, StepView};
pub use report::{ResultsMode, ResultsReport};
pub use section::{Feedback, SectionController};
pub use snapshot::{AssessmentSnapshot, SnapshotError};
