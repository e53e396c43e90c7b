use super::domain::{AssessmentError, ResponseMapping, SectionId};
use super::flow::AssessmentFlow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Saved responses of a session. Scores are never stored; they are recomputed on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub saved_at: DateTime<Utc>,
    pub responses: BTreeMap<SectionId, ResponseMapping>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot contains an invalid response: {0}")]
    Assessment(#[from] AssessmentError),
}

impl AssessmentSnapshot {
    pub fn capture(flow: &AssessmentFlow, saved_at: DateTime<Utc>) -> Self {
        let responses = flow
            .data()
            .sections()
            .map(|(section, data)| (section, data.responses.clone()))
            .collect();

        Self {
            saved_at,
            responses,
        }
    }

    /// Rebuilds a fresh flow from the saved responses.
    pub fn restore(&self) -> Result<AssessmentFlow, SnapshotError> {
        Ok(AssessmentFlow::restore(&self.responses)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "assessment snapshot saved");
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
