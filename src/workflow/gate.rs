use thiserror::Error;

use super::RunState;
use crate::model::{ImportStatus, PatientRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("Please complete patient information before running segmentation.")]
    MissingPatientInfo,
    #[error("Please import DICOM folder before running segmentation.")]
    MissingImport,
    #[error("A segmentation run is already in progress.")]
    RunInProgress,
}

impl RunError {
    pub fn title(self) -> &'static str {
        match self {
            RunError::MissingPatientInfo => "Patient Information Required",
            RunError::MissingImport => "DICOM Import Required",
            RunError::RunInProgress => "Segmentation Running",
        }
    }
}

/// Every precondition that blocked a run, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("segmentation run rejected: {0:?}")]
pub struct RunRejected(pub Vec<RunError>);

impl RunRejected {
    pub fn errors(&self) -> &[RunError] {
        &self.0
    }
}

pub fn check_preconditions(
    patient: Option<&PatientRecord>,
    import: &ImportStatus,
    state: RunState,
) -> Result<(), RunRejected> {
    if state == RunState::Running {
        return Err(RunRejected(vec![RunError::RunInProgress]));
    }

    let mut errors = Vec::new();
    if patient.is_none() {
        errors.push(RunError::MissingPatientInfo);
    }
    if !import.is_imported() {
        errors.push(RunError::MissingImport);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RunRejected(errors))
    }
}
