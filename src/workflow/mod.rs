pub mod gate;
pub mod simulator;

pub use gate::{RunError, RunRejected};
pub use simulator::{SimulatedImport, SimulatedSegmentation};

use crate::model::{FieldErrors, ImportStatus, PatientForm, PatientRecord, StructureResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Owns the patient, the import and the run lifecycle.
///
/// `results` is non-empty exactly when `run_state` is [`RunState::Complete`],
/// and a run only enters [`RunState::Running`] through [`Workflow::start_run`].
#[derive(Debug, Default)]
pub struct Workflow {
    patient: Option<PatientRecord>,
    import: ImportStatus,
    run_state: RunState,
    results: Vec<StructureResult>,
}

impl Workflow {
    pub fn patient(&self) -> Option<&PatientRecord> {
        self.patient.as_ref()
    }

    pub fn import(&self) -> &ImportStatus {
        &self.import
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn results(&self) -> &[StructureResult] {
        &self.results
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn can_run(&self) -> bool {
        gate::check_preconditions(self.patient.as_ref(), &self.import, self.run_state).is_ok()
    }

    /// Validates the form and, on success, replaces the stored patient outright.
    /// A rejected form leaves the previous patient in place.
    pub fn submit_patient(&mut self, form: &PatientForm) -> Result<&PatientRecord, FieldErrors> {
        let record = form.validate()?;
        log::info!("Patient record saved for {}", record.identifier);
        Ok(&*self.patient.insert(record))
    }

    /// Records the selected DICOM folder. Blank paths, and any change while a
    /// run is in flight, are ignored and reported as `false`.
    pub fn set_import(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.is_running() {
            log::warn!("Ignoring DICOM import of {path}: segmentation in progress");
            return false;
        }
        if path.trim().is_empty() {
            log::warn!("Ignoring DICOM import with an empty folder path");
            return false;
        }

        self.import = ImportStatus::new(path);
        log::info!("DICOM import set to {}", self.import.path());
        true
    }

    pub fn start_run(&mut self) -> Result<(), RunRejected> {
        if let Err(rejected) =
            gate::check_preconditions(self.patient.as_ref(), &self.import, self.run_state)
        {
            log::warn!("Segmentation not started: {:?}", rejected.errors());
            return Err(rejected);
        }

        self.results.clear();
        self.run_state = RunState::Running;
        log::info!("Segmentation run started");
        Ok(())
    }

    /// Finishes the in-flight run. Ignored (returns `false`) when no run is in
    /// flight or the result set is empty.
    pub fn complete_run(&mut self, results: Vec<StructureResult>) -> bool {
        if self.run_state != RunState::Running {
            log::warn!("Dropping segmentation results: no run in flight");
            return false;
        }
        if results.is_empty() {
            log::warn!("Dropping empty segmentation result set");
            return false;
        }

        self.results = results;
        self.run_state = RunState::Complete;
        log::info!(
            "Segmentation run complete with {} structures",
            self.results.len()
        );
        true
    }
}
