pub mod import;
pub mod notification;
pub mod patient;
pub mod structure;
pub mod viewer;

pub use import::{ImportStatus, ImportSummary, DEFAULT_MOCK_IMPORT_PATH};
pub use notification::{NotificationKind, Notifications};
pub use patient::{FieldErrors, PatientField, PatientForm, PatientFormState, PatientRecord, Sex};
pub use structure::{demo_structures, OverlayColor, StructureResult};
pub use viewer::{ViewerState, DEFAULT_TOTAL_SLICES};
