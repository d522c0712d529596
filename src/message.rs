use crate::model::{PatientField, StructureResult};

#[derive(Debug, Clone)]
pub enum Message {
    PatientFieldChanged(PatientField, String),
    SavePatient,
    ChooseFolder,
    FolderSelected(String),
    RunSegmentation,
    SegmentationFinished(Vec<StructureResult>),
    PreviousSlice,
    NextSlice,
    SliceChanged(u16),
    ZoomIn,
    ZoomOut,
    DismissNotification(u64),
}
