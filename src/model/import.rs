use crate::utils::format_bytes;

pub const DEFAULT_MOCK_IMPORT_PATH: &str = "/Users/physician/DICOM/Patient_12345_CT_Chest/";

/// Selected DICOM folder. An empty path means nothing has been imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStatus {
    path: String,
}

impl ImportStatus {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_imported(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Canned statistics shown for every simulated import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub file_count: usize,
    pub total_bytes: u64,
}

impl ImportSummary {
    pub const DEMO: ImportSummary = ImportSummary {
        file_count: 247,
        total_bytes: 5_583_457_485,
    };

    pub fn total_size(&self) -> String {
        format_bytes(self.total_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_not_imported() {
        assert!(!ImportStatus::default().is_imported());
        assert!(!ImportStatus::new("").is_imported());
        assert!(ImportStatus::new(DEFAULT_MOCK_IMPORT_PATH).is_imported());
    }

    #[test]
    fn demo_summary_renders_size() {
        assert_eq!(ImportSummary::DEMO.file_count, 247);
        assert_eq!(ImportSummary::DEMO.total_size(), "5.2 GB");
    }
}
