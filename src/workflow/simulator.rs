use std::time::Duration;

use crate::model::{demo_structures, StructureResult};

/// Stand-in for the segmentation backend: waits `delay`, then hands back the
/// structures it was built with.
#[derive(Debug, Clone)]
pub struct SimulatedSegmentation {
    delay: Duration,
    structures: Vec<StructureResult>,
}

impl SimulatedSegmentation {
    pub fn new(delay: Duration, structures: Vec<StructureResult>) -> Self {
        Self { delay, structures }
    }

    pub fn demo(delay: Duration) -> Self {
        Self::new(delay, demo_structures())
    }

    pub async fn run(self) -> Vec<StructureResult> {
        log::info!("Simulated segmentation started ({} ms)", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        log::info!(
            "Simulated segmentation produced {} structures",
            self.structures.len()
        );
        self.structures
    }
}

/// Stand-in for a folder picker. No filesystem access takes place.
#[derive(Debug, Clone)]
pub struct SimulatedImport {
    delay: Duration,
    path: String,
}

impl SimulatedImport {
    pub fn new(delay: Duration, path: impl Into<String>) -> Self {
        Self {
            delay,
            path: path.into(),
        }
    }

    pub async fn choose_folder(self) -> String {
        tokio::time::sleep(self.delay).await;
        log::info!("Simulated DICOM folder selected: {}", self.path);
        self.path
    }
}
