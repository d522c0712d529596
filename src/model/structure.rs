use crate::utils::format_volume_cc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayColor {
    Tumor,
    Heart,
    Lung,
    Organ,
}

impl OverlayColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            OverlayColor::Tumor => [239, 68, 68],
            OverlayColor::Heart => [236, 72, 153],
            OverlayColor::Lung => [59, 130, 246],
            OverlayColor::Organ => [34, 197, 94],
        }
    }
}

/// Placement of a structure's overlay, as fractions of the slice image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRegion {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayRegion {
    const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Pixel bounds `(x0, y0, x1, y1)` on an image, end-exclusive and clamped.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let scale = |fraction: f32, extent: u32| {
            ((fraction.clamp(0.0, 1.0) * extent as f32).round() as u32).min(extent)
        };
        let x0 = scale(self.left, width);
        let y0 = scale(self.top, height);
        let x1 = scale(self.left + self.width, width).max(x0);
        let y1 = scale(self.top + self.height, height).max(y0);
        (x0, y0, x1, y1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureResult {
    pub name: String,
    pub volume: String,
    pub color: OverlayColor,
    pub region: OverlayRegion,
    pub region_of_interest: bool,
}

impl StructureResult {
    fn new(name: &str, volume_cc: f64, color: OverlayColor, region: OverlayRegion) -> Self {
        Self {
            name: name.to_string(),
            volume: format_volume_cc(volume_cc),
            color,
            region,
            region_of_interest: false,
        }
    }

    fn flagged(mut self) -> Self {
        self.region_of_interest = true;
        self
    }
}

/// The canned output of the simulated segmentation run.
pub fn demo_structures() -> Vec<StructureResult> {
    vec![
        StructureResult::new(
            "Tumor",
            34.2,
            OverlayColor::Tumor,
            OverlayRegion::new(0.25, 0.45, 0.12, 0.08),
        )
        .flagged(),
        StructureResult::new(
            "Heart",
            752.8,
            OverlayColor::Heart,
            OverlayRegion::new(0.35, 0.40, 0.20, 0.25),
        ),
        StructureResult::new(
            "Left Lung",
            1203.5,
            OverlayColor::Lung,
            OverlayRegion::new(0.20, 0.15, 0.25, 0.45),
        ),
        StructureResult::new(
            "Right Lung",
            1156.7,
            OverlayColor::Lung,
            OverlayRegion::new(0.20, 0.60, 0.25, 0.45),
        ),
        StructureResult::new(
            "Spinal Cord",
            45.3,
            OverlayColor::Organ,
            OverlayRegion::new(0.30, 0.48, 0.04, 0.20),
        ),
    ]
}
