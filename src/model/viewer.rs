pub const DEFAULT_TOTAL_SLICES: u16 = 247;

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 4.0;
const ZOOM_STEP: f32 = 0.25;

/// Slice cursor and zoom of the mock viewer. Slices are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    current_slice: u16,
    total_slices: u16,
    zoom: f32,
}

impl ViewerState {
    pub fn new(total_slices: u16) -> Self {
        Self {
            current_slice: 1,
            total_slices: total_slices.max(1),
            zoom: 1.0,
        }
    }

    pub fn current_slice(&self) -> u16 {
        self.current_slice
    }

    pub fn total_slices(&self) -> u16 {
        self.total_slices
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn has_previous(&self) -> bool {
        self.current_slice > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_slice < self.total_slices
    }

    /// Returns whether the slice changed.
    pub fn set_slice(&mut self, slice: u16) -> bool {
        let clamped = slice.clamp(1, self.total_slices);
        let changed = clamped != self.current_slice;
        self.current_slice = clamped;
        changed
    }

    pub fn previous(&mut self) -> bool {
        self.set_slice(self.current_slice.saturating_sub(1))
    }

    pub fn next(&mut self) -> bool {
        self.set_slice(self.current_slice.saturating_add(1))
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_SLICES)
    }
}
