pub mod card;
pub mod segmented_toggle;

pub use card::{card, danger_text, muted_text, stat_tile, success_marker};
pub use segmented_toggle::sex_toggle;
