pub mod formatting;

pub use formatting::{format_bytes, format_volume_cc, pluralize};
