//! Core domain types for appicon.
//!
//! - `Colour` - RGBA colour values with hex parsing and interpolation
//! - `IconStyle` - colour stops and bar count for the procedural icon
//! - size constants and the `icon_<size>.png` naming scheme

mod colour;
mod size;
mod style;

pub use colour::Colour;
pub use size::{dedup_sizes, icon_file_name, icon_path, BASE_SIZE, REQUIRED_SIZES};
pub use style::IconStyle;
