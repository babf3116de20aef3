//! appicon - App icon set generator
//!
//! Renders a procedural app icon, or resizes existing artwork, into the
//! full set of PNG sizes an iOS app icon needs.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{IconError, Result};
pub use export::{render_icon_set, resize_icon_set, ExportFailure, ExportReport, ExportedIcon};
pub use output::Printer;
pub use render::{resize_lanczos, write_png, IconRenderer, WaveBar};
pub use types::{icon_file_name, Colour, IconStyle, BASE_SIZE, REQUIRED_SIZES};
