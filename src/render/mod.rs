//! Rendering module for appicon.
//!
//! Draws the procedural icon onto an RGBA canvas and writes resampled
//! PNG copies.

pub mod canvas;
mod icon;
mod png;

pub use icon::{IconRenderer, WaveBar};
pub use png::{resize_lanczos, write_png};
