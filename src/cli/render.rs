//! Render command implementation.
//!
//! Draws the procedural icon once at the base size and exports every
//! required size from it.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::export::{render_icon_set, ExportReport};
use crate::output::Printer;
use crate::render::IconRenderer;

/// Draw the procedural icon and export every required size
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Output directory (default: from appicon.yaml, else app-icon)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Edge length to draw the base icon at
    #[arg(long)]
    pub base_size: Option<u32>,

    /// Config file (default: ./appicon.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report of the written files to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<ExportReport> {
    let mut config = Config::discover(args.config.as_deref(), &std::env::current_dir()?)?;
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(base_size) = args.base_size {
        config.base_size = base_size;
    }
    config.validate()?;

    let size = config.base_size;
    printer.status("Rendering", &format!("{}x{} base icon", size, size));
    let base = IconRenderer::new(config.style.clone()).render(size);

    let report = render_icon_set(&base, &config.effective_sizes(), &config.output, printer)?;

    if args.json {
        super::print_json(&report)?;
    }

    Ok(report)
}
