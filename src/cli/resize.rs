//! Resize command implementation.
//!
//! Turns an existing artwork file into the full icon set.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::export::{resize_icon_set, ExportReport};
use crate::output::Printer;

/// Resize an existing image into every required size
#[derive(Args, Debug, Default)]
pub struct ResizeArgs {
    /// Source image (default: `source` from appicon.yaml)
    pub source: Option<PathBuf>,

    /// Output directory (default: from appicon.yaml, else app-icon)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file (default: ./appicon.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report of the written files to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ResizeArgs, printer: &Printer) -> Result<ExportReport> {
    let mut config = Config::discover(args.config.as_deref(), &std::env::current_dir()?)?;
    if let Some(output) = args.output {
        config.output = output;
    }

    let source = args.source.or(config.source.take()).ok_or_else(|| IconError::Build {
        message: "No source image given".to_string(),
        help: Some(format!(
            "Pass a path, e.g. `appicon resize artwork.png`, or set `source` in {}",
            CONFIG_FILENAME
        )),
    })?;

    let report = resize_icon_set(&source, &config.effective_sizes(), &config.output, printer)?;

    if args.json {
        super::print_json(&report)?;
    }

    Ok(report)
}
