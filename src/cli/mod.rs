pub mod completions;
pub mod init;
pub mod render;
pub mod resize;

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::{IconError, Result};
use crate::export::ExportReport;

/// appicon - App icon set generator
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the procedural icon and export every required size
    Render(render::RenderArgs),

    /// Resize an existing image into every required size
    Resize(resize::ResizeArgs),

    /// Write a default appicon.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Print an export report as pretty JSON on stdout.
fn print_json(report: &ExportReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| IconError::Build {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })?;
    writeln!(std::io::stdout().lock(), "{}", json)?;
    Ok(())
}
