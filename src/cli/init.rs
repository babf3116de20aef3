//! Init command implementation.
//!
//! Writes an `appicon.yaml` with every default spelled out, picking up a
//! source image from the directory when there is an obvious candidate.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// Image extensions considered when looking for a source image.
const SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Write a default appicon.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing appicon.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(IconError::Build {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut config = Config::default();
    if let Some(source) = find_source_image(&args.path)? {
        printer.info("Discovered", &display_path(&source));
        config.source = source.strip_prefix(&args.path).ok().map(Path::to_path_buf);
    }

    fs::write(&config_path, config.to_yaml()?).map_err(|e| IconError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}

/// First image in `dir` (by name) that is not itself a generated icon.
fn find_source_image(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| IconError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to read directory: {}", e),
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_source_candidate(path))
        .collect();
    candidates.sort();

    Ok(candidates.into_iter().next())
}

fn is_source_candidate(path: &Path) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    let generated = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("icon_"))
        .unwrap_or(false);

    ext_ok && !generated
}
