//! Icon set export.
//!
//! Two ways to fill an output directory with `icon_<size>.png` files:
//! downsampling a freshly rendered base image, or resizing an existing
//! source image. They differ in failure handling: a rendered set aborts on
//! the first write error, while a resized set skips the failing size and
//! carries on.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;

use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{resize_lanczos, write_png};
use crate::types::icon_path;

/// One icon file written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// A size that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFailure {
    pub size: u32,
    pub error: String,
}

/// Outcome of exporting an icon set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub output: PathBuf,
    pub icons: Vec<ExportedIcon>,
    pub failed: Vec<ExportFailure>,
}

impl ExportReport {
    fn new(output: &Path) -> Self {
        Self {
            output: output.to_path_buf(),
            ..Default::default()
        }
    }

    /// Sizes that were written, in export order.
    pub fn sizes(&self) -> Vec<u32> {
        self.icons.iter().map(|icon| icon.size).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn ensure_output_dir(output: &Path) -> Result<()> {
    if output.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(output).map_err(|e| IconError::Io {
        path: output.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

/// Write `base` and its downsampled copies for every size.
///
/// A size equal to the base edge length writes the base image itself;
/// every other size is Lanczos-resampled from it. Any write error aborts.
pub fn render_icon_set(
    base: &RgbaImage,
    sizes: &[u32],
    output: &Path,
    printer: &Printer,
) -> Result<ExportReport> {
    ensure_output_dir(output)?;
    let mut report = ExportReport::new(output);

    for &size in sizes {
        let path = icon_path(output, size);
        if size == base.width() && size == base.height() {
            write_png(base, &path)?;
        } else {
            write_png(&resize_lanczos(base, size), &path)?;
        }

        printer.status("Created", &format!("{} ({}x{})", display_path(&path), size, size));
        report.icons.push(ExportedIcon { size, path });
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(report.icons.len(), "icon", "icons"),
            display_path(output)
        ),
    );

    Ok(report)
}

/// Open `source` and write a resized copy for every size.
///
/// A source that cannot be opened or decoded is fatal and leaves the
/// output directory untouched. Once the source is loaded, each size is
/// independent: a failure is reported, recorded in the report and skipped.
pub fn resize_icon_set(
    source: &Path,
    sizes: &[u32],
    output: &Path,
    printer: &Printer,
) -> Result<ExportReport> {
    let image = open_source(source)?;
    printer.status(
        "Opened",
        &format!(
            "{} ({}x{})",
            display_path(source),
            image.width(),
            image.height()
        ),
    );

    ensure_output_dir(output)?;
    let mut report = ExportReport::new(output);

    for &size in sizes {
        let path = icon_path(output, size);
        match write_resized(&image, size, &path) {
            Ok(()) => {
                printer.status("Created", &format!("{} ({}x{})", display_path(&path), size, size));
                report.icons.push(ExportedIcon { size, path });
            }
            Err(e) => {
                printer.error("Failed", &format!("{}x{} icon: {}", size, size, e));
                report.failed.push(ExportFailure {
                    size,
                    error: e.to_string(),
                });
            }
        }
    }

    let summary = format!(
        "{} in {}",
        plural(report.icons.len(), "icon", "icons"),
        display_path(output)
    );
    if report.is_complete() {
        printer.success("Finished", &summary);
    } else {
        printer.warning(
            "Finished",
            &format!("{} ({} failed)", summary, report.failed.len()),
        );
    }

    Ok(report)
}

fn open_source(source: &Path) -> Result<RgbaImage> {
    if !source.is_file() {
        return Err(IconError::Decode {
            path: source.to_path_buf(),
            message: "file not found".to_string(),
        });
    }

    image::open(source)
        .map(|img| img.to_rgba8())
        .map_err(|e| IconError::Decode {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
}

fn write_resized(image: &RgbaImage, size: u32, path: &Path) -> Result<()> {
    if size == 0 {
        return Err(IconError::Build {
            message: "cannot resize to 0x0".to_string(),
            help: None,
        });
    }
    write_png(&resize_lanczos(image, size), path)
}
