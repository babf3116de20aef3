//! PNG output and Lanczos resampling.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::error::{IconError, Result};

/// Write an image as PNG.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Resample an image to `size` x `size` with a Lanczos3 filter.
///
/// Colour is filtered premultiplied by alpha, so fully transparent pixels
/// do not darken the edges of what remains visible. The aspect ratio is not
/// preserved: non-square sources are stretched.
pub fn resize_lanczos(img: &RgbaImage, size: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });

    let resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);

    RgbaImage::from_fn(size, size, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        let alpha = (a * 255.0).round() as u8;
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let unpremultiply = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([unpremultiply(r), unpremultiply(g), unpremultiply(b), alpha])
    })
}
