//! Raster primitives for drawing icons.
//!
//! Layers are plain `RgbaImage`s the size of the canvas; masks are
//! `GrayImage`s where 255 means fully inside. Shapes are sampled at pixel
//! centres without anti-aliasing, so output is fully deterministic.

use image::{imageops, GrayImage, Luma, Pixel, RgbaImage};

use crate::types::Colour;

/// An axis-aligned rectangle in canvas coordinates (inclusive edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle from its top-left corner and dimensions.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Whether the point lies inside this rectangle with its corners
    /// rounded to `radius`.
    pub fn contains_rounded(&self, x: f32, y: f32, radius: f32) -> bool {
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }

        let r = radius.min(self.width() / 2.0).min(self.height() / 2.0).max(0.0);

        // Distance to the nearest point of the inner (unrounded) rectangle.
        let qx = x.clamp(self.x0 + r, self.x1 - r);
        let qy = y.clamp(self.y0 + r, self.y1 - r);
        let (dx, dy) = (x - qx, y - qy);
        dx * dx + dy * dy <= r * r
    }
}

/// Build a rounded-rectangle mask covering `rect`.
pub fn rounded_rect_mask(width: u32, height: u32, rect: Rect, radius: f32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let inside = rect.contains_rounded(x as f32 + 0.5, y as f32 + 0.5, radius);
        Luma([if inside { 255 } else { 0 }])
    })
}

/// Overwrite pixels inside a rounded rectangle with `colour`.
pub fn fill_rounded_rect(layer: &mut RgbaImage, rect: Rect, radius: f32, colour: Colour) {
    let rgba = colour.to_rgba();
    for (x, y, pixel) in layer.enumerate_pixels_mut() {
        if rect.contains_rounded(x as f32 + 0.5, y as f32 + 0.5, radius) {
            *pixel = rgba;
        }
    }
}

/// A layer filled row by row with the colour `row_colour(y)` returns.
pub fn vertical_gradient<F>(width: u32, height: u32, row_colour: F) -> RgbaImage
where
    F: Fn(u32) -> Colour,
{
    let mut layer = RgbaImage::new(width, height);
    for y in 0..height {
        let rgba = row_colour(y).to_rgba();
        for x in 0..width {
            layer.put_pixel(x, y, rgba);
        }
    }
    layer
}

/// Paste `src` onto `dst` through `mask`.
///
/// Every channel, alpha included, is interpolated between destination and
/// source by the mask value, so a 255 mask replaces the pixel outright.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, mask: &GrayImage) {
    for (x, y, out) in dst.enumerate_pixels_mut() {
        if x >= src.width() || y >= src.height() || x >= mask.width() || y >= mask.height() {
            continue;
        }

        let m = mask.get_pixel(x, y)[0] as u32;
        if m == 0 {
            continue;
        }

        let from = src.get_pixel(x, y);
        for c in 0..4 {
            let mixed = (from[c] as u32 * m + out[c] as u32 * (255 - m) + 127) / 255;
            out[c] = mixed as u8;
        }
    }
}

/// Alpha-composite `top` over `bottom` in place.
pub fn composite(bottom: &mut RgbaImage, top: &RgbaImage) {
    imageops::overlay(bottom, top, 0, 0);
}

/// Gaussian blur; a radius of zero returns an unchanged copy.
pub fn blur(layer: &RgbaImage, radius: u32) -> RgbaImage {
    if radius == 0 {
        return layer.clone();
    }
    imageops::blur(layer, radius as f32)
}

/// Blend a horizontal line of the given thickness over the layer.
///
/// Rows whose centre lies in `[y - thickness / 2, y + thickness / 2)` are
/// covered, between `x0` and `x1` inclusive.
pub fn draw_hline(layer: &mut RgbaImage, x0: f32, x1: f32, y: f32, thickness: u32, colour: Colour) {
    let half = thickness as f32 / 2.0;
    let rgba = colour.to_rgba();

    for py in 0..layer.height() {
        let cy = py as f32 + 0.5;
        if cy < y - half || cy >= y + half {
            continue;
        }
        for px in 0..layer.width() {
            let cx = px as f32 + 0.5;
            if cx >= x0 && cx <= x1 {
                layer.get_pixel_mut(px, py).blend(&rgba);
            }
        }
    }
}
