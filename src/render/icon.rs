//! Procedural app icon: gradient tile, notebook page, sound-wave glyph.

use image::RgbaImage;

use super::canvas::{
    blur, composite, draw_hline, fill_rounded_rect, paste_masked, rounded_rect_mask,
    vertical_gradient, Rect,
};
use crate::types::{Colour, IconStyle};

/// Wave bar colour alpha.
const BAR_ALPHA: u8 = 240;

/// Number of notebook rules drawn across the page.
const RULES: u32 = 7;

/// Renders the procedural icon at any edge length.
///
/// All proportions scale with the edge length, and nothing is random, so
/// rendering the same size twice yields identical pixels.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    style: IconStyle,
}

/// Placement of the notebook page for a given canvas size.
#[derive(Debug, Clone, Copy)]
struct PageLayout {
    rect: Rect,
    radius: f32,
}

impl PageLayout {
    fn for_size(size: u32) -> Self {
        let s = size as f32;
        let (width, height) = (s * 0.7, s * 0.8);
        Self {
            rect: Rect::from_origin((s - width) / 2.0, (s - height) / 2.0, width, height),
            radius: (size / 20) as f32,
        }
    }
}

/// One vertical bar of the sound-wave glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBar {
    pub x: f32,
    pub amplitude: f32,
    pub width: f32,
    pub colour: Colour,
}

impl IconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Draw the icon on a `size` x `size` canvas.
    pub fn render(&self, size: u32) -> RgbaImage {
        let page = PageLayout::for_size(size);
        let page_mask = rounded_rect_mask(size, size, page.rect, page.radius);

        let mut icon = self.background(size);

        // Shadow goes down first so the page covers most of it.
        composite(&mut icon, &self.page_shadow(size, page));
        paste_masked(&mut icon, &self.page(size, page), &page_mask);

        let wave = self.wave(size, page);
        let mut glow = RgbaImage::new(size, size);
        paste_masked(&mut glow, &blur(&wave, size / 50), &page_mask);
        composite(&mut icon, &glow);
        composite(&mut icon, &wave);

        self.draw_rules(&mut icon, size, page);

        icon
    }

    /// Gradient tile clipped to the outer rounded square.
    fn background(&self, size: u32) -> RgbaImage {
        let s = size as f32;
        let gradient = vertical_gradient(size, size, |y| {
            self.style
                .background_top
                .lerp(self.style.background_bottom, y as f32 / s)
        });

        let mask = rounded_rect_mask(size, size, Rect::new(0.0, 0.0, s, s), (size / 5) as f32);
        let mut tile = RgbaImage::new(size, size);
        paste_masked(&mut tile, &gradient, &mask);
        tile
    }

    fn page(&self, size: u32, page: PageLayout) -> RgbaImage {
        vertical_gradient(size, size, |y| {
            let progress = (y as f32 - page.rect.y0) / page.rect.height();
            self.style.page_top.lerp(self.style.page_bottom, progress)
        })
    }

    fn page_shadow(&self, size: u32, page: PageLayout) -> RgbaImage {
        let offset = (size / 50) as f32;
        let mut shadow = RgbaImage::new(size, size);
        fill_rounded_rect(
            &mut shadow,
            page.rect.offset(offset, offset),
            page.radius,
            Colour::new(0, 0, 0, 50),
        );
        blur(&shadow, size / 100)
    }

    fn wave(&self, size: u32, page: PageLayout) -> RgbaImage {
        let s = size as f32;
        let wave_height = page.rect.height() * 0.5;
        let centre_y = (s - wave_height) / 2.0 + s * 0.05 + wave_height / 2.0;

        let mut layer = RgbaImage::new(size, size);
        for bar in self.wave_bars(size) {
            let half = bar.width / 2.0;
            let rect = Rect::new(
                bar.x - half,
                centre_y - bar.amplitude,
                bar.x + half,
                centre_y + bar.amplitude,
            );
            fill_rounded_rect(&mut layer, rect, half, bar.colour);
        }
        layer
    }

    /// Bar geometry for the sound wave, left to right.
    ///
    /// The centre bar is the tallest and widest; amplitude falls off with
    /// the square of the distance from the centre.
    pub fn wave_bars(&self, size: u32) -> Vec<WaveBar> {
        let s = size as f32;
        let page = PageLayout::for_size(size);
        let wave_width = page.rect.width() * 0.7;
        let wave_x = (s - wave_width) / 2.0;
        let max_amplitude = page.rect.height() * 0.5 * 0.25;

        let bars = self.style.bars.max(2);
        let half_span = (bars - 1) as f32 / 2.0;
        let spacing = wave_width / (bars - 1) as f32;

        (0..bars)
            .map(|i| {
                let distance = (i as f32 - half_span).abs() / half_span;
                let centre_factor = 1.0 - distance;
                let width = ((s * 0.015 * (0.5 + 0.5 * centre_factor)) as u32).max(2);

                WaveBar {
                    x: wave_x + i as f32 * spacing,
                    amplitude: max_amplitude * (1.0 - 0.8 * distance * distance),
                    width: width as f32,
                    colour: self
                        .style
                        .wave_outer
                        .lerp(self.style.wave_center, centre_factor)
                        .with_alpha(BAR_ALPHA),
                }
            })
            .collect()
    }

    fn draw_rules(&self, icon: &mut RgbaImage, size: u32, page: PageLayout) {
        let spacing = page.rect.height() / (RULES + 1) as f32;
        let x0 = page.rect.x0 + page.rect.width() * 0.1;
        let x1 = page.rect.x0 + page.rect.width() * 0.9;
        let thickness = ((size as f32 * 0.002) as u32).max(1);

        for i in 1..=RULES {
            let y = page.rect.y0 + i as f32 * spacing;
            draw_hline(icon, x0, x1, y, thickness, self.style.rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let icon = IconRenderer::default().render(64);
        assert_eq!(icon.dimensions(), (64, 64));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = IconRenderer::default();
        let first = renderer.render(128);
        let second = renderer.render(128);
        assert!(first.as_raw() == second.as_raw());
    }

    #[test]
    fn test_rounded_corners_are_transparent() {
        let icon = IconRenderer::default().render(128);
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(127, 127)[3], 0);
    }

    #[test]
    fn test_background_edge_uses_top_colour() {
        let icon = IconRenderer::default().render(128);
        // Middle of the top edge, outside the page and its shadow.
        let top = icon.get_pixel(64, 0);
        assert_eq!(top.0, [41, 128, 185, 255]);
    }

    #[test]
    fn test_page_is_light() {
        let icon = IconRenderer::default().render(256);
        // Upper-left area of the page, clear of the wave and the rules.
        let p = icon.get_pixel(60, 40);
        assert_eq!(p[3], 255);
        assert!(p[0] > 230 && p[1] > 230 && p[2] > 240, "page pixel {:?}", p);
    }

    #[test]
    fn test_wave_bar_falloff() {
        let bars = IconRenderer::default().wave_bars(1024);
        assert_eq!(bars.len(), 7);

        let centre = bars[3];
        assert!(bars.iter().all(|b| b.amplitude <= centre.amplitude));
        assert!((bars[0].amplitude - centre.amplitude * 0.2).abs() < 1e-3);
        assert_eq!(bars[0].amplitude, bars[6].amplitude);

        // Width: 1024 * 0.015 = 15.36 at the centre, half of that at the edges.
        assert_eq!(centre.width, 15.0);
        assert_eq!(bars[0].width, 7.0);
    }

    #[test]
    fn test_wave_bar_colours() {
        let bars = IconRenderer::default().wave_bars(1024);
        assert_eq!(bars[3].colour, Colour::new(41, 128, 185, 240));
        assert_eq!(bars[0].colour, Colour::new(89, 65, 169, 240));
    }

    #[test]
    fn test_wave_bar_min_width() {
        let bars = IconRenderer::default().wave_bars(32);
        assert!(bars.iter().all(|b| b.width >= 2.0));
    }

    #[test]
    fn test_custom_bar_count() {
        let renderer = IconRenderer::new(IconStyle {
            bars: 5,
            ..Default::default()
        });
        let bars = renderer.wave_bars(512);
        assert_eq!(bars.len(), 5);
        assert!(bars[0].x < bars[4].x);
    }

    fn brightness(icon: &RgbaImage, x: u32, y: u32) -> u32 {
        let p = icon.get_pixel(x, y);
        p[0] as u32 + p[1] as u32 + p[2] as u32
    }

    #[test]
    fn test_notebook_rules_are_drawn() {
        let icon = IconRenderer::default().render(256);

        // Column 60 sits inside the rules' span but left of every wave bar.
        // A rule is a single darker row between two page rows.
        let rule_rows: Vec<u32> = (27..229)
            .filter(|&y| {
                let r = icon.get_pixel(60, y)[0] as i32;
                let above = icon.get_pixel(60, y - 1)[0] as i32;
                let below = icon.get_pixel(60, y + 1)[0] as i32;
                r + 10 < above && r + 10 < below
            })
            .collect();

        assert_eq!(rule_rows.len(), 7, "rule rows: {:?}", rule_rows);
        assert_eq!(rule_rows[0], 51);

        // Rules are tinted towards blue-grey, not just darker.
        let rule = icon.get_pixel(60, 51);
        assert!(rule[2] > rule[0], "rule pixel {:?}", rule);
    }

    #[test]
    fn test_page_shadow_darkens_background() {
        let icon = IconRenderer::default().render(256);

        // Just below the page's bottom edge, inside the offset shadow,
        // versus the same background row left of the shadow.
        let shadowed = icon.get_pixel(215, 233);
        let clear = icon.get_pixel(30, 233);

        assert_eq!(shadowed[3], 255);
        assert_eq!(clear[3], 255);
        assert!(
            brightness(&icon, 215, 233) < brightness(&icon, 30, 233),
            "shadowed {:?} vs clear {:?}",
            shadowed,
            clear
        );
    }

    #[test]
    fn test_wave_glow_extends_past_bars() {
        let renderer = IconRenderer::default();
        let icon = renderer.render(256);

        let centre = renderer.wave_bars(256)[3];
        let glow_x = (centre.x + centre.width / 2.0 + 4.0) as u32;

        // Same row, next to the bar versus well clear of any bar.
        let near = icon.get_pixel(glow_x, 140);
        let far = icon.get_pixel(50, 140);
        assert!(
            (near[0] as i32) + 15 < far[0] as i32,
            "glow {:?} vs plain page {:?}",
            near,
            far
        );
    }
}
