use std::path::{Path, PathBuf};

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::color::Color;
use crate::error::OverlayError;
use crate::surface::{Rect, Surface};

// ============================================================================
// FRAME BUFFER
// ============================================================================

/// Off-screen RGBA8 surface with per-pixel straight alpha.
///
/// Cleared to fully transparent at the start of every frame, drawn into by
/// the layers, then handed to the window as one composite.
pub struct FrameBuffer {
    frame: Vec<u8>,
    width: usize,
    height: usize,
    font: Option<Font<'static>>,
    scale: Scale,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: vec![0; width * height * 4],
            width,
            height,
            font: None,
            scale: Scale::uniform(16.0),
        }
    }

    /// Attach the font used by [`Surface::draw_text`]. Without one, text
    /// draws nothing.
    pub fn with_font(mut self, font: Font<'static>, size: f32) -> Self {
        self.font = Some(font);
        self.scale = Scale::uniform(size);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.frame
    }

    pub fn clear(&mut self) {
        self.frame.fill(0);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let px = &self.frame[idx..idx + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Source-over composite of `color` scaled by `coverage` onto one pixel.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let sa = color.a as f32 / 255.0 * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let dst = &mut self.frame[idx..idx + 4];
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let src = [color.r, color.g, color.b];
        for (d, s) in dst.iter_mut().take(3).zip(src) {
            let c = (s as f32 * sa + *d as f32 * da * (1.0 - sa)) / out_a;
            *d = c.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Clip a bounding box to the frame, returning inclusive pixel ranges.
    fn clip(&self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<(i32, i32, i32, i32)> {
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let max_y = max_y.min(self.height as i32 - 1);
        (min_x <= max_x && min_y <= max_y).then_some((min_x, min_y, max_x, max_y))
    }
}

impl Surface for FrameBuffer {
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), thickness: f32, color: Color) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let pad = thickness.ceil() as i32 + 1;
        let Some((min_x, min_y, max_x, max_y)) = self.clip(
            x0.min(x1) - pad,
            y0.min(y1) - pad,
            x0.max(x1) + pad,
            y0.max(y1) + pad,
        ) else {
            return;
        };
        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = (x - x0) as f32;
                let py = (y - y0) as f32;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = x0 as f32 + t * dx;
                let ly = y0 as f32 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn stroke_circle(&mut self, center: (i32, i32), radius: f32, thickness: f32, color: Color) {
        let (cx, cy) = center;
        let outer = radius + thickness / 2.0;
        let inner = (radius - thickness / 2.0).max(0.0);
        let reach = outer.ceil() as i32 + 1;
        let Some((min_x, min_y, max_x, max_y)) =
            self.clip(cx - reach, cy - reach, cx + reach, cy + reach)
        else {
            return;
        };
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let dist = (dx * dx + dy * dy).sqrt();
                let aa = if dist > outer {
                    1.0 - (dist - outer).min(1.0)
                } else if dist < inner {
                    1.0 - (inner - dist).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: f32, color: Color) {
        let (cx, cy) = center;
        let reach = radius.ceil() as i32 + 1;
        let Some((min_x, min_y, max_x, max_y)) =
            self.clip(cx - reach, cy - reach, cx + reach, cy + reach)
        else {
            return;
        };
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let dist = (dx * dx + dy * dy).sqrt();
                let aa = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        if rect.width() <= 0 || rect.height() <= 0 {
            return;
        }
        let Some((min_x, min_y, max_x, max_y)) =
            self.clip(rect.left, rect.top, rect.right - 1, rect.bottom - 1)
        else {
            return;
        };
        let r = corner_radius
            .max(0.0)
            .min(rect.width().min(rect.height()) as f32 / 2.0);
        let ri = r.floor() as i32;
        let (inner_left, inner_right) = (rect.left + ri, rect.right - 1 - ri);
        let (inner_top, inner_bottom) = (rect.top + ri, rect.bottom - 1 - ri);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let nx = x.clamp(inner_left, inner_right.max(inner_left));
                let ny = y.clamp(inner_top, inner_bottom.max(inner_top));
                let dx = (x - nx) as f32;
                let dy = (y - ny) as f32;
                let dist = (dx * dx + dy * dy).sqrt();
                let aa = if dist > r {
                    1.0 - (dist - r).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn draw_text(&mut self, origin: (i32, i32), text: &str, color: Color) {
        let Some(font) = self.font.clone() else {
            return;
        };
        let v_metrics = font.v_metrics(self.scale);
        let glyphs: Vec<PositionedGlyph> = font
            .layout(
                text,
                self.scale,
                point(origin.0 as f32, origin.1 as f32 + v_metrics.ascent),
            )
            .collect();
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    if v > 0.001 {
                        self.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, v);
                    }
                });
            }
        }
    }
}

// ============================================================================
// FONT LOADING
// ============================================================================

/// Environment variable consulted when no font path is configured.
pub const FONT_ENV: &str = "ASTRAL_FONT";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Pick the font file: explicit path, then `ASTRAL_FONT`, then the first
/// well-known system font that exists.
pub fn resolve_font_path(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(FONT_ENV) {
        return Some(PathBuf::from(path));
    }
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

pub fn load_font(path: &Path) -> Result<Font<'static>, OverlayError> {
    let data = std::fs::read(path).map_err(|source| OverlayError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| OverlayError::InvalidFont(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_fully_transparent() {
        let fb = FrameBuffer::new(8, 4);
        assert_eq!(fb.as_bytes().len(), 8 * 4 * 4);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_resets_drawn_pixels() {
        let mut fb = FrameBuffer::new(20, 20);
        fb.fill_circle((10, 10), 4.0, Color::WHITE);
        assert!(fb.as_bytes().iter().any(|&b| b != 0));
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn opaque_draw_on_transparent_keeps_exact_color() {
        let mut fb = FrameBuffer::new(10, 10);
        let color = Color::new(0, 160, 255);
        fb.fill_circle((5, 5), 3.0, color);
        assert_eq!(fb.pixel(5, 5), Some(color));
        assert_eq!(fb.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn translucent_draws_keep_per_pixel_alpha() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.fill_circle((5, 5), 3.0, Color::WHITE.with_alpha(128));
        let px = fb.pixel(5, 5).unwrap();
        assert_eq!(px.a, 128);
        assert_eq!(px.as_tuple(), (255, 255, 255));

        // Half-transparent black over opaque white gives opaque mid gray.
        let mut fb = FrameBuffer::new(10, 10);
        fb.fill_circle((5, 5), 3.0, Color::WHITE);
        fb.fill_circle((5, 5), 3.0, Color::BLACK.with_alpha(128));
        let px = fb.pixel(5, 5).unwrap();
        assert_eq!(px.a, 255);
        assert!((126..=128).contains(&px.r), "{px:?}");
    }

    #[test]
    fn stroke_circle_leaves_center_empty() {
        let mut fb = FrameBuffer::new(40, 40);
        fb.stroke_circle((20, 20), 10.0, 2.0, Color::WHITE);
        assert_eq!(fb.pixel(20, 20).unwrap().a, 0);
        assert_eq!(fb.pixel(30, 20).unwrap().a, 255);
        assert_eq!(fb.pixel(20, 10).unwrap().a, 255);
    }

    #[test]
    fn horizontal_line_covers_its_span_only() {
        let mut fb = FrameBuffer::new(30, 10);
        fb.stroke_line((5, 5), (20, 5), 2.0, Color::WHITE);
        assert_eq!(fb.pixel(12, 5).unwrap().a, 255);
        assert_eq!(fb.pixel(12, 9).unwrap().a, 0);
        assert_eq!(fb.pixel(28, 5).unwrap().a, 0);
    }

    #[test]
    fn drawing_off_screen_is_clipped() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.fill_circle((-50, -50), 5.0, Color::WHITE);
        fb.stroke_line((-20, 100), (-10, 200), 3.0, Color::WHITE);
        fb.fill_rounded_rect(Rect::new(20, 20, 40, 40), 4.0, Color::WHITE);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn rounded_rect_fills_interior_and_trims_corners() {
        let mut fb = FrameBuffer::new(40, 40);
        fb.fill_rounded_rect(Rect::new(0, 0, 40, 40), 10.0, Color::BLACK.with_alpha(200));
        assert_eq!(fb.pixel(20, 20).unwrap().a, 200);
        assert_eq!(fb.pixel(0, 20).unwrap().a, 200);
        assert_eq!(fb.pixel(0, 0).unwrap().a, 0);
    }

    #[test]
    fn text_without_font_draws_nothing() {
        let mut fb = FrameBuffer::new(50, 20);
        fb.draw_text((0, 0), "FPS: 60.0", Color::WHITE);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn configured_font_path_wins() {
        let path = Path::new("/nonexistent/font.ttf");
        assert_eq!(resolve_font_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = load_font(Path::new("/nonexistent/astral/font.ttf")).err();
        assert!(matches!(err, Some(OverlayError::FontRead { .. })));
    }
}
