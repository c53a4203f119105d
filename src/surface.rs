use crate::color::Color;

/// Axis-aligned rectangle in surface pixels, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// The drawing capability every overlay layer renders through.
///
/// Implemented by [`FrameBuffer`](crate::framebuffer::FrameBuffer) for real
/// output and by [`Scene`](crate::scene::Scene) for recording. Points are
/// `(x, y)` in pixels with the origin at the top-left corner.
pub trait Surface {
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), thickness: f32, color: Color);

    /// Unfilled ring whose stroke is centered on `radius`.
    fn stroke_circle(&mut self, center: (i32, i32), radius: f32, thickness: f32, color: Color);

    fn fill_circle(&mut self, center: (i32, i32), radius: f32, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color);

    /// Text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: (i32, i32), text: &str, color: Color);
}
