use crate::color::Color;
use crate::surface::{Rect, Surface};

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: (i32, i32),
        to: (i32, i32),
        thickness: f32,
        color: Color,
    },
    Ring {
        center: (i32, i32),
        radius: f32,
        thickness: f32,
        color: Color,
    },
    Disc {
        center: (i32, i32),
        radius: f32,
        color: Color,
    },
    Panel {
        rect: Rect,
        corner_radius: f32,
        color: Color,
    },
    Text {
        origin: (i32, i32),
        text: String,
        color: Color,
    },
}

/// A frame's worth of recorded draw commands.
///
/// Layers record into a `Scene`; the render loop replays it into the frame
/// buffer. The buffer is reused across frames.
#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            _ => None,
        })
    }

    pub fn render(&self, target: &mut impl Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => target.stroke_line(*from, *to, *thickness, *color),
                DrawCommand::Ring {
                    center,
                    radius,
                    thickness,
                    color,
                } => target.stroke_circle(*center, *radius, *thickness, *color),
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                DrawCommand::Panel {
                    rect,
                    corner_radius,
                    color,
                } => target.fill_rounded_rect(*rect, *corner_radius, *color),
                DrawCommand::Text {
                    origin,
                    text,
                    color,
                } => target.draw_text(*origin, text, *color),
            }
        }
    }
}

impl Surface for Scene {
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn stroke_circle(&mut self, center: (i32, i32), radius: f32, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Ring {
            center,
            radius,
            thickness,
            color,
        });
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: f32, color: Color) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.commands.push(DrawCommand::Panel {
            rect,
            corner_radius,
            color,
        });
    }

    fn draw_text(&mut self, origin: (i32, i32), text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            color,
        });
    }
}
