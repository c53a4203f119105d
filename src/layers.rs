use crate::color::{hsv_to_rgb, rainbow_hue, Color};
use crate::config::Palette;
use crate::effect::EffectFrame;
use crate::menu::{MenuItem, ITEM_COUNT};
use crate::state::{ConfigState, ReticleShape};
use crate::surface::{Rect, Surface};

const RETICLE_THICKNESS: f32 = 2.0;
const SCOPE_RING_THICKNESS: f32 = 3.0;
const SCOPE_CROSS_THICKNESS: f32 = 1.0;
const VIGNETTE_DEPTH: i32 = 50;
const VIGNETTE_STEP: i32 = 10;
const VIGNETTE_ALPHA: i32 = 80;

const STATUS_ORIGIN: (i32, i32) = (10, 40);
const STATUS_WIDTH: i32 = 270;
const MENU_RECT_LEFT_TOP: (i32, i32) = (50, 50);
const MENU_WIDTH: i32 = 350;
const MENU_ROW_HEIGHT: i32 = 25;
const MENU_HEADER: &str = "Settings (Arrow Keys + Enter)";

/// Everything a layer may read for one frame. Layers never mutate state.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub settings: &'a ConfigState,
    pub fps: f32,
    /// Seconds since startup, drives every animation
    pub elapsed: f32,
    pub effect: Option<EffectFrame>,
    /// Display midpoint
    pub center: (i32, i32),
    pub palette: &'a Palette,
    pub watermark_text: &'a str,
    pub effect_text: &'a str,
    pub line_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    ScopeRing,
    Reticle,
    Watermark,
    StatusPanel,
    SettingsMenu,
    TransientEffect,
}

impl Layer {
    /// Back to front. Later layers cover earlier ones.
    pub const DRAW_ORDER: [Layer; 6] = [
        Layer::ScopeRing,
        Layer::Reticle,
        Layer::Watermark,
        Layer::StatusPanel,
        Layer::SettingsMenu,
        Layer::TransientEffect,
    ];

    pub fn is_enabled(self, ctx: &FrameContext) -> bool {
        match self {
            Layer::ScopeRing => ctx.settings.scope_enabled,
            Layer::Reticle => ctx.settings.reticle_enabled,
            Layer::Watermark => ctx.settings.watermark_enabled,
            Layer::StatusPanel => true,
            Layer::SettingsMenu => ctx.settings.menu_open,
            Layer::TransientEffect => ctx.effect.is_some(),
        }
    }

    pub fn draw(self, ctx: &FrameContext, surface: &mut impl Surface) {
        match self {
            Layer::ScopeRing => draw_scope_ring(ctx, surface),
            Layer::Reticle => draw_reticle(ctx, surface),
            Layer::Watermark => draw_watermark(ctx, surface),
            Layer::StatusPanel => draw_status_panel(ctx, surface),
            Layer::SettingsMenu => draw_settings_menu(ctx, surface),
            Layer::TransientEffect => draw_transient_effect(ctx, surface),
        }
    }
}

/// Draw every enabled layer in [`Layer::DRAW_ORDER`].
pub fn draw_layers(ctx: &FrameContext, surface: &mut impl Surface) {
    for layer in Layer::DRAW_ORDER {
        if layer.is_enabled(ctx) {
            layer.draw(ctx, surface);
        }
    }
}

pub fn reticle_color(settings: &ConfigState, elapsed: f32) -> Color {
    if settings.rainbow_enabled {
        hsv_to_rgb(rainbow_hue(elapsed), 1.0, 1.0)
    } else {
        settings.stored_color()
    }
}

fn text_with_shadow(
    surface: &mut impl Surface,
    (x, y): (i32, i32),
    text: &str,
    color: Color,
    shadow: Color,
    offset: i32,
) {
    surface.draw_text((x + offset, y + offset), text, shadow);
    surface.draw_text((x, y), text, color);
}

// ============================================================================
// LAYERS
// ============================================================================

fn draw_reticle(ctx: &FrameContext, surface: &mut impl Surface) {
    let s = ctx.settings;
    let (cx, cy) = ctx.center;
    let (size, gap) = (s.reticle_size, s.reticle_gap);
    let color = reticle_color(s, ctx.elapsed);

    match s.reticle_shape {
        ReticleShape::Plus => {
            for (from, to) in [
                ((cx - size, cy), (cx - gap, cy)),
                ((cx + gap, cy), (cx + size, cy)),
                ((cx, cy - size), (cx, cy - gap)),
                ((cx, cy + gap), (cx, cy + size)),
            ] {
                surface.stroke_line(from, to, RETICLE_THICKNESS, color);
            }
        }
        ReticleShape::Cross => {
            for (from, to) in [
                ((cx - size, cy - size), (cx - gap, cy - gap)),
                ((cx + gap, cy + gap), (cx + size, cy + size)),
                ((cx - size, cy + size), (cx - gap, cy + gap)),
                ((cx + gap, cy - gap), (cx + size, cy - size)),
            ] {
                surface.stroke_line(from, to, RETICLE_THICKNESS, color);
            }
        }
        ReticleShape::Circle => {
            surface.stroke_circle(ctx.center, size as f32, RETICLE_THICKNESS, color);
        }
        ReticleShape::Dot => {
            surface.fill_circle(ctx.center, (size / 4) as f32, color);
        }
    }
}

fn draw_scope_ring(ctx: &FrameContext, surface: &mut impl Surface) {
    let s = ctx.settings;
    let center = (
        ctx.center.0.saturating_add(s.scope_offset_x),
        ctx.center.1.saturating_add(s.scope_offset_y),
    );
    let radius = s.scope_radius;

    // Soft vignette: bands stepping outward, fading as they go.
    for step in (0..VIGNETTE_DEPTH).step_by(VIGNETTE_STEP as usize) {
        let alpha = (VIGNETTE_ALPHA - step).max(0) as u8;
        let band_center = (radius + step) as f32 + VIGNETTE_STEP as f32 / 2.0;
        surface.stroke_circle(
            center,
            band_center,
            VIGNETTE_STEP as f32,
            Color::BLACK.with_alpha(alpha),
        );
    }

    let ring = ctx.palette.scope;
    surface.stroke_circle(center, radius as f32, SCOPE_RING_THICKNESS, ring);

    let (cx, cy) = center;
    surface.stroke_line((cx, cy - radius), (cx, cy + radius), SCOPE_CROSS_THICKNESS, ring);
    surface.stroke_line((cx - radius, cy), (cx + radius, cy), SCOPE_CROSS_THICKNESS, ring);
}

fn draw_watermark(ctx: &FrameContext, surface: &mut impl Surface) {
    let t = ctx.elapsed;
    let alpha = (165.0 + 65.0 * (3.0 * t).sin()).round().clamp(0.0, 255.0) as u8;
    let sway = (5.0 * (2.0 * t).sin()) as i32;
    text_with_shadow(
        surface,
        (10 + sway, 10),
        ctx.watermark_text,
        ctx.palette.accent.with_alpha(alpha),
        ctx.palette.shadow.with_alpha(alpha),
        1,
    );
}

fn status_lines(ctx: &FrameContext) -> Vec<(String, Color)> {
    let s = ctx.settings;
    let p = ctx.palette;
    let toggle = |label: &str, on: bool| {
        (
            format!("{label}: {}", if on { "ON" } else { "OFF" }),
            if on { p.accent } else { p.muted },
        )
    };
    vec![
        (format!("FPS: {:.1}", ctx.fps), p.text),
        toggle("Crosshair", s.reticle_enabled),
        (
            format!(
                "Shape: {} (size {}, gap {})",
                s.reticle_shape.name(),
                s.reticle_size,
                s.reticle_gap
            ),
            if s.reticle_enabled { p.accent } else { p.muted },
        ),
        (
            format!("Color: R {} G {} B {}", s.color_r, s.color_g, s.color_b),
            if s.rainbow_enabled { p.muted } else { p.accent },
        ),
        toggle("Rainbow", s.rainbow_enabled),
        toggle("Watermark", s.watermark_enabled),
        toggle("Scope Overlay", s.scope_enabled),
        (format!("Scope Radius: {}", s.scope_radius), p.accent),
        (format!("Scope Offset X: {}", s.scope_offset_x), p.accent),
        (format!("Scope Offset Y: {}", s.scope_offset_y), p.accent),
    ]
}

fn draw_status_panel(ctx: &FrameContext, surface: &mut impl Surface) {
    let lines = status_lines(ctx);
    let (left, top) = STATUS_ORIGIN;
    let bottom = top + 20 + lines.len() as i32 * ctx.line_height;
    surface.fill_rounded_rect(
        Rect::new(left, top, left + STATUS_WIDTH, bottom),
        10.0,
        ctx.palette.panel,
    );
    for (i, (text, color)) in lines.iter().enumerate() {
        let origin = (left + 10, top + 10 + i as i32 * ctx.line_height);
        text_with_shadow(surface, origin, text, *color, ctx.palette.shadow, 1);
    }
}

fn draw_settings_menu(ctx: &FrameContext, surface: &mut impl Surface) {
    let (left, top) = MENU_RECT_LEFT_TOP;
    let rows_top = top + 40;
    let bottom = rows_top + ITEM_COUNT as i32 * MENU_ROW_HEIGHT + 10;
    surface.fill_rounded_rect(
        Rect::new(left, top, left + MENU_WIDTH, bottom),
        15.0,
        ctx.palette.accent_dark,
    );

    let p = ctx.palette;
    text_with_shadow(surface, (left + 10, top + 10), MENU_HEADER, p.text, p.shadow, 1);

    for (i, item) in MenuItem::ALL.into_iter().enumerate() {
        let color = if i == ctx.settings.menu_selection {
            p.accent
        } else {
            p.text
        };
        let origin = (left + 20, rows_top + i as i32 * MENU_ROW_HEIGHT);
        text_with_shadow(surface, origin, &item.label(ctx.settings), color, p.shadow, 1);
    }
}

fn draw_transient_effect(ctx: &FrameContext, surface: &mut impl Surface) {
    let Some(effect) = ctx.effect else {
        return;
    };
    let alpha = (255.0 * (1.0 - effect.progress)).round().clamp(0.0, 255.0) as u8;
    text_with_shadow(
        surface,
        effect.position,
        ctx.effect_text,
        ctx.palette.effect.with_alpha(alpha),
        ctx.palette.shadow.with_alpha(alpha),
        2,
    );
}
