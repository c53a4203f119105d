use std::time::Instant;

use rusttype::Font;

use crate::config::OverlayConfig;
use crate::effect::TransientEffect;
use crate::framebuffer::FrameBuffer;
use crate::input::{InputController, KeySnapshot};
use crate::layers::{draw_layers, FrameContext};
use crate::scene::Scene;
use crate::state::ConfigState;
use crate::timer::FrameTimer;

/// The per-frame pipeline, independent of any window.
///
/// Owns the settings, the clocks and the frame buffer. The render loop calls
/// [`draw_frame`](Self::draw_frame), presents the buffer, then calls
/// [`process_input`](Self::process_input), so every mutation lands strictly
/// between two frames.
pub struct OverlayRuntime {
    config: OverlayConfig,
    settings: ConfigState,
    timer: FrameTimer,
    effect: TransientEffect,
    input: InputController,
    scene: Scene,
    framebuffer: FrameBuffer,
}

impl OverlayRuntime {
    pub fn new(config: OverlayConfig, font: Option<Font<'static>>, now: Instant) -> Self {
        let mut framebuffer = FrameBuffer::new(config.width, config.height);
        if let Some(font) = font {
            framebuffer = framebuffer.with_font(font, config.font_size);
        }
        let (cx, cy) = config.center();
        let effect_origin = (
            cx.saturating_add(config.effect_offset.0),
            cy.saturating_add(config.effect_offset.1),
        );
        Self {
            settings: ConfigState::default(),
            timer: FrameTimer::new(now),
            effect: TransientEffect::new(config.effect_duration),
            input: InputController::new(config.cooldowns, effect_origin),
            scene: Scene::new(),
            framebuffer,
            config,
        }
    }

    pub fn settings(&self) -> &ConfigState {
        &self.settings
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn effect(&self) -> &TransientEffect {
        &self.effect
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Clear the buffer and draw every enabled layer for the frame at `now`.
    pub fn draw_frame(&mut self, now: Instant) -> &FrameBuffer {
        self.framebuffer.clear();
        self.timer.tick(now);
        self.effect.update(now);

        let ctx = FrameContext {
            settings: &self.settings,
            fps: self.timer.fps(),
            elapsed: self.timer.elapsed_seconds(),
            effect: self.effect.frame(now),
            center: self.config.center(),
            palette: &self.config.palette,
            watermark_text: &self.config.watermark_text,
            effect_text: &self.config.effect_text,
            line_height: self.config.line_height,
        };

        self.scene.clear();
        draw_layers(&ctx, &mut self.scene);
        self.scene.render(&mut self.framebuffer);
        &self.framebuffer
    }

    /// Feed this frame's key state to the input controller.
    pub fn process_input(&mut self, keys: KeySnapshot, now: Instant) {
        self.input
            .process(keys, &mut self.settings, &mut self.effect, now);
    }
}
