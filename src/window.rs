use std::sync::Arc;

use pixels::{wgpu, Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder, WindowLevel};

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::framebuffer::FrameBuffer;

/// The native side of the overlay: an undecorated, transparent, topmost,
/// click-through window and the surface frames are composited onto.
pub struct OverlayWindow {
    // Declared before `window` so the surface is released first.
    pixels: Pixels<'static>,
    window: Arc<Window>,
}

impl OverlayWindow {
    pub fn create(event_loop: &EventLoop<()>, config: &OverlayConfig) -> Result<Self, OverlayError> {
        let builder = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width as u32, config.height as u32))
            .with_position(PhysicalPosition::new(0, 0))
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop);

        #[cfg(windows)]
        let builder = {
            use winit::platform::windows::WindowBuilderExtWindows;
            builder.with_skip_taskbar(true)
        };

        let window = Arc::new(builder.build(event_loop)?);
        if let Err(err) = window.set_cursor_hittest(false) {
            tracing::warn!(%err, "click-through unsupported, overlay will take pointer input");
        }

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = PixelsBuilder::new(config.width as u32, config.height as u32, surface_texture)
            .clear_color(wgpu::Color::TRANSPARENT)
            .blend_state(wgpu::BlendState::ALPHA_BLENDING)
            .build()?;

        tracing::info!(
            width = config.width,
            height = config.height,
            surface_width = size.width,
            surface_height = size.height,
            "overlay window created"
        );
        Ok(Self { pixels, window })
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
            tracing::warn!(%err, "surface resize failed");
        }
    }

    /// Submit `frame` to the window as one per-pixel-alpha composite.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), pixels::Error> {
        self.pixels.frame_mut().copy_from_slice(frame.as_bytes());
        self.pixels.render()
    }
}
