// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod keyboard;
pub mod layers;
pub mod logging;
pub mod menu;
pub mod runtime;
pub mod scene;
pub mod state;
pub mod surface;
pub mod timer;
pub mod window;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use winit::event::{DeviceEvent, Event, WindowEvent};
use winit::event_loop::{ControlFlow, DeviceEvents, EventLoop};

pub use color::{hsv_to_rgb, Color};
pub use config::OverlayConfig;
pub use error::OverlayError;
pub use runtime::OverlayRuntime;
pub use state::{ConfigState, ReticleShape};

use framebuffer::{load_font, resolve_font_path, FONT_ENV};
use keyboard::KeyTracker;
use window::OverlayWindow;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// The overlay process: window, frame cadence and running flag.
pub struct Overlay {
    config: OverlayConfig,
    running: Arc<AtomicBool>,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flag the loop checks at the top of every iteration. Clearing it from
    /// any thread stops the overlay after the current frame.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Acquire the native resources and run the frame loop until the window
    /// is closed or the running flag is cleared.
    ///
    /// Any startup failure is returned before the first frame is drawn.
    pub fn run(self) -> Result<(), OverlayError> {
        let Overlay { config, running } = self;

        let font_path = resolve_font_path(config.font_path.as_deref())
            .ok_or(OverlayError::FontNotFound { env: FONT_ENV })?;
        let font = load_font(&font_path)?;
        tracing::info!(font = %font_path.display(), "font loaded");

        let event_loop = EventLoop::new()?;
        event_loop.listen_device_events(DeviceEvents::Always);
        let mut window = OverlayWindow::create(&event_loop, &config)?;

        let mut keys = KeyTracker::new(config.key_bindings.clone());
        let frame_interval = config.frame_interval;
        let mut runtime = OverlayRuntime::new(config, Some(font), Instant::now());
        let mut next_frame = Instant::now();
        let mut input_pending = false;

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    tracing::info!("overlay window closed");
                    running.store(false, Ordering::SeqCst);
                }
                WindowEvent::Resized(size) => window.resize(size),
                WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                    keys.handle(event.physical_key, event.state);
                }
                WindowEvent::Focused(false) => keys.release_all(),
                WindowEvent::RedrawRequested => {
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }
                    let frame = runtime.draw_frame(Instant::now());
                    if let Err(err) = window.present(frame) {
                        tracing::warn!(%err, "frame composite failed");
                    }
                    input_pending = true;
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::Key(raw),
                ..
            } => keys.handle(raw.physical_key, raw.state),
            Event::AboutToWait => {
                if !running.load(Ordering::SeqCst) {
                    window_target.exit();
                    return;
                }
                // Pending messages are drained by now; input sees this
                // frame's key state exactly once.
                let now = Instant::now();
                if input_pending {
                    runtime.process_input(keys.snapshot(), now);
                    input_pending = false;
                }
                if now >= next_frame {
                    window.request_redraw();
                    next_frame = now + frame_interval;
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }
            Event::LoopExiting => tracing::info!("overlay loop exiting"),
            _ => {}
        })?;

        Ok(())
    }
}
