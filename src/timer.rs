use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_millis(1000);

/// Rolling frames-per-second counter and animation clock.
///
/// Time is injected through [`FrameTimer::tick`], so the timer never reads
/// the wall clock itself.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    started_at: Instant,
    last_frame: Instant,
    window_start: Instant,
    frames_in_window: u32,
    fps: f32,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            last_frame: now,
            window_start: now,
            frames_in_window: 0,
            fps: 0.0,
        }
    }

    /// Count one frame at `now`. Once at least a second has passed since the
    /// window opened, the FPS figure is recomputed and the window restarts.
    pub fn tick(&mut self, now: Instant) {
        self.last_frame = now.max(self.last_frame);
        self.frames_in_window += 1;

        let elapsed = self.last_frame.duration_since(self.window_start);
        if elapsed >= FPS_WINDOW {
            let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
            self.fps = self.frames_in_window as f32 * 1000.0 / elapsed_ms;
            self.window_start = self.last_frame;
            self.frames_in_window = 0;
            tracing::trace!(fps = self.fps, "fps window closed");
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frames_in_window(&self) -> u32 {
        self.frames_in_window
    }

    /// Seconds since the timer was created, as of the latest tick.
    pub fn elapsed_seconds(&self) -> f32 {
        self.last_frame.duration_since(self.started_at).as_secs_f32()
    }
}
