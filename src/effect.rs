use std::time::{Duration, Instant};

/// Short-lived notification text.
///
/// Started by a trigger, and inactive again once `duration` has elapsed.
/// Nothing else ends it.
#[derive(Debug, Clone)]
pub struct TransientEffect {
    active: bool,
    started_at: Option<Instant>,
    duration: Duration,
    position: (i32, i32),
}

/// What the effect layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectFrame {
    pub position: (i32, i32),
    /// 0.0 at start, approaching 1.0 as the effect expires
    pub progress: f32,
}

impl TransientEffect {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: false,
            started_at: None,
            duration,
            position: (0, 0),
        }
    }

    pub fn start(&mut self, x: i32, y: i32, now: Instant) {
        self.active = true;
        self.started_at = Some(now);
        self.position = (x, y);
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at
            .filter(|_| self.active)
            .map(|start| now.saturating_duration_since(start))
    }

    /// Whether the effect is still running at `now`.
    pub fn is_active_at(&self, now: Instant) -> bool {
        self.elapsed(now).is_some_and(|e| e < self.duration)
    }

    /// Deactivate once expired. Called once per frame before drawing.
    pub fn update(&mut self, now: Instant) {
        if self.active && !self.is_active_at(now) {
            self.active = false;
            tracing::trace!("transient effect expired");
        }
    }

    pub fn frame(&self, now: Instant) -> Option<EffectFrame> {
        let elapsed = self.elapsed(now).filter(|e| *e < self.duration)?;
        Some(EffectFrame {
            position: self.position,
            progress: elapsed.as_secs_f32() / self.duration.as_secs_f32(),
        })
    }
}
