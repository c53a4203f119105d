use crate::color::Color;

pub const RETICLE_SIZE_RANGE: (i32, i32) = (1, 50);
pub const RETICLE_GAP_RANGE: (i32, i32) = (0, 20);
pub const COLOR_CHANNEL_RANGE: (i32, i32) = (0, 255);
pub const SCOPE_RADIUS_RANGE: (i32, i32) = (10, 300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReticleShape {
    #[default]
    Plus,
    Circle,
    Dot,
    Cross,
}

impl ReticleShape {
    pub const ALL: [ReticleShape; 4] = [
        ReticleShape::Plus,
        ReticleShape::Circle,
        ReticleShape::Dot,
        ReticleShape::Cross,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReticleShape::Plus => "Plus",
            ReticleShape::Circle => "Circle",
            ReticleShape::Dot => "Dot",
            ReticleShape::Cross => "Cross",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The live overlay settings.
///
/// One value per process, owned by the render loop. Only the input
/// controller mutates it, and only after the frame has been drawn; bounded
/// fields are clamped here, at the point of mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    pub reticle_enabled: bool,
    pub reticle_size: i32,
    pub reticle_gap: i32,
    pub reticle_shape: ReticleShape,

    pub color_r: i32,
    pub color_g: i32,
    pub color_b: i32,
    /// When set, the reticle color comes from the frame clock and the RGB
    /// fields are ignored for drawing
    pub rainbow_enabled: bool,

    pub watermark_enabled: bool,

    pub scope_enabled: bool,
    pub scope_radius: i32,
    pub scope_offset_x: i32,
    pub scope_offset_y: i32,

    pub menu_open: bool,
    pub menu_selection: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            reticle_enabled: true,
            reticle_size: 15,
            reticle_gap: 5,
            reticle_shape: ReticleShape::Plus,
            color_r: 0,
            color_g: 160,
            color_b: 255,
            rainbow_enabled: false,
            watermark_enabled: true,
            scope_enabled: false,
            scope_radius: 100,
            scope_offset_x: 0,
            scope_offset_y: 0,
            menu_open: false,
            menu_selection: 0,
        }
    }
}

impl ConfigState {
    /// Stored reticle color, ignoring the rainbow flag.
    pub fn stored_color(&self) -> Color {
        let (lo, hi) = COLOR_CHANNEL_RANGE;
        debug_assert!(
            [self.color_r, self.color_g, self.color_b]
                .iter()
                .all(|c| (lo..=hi).contains(c)),
            "color channel out of range"
        );
        Color::new(self.color_r as u8, self.color_g as u8, self.color_b as u8)
    }
}

/// Add `delta` to `value` and keep the result within `range` (inclusive).
/// Returns whether the value changed.
pub fn step_clamped(value: &mut i32, delta: i32, range: (i32, i32)) -> bool {
    let next = value.saturating_add(delta).clamp(range.0, range.1);
    let changed = next != *value;
    *value = next;
    changed
}

/// Add `delta` to an unbounded field without overflowing. Returns whether
/// the value changed.
pub fn step_unbounded(value: &mut i32, delta: i32) -> bool {
    let next = value.saturating_add(delta);
    let changed = next != *value;
    *value = next;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = ConfigState::default();
        assert!(s.reticle_enabled);
        assert_eq!(s.reticle_shape, ReticleShape::Plus);
        assert_eq!((s.reticle_size, s.reticle_gap), (15, 5));
        assert_eq!(s.stored_color(), Color::new(0, 160, 255));
        assert!(!s.rainbow_enabled && !s.menu_open && !s.scope_enabled);
        assert!(s.watermark_enabled);
        assert_eq!(s.scope_radius, 100);
    }

    #[test]
    fn shape_cycles_both_ways() {
        assert_eq!(ReticleShape::Plus.next(), ReticleShape::Circle);
        assert_eq!(ReticleShape::Cross.next(), ReticleShape::Plus);
        assert_eq!(ReticleShape::Plus.prev(), ReticleShape::Cross);
        for shape in ReticleShape::ALL {
            assert_eq!(shape.next().prev(), shape);
        }
    }

    #[test]
    fn clamped_steps_saturate_at_bounds() {
        let mut v = 298;
        step_clamped(&mut v, 5, SCOPE_RADIUS_RANGE);
        assert_eq!(v, 300);
        assert!(!step_clamped(&mut v, 5, SCOPE_RADIUS_RANGE));
        assert_eq!(v, 300);

        let mut v = 1;
        for _ in 0..10 {
            step_clamped(&mut v, -1, RETICLE_SIZE_RANGE);
        }
        assert_eq!(v, 1);
    }

    #[test]
    fn unbounded_steps_do_not_overflow() {
        let mut v = i32::MAX - 2;
        assert!(step_unbounded(&mut v, 5));
        assert_eq!(v, i32::MAX);
        assert!(!step_unbounded(&mut v, 5));
        let mut v = -10;
        step_unbounded(&mut v, -5);
        assert_eq!(v, -15);
    }
}
