/// RGBA color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Six-sector HSV to RGB conversion.
///
/// `h` is cyclic in `[0, 1)`, `s` and `v` are in `[0, 1]`. Channels are
/// truncated, so `v = 1` yields 255 on the dominant channel.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::new(channel(r), channel(g), channel(b))
}

/// Hue used by the rainbow reticle at `elapsed` seconds.
pub fn rainbow_hue(elapsed: f32) -> f32 {
    (elapsed * 0.3).rem_euclid(1.0)
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_boundaries_hit_primary_and_secondary_hues() {
        let expected = [
            (0.0, (255, 0, 0)),
            (1.0 / 6.0, (255, 255, 0)),
            (2.0 / 6.0, (0, 255, 0)),
            (3.0 / 6.0, (0, 255, 255)),
            (4.0 / 6.0, (0, 0, 255)),
            (5.0 / 6.0, (255, 0, 255)),
        ];
        for (h, rgb) in expected {
            let c = hsv_to_rgb(h, 1.0, 1.0);
            let got = c.as_tuple();
            // Boundaries computed in f32 may land a hair below the sector edge.
            let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 1;
            assert!(
                close(got.0, rgb.0) && close(got.1, rgb.1) && close(got.2, rgb.2),
                "h={h}: got {got:?}, expected {rgb:?}"
            );
            assert_eq!(c.a, 0xff);
        }
    }

    #[test]
    fn full_saturation_always_has_a_max_channel() {
        for i in 0..600 {
            let c = hsv_to_rgb(i as f32 / 600.0, 1.0, 1.0);
            assert!(c.r >= 254 || c.g >= 254 || c.b >= 254, "step {i}: {c:?}");
            assert!(c.r == 0 || c.g == 0 || c.b == 0, "step {i}: {c:?}");
        }
    }

    #[test]
    fn hue_sweep_is_continuous() {
        let steps = 3600;
        let mut prev = hsv_to_rgb(0.0, 1.0, 1.0);
        for i in 1..steps {
            let c = hsv_to_rgb(i as f32 / steps as f32, 1.0, 1.0);
            for (a, b) in [(prev.r, c.r), (prev.g, c.g), (prev.b, c.b)] {
                assert!((a as i32 - b as i32).abs() <= 2, "jump at step {i}");
            }
            prev = c;
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        let c = hsv_to_rgb(0.42, 0.0, 0.5);
        assert_eq!(c.as_tuple(), (127, 127, 127));
    }

    #[test]
    fn rainbow_hue_wraps() {
        assert_eq!(rainbow_hue(0.0), 0.0);
        assert!((rainbow_hue(1.0) - 0.3).abs() < 1e-6);
        assert!((rainbow_hue(10.0 / 3.0 + 1.0) - 0.3).abs() < 1e-4);
        assert!(rainbow_hue(1234.5) < 1.0);
    }
}
