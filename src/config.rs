use std::path::PathBuf;
use std::time::Duration;

use bon::Builder;

use crate::color::Color;
use crate::keyboard::KeyBindings;

/// Colors shared by the overlay layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color,
    pub accent_dark: Color,
    pub text: Color,
    pub muted: Color,
    pub shadow: Color,
    pub panel: Color,
    pub scope: Color,
    pub effect: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::new(0x00, 0xa0, 0xff),
            accent_dark: Color::rgba(0x00, 0x5a, 0x8c, 0xe0),
            text: Color::WHITE,
            muted: Color::new(0x80, 0x80, 0x80),
            shadow: Color::BLACK,
            panel: Color::rgba(0x00, 0x00, 0x00, 0xa0),
            scope: Color::WHITE,
            effect: Color::new(0xff, 0x32, 0x32),
        }
    }
}

/// Minimum spacing between two actions of the same class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldowns {
    /// Menu toggle and boolean confirms
    pub toggle: Duration,
    /// Moving the menu selection
    pub navigate: Duration,
    /// Size, gap, shape and scope adjustments
    pub step: Duration,
    /// Color channel nudges
    pub fine: Duration,
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self {
            toggle: Duration::from_millis(150),
            navigate: Duration::from_millis(120),
            step: Duration::from_millis(80),
            fine: Duration::from_millis(60),
        }
    }
}

#[derive(Debug, Clone, Builder)]
pub struct OverlayConfig {
    #[builder(default = "Astral".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 2560)]
    pub width: usize,
    #[builder(default = 1440)]
    pub height: usize,
    /// Target time between frames; the loop waits at most this long
    #[builder(default = Duration::from_millis(10))]
    pub frame_interval: Duration,

    // Font configuration
    pub font_path: Option<PathBuf>,
    #[builder(default = 16.0)]
    pub font_size: f32,
    /// Vertical spacing of panel and menu lines
    #[builder(default = 20)]
    pub line_height: i32,

    // Texts
    #[builder(default = "Astral".to_string())]
    pub watermark_text: String,
    #[builder(default = "KILL!".to_string())]
    pub effect_text: String,

    // Transient effect
    #[builder(default = Duration::from_millis(1500))]
    pub effect_duration: Duration,
    /// Where the effect trigger key places the text, relative to the center
    #[builder(default = (50, -50))]
    pub effect_offset: (i32, i32),

    // Input
    #[builder(default)]
    pub cooldowns: Cooldowns,
    #[builder(default)]
    pub key_bindings: KeyBindings,

    #[builder(default)]
    pub palette: Palette,

    /// Verbose logging; `RUST_LOG` is honoured only when set
    #[builder(default = cfg!(debug_assertions))]
    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl OverlayConfig {
    pub fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }
}
