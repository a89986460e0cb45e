//! Light/dark theme mode and the colors each mode paints with.
//!
//! The core crate never touches the GUI toolkit, so colors are plain 8-bit
//! RGBA values; the UI converts them at the edge.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha (0 = transparent, 255 = opaque).
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Which of the two themes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every color the shell paints with, for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window and navigation background
    pub window_bg: Rgba,
    /// Editor surface background
    pub editor_bg: Rgba,
    /// Editor text
    pub text: Rgba,
    /// Secondary text (settings captions)
    pub text_muted: Rgba,
    /// Selected text background
    pub selection: Rgba,
    /// Gutter background
    pub gutter_bg: Rgba,
    /// Gutter line numbers
    pub gutter_text: Rgba,
    /// Current-line highlight fill
    pub line_highlight: Rgba,
    /// Search bar background
    pub search_bar_bg: Rgba,
    /// Separator line between command bar, editor and status bar
    pub separator: Rgba,
    /// Status bar labels
    pub status_text: Rgba,
    /// Buttons hovered, checked toggles, focus rings
    pub accent: Rgba,
    /// Hover fill for flat buttons
    pub hover: Rgba,
}

impl Palette {
    pub const DARK: Palette = Palette {
        window_bg: Rgba::rgb(32, 32, 32),
        editor_bg: Rgba::rgb(39, 39, 39),
        text: Rgba::rgb(228, 228, 228),
        text_muted: Rgba::rgb(128, 128, 128),
        selection: Rgba::rgba(0, 120, 212, 110),
        gutter_bg: Rgba::rgb(32, 32, 32),
        gutter_text: Rgba::rgb(100, 100, 100),
        line_highlight: Rgba::rgba(255, 255, 255, 10),
        search_bar_bg: Rgba::rgb(0x20, 0x20, 0x20),
        separator: Rgba::rgb(0x3e, 0x3e, 0x3e),
        status_text: Rgba::rgb(0x88, 0x88, 0x88),
        accent: Rgba::rgb(96, 205, 255),
        hover: Rgba::rgba(255, 255, 255, 15),
    };

    pub const LIGHT: Palette = Palette {
        window_bg: Rgba::rgb(243, 243, 243),
        editor_bg: Rgba::rgb(255, 255, 255),
        text: Rgba::rgb(27, 27, 27),
        text_muted: Rgba::rgb(128, 128, 128),
        selection: Rgba::rgba(0, 120, 212, 70),
        gutter_bg: Rgba::rgb(248, 248, 248),
        gutter_text: Rgba::rgb(160, 160, 160),
        line_highlight: Rgba::rgba(0, 0, 0, 8),
        search_bar_bg: Rgba::rgb(0xf9, 0xf9, 0xf9),
        separator: Rgba::rgb(0xe5, 0xe5, 0xe5),
        status_text: Rgba::rgb(0x88, 0x88, 0x88),
        accent: Rgba::rgb(0, 95, 184),
        hover: Rgba::rgba(0, 0, 0, 10),
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}
