//! Color theme for the visualizer
//!
//! Colors are resolved once when the visualizer is created. A change of the
//! system theme afterwards does not recolor a running session.

use serde::{Serialize, Deserialize};

/// RGBA color with components in 0.0..=1.0 (sRGB encoded)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque color from 8-bit channels
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Color from 8-bit channels and a 0..1 alpha
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Components as [r, g, b, a]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Light => Palette::light(),
            ColorScheme::Dark => Palette::dark(),
        }
    }
}

/// Configured theme: follow the system or force one scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Pick a scheme. `system_prefers_dark` is only consulted for `System`;
    /// an unknown system theme counts as light.
    pub fn resolve(self, system_prefers_dark: Option<bool>) -> ColorScheme {
        match self {
            ThemePreference::System => {
                ColorScheme::from_prefers_dark(system_prefers_dark.unwrap_or(false))
            }
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
        }
    }
}

/// The three colors a frame is drawn with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub stroke: Rgba,
    pub dot: Rgba,
}

impl Palette {
    /// Warm stone greys on a light background
    pub fn light() -> Self {
        Self {
            background: Rgba::rgb(228, 227, 223),
            stroke: Rgba::rgba(120, 113, 108, 0.8),
            dot: Rgba::rgb(68, 64, 60),
        }
    }

    /// Light stone greys on a dark background
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(41, 37, 36),
            stroke: Rgba::rgba(168, 162, 158, 0.8),
            dot: Rgba::rgb(231, 229, 228),
        }
    }
}
