//! Color schemes and palettes
//!
//! Resolves the light/dark appearance into a concrete [`Palette`] of ratatui
//! colors. The palette values mirror the application's mobile-style theme.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Scheme::Light => Scheme::Dark,
            Scheme::Dark => Scheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Scheme::Dark
    }
}

/// Concrete colors for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub tint: Color,
    pub chip: Color,
    pub danger: Color,
}

/// Resolve a scheme into its palette.
#[must_use]
pub fn palette(scheme: Scheme) -> Palette {
    match scheme {
        Scheme::Light => Palette {
            background: Color::Rgb(0xf4, 0xf5, 0xf7),
            surface: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x11, 0x18, 0x1c),
            text_muted: Color::Rgb(0x6b, 0x72, 0x80),
            border: Color::Rgb(0xe5, 0xe7, 0xeb),
            tint: Color::Rgb(0x25, 0x63, 0xeb),
            chip: Color::Rgb(0xe8, 0xee, 0xf9),
            danger: Color::Rgb(0xef, 0x44, 0x44),
        },
        Scheme::Dark => Palette {
            background: Color::Rgb(0x0b, 0x0f, 0x14),
            surface: Color::Rgb(0x12, 0x19, 0x22),
            text: Color::Rgb(0xe5, 0xe7, 0xeb),
            text_muted: Color::Rgb(0x9a, 0xa4, 0xaf),
            border: Color::Rgb(0x1f, 0x2a, 0x37),
            tint: Color::Rgb(0x60, 0xa5, 0xfa),
            chip: Color::Rgb(0x24, 0x34, 0x42),
            danger: Color::Rgb(0xf8, 0x71, 0x71),
        },
    }
}

/// Best-effort detection of the terminal's appearance.
///
/// Uses the `COLORFGBG` convention (last field is the background color index)
/// and falls back to dark, the common case for terminals.
#[must_use]
pub fn detect_system_scheme() -> Scheme {
    match std::env::var("COLORFGBG") {
        Ok(value) => {
            let background = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok());
            match background {
                Some(index) if index >= 7 && index != 8 => Scheme::Light,
                _ => Scheme::Dark,
            }
        }
        Err(_) => Scheme::Dark,
    }
}
