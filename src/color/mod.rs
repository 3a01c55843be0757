//! Color modes and palette quantization.
//!
//! Three fidelity tiers are supported:
//! - `TrueColor` - raw 24-bit RGB, no quantization
//! - `Ansi256` - 6x6x6 color cube (indices 16-231)
//! - `Ansi16` - the classic 8 colors plus a brightness bit

mod quantize;

pub use quantize::{rgb_to_ansi16, rgb_to_ansi256};

use std::fmt;
use std::str::FromStr;

/// Output color fidelity, selected once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    TrueColor,
    Ansi256,
    Ansi16,
}

impl ColorMode {
    /// All modes, in help-text order.
    pub const ALL: [ColorMode; 3] = [ColorMode::TrueColor, ColorMode::Ansi256, ColorMode::Ansi16];

    /// Canonical name, as shown in the info bar and help text.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::TrueColor => "TrueColor",
            ColorMode::Ansi256 => "Ansi256",
            ColorMode::Ansi16 => "Ansi16",
        }
    }

    /// Reduce an RGB triple to this mode's color key.
    ///
    /// For `TrueColor` the key is the packed `0xRRGGBB` value; for the
    /// palette modes it is the palette index.
    #[inline]
    pub fn key(&self, r: u8, g: u8, b: u8) -> u32 {
        match self {
            ColorMode::TrueColor => (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b),
            ColorMode::Ansi256 => u32::from(rgb_to_ansi256(r, g, b)),
            ColorMode::Ansi16 => u32::from(rgb_to_ansi16(r, g, b)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color mode: {0}")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseColorModeError(s.to_string()))
    }
}
