//! Domain types for color-guess.
//!
//! Difficulty modes, the hex color value, and round outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Largest 24-bit RGB value (`#ffffff`).
pub const MAX_RGB: u32 = 0xFF_FFFF;

/// Number of distinct colors in the 24-bit RGB space.
pub const COLOR_SPACE: usize = MAX_RGB as usize + 1;

/// An RGB color, displayed as `#` followed by six lowercase hex digits.
///
/// Stored as the packed `0xRRGGBB` integer, so two colors are equal
/// exactly when their canonical strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor(u32);

impl HexColor {
    /// Build a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are discarded.
    pub const fn from_u32(value: u32) -> Self {
        HexColor(value & MAX_RGB)
    }

    /// Build a color from its three channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        HexColor(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// The next color in the space, wrapping `#ffffff` to `#000000`.
    pub const fn wrapping_next(self) -> Self {
        HexColor::from_u32(self.0.wrapping_add(1))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::color::parse_hex(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// GAME MODES
// ============================================================================

/// Difficulty tier. Controls how many options a round offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl GameMode {
    /// All modes in menu order.
    pub const ALL: [GameMode; 4] = [
        GameMode::Beginner,
        GameMode::Intermediate,
        GameMode::Advanced,
        GameMode::Master,
    ];

    /// Number of color options shown in a round of this mode.
    pub const fn option_count(self) -> usize {
        match self {
            GameMode::Beginner => 4,
            GameMode::Intermediate => 6,
            GameMode::Advanced => 8,
            GameMode::Master => 10,
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Beginner => "Beginner",
            GameMode::Intermediate => "Intermediate",
            GameMode::Advanced => "Advanced",
            GameMode::Master => "Master",
        }
    }

    /// Position in [`GameMode::ALL`].
    pub fn index(self) -> usize {
        GameMode::ALL
            .iter()
            .position(|&m| m == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// Result of a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The color the player picked.
    pub guess: HexColor,
    /// Whether it matched the target.
    pub correct: bool,
}

impl Outcome {
    /// Heading shown on the result screen.
    pub const fn headline(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Incorrect!" }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Default bound on consecutive duplicate draws when building options.
pub const DEFAULT_MAX_DRAW_ATTEMPTS: u32 = 64;

/// Configuration for option set building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionConfig {
    /// Consecutive rejected draws before falling back to a deterministic
    /// walk of the color space.
    pub max_draw_attempts: u32,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            max_draw_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
