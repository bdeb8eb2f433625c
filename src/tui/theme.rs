//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer and the button widget.
//!
//! Color semantics:
//! - Green: correct guess
//! - Red: incorrect guess, focused primary button
//! - Cyan: keybinding hints
//! - Dim: de-emphasized (labels, help line)
//! - Bold: titles, headings

use ratatui::style::{Color, Modifier, Style};

use crate::types::HexColor;

// ============================================================================
// PALETTE
// ============================================================================

const GRAY_100: Color = Color::Rgb(0xf3, 0xf4, 0xf6);
const GRAY_200: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
const GRAY_300: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
const GRAY_800: Color = Color::Rgb(0x1f, 0x29, 0x37);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct guess.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Incorrect guess.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Keybinding hint.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Screen heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_BUTTON_PRIMARY: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_PRIMARY_FOCUS: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_SECONDARY: Style = Style::new()
    .fg(GRAY_800)
    .bg(GRAY_200)
    .add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_SECONDARY_FOCUS: Style = Style::new()
    .fg(GRAY_800)
    .bg(GRAY_300)
    .add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_OUTLINE: Style = Style::new().add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_OUTLINE_FOCUS: Style = Style::new()
    .fg(GRAY_800)
    .bg(GRAY_100)
    .add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_BORDER: Style = Style::new().fg(GRAY_300);

pub const STYLE_BUTTON_BORDER_FOCUS: Style = Style::new().fg(Color::Cyan);

/// Text on a reference button painted with its own color.
pub const STYLE_SWATCH_TEXT: Style = Style::new().fg(Color::Black);

// ============================================================================
// SWATCHES
// ============================================================================

/// Truecolor terminal color for a game color.
pub fn swatch_color(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Style that paints a cell's background with `color`.
pub fn swatch_style(color: HexColor) -> Style {
    Style::new().bg(swatch_color(color))
}

// ============================================================================
// TESTS
// ============================================================================
