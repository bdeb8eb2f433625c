//! TUI state algebra: pure types, zero effects.
//!
//! The game session (`Game`) already encodes which screen is showing;
//! the TUI adds keyboard focus on top. Key presses become [`Action`]s,
//! the pure update turns an action into a [`Transition`], and game
//! mutations travel as [`Command`]s so the effects layer can supply the
//! random source.

use crate::config::Config;
use crate::game::Game;
use crate::types::{GameMode, HexColor};

use super::button::Size;

/// Buttons are laid out in a grid this many columns wide.
pub const GRID_COLUMNS: usize = 2;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the game session for as long as the TUI runs; nothing outlives it.
#[derive(Debug, Clone)]
pub struct App {
    /// The session state machine.
    pub game: Game,

    /// Index of the focused button among the screen's enabled controls.
    pub focus: usize,

    /// Mode focused whenever the mode-select screen opens fresh.
    pub default_mode: GameMode,

    /// Size of color option buttons.
    pub option_size: Size,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App on the mode-select screen.
    pub fn new(config: &Config) -> Self {
        App {
            game: Game::new(config.option_config()),
            focus: config.game.default_mode.index(),
            default_mode: config.game.default_mode,
            option_size: config.ui.option_size,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(&Config::default())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Press the focused button.
    Activate,
    /// Press a button by number (1-based; `0` means the tenth).
    NumberKey(u8),
    /// Play again / back to mode selection.
    Reset,
    Quit,
}

// ============================================================================
// COMMANDS & TRANSITIONS
// ============================================================================

/// A game mutation requested by a button press.
///
/// This is the payload every button carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartGame(GameMode),
    SubmitGuess(HexColor),
    Reset,
}

/// Result of a pure state transition.
///
/// Pure code describes WHAT should happen; the effects boundary applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep the screen, focus this button (may be unchanged).
    Focus(usize),
    /// Mutate the game.
    Command(Command),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
