//! Interactive controls of each screen.
//!
//! Both the view (to draw) and the update (to dispatch a press) derive
//! buttons from here, so what is pressed is always what is shown.

use crate::game::{Game, Phase};
use crate::types::GameMode;

use super::button::{Button, Size, Variant};
use super::state::Command;
use super::theme;

/// Label of the button that returns to mode selection.
pub const PLAY_AGAIN: &str = "Play Again";

/// The buttons on the current screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Focusable buttons, in focus order.
    pub buttons: Vec<Button<Command>>,
    /// Disabled reference buttons shown after a guess.
    pub reference: Vec<Button<Command>>,
}

/// Build the controls for the current phase with `focus` highlighted.
pub fn controls(game: &Game, focus: usize, option_size: Size) -> Controls {
    match game.phase() {
        Phase::ModeSelect => Controls {
            buttons: GameMode::ALL
                .iter()
                .enumerate()
                .map(|(i, &mode)| {
                    Button::new(mode.label())
                        .size(Size::Large)
                        .focused(i == focus)
                        .on_press(Command::StartGame(mode))
                })
                .collect(),
            reference: Vec::new(),
        },
        Phase::Guessing(round) => Controls {
            buttons: round
                .options
                .iter()
                .enumerate()
                .map(|(i, &color)| {
                    Button::new(color.to_string())
                        .size(option_size)
                        .focused(i == focus)
                        .on_press(Command::SubmitGuess(color))
                })
                .collect(),
            reference: Vec::new(),
        },
        Phase::Result { round, .. } => Controls {
            buttons: vec![
                Button::new(PLAY_AGAIN)
                    .focused(focus == 0)
                    .on_press(Command::Reset),
            ],
            reference: round
                .options
                .iter()
                .map(|&color| {
                    Button::new(color.to_string())
                        .variant(Variant::Secondary)
                        .size(option_size)
                        .style(theme::swatch_style(color).patch(theme::STYLE_SWATCH_TEXT))
                        .disabled(true)
                        .on_press(Command::SubmitGuess(color))
                })
                .collect(),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
