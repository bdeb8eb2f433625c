//! Game session state machine.
//!
//! ```text
//! ModeSelect --start_game--> Guessing --submit_guess--> Result
//!      ^                                                  |
//!      +----------------------reset-----------------------+
//! ```
//!
//! The session is a single [`Phase`] value. A round only exists while
//! guessing or showing a result, and an outcome only exists once a
//! guess has been made, so the flag combinations the screens read are
//! derived rather than stored.

use rand::Rng;
use tracing::{debug, info};

use crate::color::random_color;
use crate::error::BuildError;
use crate::options::build_options;
use crate::types::{GameMode, HexColor, OptionConfig, Outcome};

/// One round: the mode, the color to find, and the shuffled options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub mode: GameMode,
    pub target: HexColor,
    pub options: Vec<HexColor>,
}

impl Round {
    /// Generate a fresh target and option set for `mode`.
    ///
    /// # Errors
    /// Only if the mode's option count is outside the color space,
    /// which no built-in mode is.
    pub fn generate<R: Rng>(
        mode: GameMode,
        config: &OptionConfig,
        rng: &mut R,
    ) -> Result<Self, BuildError> {
        let target = random_color(rng);
        let options = build_options(target, mode.option_count(), config, rng)?;
        Ok(Round {
            mode,
            target,
            options,
        })
    }
}

/// Where the session is in the mode select → guess → result cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// No mode chosen yet.
    #[default]
    ModeSelect,
    /// A round is on screen, waiting for a guess.
    Guessing(Round),
    /// The guess is in; the round is shown for reference.
    Result { round: Round, outcome: Outcome },
}

/// The session state, owned by whoever drives the UI.
#[derive(Debug, Clone, Default)]
pub struct Game {
    phase: Phase,
    config: OptionConfig,
}

impl Game {
    /// A session on the mode-select screen.
    pub fn new(config: OptionConfig) -> Self {
        Game {
            phase: Phase::ModeSelect,
            config,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The current round, if one is in progress or being reviewed.
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::ModeSelect => None,
            Phase::Guessing(round) | Phase::Result { round, .. } => Some(round),
        }
    }

    /// Active mode; `None` on the mode-select screen.
    pub fn mode(&self) -> Option<GameMode> {
        self.round().map(|r| r.mode)
    }

    pub fn target(&self) -> Option<HexColor> {
        self.round().map(|r| r.target)
    }

    /// Options of the current round; empty on the mode-select screen.
    pub fn options(&self) -> &[HexColor] {
        self.round().map(|r| r.options.as_slice()).unwrap_or_default()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Result { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// True once a guess has been registered for the current round.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// True if the registered guess matched the target.
    pub fn is_correct(&self) -> bool {
        self.outcome().is_some_and(|o| o.correct)
    }

    /// True when the result screen should be shown.
    pub fn show_result(&self) -> bool {
        matches!(self.phase, Phase::Result { .. })
    }

    /// Begin a new round in `mode`. Ignored while a round is awaiting
    /// a guess.
    ///
    /// Returns whether a round was started.
    ///
    /// # Errors
    /// Propagates [`BuildError`] from option building; unreachable for
    /// the built-in modes.
    pub fn start_game<R: Rng>(
        &mut self,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<bool, BuildError> {
        if let Phase::Guessing(round) = &self.phase {
            debug!(mode = %mode, current = %round.mode, "start ignored during a round");
            return Ok(false);
        }
        let round = Round::generate(mode, &self.config, rng)?;
        debug!(
            mode = %mode,
            target = %round.target,
            options = round.options.len(),
            "round started"
        );
        self.phase = Phase::Guessing(round);
        Ok(true)
    }

    /// Register a guess. Ignored unless a round is awaiting one.
    ///
    /// Returns the outcome when the guess was accepted.
    pub fn submit_guess(&mut self, guess: HexColor) -> Option<Outcome> {
        match std::mem::take(&mut self.phase) {
            Phase::Guessing(round) => {
                let outcome = Outcome {
                    guess,
                    correct: guess == round.target,
                };
                info!(
                    mode = %round.mode,
                    target = %round.target,
                    guess = %guess,
                    correct = outcome.correct,
                    "guess submitted"
                );
                self.phase = Phase::Result { round, outcome };
                Some(outcome)
            }
            other => {
                debug!(guess = %guess, "guess ignored outside of a round");
                self.phase = other;
                None
            }
        }
    }

    /// Drop the current round and return to mode selection.
    pub fn reset(&mut self) {
        if self.phase != Phase::ModeSelect {
            debug!("back to mode select");
        }
        self.phase = Phase::ModeSelect;
    }
}

// ============================================================================
// TESTS
// ============================================================================
