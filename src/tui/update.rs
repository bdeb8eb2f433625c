//! State transitions: (App, Action) → Transition, and Command application.
//!
//! `update` is pure and fully testable without a terminal. Unhandled
//! actions keep the current focus (no-op). `apply` is where a command
//! meets the game and the random source.

use rand::Rng;

use crate::error::BuildError;
use crate::game::Phase;

use super::controls::controls;
use super::state::{Action, App, Command, GRID_COLUMNS, Transition};

/// Pure state transition function.
pub fn update(app: &App, action: &Action) -> Transition {
    let buttons = controls(&app.game, app.focus, app.option_size).buttons;
    let len = buttons.len();
    let focus = app.focus;

    match action {
        Action::Quit => Transition::Quit,
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            Transition::Focus(move_focus(focus, len, action))
        }
        Action::Activate => buttons
            .get(focus)
            .and_then(|b| b.press())
            .cloned()
            .map(Transition::Command)
            .unwrap_or(Transition::Focus(focus)),
        Action::NumberKey(n) => match number_to_index(*n, app.game.phase()) {
            Some(i) => buttons
                .get(i)
                .and_then(|b| b.press())
                .cloned()
                .map(Transition::Command)
                .unwrap_or(Transition::Focus(focus)),
            None => Transition::Focus(focus),
        },
        Action::Reset => match app.game.phase() {
            Phase::ModeSelect => Transition::Focus(focus),
            _ => Transition::Command(Command::Reset),
        },
    }
}

/// Apply a command to the game and reposition focus.
///
/// # Errors
/// Propagates [`BuildError`] from starting a round; unreachable for the
/// built-in modes.
pub fn apply<R: Rng>(app: &mut App, command: Command, rng: &mut R) -> Result<(), BuildError> {
    match command {
        Command::StartGame(mode) => {
            if app.game.start_game(mode, rng)? {
                app.focus = 0;
            }
        }
        Command::SubmitGuess(color) => {
            if app.game.submit_guess(color).is_some() {
                // Only "Play Again" is focusable on the result screen.
                app.focus = 0;
            }
        }
        Command::Reset => {
            let last_mode = app.game.mode().unwrap_or(app.default_mode);
            app.game.reset();
            app.focus = last_mode.index();
        }
    }
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// Move focus within a `GRID_COLUMNS`-wide grid of `len` buttons.
///
/// Moves that would leave the grid keep the current focus.
fn move_focus(focus: usize, len: usize, action: &Action) -> usize {
    if len == 0 {
        return 0;
    }
    let focus = focus.min(len - 1);
    let column = focus % GRID_COLUMNS;

    match action {
        Action::MoveLeft if column > 0 => focus - 1,
        Action::MoveRight if column + 1 < GRID_COLUMNS && focus + 1 < len => focus + 1,
        Action::MoveUp if focus >= GRID_COLUMNS => focus - GRID_COLUMNS,
        Action::MoveDown if focus + GRID_COLUMNS < len => focus + GRID_COLUMNS,
        _ => focus,
    }
}

/// Map a number key to a button index for the current phase.
///
/// Digits are 1-based; on the guessing screen `0` picks the tenth option.
/// Number keys do nothing on the result screen.
fn number_to_index(n: u8, phase: &Phase) -> Option<usize> {
    match (phase, n) {
        (Phase::ModeSelect, 1..=4) => Some(usize::from(n) - 1),
        (Phase::Guessing(_), 1..=9) => Some(usize::from(n) - 1),
        (Phase::Guessing(_), 0) => Some(9),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameMode, HexColor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    fn guessing(mode: GameMode) -> App {
        let mut app = App::default();
        apply(&mut app, Command::StartGame(mode), &mut rng()).unwrap();
        app
    }

    fn finished(mode: GameMode) -> App {
        let mut app = guessing(mode);
        let target = app.game.target().unwrap();
        apply(&mut app, Command::SubmitGuess(target), &mut rng()).unwrap();
        app
    }

    // -- Focus movement --

    #[test]
    fn grid_movement_in_two_columns() {
        assert_eq!(move_focus(0, 4, &Action::MoveRight), 1);
        assert_eq!(move_focus(1, 4, &Action::MoveLeft), 0);
        assert_eq!(move_focus(0, 4, &Action::MoveDown), 2);
        assert_eq!(move_focus(3, 4, &Action::MoveUp), 1);
    }

    #[test]
    fn grid_movement_stops_at_edges() {
        assert_eq!(move_focus(0, 4, &Action::MoveLeft), 0);
        assert_eq!(move_focus(1, 4, &Action::MoveRight), 1);
        assert_eq!(move_focus(0, 4, &Action::MoveUp), 0);
        assert_eq!(move_focus(2, 4, &Action::MoveDown), 2);
    }

    #[test]
    fn grid_movement_single_button_stays_put() {
        for action in [Action::MoveUp, Action::MoveDown, Action::MoveLeft, Action::MoveRight] {
            assert_eq!(move_focus(0, 1, &action), 0);
        }
    }

    #[test]
    fn grid_movement_clamps_stale_focus() {
        assert_eq!(move_focus(9, 4, &Action::MoveUp), 1);
    }

    // -- Mode select --

    #[test]
    fn mode_select_activate_starts_focused_mode() {
        let mut app = App::default();
        app.focus = 3;
        assert_eq!(
            update(&app, &Action::Activate),
            Transition::Command(Command::StartGame(GameMode::Master))
        );
    }

    #[test]
    fn mode_select_number_keys_pick_modes() {
        let app = App::default();
        for (n, mode) in (1u8..=4).zip(GameMode::ALL) {
            assert_eq!(
                update(&app, &Action::NumberKey(n)),
                Transition::Command(Command::StartGame(mode))
            );
        }
        assert_eq!(update(&app, &Action::NumberKey(5)), Transition::Focus(0));
    }

    #[test]
    fn mode_select_reset_is_noop() {
        let app = App::default();
        assert_eq!(update(&app, &Action::Reset), Transition::Focus(0));
    }

    #[test]
    fn quit_from_every_screen() {
        for app in [App::default(), guessing(GameMode::Beginner), finished(GameMode::Beginner)] {
            assert_eq!(update(&app, &Action::Quit), Transition::Quit);
        }
    }

    // -- Guessing --

    #[test]
    fn start_game_focuses_first_option() {
        let app = guessing(GameMode::Advanced);
        assert_eq!(app.focus, 0);
        assert_eq!(app.game.options().len(), 8);
    }

    #[test]
    fn guessing_activate_submits_focused_option() {
        let mut app = guessing(GameMode::Beginner);
        app.focus = 2;
        let expected = app.game.options()[2];
        assert_eq!(
            update(&app, &Action::Activate),
            Transition::Command(Command::SubmitGuess(expected))
        );
    }

    #[test]
    fn guessing_number_keys_pick_options() {
        let app = guessing(GameMode::Master);
        let options = app.game.options().to_vec();
        assert_eq!(
            update(&app, &Action::NumberKey(1)),
            Transition::Command(Command::SubmitGuess(options[0]))
        );
        assert_eq!(
            update(&app, &Action::NumberKey(0)),
            Transition::Command(Command::SubmitGuess(options[9]))
        );
    }

    #[test]
    fn guessing_number_beyond_options_is_noop() {
        let app = guessing(GameMode::Beginner);
        assert_eq!(update(&app, &Action::NumberKey(5)), Transition::Focus(0));
        assert_eq!(update(&app, &Action::NumberKey(0)), Transition::Focus(0));
    }

    #[test]
    fn guessing_reset_goes_back_to_modes() {
        let app = guessing(GameMode::Beginner);
        assert_eq!(update(&app, &Action::Reset), Transition::Command(Command::Reset));
    }

    #[test]
    fn submitting_the_target_is_correct() {
        let app = finished(GameMode::Beginner);
        assert!(app.game.is_correct());
        assert_eq!(app.game.outcome().unwrap().headline(), "Correct!");
    }

    #[test]
    fn submitting_a_decoy_is_incorrect() {
        let mut app = guessing(GameMode::Beginner);
        let target = app.game.target().unwrap();
        let decoy = *app.game.options().iter().find(|&&c| c != target).unwrap();
        apply(&mut app, Command::SubmitGuess(decoy), &mut rng()).unwrap();
        assert_eq!(app.game.outcome().unwrap().headline(), "Incorrect!");
        assert_eq!(app.game.target(), Some(target));
    }

    // -- Result --

    #[test]
    fn result_activate_plays_again() {
        let app = finished(GameMode::Master);
        assert_eq!(update(&app, &Action::Activate), Transition::Command(Command::Reset));
    }

    #[test]
    fn result_number_keys_are_inert() {
        let app = finished(GameMode::Master);
        for n in 0..=9 {
            assert_eq!(update(&app, &Action::NumberKey(n)), Transition::Focus(0));
        }
    }

    #[test]
    fn result_focus_cannot_reach_reference_buttons() {
        let app = finished(GameMode::Master);
        for action in [Action::MoveDown, Action::MoveRight] {
            assert_eq!(update(&app, &action), Transition::Focus(0));
        }
    }

    #[test]
    fn late_guess_command_is_ignored() {
        let mut app = finished(GameMode::Beginner);
        let before = app.game.phase().clone();
        apply(&mut app, Command::SubmitGuess(HexColor::from_u32(1)), &mut rng()).unwrap();
        assert_eq!(app.game.phase(), &before);
    }

    #[test]
    fn reset_refocuses_last_played_mode() {
        let mut app = finished(GameMode::Advanced);
        apply(&mut app, Command::Reset, &mut rng()).unwrap();
        assert_eq!(app.game.phase(), &Phase::ModeSelect);
        assert_eq!(app.focus, GameMode::Advanced.index());
    }

    #[test]
    fn reset_twice_lands_on_mode_select() {
        let mut app = finished(GameMode::Beginner);
        apply(&mut app, Command::Reset, &mut rng()).unwrap();
        apply(&mut app, Command::Reset, &mut rng()).unwrap();
        assert_eq!(app.game.phase(), &Phase::ModeSelect);
        assert_eq!(app.game.mode(), None);
    }

    #[test]
    fn start_command_during_a_round_keeps_focus_and_round() {
        let mut app = guessing(GameMode::Beginner);
        app.focus = 3;
        let before = app.game.phase().clone();
        apply(&mut app, Command::StartGame(GameMode::Master), &mut rng()).unwrap();
        assert_eq!(app.game.phase(), &before);
        assert_eq!(app.focus, 3);
    }

    #[test]
    fn new_round_after_result_clears_outcome() {
        let mut app = finished(GameMode::Beginner);
        apply(&mut app, Command::StartGame(GameMode::Intermediate), &mut rng()).unwrap();
        assert!(!app.game.is_game_over());
        assert_eq!(app.game.options().len(), 6);
    }
}
