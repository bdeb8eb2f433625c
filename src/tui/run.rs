//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and supplies the random source to game commands.
//!
//! Single-threaded: the loop blocks on the next terminal event, handles
//! it to completion, redraws, and repeats.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::types::GameMode;

use super::state::{Action, App, Command, Transition};
use super::update::{apply, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Esc | KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') => Some(Action::Quit),

        KeyCode::Char(c @ '0'..='9') => Some(Action::NumberKey(c as u8 - b'0')),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the game until the player quits.
///
/// With `start` set, the first round begins immediately in that mode.
pub fn run(config: &Config, start: Option<GameMode>) -> Result<(), Error> {
    let mut app = App::new(config);
    let mut rng = rand::rng();

    if let Some(mode) = start {
        apply(&mut app, Command::StartGame(mode), &mut rng)?;
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!("tui started");

    let result = event_loop(&mut terminal, &mut app, &mut rng);

    restore_terminal()?;
    info!("tui stopped");
    result
}

fn event_loop<R: rand::Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rng: &mut R,
) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Resize and other events just trigger the redraw above.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = map_key(key) else {
            continue;
        };

        match update(app, &action) {
            Transition::Focus(focus) => app.focus = focus,
            Transition::Quit => app.should_quit = true,
            Transition::Command(command) => {
                debug!(?command, "applying");
                apply(app, command, rng)?;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
