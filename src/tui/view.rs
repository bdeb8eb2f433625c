//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the game phase. The only effect is writing to the
//! frame buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::game::{Phase, Round};
use crate::types::{GameMode, Outcome};

use super::button::Button;
use super::controls::{Controls, controls};
use super::state::{App, Command, GRID_COLUMNS};
use super::theme;

/// Game title shown on the mode-select and guessing screens.
pub const TITLE: &str = "Color Guessing Game";

const SWATCH_WIDTH: u16 = 32;
const SWATCH_HEIGHT: u16 = 8;
const MODE_BUTTON_WIDTH: u16 = 24;
const OPTION_BUTTON_WIDTH: u16 = 16;
const COLUMN_GAP: u16 = 2;
const ROW_GAP: u16 = 1;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let [content, help] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(render_help(app.game.phase()), help);

    let controls = controls(&app.game, app.focus, app.option_size);
    match app.game.phase() {
        Phase::ModeSelect => render_mode_select(&controls, frame, content),
        Phase::Guessing(round) => render_guessing(round, &controls, frame, content),
        Phase::Result { round, outcome } => {
            render_result(round, outcome, &controls, frame, content)
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Help line showing available keybindings for the current screen.
fn render_help(phase: &Phase) -> Paragraph<'static> {
    let hints: &[(&str, &str)] = match phase {
        Phase::ModeSelect => &[
            ("[←↑↓→]", " move  "),
            ("[Enter]", " start  "),
            ("[1-4]", " pick mode  "),
            ("[q]", " quit"),
        ],
        Phase::Guessing(_) => &[
            ("[←↑↓→]", " move  "),
            ("[Enter]", " guess  "),
            ("[1-9,0]", " pick  "),
            ("[Esc]", " modes  "),
            ("[q]", " quit"),
        ],
        Phase::Result { .. } => &[("[Enter/r]", " play again  "), ("[q]", " quit")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|&(key, what)| {
            [
                Span::styled(key, theme::STYLE_INTERACTIVE),
                Span::styled(what, theme::STYLE_HELP),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).centered()
}

/// A `width`-wide column centered horizontally in `area`.
fn center_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Rows needed for a grid of `count` buttons of the given height.
fn grid_height(count: usize, button_height: u16) -> u16 {
    let rows = u16::try_from(count.div_ceil(GRID_COLUMNS)).unwrap_or(u16::MAX);
    if rows == 0 {
        return 0;
    }
    rows.saturating_mul(button_height)
        .saturating_add((rows - 1) * ROW_GAP)
}

/// Cell rectangles for a centered `GRID_COLUMNS`-wide grid.
///
/// Cells falling outside `area` are clipped (possibly to empty).
fn grid_cells(area: Rect, count: usize, cell_width: u16, cell_height: u16) -> Vec<Rect> {
    let columns = GRID_COLUMNS as u16;
    let total_width = cell_width
        .saturating_mul(columns)
        .saturating_add(COLUMN_GAP * (columns - 1));
    let origin = center_column(area, total_width);

    (0..count)
        .map(|i| {
            let row = (i / GRID_COLUMNS) as u16;
            let col = (i % GRID_COLUMNS) as u16;
            Rect::new(
                origin
                    .x
                    .saturating_add(col.saturating_mul(cell_width.saturating_add(COLUMN_GAP))),
                origin
                    .y
                    .saturating_add(row.saturating_mul(cell_height.saturating_add(ROW_GAP))),
                cell_width,
                cell_height,
            )
            .intersection(area)
        })
        .collect()
}

/// Draw a button grid, widening cells to fit the longest label.
fn render_grid(buttons: &[Button<Command>], min_width: u16, frame: &mut Frame, area: Rect) {
    let cell_width = buttons
        .iter()
        .map(Button::width)
        .max()
        .unwrap_or(0)
        .max(min_width);
    let cell_height = buttons.iter().map(Button::height).max().unwrap_or(1);

    for (button, cell) in buttons
        .iter()
        .zip(grid_cells(area, buttons.len(), cell_width, cell_height))
    {
        if !cell.is_empty() {
            frame.render_widget(button, cell);
        }
    }
}

fn buttons_height(buttons: &[Button<Command>]) -> u16 {
    let button_height = buttons.iter().map(Button::height).max().unwrap_or(1);
    grid_height(buttons.len(), button_height)
}

/// A solid block painted with the round's target color.
fn render_swatch(round: &Round, frame: &mut Frame, area: Rect) {
    let swatch = Block::new().style(theme::swatch_style(round.target));
    frame.render_widget(swatch, center_column(area, SWATCH_WIDTH));
}

// ============================================================================
// SCREEN: MODE SELECT
// ============================================================================

fn render_mode_select(controls: &Controls, frame: &mut Frame, area: Rect) {
    let [title, _, grid] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(buttons_height(&controls.buttons)),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, theme::STYLE_TITLE)).centered(),
        title,
    );
    render_grid(&controls.buttons, MODE_BUTTON_WIDTH, frame, grid);
}

// ============================================================================
// SCREEN: GUESSING
// ============================================================================

fn mode_line(mode: GameMode) -> Line<'static> {
    Line::from(vec![
        Span::raw("Mode: "),
        Span::styled(mode.label(), theme::STYLE_IMPORTANT),
    ])
}

fn render_guessing(round: &Round, controls: &Controls, frame: &mut Frame, area: Rect) {
    let [title, mode, _, swatch, _, grid] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(SWATCH_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(buttons_height(&controls.buttons)),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, theme::STYLE_TITLE)).centered(),
        title,
    );
    frame.render_widget(Paragraph::new(mode_line(round.mode)).centered(), mode);
    render_swatch(round, frame, swatch);
    render_grid(&controls.buttons, OPTION_BUTTON_WIDTH, frame, grid);
}

// ============================================================================
// SCREEN: RESULT
// ============================================================================

fn render_result(
    round: &Round,
    outcome: &Outcome,
    controls: &Controls,
    frame: &mut Frame,
    area: Rect,
) {
    let [headline, _, answer, _, swatch, _, play_again, _, label, _, reference] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(SWATCH_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(buttons_height(&controls.buttons)),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(buttons_height(&controls.reference)),
        ])
        .flex(Flex::Center)
        .areas(area);

    let headline_style = if outcome.correct {
        theme::STYLE_CORRECT
    } else {
        theme::STYLE_INCORRECT
    };
    frame.render_widget(
        Paragraph::new(Span::styled(outcome.headline(), headline_style)).centered(),
        headline,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("The correct color was: "),
            Span::styled(round.target.to_string(), theme::STYLE_IMPORTANT),
        ]))
        .centered(),
        answer,
    );

    render_swatch(round, frame, swatch);
    if let Some(button) = controls.buttons.first() {
        let cell = center_column(play_again, button.width().max(MODE_BUTTON_WIDTH));
        frame.render_widget(button, cell);
    }

    frame.render_widget(
        Paragraph::new(Span::styled("Reference", theme::STYLE_DIM)).centered(),
        label,
    );
    render_grid(&controls.reference, OPTION_BUTTON_WIDTH, frame, reference);
}

// ============================================================================
// TESTS
// ============================================================================
