//! color-guess: match a color swatch to its hex code.

pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod options;
pub mod report;
pub mod tui;
pub mod types;
