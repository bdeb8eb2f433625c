//! TUI module for the interactive game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Command, Transition)
//! - `controls`: the buttons each screen offers
//! - `update`: pure transitions, plus command application
//! - `view`: pure rendering
//! - `button`, `theme`: presentation
//! - `run`: effects (terminal, event loop)

pub mod button;
pub mod controls;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
