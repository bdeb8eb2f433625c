//! Output formatting for the non-interactive commands.
//!
//! Pure functions: data in, formatted string out. No I/O.

use serde::Serialize;

use crate::game::Round;
use crate::types::{GameMode, HexColor, OutputFormat};

/// One row of the mode table.
#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub mode: GameMode,
    pub label: &'static str,
    pub options: usize,
}

/// A generated round, with the target marked among the options.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSetReport {
    pub mode: GameMode,
    pub target: HexColor,
    pub options: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub color: HexColor,
    pub is_target: bool,
}

impl From<&Round> for OptionSetReport {
    fn from(round: &Round) -> Self {
        OptionSetReport {
            mode: round.mode,
            target: round.target,
            options: round
                .options
                .iter()
                .map(|&color| OptionEntry {
                    color,
                    is_target: color == round.target,
                })
                .collect(),
        }
    }
}

/// The fixed mode table, in menu order.
pub fn mode_table() -> Vec<ModeInfo> {
    GameMode::ALL
        .iter()
        .map(|&mode| ModeInfo {
            mode,
            label: mode.label(),
            options: mode.option_count(),
        })
        .collect()
}

// ============================================================================
// MODES
// ============================================================================

/// Format the mode table.
///
/// # Errors
/// Only if JSON serialization fails.
pub fn format_modes(format: OutputFormat) -> Result<String, serde_json::Error> {
    let table = mode_table();
    match format {
        OutputFormat::Human => {
            let mut out = String::from("Mode          Options\n");
            for row in &table {
                out.push_str(&format!("{:<13} {}\n", row.label, row.options));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&table),
    }
}

// ============================================================================
// COLORS
// ============================================================================

/// Format a list of colors, one per line or as a JSON array.
///
/// # Errors
/// Only if JSON serialization fails.
pub fn format_colors(colors: &[HexColor], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(colors.iter().map(|c| format!("{}\n", c)).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(colors),
    }
}

// ============================================================================
// OPTION SETS
// ============================================================================

/// Format a generated round.
///
/// # Errors
/// Only if JSON serialization fails.
pub fn format_option_set(
    report: &OptionSetReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => {
            let mut out = format!("Mode:   {}\nTarget: {}\n\n", report.mode, report.target);
            for (i, entry) in report.options.iter().enumerate() {
                let marker = if entry.is_target { "  <- target" } else { "" };
                out.push_str(&format!("  {:>2}. {}{}\n", i + 1, entry.color, marker));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

// ============================================================================
// TESTS
// ============================================================================
