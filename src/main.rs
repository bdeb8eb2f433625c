//! color-guess CLI
//!
//! Guess the hex code of a color swatch in the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use color_guess::color::{parse_hex, random_color};
use color_guess::config::Config;
use color_guess::error::Error;
use color_guess::game::Round;
use color_guess::logging::init_tracing;
use color_guess::options::build_options;
use color_guess::report::{OptionSetReport, format_colors, format_modes, format_option_set};
use color_guess::types::{GameMode, OutputFormat};

/// Upper bound for `color --count`.
const MAX_COLOR_COUNT: u64 = 10_000;

#[derive(Parser)]
#[command(name = "color-guess")]
#[command(about = "Match a color swatch to its hex code")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play {
        /// Skip the mode menu and start a round right away
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// List the game modes and their option counts
    Modes {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print random colors
    Color {
        /// How many colors to print
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..=MAX_COLOR_COUNT)
        )]
        count: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print a generated option set for a mode
    Options {
        /// Game mode
        #[arg(long, value_enum)]
        mode: ModeArg,

        /// Target color as #rrggbb (default: random)
        #[arg(long)]
        target: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Beginner => GameMode::Beginner,
            ModeArg::Intermediate => GameMode::Intermediate,
            ModeArg::Advanced => GameMode::Advanced,
            ModeArg::Master => GameMode::Master,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = Config::load(cli.config.as_deref())
        .map_err(Error::from)
        .and_then(|config| {
            debug!(?config, "config loaded");
            match cli.command {
                None => cmd_play(&config, None),
                Some(Commands::Play { mode }) => cmd_play(&config, mode.map(Into::into)),
                Some(Commands::Modes { format }) => cmd_modes(format.into()),
                Some(Commands::Color { count, format }) => cmd_color(count, format.into()),
                Some(Commands::Options { mode, target, format }) => {
                    cmd_options(&config, mode.into(), target.as_deref(), format.into())
                }
            }
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: &Config, mode: Option<GameMode>) -> Result<(), Error> {
    color_guess::tui::run(config, mode)
}

fn cmd_modes(format: OutputFormat) -> Result<(), Error> {
    print!("{}", format_modes(format)?);
    Ok(())
}

fn cmd_color(count: u64, format: OutputFormat) -> Result<(), Error> {
    let mut rng = rand::rng();
    let colors: Vec<_> = (0..count).map(|_| random_color(&mut rng)).collect();
    print!("{}", format_colors(&colors, format)?);
    Ok(())
}

fn cmd_options(
    config: &Config,
    mode: GameMode,
    target: Option<&str>,
    format: OutputFormat,
) -> Result<(), Error> {
    let mut rng = rand::rng();
    let option_config = config.option_config();

    let round = match target {
        Some(hex) => {
            let target = parse_hex(hex)?;
            let options = build_options(target, mode.option_count(), &option_config, &mut rng)?;
            Round {
                mode,
                target,
                options,
            }
        }
        None => Round::generate(mode, &option_config, &mut rng)?,
    };

    print!("{}", format_option_set(&OptionSetReport::from(&round), format)?);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("color-guess").chain(args.iter().copied()))
    }

    #[test]
    fn color_count_within_bounds_is_accepted() {
        let cli = parse(&["color", "--count", "10000"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Color { count: 10_000, .. })));
    }

    #[test]
    fn color_count_out_of_bounds_is_rejected() {
        assert!(parse(&["color", "--count", "0"]).is_err());
        assert!(parse(&["color", "--count", "10001"]).is_err());
        assert!(parse(&["color", "--count", "18446744073709551615"]).is_err());
    }

    #[test]
    fn no_subcommand_means_play() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
    }
}
