//! # Bean Counter CLI Library
//!
//! Command-line front end for the bean counter engine. Runs batch
//! experiments and prints the resulting slot distribution.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["beancounter", "run", "10", "400", "luck"];
//! let code = beancounter_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `run`: Drop beans through the board and report slot counts
//! - `cfg`: Display current configuration settings

use clap::{Parser, ValueEnum};
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{BeanCounterCli, Commands};
use commands::{RunOptions, handle_cfg_command, handle_run_command};

use beancounter_engine::bean::BeanMode;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors. Invalid arguments print the
/// usage banner to `err` without running anything.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["beancounter", "run", "5", "3", "skill", "--seed", "42"];
/// let code = beancounter_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BeanCounterCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    if ui::write_usage(err).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Run {
            slot_count,
            bean_count,
            mode,
            debug,
            seed,
            trim,
            repeat,
            json,
        } => {
            let opts = RunOptions {
                slot_count: slot_count as usize,
                bean_count,
                mode: mode.map(BeanMode::from),
                seed,
                debug,
                trim,
                repeat,
                json,
            };
            handle_run_command(&opts, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Branch policy as accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    /// 50/50 coin flip at every peg
    Luck,
    /// Fixed per-bean skill level drawn at creation
    Skill,
}

impl From<ModeArg> for BeanMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Luck => BeanMode::Luck,
            ModeArg::Skill => BeanMode::Skill,
        }
    }
}

/// Which half of the settled beans survives a trim.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Trim {
    /// Keep the higher-index slots
    Upper,
    /// Keep the lower-index slots
    Lower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accepts_positional_arguments() {
        let cli = BeanCounterCli::try_parse_from(["beancounter", "run", "10", "400", "luck"])
            .unwrap();
        match cli.cmd {
            Commands::Run {
                slot_count,
                bean_count,
                mode,
                ..
            } => {
                assert_eq!(slot_count, 10);
                assert_eq!(bean_count, 400);
                assert!(matches!(mode, Some(ModeArg::Luck)));
            }
            _ => panic!("Expected Commands::Run variant"),
        }
    }

    #[test]
    fn test_run_rejects_bad_counts_and_modes() {
        for args in [
            vec!["beancounter", "run", "ten", "400", "luck"],
            vec!["beancounter", "run", "10", "-5", "luck"],
            vec!["beancounter", "run", "10", "400", "fate"],
            vec!["beancounter", "run", "0", "400", "luck"],
        ] {
            assert!(
                BeanCounterCli::try_parse_from(&args).is_err(),
                "should reject {:?}",
                args
            );
        }
    }

    #[test]
    fn test_mode_is_optional() {
        let cli = BeanCounterCli::try_parse_from(["beancounter", "run", "5", "3"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Run { mode: None, .. }));
    }

    #[test]
    fn test_trim_and_repeat_flags() {
        let cli = BeanCounterCli::try_parse_from([
            "beancounter",
            "run",
            "5",
            "3",
            "skill",
            "--trim",
            "upper",
            "--repeat",
            "2",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Run { trim, repeat, .. } => {
                assert_eq!(trim, Some(Trim::Upper));
                assert_eq!(repeat, 2);
            }
            _ => panic!("Expected Commands::Run variant"),
        }
    }

    #[test]
    fn test_mode_arg_maps_to_engine_mode() {
        assert_eq!(BeanMode::from(ModeArg::Luck), BeanMode::Luck);
        assert_eq!(BeanMode::from(ModeArg::Skill), BeanMode::Skill);
    }
}
