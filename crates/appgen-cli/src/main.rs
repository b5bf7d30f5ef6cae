//! # appgen
//!
//! Generates the header/source boilerplate for a new watch UI app.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Print the usage line and exit 1 if no app name was given.
//! 3. Load configuration (file + env + defaults) and resolve colour.
//! 4. Initialise the tracing subscriber (logging).
//! 5. Build the [`OutputManager`] and generate.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Missing app name, filesystem or internal |
//! |  2   | Invalid arguments                        |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing::{debug, info};

use appgen_core::domain::AppName;

use crate::{
    cli::{Cli, USAGE},
    config::AppConfig,
    error::CliError,
    logging::{LogSettings, init_logging},
    output::{OutputManager, color_disabled},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // clap picks its own styling for stderr and honours NO_COLOR.
            let _ = e.print();
            return ExitCode::from(2);
        }
    };

    // ── 2. Require the app name ───────────────────────────────────────────
    let Some(name) = cli.generate.name.clone() else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    // ── 3. Load configuration ─────────────────────────────────────────────
    // Loaded before tracing so `output.no_color` reaches the log layer too.
    let config = AppConfig::load(cli.global.config.as_ref());
    let no_color = color_disabled(&cli.global, config.as_ref().ok());
    let verbose = cli.global.verbose > 0;

    // ── 4. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&LogSettings::resolve(&cli.global, no_color)) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color,
        "CLI started"
    );

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: Some(e.into()),
                },
                verbose,
                no_color,
            );
        }
    };

    // ── 5. Build output manager and generate ──────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    match commands::generate::execute(AppName::new(name), cli.generate, config, output) {
        Ok(()) => {
            info!("appgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is
    // redirected; colour only on a TTY and when nothing turned it off.
    let color = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
