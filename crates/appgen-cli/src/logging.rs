//! Tracing subscriber initialisation.
//!
//! Only the CLI crate installs a subscriber; `appgen-core` and
//! `appgen-adapters` only emit events. Everything goes to stderr so stdout
//! stays reserved for the confirmation line, the usage line and JSON.
//!
//! | Flag(s)   | Level for the appgen crates |
//! |-----------|-----------------------------|
//! | (none)    | WARN                        |
//! | `-v`      | INFO                        |
//! | `-vv`     | DEBUG                       |
//! | `-vvv`    | TRACE                       |
//! | `--quiet` | ERROR                       |
//!
//! `RUST_LOG` replaces the computed directives when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const LOG_TARGETS: [&str; 3] = ["appgen", "appgen_core", "appgen_adapters"];

/// Resolved subscriber settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// ANSI styling on stderr.
    pub ansi: bool,
}

impl LogSettings {
    /// Combine the verbosity flags with the already-resolved colour choice.
    ///
    /// `no_color` covers `--no-color`, `NO_COLOR` and `output.no_color`;
    /// styling is also dropped when stderr is not a terminal.
    pub fn resolve(args: &GlobalArgs, no_color: bool) -> Self {
        Self::with_terminal(args, no_color, std::io::stderr().is_terminal())
    }

    fn with_terminal(args: &GlobalArgs, no_color: bool, stderr_is_tty: bool) -> Self {
        Self {
            level: level_for(args.verbose, args.quiet),
            ansi: !no_color && stderr_is_tty,
        }
    }

    /// `EnvFilter` directives, one per appgen crate.
    fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Call once, before any events fire.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `--quiet` wins over any `-v` count.
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
