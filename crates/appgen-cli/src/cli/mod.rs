//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Printed on stdout when the app name is missing.
pub const USAGE: &str = "Usage: appgen <app_name>";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appgen",
    bin_name = "appgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate a new watch UI app",
    long_about = "appgen writes the header and source boilerplate for a new \
                  LVGL app into <OUTPUT_DIR>/<APP_NAME>/, next to an empty \
                  assets folder.",
    after_help = "EXAMPLES:\n\
        \x20 appgen blink\n\
        \x20 appgen Compass --output-dir firmware/src/apps\n\
        \x20 appgen timer --dry-run --output-format json",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for generating an app.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the app. Used as-is for the folder, lowercased for file names.
    ///
    /// Optional at the clap level so a missing name can print the short
    /// usage line on stdout and exit 1.
    #[arg(value_name = "APP_NAME", help = "Name of the app to generate")]
    pub name: Option<String>,

    /// Base directory; the app folder is created inside it.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Base directory (default: src/apps)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
