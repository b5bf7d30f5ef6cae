//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `APPGEN_GENERATOR__OUTPUT_DIR`, `APPGEN_OUTPUT__NO_COLOR`
//! 3. Config file: `--config <FILE>` if given, otherwise `./appgen.toml`
//!    and then the per-user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use appgen_core::application::DEFAULT_OUTPUT_DIR;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// File picked up from the current directory when `--config` is absent.
pub const LOCAL_CONFIG_FILE: &str = "appgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator settings.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base directory apps are generated into.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config files and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(File::from(global.as_path()).required(false));
                }
                builder =
                    builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix("APPGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Per-user configuration file, e.g. `~/.config/appgen/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "appgen", "appgen")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
