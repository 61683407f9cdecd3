//! Application configuration management.
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. TOML config file (`--config <PATH>`, or `config.toml` in the
//!    platform config directory if it exists)
//! 3. `HASHDUPE_*` environment variables (e.g. `HASHDUPE_TIE_BREAK=lexicographic`)
//! 4. Command-line flags
//!
//! The merged [`Config`] is then resolved into [`RunSettings`], which is
//! where a missing input path becomes an error and the output path is
//! anchored to the input's directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::RunArgs;
use crate::duplicates::TieBreak;
use crate::output::ReportFormat;

/// Report file name used when no output path is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "duplicates.txt";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "HASHDUPE_";

/// Errors from loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No input path was given on the command line or in configuration.
    #[error("No input file given; pass --csv <PATH> or set `input` in the config file")]
    MissingInput,

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    /// The config file or environment contained invalid values.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input `filename,hash` list.
    pub input: Option<PathBuf>,
    /// Report path; relative paths are taken from the input's directory.
    pub output: PathBuf,
    /// Report layout.
    pub format: ReportFormat,
    /// Ordering for equal-length file names.
    pub tie_break: TieBreak,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT_NAME),
            format: ReportFormat::Compact,
            tie_break: TieBreak::InputOrder,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Input `filename,hash` list
    pub input: PathBuf,
    /// Where the report is written
    pub output: PathBuf,
    /// Report layout
    pub format: ReportFormat,
    /// Ordering for equal-length file names
    pub tie_break: TieBreak,
}

impl Config {
    /// Load configuration from defaults, a TOML file and the environment.
    ///
    /// With `explicit_path` set, that file must exist. Otherwise the
    /// platform config file is used when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or any layer
    /// holds an invalid value.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match explicit_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound(path.to_path_buf()));
                }
                log::debug!("Loading config from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = Self::default_path().filter(|p| p.is_file()) {
                    log::debug!("Loading config from {}", path.display());
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Get the default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "hashdupe", "hashdupe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply command-line overrides on top of the loaded layers.
    pub fn apply_args(&mut self, args: &RunArgs) {
        if let Some(input) = &args.csv {
            self.input = Some(input.clone());
        }
        if let Some(output) = &args.out {
            self.output = output.clone();
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.debug {
            self.format = ReportFormat::Verbose;
        }
        if let Some(tie_break) = args.tie_break {
            self.tie_break = tie_break;
        }
    }

    /// Turn the merged configuration into settings for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] if no input path is set.
    pub fn resolve(self) -> Result<RunSettings, ConfigError> {
        let input = self
            .input
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingInput)?;
        let output = resolve_output(&input, &self.output);

        Ok(RunSettings {
            input,
            output,
            format: self.format,
            tie_break: self.tie_break,
        })
    }
}

/// Anchor a relative output path to the directory holding `input`.
#[must_use]
pub fn resolve_output(input: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }
    input
        .parent()
        .map_or_else(|| output.to_path_buf(), |dir| dir.join(output))
}
