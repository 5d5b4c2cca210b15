// std imports
use std::include_str;

// third-party imports
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

/// Prefix of environment variables overriding settings, i.e. `WILDSIFT_SETTINGS_IGNORE_CASE`.
pub const ENV_PREFIX: &str = "WILDSIFT_SETTINGS";

// ---

/// Settings that can be set in configuration files.
///
/// Keys are snake_case so that they line up with the names derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub ignore_case: bool,
    pub strip_cr: bool,
    pub skip_empty: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overridden by the given sources in order.
    pub fn load(sources: impl IntoIterator<Item = Source>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        for source in sources {
            builder = match source {
                Source::File(SourceFile { filename, required }) => {
                    log::debug!("added configuration file {} (required={})", filename, required);
                    builder.add_source(File::new(&filename, FileFormat::Toml).required(required))
                }
                Source::Env => builder.add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_case: false,
            strip_cr: true,
            skip_empty: false,
        }
    }
}

// ---

/// A configuration source layered on top of the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(SourceFile),
    Env,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: String,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
