// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {name}: {source}")]
    Input {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Writes the error to the given output in the form of `error: <message>`.
    pub fn log_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "error: {}", self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
