// std imports
use std::path::PathBuf;

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "wildsift";

/// Returns a loader for settings layered from the user config and the given files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<String>,
{
    Loader::new(paths.into_iter().map(Into::into).collect())
}

/// Returns the path of the user config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

// ---

pub struct Loader {
    paths: Vec<String>,
    no_default: bool,
    env: bool,
}

impl Loader {
    fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            no_default: false,
            env: true,
        }
    }

    /// Skips the optional user config file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    /// Enables or disables overriding settings with environment variables.
    pub fn env(self, env: bool) -> Self {
        Self { env, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let mut sources = Vec::with_capacity(self.paths.len() + 2);

        if !self.no_default {
            if let Some(path) = user_config_path() {
                sources.push(Source::File(
                    SourceFile::new(path.to_string_lossy()).required(false),
                ));
            }
        }

        sources.extend(self.paths.iter().map(|path| Source::File(SourceFile::new(path.as_str()))));

        if self.env {
            sources.push(Source::Env);
        }

        sources
    }
}
