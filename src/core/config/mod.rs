use std::fmt;
use std::path::PathBuf;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::core::state::ShellState;

/// Startup configuration: an rc file of `alias` and `setenv` directives
/// applied to the session state before the first prompt.
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new(custom_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Config {
            paths: ConfigPaths::new(custom_path)?,
        })
    }

    pub fn load(&self, state: &mut ShellState, quiet: bool) -> Result<(), ConfigError> {
        ConfigLoader::new(&self.paths).load(state, quiet)
    }

    pub fn rc_path(&self) -> &PathBuf {
        &self.paths.rc_path
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
