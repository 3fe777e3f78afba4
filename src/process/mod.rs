use std::fmt;

pub mod executor;

pub use executor::ProcessLauncher;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    PermissionDenied(String),
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::PermissionDenied(cmd) => write!(f, "permission denied: {}", cmd),
            ProcessError::SpawnFailed(e) => write!(f, "failed to spawn process: {}", e),
            ProcessError::WaitFailed(e) => write!(f, "failed to wait for process: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
