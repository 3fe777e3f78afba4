use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::core::env::EnvVarManager;

/// Resolves an external command, spawns it with the session's environment
/// snapshot and inherited stdio, and blocks until it terminates.
#[derive(Clone)]
pub struct ProcessLauncher;

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Names containing `/` are taken as literal paths; bare names are
    /// searched through the directories of the manager's `PATH` entry.
    fn resolve(&self, name: &str, env: &EnvVarManager) -> Option<PathBuf> {
        if name.contains('/') {
            let path = Path::new(name);
            return is_executable(path).then(|| path.to_path_buf());
        }

        for dir in env.get("PATH")?.split(':').filter(|d| !d.is_empty()) {
            let candidate = Path::new(dir).join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Runs `args` as an external command; `args[0]` is the command name.
    /// Returns the child's exit code, or `128 + signal` when the child was
    /// killed by a signal. An unresolvable name never spawns.
    pub fn run(&self, args: &[String], env: &EnvVarManager) -> Result<i32, ProcessError> {
        let path = self
            .resolve(&args[0], env)
            .ok_or_else(|| ProcessError::CommandNotFound(args[0].clone()))?;

        let mut command = Command::new(&path);
        command
            .arg0(&args[0])
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(args[0].clone()));
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(ProcessError::PermissionDenied(args[0].clone()));
            }
            Err(e) => return Err(ProcessError::SpawnFailed(e)),
        };

        let status = child.wait().map_err(ProcessError::WaitFailed)?;
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}

fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
