use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;
use std::env;
use std::path::PathBuf;

/// `cd [path|-]`. Bare `cd` goes to `$HOME`, `cd -` to the directory left by
/// the previous successful `cd`. On success the manager's `PWD` is updated
/// and the directory being left is recorded; on failure nothing changes.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "usage: cd [dir | -]".to_string(),
            ));
        }

        let target: PathBuf = match args.first().map(|s| s.as_str()) {
            None => match state.env.get("HOME") {
                Some(home) => PathBuf::from(home),
                None => {
                    return Err(CommandError::ExecutionError("cd: HOME not set".to_string()))
                }
            },
            Some("-") => match &state.previous_dir {
                Some(dir) => dir.clone(),
                None => {
                    return Err(CommandError::ExecutionError(
                        "cd: no previous directory".to_string(),
                    ))
                }
            },
            Some(path) => PathBuf::from(path),
        };

        let leaving = env::current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;

        env::set_current_dir(&target).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", target.display(), e))
        })?;

        let entered = env::current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;
        state
            .env
            .set("PWD", &entered.to_string_lossy())
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;
        state.previous_dir = Some(leaving);

        Ok(Outcome::Status(0))
    }
}
