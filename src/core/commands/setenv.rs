use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// `setenv NAME VALUE`: exactly two arguments, overwrites an existing entry.
#[derive(Clone)]
pub struct SetenvCommand;

impl Default for SetenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetenvCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArguments(
                "usage: setenv NAME VALUE".to_string(),
            ));
        }

        state
            .env
            .set(&args[0], &args[1])
            .map_err(|e| CommandError::InvalidArguments(format!("setenv: {}", e)))?;

        Ok(Outcome::Status(0))
    }
}

/// `unsetenv NAME`: exactly one argument; removing an absent name succeeds.
#[derive(Clone)]
pub struct UnsetenvCommand;

impl Default for UnsetenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UnsetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetenvCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments(
                "usage: unsetenv NAME".to_string(),
            ));
        }

        state.env.remove(&args[0]);
        Ok(Outcome::Status(0))
    }
}
