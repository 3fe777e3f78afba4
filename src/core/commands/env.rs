use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// `env`: prints every entry as `NAME=VALUE` in the manager's native order.
#[derive(Clone)]
pub struct EnvCommand;

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(&self, _args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        for (name, value) in state.env.iter() {
            println!("{}={}", name, value);
        }
        Ok(Outcome::Status(0))
    }
}
