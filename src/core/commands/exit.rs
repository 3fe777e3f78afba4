use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// `exit [status]`. With no argument the shell exits with the last recorded
/// command status; a non-numeric argument coerces to 0.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        let code = match args.first() {
            Some(arg) => arg.parse::<i32>().unwrap_or(0),
            None => state.last_status,
        };
        Ok(Outcome::Exit(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_with_code() {
        let mut state = ShellState::new();
        let outcome = ExitCommand::new()
            .execute(&["42".to_string()], &mut state)
            .unwrap();
        assert_eq!(outcome, Outcome::Exit(42));
    }

    #[test]
    fn test_exit_uses_last_status() {
        let mut state = ShellState::new();
        state.last_status = 7;
        let outcome = ExitCommand::new().execute(&[], &mut state).unwrap();
        assert_eq!(outcome, Outcome::Exit(7));
    }

    #[test]
    fn test_exit_fresh_shell_is_zero() {
        let mut state = ShellState::new();
        let outcome = ExitCommand::new().execute(&[], &mut state).unwrap();
        assert_eq!(outcome, Outcome::Exit(0));
    }

    #[test]
    fn test_exit_non_numeric_is_zero() {
        let mut state = ShellState::new();
        state.last_status = 3;
        let outcome = ExitCommand::new()
            .execute(&["abc".to_string()], &mut state)
            .unwrap();
        assert_eq!(outcome, Outcome::Exit(0));
    }
}
