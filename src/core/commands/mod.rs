use std::collections::BTreeMap;

mod alias;
mod cd;
mod env;
mod exit;
mod setenv;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use setenv::{SetenvCommand, UnsetenvCommand};

use crate::core::state::ShellState;
use crate::process::{ProcessError, ProcessLauncher};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    PermissionDenied(String),
    InvalidArguments(String),
    ExecutionError(String),
    Fatal(ProcessError),
}

impl CommandError {
    /// The exit status recorded for the segment once the diagnostic has been
    /// reported.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::NotFound(_) => 127,
            CommandError::PermissionDenied(_) => 126,
            CommandError::InvalidArguments(_) => 2,
            CommandError::ExecutionError(_) => 1,
            CommandError::Fatal(_) => 1,
        }
    }

    /// Infrastructure failures abort the interpreter instead of becoming a
    /// status.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::Fatal(_))
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "command not found: {}", cmd),
            CommandError::PermissionDenied(cmd) => write!(f, "permission denied: {}", cmd),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::Fatal(err) => write!(f, "{}", err),
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::NotFound(cmd),
            ProcessError::PermissionDenied(cmd) => CommandError::PermissionDenied(cmd),
            other => CommandError::Fatal(other),
        }
    }
}

/// What dispatching a segment produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The segment ran to completion with this exit status.
    Status(i32),
    /// The `exit` builtin requested interpreter shutdown with this code.
    Exit(i32),
}

pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Alias(AliasCommand),
    Cd(CdCommand),
    Env(EnvCommand),
    Exit(ExitCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Alias(cmd) => cmd.execute(args, state),
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Env(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Setenv(cmd) => cmd.execute(args, state),
            CommandType::Unsetenv(cmd) => cmd.execute(args, state),
        }
    }
}

/// Matches the first token against the builtin table; anything else falls
/// through to the process launcher.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    launcher: ProcessLauncher,
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("alias".to_string(), CommandType::Alias(AliasCommand::new()));
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("env".to_string(), CommandType::Env(EnvCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "setenv".to_string(),
            CommandType::Setenv(SetenvCommand::new()),
        );
        commands.insert(
            "unsetenv".to_string(),
            CommandType::Unsetenv(UnsetenvCommand::new()),
        );

        Self {
            commands,
            launcher: ProcessLauncher::new(),
        }
    }

    /// Runs one tokenized segment. `args[0]` is the command name.
    pub fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        if let Some(cmd) = self.commands.get(args[0].as_str()) {
            cmd.execute(&args[1..], state)
        } else {
            let status = self.launcher.run(args, &state.env)?;
            Ok(Outcome::Status(status))
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_detection() {
        let executor = CommandExecutor::new();

        for cmd in ["alias", "cd", "env", "exit", "setenv", "unsetenv"] {
            assert!(executor.is_builtin(cmd));
        }
        assert!(!executor.is_builtin("ls"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_execute_external() {
        let executor = CommandExecutor::new();
        let mut state = ShellState::new();

        let outcome = executor.execute(&args(&["true"]), &mut state).unwrap();
        assert_eq!(outcome, Outcome::Status(0));

        let outcome = executor.execute(&args(&["false"]), &mut state).unwrap();
        assert!(matches!(outcome, Outcome::Status(code) if code != 0));
    }

    #[test]
    fn test_execute_unknown_command() {
        let executor = CommandExecutor::new();
        let mut state = ShellState::new();

        let result = executor.execute(&args(&["venule-no-such-command"]), &mut state);
        match result {
            Err(CommandError::NotFound(cmd)) => assert_eq!(cmd, "venule-no-such-command"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(CommandError::NotFound("x".to_string()).status(), 127);
        assert_eq!(CommandError::PermissionDenied("x".to_string()).status(), 126);
        assert_eq!(CommandError::InvalidArguments("x".to_string()).status(), 2);
        assert_eq!(CommandError::ExecutionError("x".to_string()).status(), 1);
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            CommandError::NotFound("test".to_string()),
            CommandError::PermissionDenied("test".to_string()),
            CommandError::InvalidArguments("bad args".to_string()),
            CommandError::ExecutionError("failed".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
