use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// The `alias` builtin. With no arguments, lists every alias. Arguments
/// containing `=` are upserts; other arguments are names to display, unknown
/// ones silently skipped. A malformed argument gets its own diagnostic and
/// never stops the rest from being processed.
#[derive(Clone)]
pub struct AliasCommand;

impl Default for AliasCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AliasCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Outcome, CommandError> {
        if args.is_empty() {
            for (name, value) in state.aliases.iter() {
                println!("{}='{}'", name, value);
            }
            return Ok(Outcome::Status(0));
        }

        let mut status = 0;
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    let name = name.trim();
                    let value = value
                        .trim()
                        .trim_matches(|c| c == '\'' || c == '"');

                    if name.is_empty() || value.is_empty() {
                        eprintln!("venule: alias: invalid argument: '{}'", arg);
                        status = 1;
                        continue;
                    }

                    if let Err(e) = state.aliases.set(name, value) {
                        eprintln!("venule: alias: {}: {}", name, e);
                        status = 1;
                    }
                }
                None => {
                    if let Some(value) = state.aliases.resolve(arg) {
                        println!("{}='{}'", arg, value);
                    }
                }
            }
        }

        Ok(Outcome::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alias::AliasTable;

    fn run(args: &[&str], state: &mut ShellState) -> Outcome {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        AliasCommand::new().execute(&args, state).unwrap()
    }

    #[test]
    fn test_set_alias() {
        let mut state = ShellState::new();
        assert_eq!(run(&["ll=ls -la"], &mut state), Outcome::Status(0));
        assert_eq!(state.aliases.resolve("ll").unwrap(), "ls -la");
    }

    #[test]
    fn test_set_quoted_value() {
        let mut state = ShellState::new();
        run(&["gs='git status'"], &mut state);
        assert_eq!(state.aliases.resolve("gs").unwrap(), "git status");
    }

    #[test]
    fn test_list_is_ok_when_empty() {
        let mut state = ShellState::new();
        assert_eq!(run(&[], &mut state), Outcome::Status(0));
    }

    #[test]
    fn test_lookup_unknown_is_silent_success() {
        let mut state = ShellState::new();
        assert_eq!(run(&["missing"], &mut state), Outcome::Status(0));
    }

    #[test]
    fn test_malformed_argument_continues() {
        let mut state = ShellState::new();
        // The bad argument is diagnosed; the good one still takes effect.
        assert_eq!(
            run(&["=value", "ok=fine"], &mut state),
            Outcome::Status(1)
        );
        assert_eq!(state.aliases.resolve("ok").unwrap(), "fine");
    }

    #[test]
    fn test_table_full_is_diagnosed_not_fatal() {
        let mut state = ShellState::new();
        state.aliases = AliasTable::with_capacity(1);
        run(&["a=1"], &mut state);

        assert_eq!(run(&["b=2"], &mut state), Outcome::Status(1));
        assert!(state.aliases.resolve("b").is_none());
        assert_eq!(state.aliases.resolve("a").unwrap(), "1");
    }
}
