use std::fs;

use super::{ConfigError, ConfigPaths};
use crate::core::state::ShellState;

/// Applies rc-file directives to the session state. Recognized lines are
/// `alias name=value` and `setenv NAME VALUE`; blanks and `#` comments are
/// skipped, anything else warns unless quiet.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load(&self, state: &mut ShellState, quiet: bool) -> Result<(), ConfigError> {
        if !self.paths.rc_path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.paths.rc_path)?;
        for line in content.lines() {
            self.process_line(line, state, quiet);
        }
        Ok(())
    }

    fn process_line(&self, line: &str, state: &mut ShellState, quiet: bool) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        match line {
            s if s.starts_with("alias ") => {
                self.process_alias(&s["alias ".len()..], state, quiet)
            }
            s if s.starts_with("setenv ") => {
                self.process_setenv(&s["setenv ".len()..], state, quiet)
            }
            _ => {
                if !quiet {
                    eprintln!("venule: warning: ignoring rc line: {}", line);
                }
            }
        }
    }

    fn process_alias(&self, rest: &str, state: &mut ShellState, quiet: bool) {
        let Some((name, value)) = rest.split_once('=') else {
            if !quiet {
                eprintln!("venule: warning: malformed alias in rc file: {}", rest);
            }
            return;
        };

        let name = name.trim();
        let mut value = value.trim();

        // Remove surrounding quotes if present
        if (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
            || (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        {
            value = &value[1..value.len() - 1];
        }

        if let Err(e) = state.aliases.set(name, value) {
            if !quiet {
                eprintln!("venule: warning: {}", e);
            }
        }
    }

    fn process_setenv(&self, rest: &str, state: &mut ShellState, quiet: bool) {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() != 2 {
            if !quiet {
                eprintln!("venule: warning: malformed setenv in rc file: {}", rest);
            }
            return;
        }

        if let Err(e) = state.env.set(parts[0], parts[1]) {
            if !quiet {
                eprintln!("venule: warning: {}", e);
            }
        }
    }
}
