use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rustyline::DefaultEditor;

mod executor;

pub use executor::LineOutcome;

use crate::core::commands::CommandExecutor;
use crate::core::config::{Config, ConfigError};
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::DiagnosticStyle;
use executor::LineRunner;

const PROMPT: &str = "$ ";

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    pub(crate) style: DiagnosticStyle,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut state = ShellState::new();
        let style = DiagnosticStyle::new();
        let quiet = flags.is_set("quiet");

        if !flags.is_set("norc") {
            let custom = flags.get_value("config").map(PathBuf::from);
            match Config::new(custom) {
                Ok(config) => config.load(&mut state, quiet)?,
                Err(ConfigError::HomeDirNotFound) => {
                    // No home directory means no default rc file to read.
                    if !quiet {
                        eprintln!(
                            "{}",
                            style.warning("venule: warning: home directory not found, skipping rc file")
                        );
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Shell {
            state,
            executor: CommandExecutor::new(),
            style,
        })
    }

    /// Interactive loop: prompt, read, run, until end of input or `exit`.
    /// Returns the shell's exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => match self.run_line(&line)? {
                    LineOutcome::Continue => {}
                    LineOutcome::Exit(code) => return Ok(code),
                },
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!();
                    return Ok(self.state.last_status);
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    continue;
                }
                Err(e) => return Err(ShellError::Readline(e)),
            }
        }
    }

    /// Batch mode: runs every line of `path` in order, with no prompt.
    /// Returns the status of the last command, or the `exit` builtin's code.
    pub fn run_script(&mut self, path: &Path) -> Result<i32, ShellError> {
        let file = File::open(path)?;

        for line in BufReader::new(file).lines() {
            let line = line?;
            match self.run_line(&line)? {
                LineOutcome::Continue => {}
                LineOutcome::Exit(code) => return Ok(code),
            }
        }
        Ok(self.state.last_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_shell() -> Shell {
        let mut flags = Flags::new();
        flags.parse(&["--norc".to_string()]).unwrap();
        Shell::new(flags).unwrap()
    }

    fn write_script(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_script_exit_code_is_last_status() {
        let mut shell = test_shell();
        let script = write_script("venule_test_script_last.vsh", "true\nfalse\n");

        let code = shell.run_script(&script).unwrap();
        assert_eq!(code, 1);

        fs::remove_file(script).unwrap();
    }

    #[test]
    fn test_script_exit_builtin_stops_immediately() {
        let mut shell = test_shell();
        let marker = std::env::temp_dir().join("venule_test_script_marker");
        let _ = fs::remove_file(&marker);

        let script = write_script(
            "venule_test_script_exit.vsh",
            &format!("exit 5\ntouch {}\n", marker.display()),
        );

        let code = shell.run_script(&script).unwrap();
        assert_eq!(code, 5);
        assert!(!marker.exists());

        fs::remove_file(script).unwrap();
    }

    #[test]
    fn test_script_builtins_share_state() {
        let mut shell = test_shell();
        let script = write_script(
            "venule_test_script_state.vsh",
            "setenv VENULE_SCRIPT_VAR set-by-script\nalias t=true\nt\n",
        );

        let code = shell.run_script(&script).unwrap();
        assert_eq!(code, 0);
        assert_eq!(shell.state.env.get("VENULE_SCRIPT_VAR"), Some("set-by-script"));
        assert_eq!(shell.state.aliases.resolve("t").unwrap(), "true");

        fs::remove_file(script).unwrap();
    }

    #[test]
    fn test_missing_script_is_io_error() {
        let mut shell = test_shell();
        let result = shell.run_script(Path::new("/venule/no/such/script"));
        assert!(matches!(result, Err(ShellError::Io(_))));
    }
}
