use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "config".to_string(),
            Flag {
                short: "-c".to_string(),
                long: "--config".to_string(),
                description: "Specify custom rc file path".to_string(),
                value: None,
            },
        );

        flags.insert(
            "norc".to_string(),
            Flag {
                short: "-n".to_string(),
                long: "--norc".to_string(),
                description: "Skip reading the rc file".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress warnings".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            script: None,
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            // A bare argument is the script file to run in batch mode.
            if !arg.starts_with('-') {
                if self.script.is_some() {
                    return Err(ShellError::FlagError(format!(
                        "unexpected argument: {}",
                        arg
                    )));
                }
                self.script = Some(arg.clone());
                i += 1;
                continue;
            }

            // Check for both short and long flags
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    // Check if the flag expects a value
                    if arg == "-c" || arg == "--config" {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(ShellError::FlagError(format!(
                                "Flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn script(&self) -> Option<&String> {
        self.script.as_ref()
    }

    pub fn print_help(&self) {
        println!("Usage: venule [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
