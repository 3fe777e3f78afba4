use std::path::PathBuf;

use super::alias::AliasTable;
use super::env::EnvVarManager;

/// Session-wide mutable state: the environment copy, the alias table, the
/// directory left by the last successful `cd`, and the last exit status.
///
/// Passed by `&mut` to every component instead of living in globals, so tests
/// can construct isolated sessions.
pub struct ShellState {
    pub env: EnvVarManager,
    pub aliases: AliasTable,
    pub previous_dir: Option<PathBuf>,
    pub last_status: i32,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            env: EnvVarManager::new(),
            aliases: AliasTable::new(),
            previous_dir: None,
            last_status: 0,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
