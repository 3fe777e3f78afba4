use super::EnvError;
use std::env;

/// The shell's copy of the environment, snapshotted at startup.
///
/// The manager is the authoritative mapping from then on: `setenv`/`unsetenv`
/// and `cd`'s `PWD` update mutate it directly, and children receive its
/// entries as a snapshot at spawn time. Insertion order is preserved so `env`
/// prints variables in their native order.
#[derive(Clone, Debug)]
pub struct EnvVarManager {
    vars: Vec<(Box<str>, Box<str>)>,
}

impl EnvVarManager {
    pub fn new() -> Self {
        Self {
            vars: env::vars().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidName("empty variable name"));
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName("name contains '='"));
        }

        if let Some(entry) = self.vars.iter_mut().find(|(n, _)| &**n == name) {
            entry.1 = value.into();
        } else {
            self.vars.push((name.into(), value.into()));
        }
        Ok(())
    }

    /// Removing an absent name is not an error.
    pub fn remove(&mut self, name: &str) {
        self.vars.retain(|(n, _)| &**n != name);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| &**v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(n, v)| (&**n, &**v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for EnvVarManager {
    fn default() -> Self {
        Self::new()
    }
}
