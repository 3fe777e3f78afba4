use super::ConfigError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    pub fn new(custom: Option<PathBuf>) -> Result<Self, ConfigError> {
        let rc_path = match custom {
            Some(path) => path,
            None => dirs::home_dir()
                .ok_or(ConfigError::HomeDirNotFound)?
                .join(".venulerc"),
        };

        Ok(ConfigPaths { rc_path })
    }
}
