use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names searched for, nearest directory first
pub const CONFIG_FILE_NAMES: [&str; 2] = [".r2-runner.json", "r2-runner.json"];

pub const DEFAULT_EXECUTABLE: &str = "r2lang";
pub const DEFAULT_REPL_EXECUTABLE: &str = "r2repl";

/// User settings for running R2Lang code and tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Interpreter used for "run file" and "run selection"
    pub executable_path: String,
    pub repl_executable_path: String,
    /// Empty means auto-discover the test runner
    pub test_executable_path: String,
    pub enable_test_code_lens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable_path: DEFAULT_EXECUTABLE.to_string(),
            repl_executable_path: DEFAULT_REPL_EXECUTABLE.to_string(),
            test_executable_path: String::new(),
            enable_test_code_lens: true,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.executable_path, "r2lang");
        assert_eq!(config.repl_executable_path, "r2repl");
        assert!(config.test_executable_path.is_empty());
        assert!(config.enable_test_code_lens);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "test_executable_path": "/opt/r2/r2test" }"#).unwrap();
        assert_eq!(config.test_executable_path, "/opt/r2/r2test");
        assert_eq!(config.executable_path, "r2lang");
        assert!(config.enable_test_code_lens);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("pkg").join("tests");
        fs::create_dir_all(&nested).unwrap();

        let config = Config {
            enable_test_code_lens: false,
            ..Default::default()
        };
        let config_path = temp_dir.path().join(".r2-runner.json");
        config.save_to_file(&config_path).unwrap();

        assert_eq!(Config::find_config_file(&nested), Some(config_path));
        assert_eq!(Config::discover(&nested).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("r2-runner.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = Config::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
