use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User configuration naming the default rewrite target.
///
/// Read-only: the tool never writes this file. Create it by hand at
/// [`Config::config_path`] with a single `test_file` entry.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub test_file: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured target path
        config.test_file = Self::expand_path(&config.test_file).unwrap_or(config.test_file);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/jsx-rewrap");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_file = dir.path().join("config.toml");
        fs::write(&config_file, content).unwrap();
        config_file
    }

    #[test]
    fn test_config_path_location() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Tilde must already be expanded
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/jsx-rewrap/config.toml"));
    }

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&missing).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reads_target_path() {
        let dir = TempDir::new().unwrap();
        let config_file = write_config(&dir, "test_file = \"/suite/Timeline.test.tsx\"\n");

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.test_file, PathBuf::from("/suite/Timeline.test.tsx"));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_file = write_config(&dir, "this is not a config file");

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_tilde_in_config_is_expanded() {
        let dir = TempDir::new().unwrap();
        let config_file = write_config(&dir, "test_file = \"~/suite/Timeline.test.tsx\"\n");

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        let expanded = config.test_file.to_string_lossy();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("suite/Timeline.test.tsx"));
    }

    #[test]
    fn test_env_var_in_config_is_expanded() {
        unsafe {
            env::set_var("JSX_REWRAP_SUITE_ROOT", "/custom/suite");
        }

        let dir = TempDir::new().unwrap();
        let config_file = write_config(
            &dir,
            "test_file = \"$JSX_REWRAP_SUITE_ROOT/Timeline.test.tsx\"\n",
        );

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.test_file,
            PathBuf::from("/custom/suite/Timeline.test.tsx")
        );

        unsafe {
            env::remove_var("JSX_REWRAP_SUITE_ROOT");
        }
    }
}
