use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// How long the "copied" marker stays lit, in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("copy_feedback_ms"));
    }

    #[test]
    fn test_config_deserialization_partial() {
        let config: Config = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "theme = \"light\"\ncopy_feedback_ms = 500").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.copy_feedback_ms, 500);
    }
}
