//! Configuration management for the vapi-call CLI
//!
//! Stores the API key and default call settings in
//! ~/.config/vapi-collect/config.toml. Flags and environment variables take
//! precedence over anything stored here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "vapi-collect";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// `~/.config/vapi-collect/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the stored config; a missing file yields the empty config
    pub fn load() -> Result<Self> {
        Self::read_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.write_to(&Self::config_path()?)
    }

    fn read_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read config from {:?}", path)),
        }
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }
}

/// Show only the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("assistant_id = \"asst_1\"\n").unwrap();
        assert_eq!(config.assistant_id.as_deref(), Some("asst_1"));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Config::parse("api_key = ").is_err());
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let path = std::env::temp_dir()
            .join(format!("vapi-collect-missing-{}", std::process::id()))
            .join(CONFIG_FILE);
        assert_eq!(Config::read_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_saved_key_is_loaded_back() {
        let dir = std::env::temp_dir().join(format!("vapi-collect-saved-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);
        let config = Config {
            api_key: Some("key-123".to_string()),
            ..Config::default()
        };

        config.write_to(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(!written.contains("assistant_id"));
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("b962acc4-7500"), "****7500");
        assert_eq!(mask_secret("abc"), "****");
    }
}
