//! Configuration file support for Liftlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlog/config.toml`.
//! Its main job is the shortcut seed table: abbreviations every parse
//! starts with before the log's own definition lines are applied.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Shortcut seed table, upserted over by definition lines in the log
    #[serde(default = "default_shortcuts")]
    pub shortcuts: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shortcuts: default_shortcuts(),
        }
    }
}

/// Built-in abbreviations for the common barbell/dumbbell lifts
fn default_shortcuts() -> HashMap<String, String> {
    [
        ("BBP", "BP#B"),
        ("DBBP", "BP#D"),
        ("IBBP", "IBP#B"),
        ("IBDP", "IBP#D"),
        ("PU", "PullUp"),
        ("IBDC", "IBC#D"),
        ("BBC", "Curl#B"),
        ("OHP", "SHP#B"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftlog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_seeds_common_shortcuts() {
        let config = Config::default();
        assert_eq!(
            config.shortcuts.get("BBP").map(String::as_str),
            Some("BP#B")
        );
        assert_eq!(
            config.shortcuts.get("PU").map(String::as_str),
            Some("PullUp")
        );
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.shortcuts, parsed.shortcuts);
    }

    #[test]
    fn test_explicit_shortcuts_replace_defaults() {
        let toml_str = r#"
[shortcuts]
FS = "FrontSquat#B"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.shortcuts.get("FS").map(String::as_str),
            Some("FrontSquat#B")
        );
        // A user-provided table is taken whole, not merged.
        assert!(config.shortcuts.get("BBP").is_none());
    }

    #[test]
    fn test_empty_config_uses_default_seed() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.shortcuts.contains_key("BBP"));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config::default();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.shortcuts, config.shortcuts);
    }
}
