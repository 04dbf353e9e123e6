//! Config file loading and settings resolution.
//!
//! ```toml
//! [settings]
//! default_file = "decks/q3-review.pptx"
//! api_key = "YOUR_API_KEY_HERE"
//! model = "gemini-1.5-flash-latest"
//!
//! [options]
//! caching = true
//! cache_dir = ".cache"
//! box_width = 90
//! timeout_secs = 120
//! ```

use anyhow::{Context, Result};
use deck_core::Settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub settings: SettingsSection,
    pub options: OptionsSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsSection {
    pub default_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsSection {
    pub caching: Option<bool>,
    pub cache_dir: Option<PathBuf>,
    pub box_width: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load `path`; a missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Values given on the command line; each overrides the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
}

/// Merge defaults, the config file, and command-line overrides.
pub fn resolve_settings(config: FileConfig, overrides: Overrides) -> Settings {
    let defaults = Settings::default();
    let FileConfig { settings, options } = config;

    Settings {
        file: overrides.file.or(settings.default_file),
        api_key: overrides.api_key.or(settings.api_key),
        model: overrides.model.or(settings.model).unwrap_or(defaults.model),
        caching: !overrides.no_cache && options.caching.unwrap_or(defaults.caching),
        cache_dir: options.cache_dir.unwrap_or(defaults.cache_dir),
        box_width: options.box_width.unwrap_or(defaults.box_width),
        timeout_secs: options.timeout_secs.unwrap_or(defaults.timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\ndefault_file = \"deck.pptx\"\napi_key = \"abc\"\n\n[options]\ncaching = false\nbox_width = 100\n",
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.settings.default_file, Some(PathBuf::from("deck.pptx")));
        assert_eq!(config.settings.api_key.as_deref(), Some("abc"));
        assert_eq!(config.options.caching, Some(false));
        assert_eq!(config.options.box_width, Some(100));
        assert_eq!(config.options.cache_dir, None);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[options]\ncaching = \"sometimes\"\n").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }

    #[test]
    fn test_command_line_wins() {
        let config = FileConfig {
            settings: SettingsSection {
                default_file: Some(PathBuf::from("from-config.pptx")),
                api_key: Some("config-key".to_string()),
                model: Some("config-model".to_string()),
            },
            options: OptionsSection::default(),
        };
        let overrides = Overrides {
            file: Some(PathBuf::from("from-cli.pptx")),
            api_key: Some("env-key".to_string()),
            model: None,
            no_cache: false,
        };

        let settings = resolve_settings(config, overrides);
        assert_eq!(settings.file, Some(PathBuf::from("from-cli.pptx")));
        assert_eq!(settings.api_key.as_deref(), Some("env-key"));
        assert_eq!(settings.model, "config-model");
        assert!(settings.caching);
    }

    #[test]
    fn test_no_cache_flag_beats_config() {
        let config = FileConfig {
            options: OptionsSection {
                caching: Some(true),
                ..OptionsSection::default()
            },
            ..FileConfig::default()
        };
        let overrides = Overrides {
            no_cache: true,
            ..Overrides::default()
        };
        assert!(!resolve_settings(config, overrides).caching);
    }

    #[test]
    fn test_config_can_disable_cache() {
        let config = FileConfig {
            options: OptionsSection {
                caching: Some(false),
                ..OptionsSection::default()
            },
            ..FileConfig::default()
        };
        assert!(!resolve_settings(config, Overrides::default()).caching);
    }

    #[test]
    fn test_defaults_fill_gaps() {
        let settings = resolve_settings(FileConfig::default(), Overrides::default());
        assert_eq!(settings, Settings::default());
    }
}
