use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::BASE_URL_ENV_VAR;

/// Persistent settings. The theme is not stored; sessions start light unless
/// `--theme` says otherwise.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the chat backend, e.g. `https://events.example.com/api`
    pub base_url: Option<String>,
}

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Flag,
    Environment,
    ConfigFile,
}

impl BaseUrlSource {
    pub fn describe(self) -> &'static str {
        match self {
            BaseUrlSource::Flag => "--base-url",
            BaseUrlSource::Environment => BASE_URL_ENV_VAR,
            BaseUrlSource::ConfigFile => "config file",
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn Error>> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
        let proj_dirs = ProjectDirs::from("org", "eventsync", "eventsync")
            .ok_or("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: (unset)"),
        }
    }

    /// Pick the effective base URL: flag, then environment, then config file.
    /// Blank values are treated as unset.
    pub fn resolve_base_url(
        &self,
        flag: Option<&str>,
        env_value: Option<&str>,
    ) -> Option<(String, BaseUrlSource)> {
        fn non_blank(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        non_blank(flag)
            .map(|url| (url, BaseUrlSource::Flag))
            .or_else(|| non_blank(env_value).map(|url| (url, BaseUrlSource::Environment)))
            .or_else(|| {
                non_blank(self.base_url.as_deref()).map(|url| (url, BaseUrlSource::ConfigFile))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_default_config() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load_preserve_base_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            base_url: Some("https://events.example.com/api".to_string()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unknown_theme_key_in_file_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"http://localhost:8000\"\ntheme = \"dark\"\n").unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.base_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn resolve_prefers_flag_then_env_then_file() {
        let config = Config {
            base_url: Some("http://file".to_string()),
        };

        assert_eq!(
            config.resolve_base_url(Some("http://flag"), Some("http://env")),
            Some(("http://flag".to_string(), BaseUrlSource::Flag))
        );
        assert_eq!(
            config.resolve_base_url(None, Some("http://env")),
            Some(("http://env".to_string(), BaseUrlSource::Environment))
        );
        assert_eq!(
            config.resolve_base_url(None, None),
            Some(("http://file".to_string(), BaseUrlSource::ConfigFile))
        );
    }

    #[test]
    fn resolve_skips_blank_values() {
        let config = Config::default();
        assert_eq!(config.resolve_base_url(Some("  "), Some("")), None);

        let config = Config {
            base_url: Some(" http://file ".to_string()),
        };
        assert_eq!(
            config.resolve_base_url(Some(""), None),
            Some(("http://file".to_string(), BaseUrlSource::ConfigFile))
        );
    }
}
