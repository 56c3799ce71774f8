use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_types::{Error, Result};
use tracing::warn;

/// Resolve the storefront config directory based on priority:
/// 1. STOREFRONT_PATH environment variable (with tilde expansion)
/// 2. XDG config directory
/// 3. ~/.storefront (fallback for systems without XDG)
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("STOREFRONT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("storefront"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".storefront");
        warn!(path = %dir.display(), "no XDG config directory; falling back to home");
        return Ok(dir);
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Page texts around the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub name: String,
    pub title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Fashion Store".to_string(),
            title: "Clothing Store - Fashion for Everyone".to_string(),
            hero_title: "Welcome to Our Clothing Store".to_string(),
            hero_subtitle: "Discover the latest trends in fashion".to_string(),
            footer: "© 2025 Fashion Store. All rights reserved.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Input poll interval of the interactive view
    pub tick_rate_ms: u64,
    /// Capture mouse clicks (needed for closing the cart by clicking outside it)
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.store.name, "Fashion Store");
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert!(config.tui.mouse);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.store.name = "Corner Shop".to_string();
        config.tui.mouse = false;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[store]\nname = \"Corner Shop\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.store.name, "Corner Shop");
        assert_eq!(loaded.store.hero_title, "Welcome to Our Clothing Store");
        assert_eq!(loaded.tui, TuiConfig::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[store\nname = ")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/etc/storefront"), PathBuf::from("/etc/storefront"));
    }
}
