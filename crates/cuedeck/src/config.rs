use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "cuedeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `cuedeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# cuedeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.start_mode" => {
                if value != "first" && value != "overview" && value.parse::<usize>().is_err() {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first', 'overview', or a slide number."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(value.to_string());
            }
            "defaults.autoplay" => {
                let parsed = match value {
                    "true" => true,
                    "false" => false,
                    _ => anyhow::bail!("Invalid autoplay: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .autoplay = Some(parsed);
            }
            "defaults.swipe_threshold" => {
                let parsed: f32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid swipe_threshold: {value}. Must be a number."))?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    anyhow::bail!("Invalid swipe_threshold: {value}. Must be a positive number.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .swipe_threshold = Some(parsed);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.start_mode, defaults.autoplay, defaults.swipe_threshold"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_accepts_valid_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.start_mode", "overview").unwrap();
        config.set("defaults.start_mode", "7").unwrap();
        config.set("defaults.autoplay", "true").unwrap();
        config.set("defaults.swipe_threshold", "40").unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.theme.as_deref(), Some("dark"));
        assert_eq!(defaults.start_mode.as_deref(), Some("7"));
        assert_eq!(defaults.autoplay, Some(true));
        assert_eq!(defaults.swipe_threshold, Some(40.0));
    }

    #[test]
    fn set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "sepia").is_err());
        assert!(config.set("defaults.start_mode", "sideways").is_err());
        assert!(config.set("defaults.autoplay", "maybe").is_err());
        assert!(config.set("defaults.swipe_threshold", "-3").is_err());
        assert!(config.set("defaults.swipe_threshold", "lots").is_err());
    }

    #[test]
    fn set_rejects_unknown_keys_listing_valid_ones() {
        let mut config = Config::default();
        let err = config.set("defaults.nope", "x").unwrap_err().to_string();
        assert!(err.contains("defaults.theme"), "error should list valid keys: {err}");
    }
}
