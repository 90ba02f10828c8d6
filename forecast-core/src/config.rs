use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::{ForecastType, TemperatureUnit};

/// Fallback custom duration when none is configured.
pub const DEFAULT_CUSTOM_DURATION: u8 = 7;

/// User defaults stored on disk; they pre-select the interactive
/// prompts and fill in omitted one-shot flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default temperature unit, e.g. "celsius" or "fahrenheit".
    pub default_unit: Option<String>,

    /// Default forecast type, e.g. "daily", "weekly" or "custom".
    pub default_forecast: Option<String>,

    /// Default span for custom forecasts, 1 to 14 days.
    pub custom_duration: Option<u8>,
}

impl Config {
    /// Return the default unit as a strongly-typed value, falling back
    /// to Celsius when unset.
    pub fn default_unit(&self) -> Result<TemperatureUnit> {
        match self.default_unit.as_deref() {
            Some(s) => TemperatureUnit::try_from(s),
            None => Ok(TemperatureUnit::Celsius),
        }
    }

    /// Return the default forecast type, falling back to Daily when unset.
    pub fn default_forecast(&self) -> Result<ForecastType> {
        match self.default_forecast.as_deref() {
            Some(s) => ForecastType::try_from(s),
            None => Ok(ForecastType::Daily),
        }
    }

    pub fn custom_duration(&self) -> u8 {
        self.custom_duration.unwrap_or(DEFAULT_CUSTOM_DURATION)
    }

    pub fn set_default_unit(&mut self, unit: TemperatureUnit) {
        self.default_unit = Some(unit.as_str().to_string());
    }

    pub fn set_default_forecast(&mut self, kind: ForecastType) {
        self.default_forecast = Some(kind.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-app", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let cfg = Config::default();

        assert_eq!(cfg.default_unit().unwrap(), TemperatureUnit::Celsius);
        assert_eq!(cfg.default_forecast().unwrap(), ForecastType::Daily);
        assert_eq!(cfg.custom_duration(), DEFAULT_CUSTOM_DURATION);
    }

    #[test]
    fn setters_store_lowercase_names() {
        let mut cfg = Config::default();

        cfg.set_default_unit(TemperatureUnit::Fahrenheit);
        cfg.set_default_forecast(ForecastType::Weekly);

        assert_eq!(cfg.default_unit.as_deref(), Some("fahrenheit"));
        assert_eq!(cfg.default_forecast.as_deref(), Some("weekly"));
        assert_eq!(cfg.default_unit().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.default_forecast().unwrap(), ForecastType::Weekly);
    }

    #[test]
    fn unrecognized_unit_errors() {
        let cfg = Config { default_unit: Some("kelvin".to_string()), ..Default::default() };

        let err = cfg.default_unit().unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.set_default_unit(TemperatureUnit::Fahrenheit);
        cfg.custom_duration = Some(3);

        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.default_unit.as_deref(), Some("fahrenheit"));
        assert_eq!(parsed.custom_duration(), 3);
    }
}
