use crate::core::rates::RateTable;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

/// Optional application configuration. The program works with zero
/// setup; a config file only overrides the defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Path of the ledger data file.
    pub data_path: Option<String>,
    /// Replaces the built-in exchange-rate table entirely when set.
    pub rates: Option<HashMap<String, f64>>,
}

impl AppConfig {
    /// Loads the config file from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "jobledger")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Path of the ledger data file: the configured one, or
    /// `jobs.json` in the platform data directory.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("in", "codito", "jobledger")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join("jobs.json"))
    }

    /// The exchange-rate table this process runs with.
    pub fn rate_table(&self) -> RateTable {
        match &self.rates {
            Some(rates) => RateTable::new(rates.clone()),
            None => RateTable::default(),
        }
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
data_path: "/tmp/jobledger/jobs.json"
rates:
  USD: 1.0
  EUR: 0.9
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.data_path.as_deref(), Some("/tmp/jobledger/jobs.json"));

        let rates = config.rate_table();
        assert!(rates.contains("EUR"));
        assert!(!rates.contains("RUB"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.data_path.is_none());

        let rates = config.rate_table();
        assert_eq!(rates.codes(), vec!["KZT", "RUB", "USD"]);
    }

    #[test]
    fn test_data_file_path_prefers_configured_path() {
        let config = AppConfig {
            data_path: Some("/tmp/custom.json".to_string()),
            rates: None,
        };
        assert_eq!(
            config.data_file_path().unwrap(),
            PathBuf::from("/tmp/custom.json")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "rates: [not, a, map]").unwrap();

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
