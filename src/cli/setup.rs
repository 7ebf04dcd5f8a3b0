use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Example configuration file for jobledger.
# All keys are optional; remove this file to fall back to the defaults.

# Where the ledger data file lives. Defaults to the platform data
# directory when unset.
# data_path: "/home/me/jobs.json"

# Exchange rates relative to USD. Setting this replaces the built-in
# table (USD, RUB, KZT) entirely.
rates:
  USD: 1.0
  RUB: 95.0
  KZT: 430.0
"#;

/// Creates a default configuration file with example content at the default location
pub fn setup() -> Result<()> {
    setup_at_path(AppConfig::default_config_path()?)
}

/// Creates a default configuration file with example content at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        setup_at_path(&config_path)?;

        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path)?;
        assert!(content.contains("rates:"));
        assert!(content.contains("# Example configuration file for jobledger"));

        Ok(())
    }

    #[test]
    fn test_setup_fails_if_config_exists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "test")?;

        let result = setup_at_path(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));

        Ok(())
    }

    #[test]
    fn test_default_config_is_valid_yaml() -> Result<()> {
        let config: AppConfig =
            serde_yaml::from_str(DEFAULT_CONFIG).context("Failed to parse default config")?;

        let rates = config.rate_table();
        assert_eq!(rates.codes(), vec!["KZT", "RUB", "USD"]);
        assert_eq!(rates.rate("RUB"), Some(95.0));

        Ok(())
    }
}
