// File: src/config.rs
// Purpose: Configuration parsing from rusty-schema.toml

use crate::error::SchemaError;
use crate::validators::{file_with, FileValidator};
use anyhow::{Context, Result};
use rusty_schema_validation::FileLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "rusty-schema.toml";

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SchemaConfig {
    /// Default upload constraints
    #[serde(default)]
    pub file: FileLimits,
}

impl SchemaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SchemaConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(
            min_size = config.file.min_size,
            max_size = config.file.max_size,
            mime_types = config.file.mime_types.len(),
            "Loaded config from {:?}",
            path
        );

        Ok(config)
    }

    /// Load configuration from default path (./rusty-schema.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// File validator using the configured limits
    pub fn file_validator(&self) -> std::result::Result<FileValidator, SchemaError> {
        file_with(self.file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SchemaConfig::default();
        assert_eq!(config.file.min_size, 0);
        assert_eq!(config.file.max_size, 2 * 1024 * 1024);
        assert_eq!(config.file.mime_types.len(), 4);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<SchemaConfig>("").unwrap_or_default();
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn test_partial_file_section() {
        let toml = r#"
            [file]
            max_size = 5242880
        "#;
        let config: SchemaConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.file.max_size, 5 * 1024 * 1024);
        assert_eq!(config.file.min_size, 0);
        assert_eq!(config.file.subtypes(), vec!["png", "jpeg", "jpg", "pdf"]);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SchemaConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn test_load_default_without_file_in_package_root() {
        // cargo runs tests from the package root, which ships no config
        let config = SchemaConfig::load_default().unwrap();
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[file]\nmime_types = [\"text/csv\"]").unwrap();

        let config = SchemaConfig::load(&path).unwrap();
        assert_eq!(config.file.mime_types, vec!["text/csv".to_string()]);
        assert!(config.file_validator().is_ok());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[file\nmax_size = ").unwrap();

        let err = SchemaConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_inverted_limits_rejected_when_building_validator() {
        let config: SchemaConfig = toml::from_str("[file]\nmin_size = 10\nmax_size = 1").unwrap();
        assert!(matches!(
            config.file_validator(),
            Err(SchemaError::InvalidFileLimits { min: 10, max: 1 })
        ));
    }
}
