//! YAML configuration file support.
//!
//! Lets callers define every pipeline stage's configuration in one YAML file
//! and load it at runtime. Stage sections are optional and fall back to their
//! defaults; unknown versions are rejected up front.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "coursework corpus"
//!
//! normalize:
//!   version: 1
//!   normalize_unicode: false
//!   min_token_chars: 2
//!
//! fingerprint:
//!   version: 1
//!   gram_size: 5
//!   base: 256
//!   modulus: 5807
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docsim_canonical::NormalizeConfig;
use docsim_fingerprint::FingerprintConfig;

/// Errors that can occur when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocsimConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization stage configuration.
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Fingerprint stage configuration.
    #[serde(default)]
    pub fingerprint: FingerprintConfig,
}

impl DocsimConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocsimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the format version and every stage configuration.
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.normalize
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.fingerprint
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for DocsimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalize: NormalizeConfig::default(),
            fingerprint: FingerprintConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
normalize:
  version: 1
  min_token_chars: 3
fingerprint:
  version: 1
  gram_size: 7
"#;

        let config = DocsimConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.normalize.min_token_chars, 3);
        assert_eq!(config.fingerprint.gram_size, 7);
        // Omitted fields fall back to their defaults.
        assert_eq!(config.fingerprint.modulus, 5807);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = DocsimConfig::from_yaml("version: \"1\"\n").unwrap();
        assert_eq!(config.normalize, NormalizeConfig::default());
        assert_eq!(config.fingerprint, FingerprintConfig::default());
    }

    #[test]
    fn load_from_file() {
        let yaml = r#"
version: "1.0"
fingerprint:
  gram_size: 4
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = DocsimConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fingerprint.gram_size, 4);
    }

    #[test]
    fn unsupported_version_rejected() {
        let result = DocsimConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn stage_validation_enforced() {
        let yaml = r#"
version: "1.0"
fingerprint:
  gram_size: 0
"#;

        let result = DocsimConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("gram_size must be >= 1"));
    }
}
