//! Override metadata configuration
//!
//! Optional per-type metadata overrides, keyed by fully qualified type
//! identifier. Supports loading from:
//! - Config file (featuregen.toml)
//! - XDG config directory
//! - Environment variables (FEATUREGEN_*)
//!
//! A missing file is not an error: generation proceeds as if no overrides
//! were supplied.
//!
//! ## Example config file (featuregen.toml):
//! ```toml
//! [overrides."org.example/core/Thermostat/v1"]
//! originator = "org.example"
//! category = "core"
//! version = "1.2"
//! ```

use std::collections::HashMap;

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Metadata attached to a generated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    /// Fully qualified type identifier
    pub identifier: String,

    #[serde(default)]
    pub originator: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl TypeMetadata {
    /// A fresh default entry with only the identifier populated
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            originator: None,
            category: None,
            version: None,
        }
    }
}

/// One override entry as written in the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataOverride {
    pub originator: Option<String>,
    pub category: Option<String>,
    pub version: Option<String>,
}

/// Override mapping keyed by fully qualified type identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideConfig {
    #[serde(default)]
    pub overrides: HashMap<String, MetadataOverride>,
}

impl OverrideConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file, layered over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Every source is optional; absence of all of them yields an empty
        // override set
        let config_locations = ["featuregen.toml", ".featuregen.toml", "config/featuregen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "featuregen") {
            let xdg_config = config_dir.config_dir().join("featuregen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        // Load from environment variables (FEATUREGEN_*)
        builder = builder.add_source(
            Environment::with_prefix("FEATUREGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Fill only the currently-null fields of `entry` from its override.
    ///
    /// An explicit value already present on the entry is never overwritten.
    pub fn apply(&self, entry: &mut TypeMetadata) {
        let Some(over) = self.overrides.get(&entry.identifier) else {
            return;
        };
        if entry.originator.is_none() {
            entry.originator = over.originator.clone();
        }
        if entry.category.is_none() {
            entry.category = over.category.clone();
        }
        if entry.version.is_none() {
            entry.version = over.version.clone();
        }
    }

    /// Resolve metadata for an identifier.
    ///
    /// A missing key synthesizes a fresh default entry with only the
    /// identifier populated.
    pub fn resolve(&self, identifier: &str) -> TypeMetadata {
        let mut entry = TypeMetadata::new(identifier);
        self.apply(&mut entry);
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> OverrideConfig {
        let mut overrides = HashMap::new();
        overrides.insert(
            "org.example/core/Thermostat/v1".to_string(),
            MetadataOverride {
                originator: Some("org.example".to_string()),
                category: Some("core".to_string()),
                version: Some("1.2".to_string()),
            },
        );
        OverrideConfig { overrides }
    }

    #[test]
    fn test_apply_fills_only_null_fields() {
        let config = sample();
        let mut entry = TypeMetadata::new("org.example/core/Thermostat/v1");
        entry.category = Some("instruments".to_string());

        config.apply(&mut entry);

        assert_eq!(entry.originator.as_deref(), Some("org.example"));
        // Explicit value was not overwritten
        assert_eq!(entry.category.as_deref(), Some("instruments"));
        assert_eq!(entry.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_missing_key_synthesizes_default() {
        let config = sample();
        let entry = config.resolve("org.other/core/Pump/v1");
        assert_eq!(entry.identifier, "org.other/core/Pump/v1");
        assert!(entry.originator.is_none());
        assert!(entry.category.is_none());
        assert!(entry.version.is_none());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = OverrideConfig::load_from(Some("/nonexistent/featuregen.toml")).unwrap();
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[overrides.\"org.example/core/Thermostat/v1\"]\nversion = \"2.0\""
        )
        .unwrap();

        let config =
            OverrideConfig::load_from(Some(file.path().to_str().unwrap())).unwrap();
        let entry = config.resolve("org.example/core/Thermostat/v1");
        assert_eq!(entry.version.as_deref(), Some("2.0"));
        assert!(entry.originator.is_none());
    }

    #[test]
    fn test_save_roundtrip() {
        let config = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("featuregen.toml");
        config.save(path.to_str().unwrap()).unwrap();

        let loaded = OverrideConfig::load_from(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(
            loaded.resolve("org.example/core/Thermostat/v1"),
            config.resolve("org.example/core/Thermostat/v1")
        );
    }
}
