//! Simulation request configuration
//!
//! An explicit immutable request struct replaces page-global widget state:
//! the CLI, the server, and tests all build one of these and hand it to the
//! engine. Loadable from a YAML file; serde aliases accept the original
//! field names (`qtd_ids`, `gerar_automatico`, `ids_texto`).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of IDs per run
pub const MAX_COUNT: u32 = 1000;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of IDs to generate in automatic mode (1–1000)
    #[serde(alias = "qtd_ids")]
    pub count: u32,

    /// Generate IDs automatically instead of parsing manual input
    #[serde(alias = "gerar_automatico")]
    pub auto_generate: bool,

    /// Lower bound (inclusive) for generated IDs
    pub min_id: i64,

    /// Upper bound (inclusive) for generated IDs
    pub max_id: i64,

    /// Comma-separated IDs, used only when `auto_generate` is false
    #[serde(alias = "ids_texto")]
    pub ids_text: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: 20,
            auto_generate: true,
            min_id: 0,
            max_id: 9999,
            ids_text: String::new(),
        }
    }
}

impl SimulationConfig {
    /// Create a manual-entry config from comma-separated input
    pub fn manual(ids_text: impl Into<String>) -> Self {
        Self {
            auto_generate: false,
            ids_text: ids_text.into(),
            ..Self::default()
        }
    }

    /// Load and validate a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read request file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load and validate a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse request YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the request.
    ///
    /// An inverted range (`min_id > max_id`) is rejected explicitly, never
    /// silently swapped.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(Error::invalid_value(
                "count",
                format!("must be between 1 and {MAX_COUNT}, got {}", self.count),
            ));
        }

        if self.min_id < 0 {
            return Err(Error::invalid_value(
                "min_id",
                format!("must be >= 0, got {}", self.min_id),
            ));
        }

        if self.max_id < 1 {
            return Err(Error::invalid_value(
                "max_id",
                format!("must be >= 1, got {}", self.max_id),
            ));
        }

        if self.min_id > self.max_id {
            return Err(Error::InvalidRange {
                min: self.min_id,
                max: self.max_id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.count, 20);
        assert!(config.auto_generate);
        assert_eq!(config.min_id, 0);
        assert_eq!(config.max_id, 9999);
        assert!(config.ids_text.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_manual_constructor() {
        let config = SimulationConfig::manual("1, 2, 3");
        assert!(!config.auto_generate);
        assert_eq!(config.ids_text, "1, 2, 3");
        config.validate().unwrap();
    }

    #[test]
    fn test_yaml_with_rust_field_names() {
        let config = SimulationConfig::from_yaml_str(
            r"
count: 5
auto_generate: true
min_id: 10
max_id: 20
",
        )
        .unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.min_id, 10);
        assert_eq!(config.max_id, 20);
    }

    #[test]
    fn test_yaml_accepts_original_field_names() {
        let config = SimulationConfig::from_yaml_str(
            r#"
qtd_ids: 7
gerar_automatico: false
ids_texto: "1, 2, 3"
"#,
        )
        .unwrap();
        assert_eq!(config.count, 7);
        assert!(!config.auto_generate);
        assert_eq!(config.ids_text, "1, 2, 3");
    }

    #[test]
    fn test_rejects_count_out_of_range() {
        let zero = SimulationConfig {
            count: 0,
            ..SimulationConfig::default()
        };
        assert!(zero.validate().is_err());

        let too_many = SimulationConfig {
            count: MAX_COUNT + 1,
            ..SimulationConfig::default()
        };
        assert!(too_many.validate().is_err());

        let at_cap = SimulationConfig {
            count: MAX_COUNT,
            ..SimulationConfig::default()
        };
        at_cap.validate().unwrap();
    }

    #[test]
    fn test_rejects_negative_min_id() {
        let config = SimulationConfig {
            min_id: -1,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_max_id_below_one() {
        let config = SimulationConfig {
            max_id: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = SimulationConfig {
            min_id: 100,
            max_id: 10,
            ..SimulationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRange { min: 100, max: 10 }));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::manual("4, 5");
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
