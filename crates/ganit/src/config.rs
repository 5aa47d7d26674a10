use ganit_core::PlaceValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ganit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanitConfig {
    /// Widest worksheet accepted when place-value labels are required
    pub max_columns: usize,

    /// Reject worksheets that are wider than the place-value table
    pub require_place_values: bool,

    /// Log level
    pub log_level: String,
}

impl Default for GanitConfig {
    fn default() -> Self {
        Self {
            max_columns: PlaceValue::COUNT,
            require_place_values: true,
            log_level: "info".to_string(),
        }
    }
}

impl GanitConfig {
    /// Load from configuration file
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are usable
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_columns == 0 {
            anyhow::bail!("max_columns must be at least 1");
        }
        if self.require_place_values && self.max_columns > PlaceValue::COUNT {
            anyhow::bail!(
                "max_columns {} exceeds the {} labelled place values",
                self.max_columns,
                PlaceValue::COUNT
            );
        }
        Ok(())
    }
}
