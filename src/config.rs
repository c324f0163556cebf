use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ExtractResult;

/// Configuration options for DDL extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Data block encoding the metadata layer applies when none is declared
    pub default_data_block_encoding: String,
    /// Column family used when an object declares no default family
    pub default_column_family: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_data_block_encoding: "FAST_DIFF".to_string(),
            default_column_family: "0".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> ExtractResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), ?config, "Loaded extractor configuration");
        Ok(config)
    }
}
