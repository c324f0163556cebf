use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::error::ExtractResult;
use crate::types::ObjectKind;

/// Hierarchical export of one catalog object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaTree {
    pub extraction_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub root: SchemaTreeNode,
}

/// One object in the export; derived objects nest their base table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaTreeNode {
    pub name: String,
    pub kind: ObjectKind,
    /// Reconstructed CREATE statement
    pub ddl: String,
    /// Rendered declaration of each column
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<SchemaTreeNode>>,
}

impl SchemaTree {
    pub fn new(extraction_id: Uuid, root: SchemaTreeNode) -> Self {
        Self {
            extraction_id,
            generated_at: Utc::now(),
            root,
        }
    }

    /// Indented JSON rendering
    pub fn to_json(&self) -> ExtractResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_file(&self, path: &Path) -> ExtractResult<()> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "Schema tree written");
        Ok(())
    }
}
