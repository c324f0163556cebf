use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::{CatalogReader, StorageReader};
use crate::error::{ExtractError, ExtractResult};
use crate::types::{ObjectDescriptor, QualifiedName, StorageDescriptor};

/// Point-in-time dump of catalog objects and their physical storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Catalog object descriptors
    #[serde(default)]
    pub objects: Vec<ObjectDescriptor>,
    /// Storage descriptors keyed by physical table name
    #[serde(default)]
    pub storage: IndexMap<String, StorageDescriptor>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a snapshot from a JSON file
    pub fn from_file(path: &Path) -> ExtractResult<Self> {
        let raw = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            objects = snapshot.objects.len(),
            physical_tables = snapshot.storage.len(),
            "Loaded catalog snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(raw: &str) -> ExtractResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> ExtractResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_object(&mut self, object: ObjectDescriptor) {
        self.objects.push(object);
    }

    /// Record storage properties under a physical table name
    pub fn add_storage(&mut self, physical_name: impl Into<String>, storage: StorageDescriptor) {
        self.storage.insert(physical_name.into(), storage);
    }
}

impl CatalogReader for CatalogSnapshot {
    fn resolve_object(&self, name: &QualifiedName) -> ExtractResult<ObjectDescriptor> {
        debug!(object = %name, "Resolving catalog object");
        self.objects
            .iter()
            .find(|object| object.name == *name)
            .cloned()
            .ok_or_else(|| ExtractError::not_found(name.to_string()))
    }
}

impl StorageReader for CatalogSnapshot {
    fn resolve_storage(&self, object: &ObjectDescriptor) -> ExtractResult<StorageDescriptor> {
        let physical_name = object.physical_name();
        debug!(object = %object.name, physical_name = %physical_name, "Resolving storage descriptor");
        self.storage.get(&physical_name).cloned().ok_or_else(|| {
            ExtractError::storage(format!("no storage descriptor for physical table {}", physical_name))
        })
    }
}
