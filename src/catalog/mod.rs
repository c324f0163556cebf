// Catalog and storage metadata readers consumed by the extractor
pub mod snapshot;

use crate::error::ExtractResult;
use crate::types::{ObjectDescriptor, QualifiedName, StorageDescriptor};

pub use snapshot::CatalogSnapshot;

/// Resolves object names to catalog descriptors
pub trait CatalogReader {
    /// Fails with `ExtractError::NotFound` when the object does not exist
    fn resolve_object(&self, name: &QualifiedName) -> ExtractResult<ObjectDescriptor>;
}

/// Resolves the physical storage properties of an object
pub trait StorageReader {
    /// Fails with `ExtractError::StorageLookup` when nothing is recorded
    fn resolve_storage(&self, object: &ObjectDescriptor) -> ExtractResult<StorageDescriptor>;
}
