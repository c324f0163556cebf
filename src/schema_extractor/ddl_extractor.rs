use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::catalog::{CatalogReader, StorageReader};
use crate::config::ExtractorConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::schema_extractor::column_formatter::format_column;
use crate::schema_extractor::index_builder::IndexDdlBuilder;
use crate::schema_extractor::property_reconciler::DefaultPropertyTable;
use crate::schema_extractor::schema_tree::{SchemaTree, SchemaTreeNode};
use crate::schema_extractor::table_builder::TableDdlBuilder;
use crate::schema_extractor::view_builder::build_view_ddl;
use crate::types::{ObjectDescriptor, ObjectKind, QualifiedName};

/// A catalog object together with the object it is derived from
#[derive(Debug, Clone)]
pub enum ResolvedObject {
    Table(ObjectDescriptor),
    Index {
        index: ObjectDescriptor,
        parent: ObjectDescriptor,
    },
    View {
        view: ObjectDescriptor,
        parent: ObjectDescriptor,
    },
}

impl ResolvedObject {
    pub fn descriptor(&self) -> &ObjectDescriptor {
        match self {
            ResolvedObject::Table(table) => table,
            ResolvedObject::Index { index, .. } => index,
            ResolvedObject::View { view, .. } => view,
        }
    }

    pub fn parent(&self) -> Option<&ObjectDescriptor> {
        match self {
            ResolvedObject::Table(_) => None,
            ResolvedObject::Index { parent, .. } | ResolvedObject::View { parent, .. } => Some(parent),
        }
    }
}

/// Reconstructs CREATE statements from catalog and storage metadata
pub struct DdlExtractor<'a> {
    catalog: &'a dyn CatalogReader,
    storage: &'a dyn StorageReader,
    config: ExtractorConfig,
    defaults: DefaultPropertyTable,
}

impl<'a> DdlExtractor<'a> {
    /// Create a new extractor with default configuration
    pub fn new(catalog: &'a dyn CatalogReader, storage: &'a dyn StorageReader) -> Self {
        Self::with_config(catalog, storage, ExtractorConfig::default())
    }

    /// Create a new extractor with custom configuration
    pub fn with_config(
        catalog: &'a dyn CatalogReader,
        storage: &'a dyn StorageReader,
        config: ExtractorConfig,
    ) -> Self {
        let defaults = DefaultPropertyTable::from_config(&config);
        Self {
            catalog,
            storage,
            config,
            defaults,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Reconstruct the CREATE statement of the named object
    pub fn extract(&self, name: &QualifiedName) -> ExtractResult<String> {
        let span = info_span!("extract", extraction_id = %Uuid::new_v4(), object = %name);
        let _guard = span.enter();

        let resolved = self.resolve(name)?;
        let ddl = self.render(&resolved)?;
        info!(kind = %resolved.descriptor().kind, "Reconstructed statement");
        Ok(ddl)
    }

    /// Build the hierarchical export of the named object
    pub fn schema_tree(&self, name: &QualifiedName) -> ExtractResult<SchemaTree> {
        let extraction_id = Uuid::new_v4();
        let span = info_span!("schema_tree", extraction_id = %extraction_id, object = %name);
        let _guard = span.enter();

        let resolved = self.resolve(name)?;
        let root = self.tree_node(&resolved)?;

        info!(kind = %root.kind, columns = root.columns.len(), "Built schema tree");
        Ok(SchemaTree::new(extraction_id, root))
    }

    /// Look up an object and, for indexes and views, the object it is defined on
    pub fn resolve(&self, name: &QualifiedName) -> ExtractResult<ResolvedObject> {
        let object = self.catalog.resolve_object(name)?;
        self.resolve_descriptor(object)
    }

    pub fn resolve_descriptor(&self, object: ObjectDescriptor) -> ExtractResult<ResolvedObject> {
        match object.kind {
            ObjectKind::Table => Ok(ResolvedObject::Table(object)),
            ObjectKind::Index => {
                let parent = self.parent_of(&object)?;
                Ok(ResolvedObject::Index { index: object, parent })
            }
            ObjectKind::View => {
                let parent = self.parent_of(&object)?;
                Ok(ResolvedObject::View { view: object, parent })
            }
            other => Err(ExtractError::unsupported(other)),
        }
    }

    /// Render the statement for an already resolved object
    pub fn render(&self, resolved: &ResolvedObject) -> ExtractResult<String> {
        match resolved {
            ResolvedObject::Table(table) => self.table_ddl(table),
            ResolvedObject::Index { index, parent } => Ok(IndexDdlBuilder::new(&self.config).build(index, parent)),
            ResolvedObject::View { view, parent } => Ok(build_view_ddl(view, parent)),
        }
    }

    fn table_ddl(&self, table: &ObjectDescriptor) -> ExtractResult<String> {
        let storage = self.storage.resolve_storage(table)?;
        TableDdlBuilder::new(&self.defaults, &self.config).build(table, &storage)
    }

    /// Parent of an index or view; indexes on views resolve to the view
    fn parent_of(&self, object: &ObjectDescriptor) -> ExtractResult<ObjectDescriptor> {
        let parent_name = object
            .parent_name
            .as_ref()
            .ok_or_else(|| ExtractError::not_found(format!("parent of {}", object.name)))?;
        debug!(object = %object.name, parent = %parent_name, kind = %object.kind, "Resolving parent");

        self.catalog.resolve_object(parent_name)
    }

    /// Node for a resolved object, nesting its ancestors down to the base table
    fn tree_node(&self, resolved: &ResolvedObject) -> ExtractResult<SchemaTreeNode> {
        let object = resolved.descriptor();
        let parent = match resolved.parent() {
            Some(parent) => {
                let parent = self.resolve_descriptor(parent.clone())?;
                Some(Box::new(self.tree_node(&parent)?))
            }
            None => None,
        };

        Ok(SchemaTreeNode {
            name: object.name.to_string(),
            kind: object.kind,
            ddl: self.render(resolved)?,
            columns: object.columns.iter().map(format_column).collect(),
            parent,
        })
    }
}
