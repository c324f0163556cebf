use std::collections::HashMap;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::schema_extractor::name_normalizer::{
    empty_column_family, normalize_column_name, VIEW_INDEX_ID_COLUMN_NAME,
};
use crate::schema_extractor::structural_differ::symmetric_difference;
use crate::types::{ObjectDescriptor, SortOrder};

/// Builds `CREATE [LOCAL ]INDEX` statements for secondary indexes
pub struct IndexDdlBuilder<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> IndexDdlBuilder<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, index: &ObjectDescriptor, parent: &ObjectDescriptor) -> String {
        let default_family = empty_column_family(index, self.config);
        let indexed = indexed_columns(index, parent, &default_family);
        let covered = covered_columns(index, &default_family);

        debug!(
            index = %index.name,
            parent = %parent.name,
            local = index.is_local_index(),
            default_family = %default_family,
            "Built index statement"
        );

        let mut ddl = format!(
            "CREATE {}INDEX {} ON {}({})",
            if index.is_local_index() { "LOCAL " } else { "" },
            index.name.name,
            parent.name,
            indexed
        );
        if !covered.is_empty() {
            ddl.push_str(&format!(" INCLUDE ({})", covered));
        }
        ddl
    }
}

/// Index key columns that are not inherited from the parent's row key.
///
/// Index key names are normalized against the default family and compared with
/// the parent's key names; a column is listed when it appears on one side only.
/// Non-default sort orders recorded on the index are appended.
pub fn indexed_columns(index: &ObjectDescriptor, parent: &ObjectDescriptor, default_family: &str) -> String {
    let mut index_keys = Vec::with_capacity(index.pk_columns.len());
    let mut sort_orders: HashMap<String, SortOrder> = HashMap::new();

    for column in &index.pk_columns {
        let name = normalize_column_name(&column.name, default_family);
        if name.eq_ignore_ascii_case(VIEW_INDEX_ID_COLUMN_NAME) {
            continue;
        }
        sort_orders.insert(name.clone(), column.sort_order);
        index_keys.push(name);
    }

    let parent_keys: Vec<String> = parent.pk_columns.iter().map(|c| c.name.clone()).collect();

    symmetric_difference(&index_keys, &parent_keys)
        .into_iter()
        .map(|name| match sort_orders.get(&name) {
            Some(order) if !order.is_default() => format!("{} {}", name, order.keyword()),
            _ => name,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Columns stored in a named family of the index, in column order
pub fn covered_columns(index: &ObjectDescriptor, default_family: &str) -> String {
    index
        .columns
        .iter()
        .filter(|column| column.has_family())
        .map(|column| normalize_column_name(&column.name, default_family))
        .collect::<Vec<_>>()
        .join(", ")
}
