use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::schema_extractor::column_formatter::render_column_clause;
use crate::schema_extractor::name_normalizer::empty_column_family;
use crate::schema_extractor::property_reconciler::{DefaultPropertyTable, ReconciledPropertySet};
use crate::types::{ObjectDescriptor, StorageDescriptor};

/// Builds `CREATE TABLE` statements for base tables
pub struct TableDdlBuilder<'a> {
    defaults: &'a DefaultPropertyTable,
    config: &'a ExtractorConfig,
}

impl<'a> TableDdlBuilder<'a> {
    pub fn new(defaults: &'a DefaultPropertyTable, config: &'a ExtractorConfig) -> Self {
        Self { defaults, config }
    }

    /// Reconstruct the statement for `table` using its physical storage properties
    pub fn build(&self, table: &ObjectDescriptor, storage: &StorageDescriptor) -> ExtractResult<String> {
        let properties = self.reconcile_properties(table, storage)?;
        let column_clause = render_column_clause(&table.columns, &table.pk_columns, table.pk_name.as_deref());
        let property_clause = properties.render();

        debug!(
            table = %table.name,
            columns = table.columns.len(),
            key_columns = table.pk_columns.len(),
            overrides = properties.overrides().len(),
            "Built table statement"
        );

        Ok(format!("CREATE TABLE {}{}{}", table.name, column_clause, property_clause))
    }

    /// Collect defaults and defined values, lowest precedence first:
    /// table-level storage values, default family values, catalog values.
    pub fn reconcile_properties(
        &self,
        table: &ObjectDescriptor,
        storage: &StorageDescriptor,
    ) -> ExtractResult<ReconciledPropertySet> {
        let family_name = empty_column_family(table, self.config);
        let family = storage.family(&family_name).ok_or_else(|| {
            ExtractError::storage(format!(
                "column family {} not found for {}",
                family_name,
                table.physical_name()
            ))
        })?;

        let mut properties = ReconciledPropertySet::seeded(self.defaults, &table.default_values);
        properties.apply_table_values(&storage.values);
        properties.apply_family_values(family);
        properties.apply_object_properties(&table.properties);
        Ok(properties)
    }
}
