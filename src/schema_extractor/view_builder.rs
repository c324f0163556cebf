use tracing::debug;

use crate::schema_extractor::column_formatter::render_column_clause;
use crate::schema_extractor::structural_differ::symmetric_difference;
use crate::types::ObjectDescriptor;

const WHERE_TOKEN: &str = "WHERE";

/// Build a `CREATE VIEW` statement declaring only the columns the view adds
pub fn build_view_ddl(view: &ObjectDescriptor, parent: &ObjectDescriptor) -> String {
    let columns = symmetric_difference(&parent.columns, &view.columns);
    let pk_columns = symmetric_difference(&parent.pk_columns, &view.pk_columns);
    let column_clause = render_column_clause(&columns, &pk_columns, view.pk_name.as_deref());

    let predicate = view
        .view_statement
        .as_deref()
        .and_then(extract_predicate)
        .map(|predicate| format!(" {}", predicate))
        .unwrap_or_default();

    debug!(
        view = %view.name,
        parent = %parent.name,
        added_columns = columns.len(),
        has_predicate = !predicate.is_empty(),
        "Built view statement"
    );

    format!(
        "CREATE VIEW {}{} AS SELECT * FROM {}{}",
        view.name, column_clause, parent.name, predicate
    )
}

/// The stored statement from its first `WHERE` onwards
pub fn extract_predicate(statement: &str) -> Option<&str> {
    statement.find(WHERE_TOKEN).map(|start| &statement[start..])
}
