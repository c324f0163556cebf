use crate::types::ColumnDescriptor;

/// Marker rendered after a row timestamp key column
pub const ROW_TIMESTAMP: &str = "ROW_TIMESTAMP";

/// Render `name type[(length[,scale])][ NOT NULL]` for one column
pub fn format_column(column: &ColumnDescriptor) -> String {
    let mut buf = String::with_capacity(column.name.len() + column.data_type.len() + 16);
    buf.push_str(&column.name);
    buf.push(' ');
    buf.push_str(&column.data_type);

    if let Some(max_length) = column.max_length {
        buf.push('(');
        buf.push_str(&max_length.to_string());
        // scale is only carried alongside a length, e.g. DECIMAL(10,2)
        if let Some(scale) = column.scale {
            buf.push(',');
            buf.push_str(&scale.to_string());
        }
        buf.push(')');
    }

    if !column.nullable {
        buf.push_str(" NOT NULL");
    }

    buf
}

/// Sort order and row timestamp attributes of a key column, each with a leading space
pub fn key_attributes(column: &ColumnDescriptor) -> String {
    let mut buf = String::new();

    if !column.sort_order.is_default() {
        buf.push(' ');
        buf.push_str(column.sort_order.keyword());
    }

    if column.row_timestamp {
        buf.push(' ');
        buf.push_str(ROW_TIMESTAMP);
    }

    buf
}

/// Render the parenthesized column clause of a CREATE TABLE or CREATE VIEW.
///
/// A single key column is declared inline with `PRIMARY KEY`; several key
/// columns produce a trailing constraint listing them in the given order.
pub fn render_column_clause(
    columns: &[ColumnDescriptor],
    pk_columns: &[ColumnDescriptor],
    pk_name: Option<&str>,
) -> String {
    let column_defs: Vec<String> = columns
        .iter()
        .map(|column| {
            let mut def = format_column(column);
            if pk_columns.len() == 1 && pk_columns.contains(column) {
                def.push_str(" PRIMARY KEY");
                def.push_str(&key_attributes(column));
            }
            def
        })
        .collect();

    let mut clause = String::from("(");
    clause.push_str(&column_defs.join(", "));

    if pk_columns.len() > 1 {
        let key_defs: Vec<String> = pk_columns
            .iter()
            .map(|column| format!("{}{}", column.name, key_attributes(column)))
            .collect();
        match pk_name {
            Some(name) => clause.push_str(&format!(" CONSTRAINT {} PRIMARY KEY ({})", name, key_defs.join(", "))),
            None => clause.push_str(&format!(" PRIMARY KEY ({})", key_defs.join(", "))),
        }
    }

    clause.push(')');
    clause
}
