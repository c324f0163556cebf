use crate::config::ExtractorConfig;
use crate::types::{ObjectDescriptor, FAMILY_SEPARATOR};

/// Synthetic key column prepended to indexes on views
pub const VIEW_INDEX_ID_COLUMN_NAME: &str = "_INDEX_ID";

/// Strip the family qualifier from a column name when it names the default family.
///
/// `:ID` and `0:NAME` (default family `0`) become `ID` and `NAME`, while
/// `CF:NAME` becomes `CF.NAME`. Names without a separator are returned as is.
pub fn normalize_column_name(column_name: &str, default_family: &str) -> String {
    match column_name.split_once(FAMILY_SEPARATOR) {
        Some((family, name)) if family.is_empty() || family.eq_ignore_ascii_case(default_family) => {
            name.to_string()
        }
        Some(_) => column_name.replace(FAMILY_SEPARATOR, "."),
        None => column_name.to_string(),
    }
}

/// Name of the column family holding an object's empty key value
pub fn empty_column_family(object: &ObjectDescriptor, config: &ExtractorConfig) -> String {
    object
        .default_family
        .as_deref()
        .filter(|family| !family.is_empty())
        .unwrap_or(config.default_column_family.as_str())
        .to_string()
}
