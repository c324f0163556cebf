use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a column family qualifier and the column name
pub const FAMILY_SEPARATOR: char = ':';

/// Schema-qualified object name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Schema name, absent for objects in the default schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Local object name
    pub name: String,
}

/// Kind of catalog object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    Table,
    System,
    View,
    Index,
    Join,
    Subquery,
    Projected,
}

/// Placement mode of a secondary index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    #[default]
    Global,
    Local,
}

/// Row key sort order of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One column as recorded in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name, possibly prefixed with `family:` for index columns
    pub name: String,
    /// Column family, absent for row key columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// SQL type name (e.g. VARCHAR, DECIMAL)
    pub data_type: String,
    /// Maximum length or precision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Numeric scale, only meaningful together with `max_length`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Marks the column as the row timestamp component of the key
    #[serde(default)]
    pub row_timestamp: bool,
}

fn default_nullable() -> bool {
    true
}

/// Catalog descriptor of a table, secondary index or view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    pub name: QualifiedName,
    pub kind: ObjectKind,
    /// All columns in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Row key columns in key order
    #[serde(default)]
    pub pk_columns: Vec<ColumnDescriptor>,
    /// Name of the primary key constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk_name: Option<String>,
    /// Base table of an index or view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<QualifiedName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_type: Option<IndexType>,
    /// Stored statement text of a view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_statement: Option<String>,
    /// Declared default column family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_family: Option<String>,
    /// Object-level property values, `None` when unset
    #[serde(default)]
    pub properties: IndexMap<String, Option<String>>,
    /// Object-kind defaults for the same properties
    #[serde(default)]
    pub default_values: IndexMap<String, String>,
    /// Name of the underlying physical table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_name: Option<String>,
}

/// Physical storage properties of an object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageDescriptor {
    /// Table-level values
    #[serde(default)]
    pub values: IndexMap<String, String>,
    /// Column family values keyed by family name
    #[serde(default)]
    pub families: IndexMap<String, IndexMap<String, String>>,
}

impl QualifiedName {
    pub fn new(schema: Option<&str>, name: &str) -> Self {
        Self {
            schema: schema.filter(|s| !s.is_empty()).map(str::to_string),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Table => "TABLE",
            ObjectKind::System => "SYSTEM",
            ObjectKind::View => "VIEW",
            ObjectKind::Index => "INDEX",
            ObjectKind::Join => "JOIN",
            ObjectKind::Subquery => "SUBQUERY",
            ObjectKind::Projected => "PROJECTED",
        };
        f.write_str(name)
    }
}

impl SortOrder {
    /// SQL keyword for this order
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == SortOrder::default()
    }
}

impl ColumnDescriptor {
    /// Create a nullable, ascending column
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family_name: None,
            data_type: data_type.into(),
            max_length: None,
            scale: None,
            nullable: true,
            sort_order: SortOrder::Asc,
            row_timestamp: false,
        }
    }

    pub fn in_family(mut self, family: impl Into<String>) -> Self {
        self.family_name = Some(family.into());
        self
    }

    pub fn with_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set precision and scale together
    pub fn with_scale(mut self, max_length: u32, scale: u32) -> Self {
        self.max_length = Some(max_length);
        self.scale = Some(scale);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn descending(mut self) -> Self {
        self.sort_order = SortOrder::Desc;
        self
    }

    pub fn row_timestamp(mut self) -> Self {
        self.row_timestamp = true;
        self
    }

    /// Whether the column lives in a named column family
    pub fn has_family(&self) -> bool {
        self.family_name.as_deref().map_or(false, |f| !f.is_empty())
    }
}

impl ObjectDescriptor {
    fn empty(name: QualifiedName, kind: ObjectKind) -> Self {
        Self {
            name,
            kind,
            columns: Vec::new(),
            pk_columns: Vec::new(),
            pk_name: None,
            parent_name: None,
            index_type: None,
            view_statement: None,
            default_family: None,
            properties: IndexMap::new(),
            default_values: IndexMap::new(),
            physical_name: None,
        }
    }

    /// Create a new base table descriptor
    pub fn table(name: QualifiedName) -> Self {
        Self::empty(name, ObjectKind::Table)
    }

    /// Create a new secondary index descriptor over `parent`
    pub fn index(name: QualifiedName, parent: QualifiedName, index_type: IndexType) -> Self {
        let mut descriptor = Self::empty(name, ObjectKind::Index);
        descriptor.parent_name = Some(parent);
        descriptor.index_type = Some(index_type);
        descriptor
    }

    /// Create a new view descriptor over `parent`
    pub fn view(name: QualifiedName, parent: QualifiedName, statement: Option<String>) -> Self {
        let mut descriptor = Self::empty(name, ObjectKind::View);
        descriptor.parent_name = Some(parent);
        descriptor.view_statement = statement;
        descriptor
    }

    /// Add a non-key column
    pub fn add_column(&mut self, column: ColumnDescriptor) {
        self.columns.push(column);
    }

    /// Add a column that is also part of the row key
    pub fn add_pk_column(&mut self, column: ColumnDescriptor) {
        self.pk_columns.push(column.clone());
        self.columns.push(column);
    }

    pub fn set_pk_name(&mut self, pk_name: impl Into<String>) {
        self.pk_name = Some(pk_name.into());
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: Option<String>) {
        self.properties.insert(key.into(), value);
    }

    pub fn is_local_index(&self) -> bool {
        self.kind == ObjectKind::Index && self.index_type == Some(IndexType::Local)
    }

    /// Physical table name, falling back to the qualified logical name
    pub fn physical_name(&self) -> String {
        self.physical_name
            .clone()
            .unwrap_or_else(|| self.name.to_string())
    }
}

impl StorageDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties of one column family
    pub fn family(&self, name: &str) -> Option<&IndexMap<String, String>> {
        self.families.get(name)
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn set_family_value(&mut self, family: &str, key: impl Into<String>, value: impl Into<String>) {
        self.families
            .entry(family.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }
}
