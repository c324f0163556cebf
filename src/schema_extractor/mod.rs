// DDL reconstruction from catalog and storage metadata
pub mod column_formatter;
pub mod ddl_extractor;
pub mod index_builder;
pub mod name_normalizer;
pub mod property_reconciler;
pub mod schema_tree;
pub mod structural_differ;
pub mod table_builder;
pub mod view_builder;


pub use ddl_extractor::{DdlExtractor, ResolvedObject};
pub use index_builder::IndexDdlBuilder;
pub use property_reconciler::{DefaultPropertyTable, ReconciledPropertySet};
pub use schema_tree::{SchemaTree, SchemaTreeNode};
pub use table_builder::TableDdlBuilder;
pub use view_builder::build_view_ddl;
