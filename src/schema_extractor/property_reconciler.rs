use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::ExtractorConfig;

pub const BLOOMFILTER: &str = "BLOOMFILTER";
pub const COMPRESSION: &str = "COMPRESSION";
pub const DATA_BLOCK_ENCODING: &str = "DATA_BLOCK_ENCODING";
pub const IS_META: &str = "IS_META";
pub const COPROCESSOR: &str = "coprocessor";

/// Column family defaults as shipped by the storage engine
static STORAGE_ENGINE_DEFAULTS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        (BLOOMFILTER, "ROW"),
        ("REPLICATION_SCOPE", "0"),
        ("VERSIONS", "1"),
        ("MIN_VERSIONS", "0"),
        (COMPRESSION, "NONE"),
        ("TTL", "2147483647"),
        ("BLOCKSIZE", "65536"),
        ("IN_MEMORY", "false"),
        ("BLOCKCACHE", "true"),
        ("KEEP_DELETED_CELLS", "FALSE"),
        (DATA_BLOCK_ENCODING, "NONE"),
        ("CACHE_DATA_ON_WRITE", "false"),
        ("CACHE_DATA_IN_L1", "false"),
        ("CACHE_INDEX_ON_WRITE", "false"),
        ("CACHE_BLOOMS_ON_WRITE", "false"),
        ("EVICT_BLOCKS_ON_CLOSE", "false"),
        ("PREFETCH_BLOCKS_ON_OPEN", "false"),
    ])
});

/// Reference values for every recognized column family property.
///
/// Built once from the storage engine defaults with the metadata layer's own
/// defaults substituted for bloom filter, compression and block encoding.
#[derive(Debug, Clone)]
pub struct DefaultPropertyTable {
    values: IndexMap<String, String>,
}

impl DefaultPropertyTable {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        let values = STORAGE_ENGINE_DEFAULTS
            .iter()
            .map(|(key, value)| {
                let value = if key.eq_ignore_ascii_case(BLOOMFILTER) || key.eq_ignore_ascii_case(COMPRESSION) {
                    "NONE".to_string()
                } else if key.eq_ignore_ascii_case(DATA_BLOCK_ENCODING) {
                    config.default_data_block_encoding.clone()
                } else {
                    value.to_string()
                };
                (key.to_string(), value)
            })
            .collect();
        Self { values }
    }

    /// Table with arbitrary values, mostly useful for tests
    pub fn with_values(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for DefaultPropertyTable {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

/// Default and defined property values collected while reconstructing one table
#[derive(Debug, Clone, Default)]
pub struct ReconciledPropertySet {
    defaults: IndexMap<String, String>,
    defined: IndexMap<String, String>,
}

impl ReconciledPropertySet {
    /// Seed defaults from the engine-wide table, then the object's own defaults
    pub fn seeded(table: &DefaultPropertyTable, object_defaults: &IndexMap<String, String>) -> Self {
        let mut defaults: IndexMap<String, String> = table
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in object_defaults {
            defaults.insert(key.clone(), value.clone());
        }
        Self {
            defaults,
            defined: IndexMap::new(),
        }
    }

    /// Record table-level storage values.
    ///
    /// Coprocessor attachments and the system table marker are skipped. Every
    /// other key gets a default of `false`, so any recorded value other than
    /// `false` is reported as an override.
    pub fn apply_table_values(&mut self, values: &IndexMap<String, String>) {
        for (key, value) in values {
            if key.contains(COPROCESSOR) || key.contains(IS_META) {
                debug!(key = %key, "Skipping internal table property");
                continue;
            }
            self.defaults.insert(key.clone(), "false".to_string());
            self.defined.insert(key.clone(), value.clone());
        }
    }

    /// Record the values of the default column family
    pub fn apply_family_values(&mut self, values: &IndexMap<String, String>) {
        for (key, value) in values {
            self.defined.insert(key.clone(), value.clone());
        }
    }

    /// Record values declared on the catalog object itself; unset values are ignored
    pub fn apply_object_properties(&mut self, properties: &IndexMap<String, Option<String>>) {
        for (key, value) in properties {
            if let Some(value) = value {
                self.defined.insert(key.clone(), value.clone());
            }
        }
    }

    /// Defined values that differ from a known default, in insertion order
    pub fn overrides(&self) -> Vec<(&str, &str)> {
        self.defined
            .iter()
            .filter_map(|(key, value)| match self.defaults.get(key) {
                Some(default) if default != value => Some((key.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Render the overrides as `key=value,...`, empty when there are none
    pub fn render(&self) -> String {
        self.overrides()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(",")
    }
}
