//! Error types for the `craftplan-catalog` crate.
//!
//! Loading a catalog is the only fallible operation here. Lookups on a
//! loaded catalog never fail; they answer `None` or an empty slice.

/// Errors that can occur when loading or building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Failed to parse JSON content.
    #[error("failed to parse catalog JSON: {source}")]
    Json {
        /// The underlying JSON parse error.
        source: serde_json::Error,
    },

    /// A recipe definition is structurally unusable.
    #[error("invalid recipe for {item}: {reason}")]
    InvalidRecipe {
        /// The item the recipe produces.
        item: String,
        /// Description of what is wrong.
        reason: String,
    },

    /// A smelting table entry is structurally unusable.
    #[error("invalid smelting entry for {output}: {reason}")]
    InvalidSmelting {
        /// The item the entry produces.
        output: String,
        /// Description of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for CatalogError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
