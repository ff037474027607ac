//! Error types for the specter crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building specifications or invoking the filter.
///
/// Every variant is reported at construction or invocation time. Evaluating
/// a specification against an item never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A composite specification was built with too few children.
    #[error("{combinator} requires at least {required} child specifications, got {actual}")]
    MissingChild {
        combinator: &'static str,
        required: usize,
        actual: usize,
    },

    /// Value outside the closed enumeration of an attribute.
    #[error("unknown {attribute} '{value}' (expected one of: {expected})")]
    UnknownValue {
        attribute: &'static str,
        value: String,
        expected: String,
    },

    /// Clause names a field that items do not expose.
    #[error("unknown field '{0}' (expected one of: color, size)")]
    UnknownField(String),

    /// Clause text is not of the form `<field>=<value>` or `<field>!=<value>`.
    #[error("malformed clause '{0}': expected <field>=<value> or <field>!=<value>")]
    MalformedClause(String),

    /// The filter was invoked without a specification.
    #[error("no specification supplied to filter")]
    MissingPredicate,
}

/// Errors raised while loading a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither `.json` nor `.yaml`/`.yml`.
    #[error("unsupported catalog format for {} (use .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type for specification operations.
pub type Result<T> = std::result::Result<T, SpecError>;
