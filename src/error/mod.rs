//! Error handling for family table loading and conversion.

use crate::models::TreeId;

/// Errors that can occur while loading or converting family tree data
///
/// Unresolved member references are not represented here: a dangling
/// parent or partner id is ordinary data and resolves to a fallback value.
#[derive(Debug, thiserror::Error)]
pub enum FamilyTableError {
    /// The member source failed to produce a collection for a tree
    #[error("Failed to load members for tree {tree_id}: {message}")]
    SourceLoad {
        /// Tree that was being loaded
        tree_id: TreeId,
        /// Description of the failure
        message: String,
    },

    /// Error decoding a JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A wire date string matched none of the configured formats
    #[error("Invalid date in field '{field}': {value}")]
    InvalidDate {
        /// Name of the wire field
        field: &'static str,
        /// The raw value that failed to parse
        value: String,
    },

    /// Error with configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FamilyTableError {
    /// Create a source load error for a tree
    pub fn source_load(tree_id: TreeId, message: impl Into<String>) -> Self {
        Self::SourceLoad {
            tree_id,
            message: message.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    /// Whether this error means the member source could not deliver data
    #[must_use]
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::SourceLoad { .. })
    }
}

/// Result type for family table operations
pub type Result<T> = std::result::Result<T, FamilyTableError>;
