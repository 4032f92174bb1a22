//! Draft errors.

use thiserror::Error;

/// Errors from building or editing a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The field name does not address a draft field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The value kind does not fit the field
    #[error("Field {field} expects a {expected} value")]
    TypeMismatch {
        /// Field name
        field: String,

        /// Kind the field accepts
        expected: &'static str,
    },

    /// Not one of the known tool kinds
    #[error("Unknown tool type: {0}")]
    UnknownToolType(String),

    /// Not one of the known integrations
    #[error("Unknown integration: {0}")]
    UnknownIntegration(String),
}
