//! Form errors.

use thiserror::Error;
use toolwiz_core::{Integration, ToolType};

/// Errors raised while rendering or editing a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The edited key is not on the rendered form.
    #[error("Field not visible: {0}")]
    FieldNotVisible(String),

    /// No such sub-operation for the integration.
    #[error("Unknown operation for {integration}: {operation}")]
    UnknownOperation {
        /// Integration the node belongs to
        integration: Integration,
        /// Requested operation value
        operation: String,
    },

    /// The node's tool is not an integration with an operation form.
    #[error("Node has no integration tool attached")]
    NoIntegration,

    /// Nothing registered for a tool kind.
    #[error("No form renderer registered for {0}")]
    NoRenderer(ToolType),
}
