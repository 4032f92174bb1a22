//! Toolwiz core data models.
//!
//! The tool draft edited by the creation wizard, the canvas node carrying
//! per-integration operation settings, and the mutation requests hosts apply
//! on behalf of the wizard and the form renderers.

#![warn(missing_docs)]

mod draft;
mod error;
mod mutation;
mod node;

pub use draft::{ConfigMap, ConfigValue, Integration, Parameter, ToolDraft, ToolType};
pub use error::DraftError;
pub use mutation::{DraftMutation, FieldPath, FieldValue, InputEvent, InputKind};
pub use node::{CanvasNode, NodeData, OperationValues, Position, ToolRef};
