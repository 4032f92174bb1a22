//! Configuration Forms
//!
//! Data-driven renderers for tool configuration: one generic renderer walks
//! static per-integration field tables, for both the tool-level connection
//! forms and the per-node operation forms on the canvas.

#![warn(missing_docs)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod node_form;
pub mod registry;
pub mod renderer;
pub mod schema;

pub use builtin::{connection_table, operation_table};
pub use catalog::{ToolGroup, ToolTypeOption};
pub use error::FormError;
pub use node_form::NodeOperationForm;
pub use registry::RendererRegistry;
pub use renderer::{
    ConnectionForm, Control, FieldUpdate, FieldView, FormRenderer, FormView, OperationForm, SectionView,
};
pub use schema::{
    ConnectionField, ConnectionTable, FieldKind, FieldSpec, OperationSpec, OperationTable, SectionSpec,
    SelectOption,
};
