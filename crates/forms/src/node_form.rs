//! Operation forms bound to canvas nodes.
//!
//! Values live under `data.toolOperation.<integration>` of the node. Every
//! edit produces a fresh node; the caller swaps it in.

use toolwiz_core::{CanvasNode, ConfigMap, Integration};
use tracing::debug;

use crate::builtin::operation_table;
use crate::renderer::{FieldUpdate, FormView, OperationForm};
use crate::schema::OperationTable;
use crate::FormError;

/// Operation form for the integration attached to a node.
#[derive(Debug, Clone, Copy)]
pub struct NodeOperationForm {
    integration: Integration,
    form: OperationForm,
}

impl NodeOperationForm {
    /// Form for one integration.
    pub fn new(integration: Integration) -> Self {
        Self {
            integration,
            form: OperationForm::new(operation_table(integration)),
        }
    }

    /// Form for the integration of the node's tool.
    pub fn for_node(node: &CanvasNode) -> Result<Self, FormError> {
        node.integration().map(Self::new).ok_or(FormError::NoIntegration)
    }

    /// Integration this form edits.
    pub fn integration(&self) -> Integration {
        self.integration
    }

    /// Backing table.
    pub fn table(&self) -> &'static OperationTable {
        self.form.table()
    }

    /// Values shown for a node: stored values, field defaults for the rest.
    ///
    /// Stored keys outside the table are kept as they are.
    pub fn hydrate(&self, node: &CanvasNode) -> ConfigMap {
        let mut values: ConfigMap = node
            .operation_values(self.integration)
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        for field in self.table().all_fields() {
            let shown = values.text_or(field.key, field.default).to_string();
            values.set(field.key, shown);
        }
        if values.get(OperationTable::DISCRIMINATOR).is_none() {
            values.set(OperationTable::DISCRIMINATOR, "");
        }
        values
    }

    /// Render the form for a node.
    pub fn render(&self, node: &CanvasNode) -> FormView {
        let prefix = format!("toolOperation.{}", self.integration);
        self.form.render_at(&prefix, &self.hydrate(node))
    }

    /// Apply one field update, returning the updated copy of the node.
    ///
    /// An operation change must name one of the table's operations (or clear
    /// it); other values are staged verbatim.
    pub fn apply(&self, node: &CanvasNode, update: &FieldUpdate) -> Result<CanvasNode, FormError> {
        if update.key == OperationTable::DISCRIMINATOR
            && !update.value.is_empty()
            && self.table().operation(&update.value).is_none()
        {
            return Err(FormError::UnknownOperation {
                integration: self.integration,
                operation: update.value.clone(),
            });
        }

        debug!(
            "Node {}: toolOperation.{}.{} updated",
            node.id, self.integration, update.key
        );
        Ok(node.with_operation_field(self.integration, update.key.clone(), update.value.clone()))
    }

    /// Render, edit one visible field, and apply it.
    pub fn edit(&self, node: &CanvasNode, key: &str, value: impl Into<String>) -> Result<CanvasNode, FormError> {
        let update = self.render(node).edit(key, value)?;
        self.apply(node, &update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(tool_type: &str, operation: serde_json::Value) -> CanvasNode {
        serde_json::from_value(serde_json::json!({
            "id": "node-1",
            "type": "tool",
            "data": {
                "type": "tool",
                "label": "Step",
                "tool": {"id": "t1", "name": "Backend", "type": tool_type},
                "toolOperation": operation
            },
            "position": {"x": 0.0, "y": 0.0}
        }))
        .unwrap()
    }

    #[test]
    fn test_for_node_requires_integration_tool() {
        let rag = node("rag", serde_json::json!({}));
        assert!(matches!(NodeOperationForm::for_node(&rag), Err(FormError::NoIntegration)));

        let sap = node("sap", serde_json::json!({}));
        assert_eq!(NodeOperationForm::for_node(&sap).unwrap().integration(), Integration::Sap);
    }

    #[test]
    fn test_hydrate_fills_defaults() {
        let n = node("sap", serde_json::json!({"sap": {"operation": "custom", "customEndpoint": "/x"}}));
        let values = NodeOperationForm::new(Integration::Sap).hydrate(&n);

        assert_eq!(values.text("operation"), Some("custom"));
        assert_eq!(values.text("customEndpoint"), Some("/x"));
        assert_eq!(values.text("customMethod"), Some("GET"));
        assert_eq!(values.text("customBody"), Some(""));
        assert_eq!(values.text("parameters"), Some("{}"));
        assert_eq!(values.text("functionName"), Some(""));
    }

    #[test]
    fn test_render_uses_node_paths() {
        let n = node("salesforce", serde_json::json!({"salesforce": {"operation": "query"}}));
        let view = NodeOperationForm::new(Integration::Salesforce).render(&n);

        assert_eq!(view.keys(), vec!["operation", "object", "soqlQuery"]);
        assert_eq!(
            view.field("soqlQuery").unwrap().path,
            "toolOperation.salesforce.soqlQuery"
        );
    }

    #[test]
    fn test_edit_returns_new_node() {
        let n = node("workday", serde_json::json!({"workday": {"operation": "get_report"}}));
        let form = NodeOperationForm::for_node(&n).unwrap();

        let updated = form.edit(&n, "reportName", "Worker_Report").unwrap();
        assert_eq!(
            updated.operation_values(Integration::Workday).unwrap()["reportName"],
            "Worker_Report"
        );
        assert!(!n.operation_values(Integration::Workday).unwrap().contains_key("reportName"));
    }

    #[test]
    fn test_edit_hidden_field_is_rejected() {
        let n = node("workday", serde_json::json!({"workday": {"operation": "get_report"}}));
        let form = NodeOperationForm::new(Integration::Workday);
        assert!(matches!(
            form.edit(&n, "documentId", "42"),
            Err(FormError::FieldNotVisible(_))
        ));
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let n = node("databricks", serde_json::json!({}));
        let form = NodeOperationForm::new(Integration::Databricks);

        let err = form.edit(&n, "operation", "drop_everything").unwrap_err();
        assert!(matches!(err, FormError::UnknownOperation { .. }));

        let updated = form.edit(&n, "operation", "run_job").unwrap();
        assert_eq!(form.render(&updated).keys(), vec!["operation", "jobId", "parameters"]);
    }

    #[test]
    fn test_json_is_not_checked() {
        let n = node("salesforce", serde_json::json!({"salesforce": {"operation": "create"}}));
        let form = NodeOperationForm::new(Integration::Salesforce);
        let updated = form.edit(&n, "fields", "{oops").unwrap();
        assert_eq!(form.hydrate(&updated).text("fields"), Some("{oops"));
    }
}
