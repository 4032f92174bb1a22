//! Canvas node model.
//!
//! Only the parts the operation forms touch are typed; everything else in a
//! node's data rides along untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Integration;

/// Position on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: f64,

    /// Vertical offset
    pub y: f64,
}

/// Reference to the tool attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRef {
    /// Tool id
    pub id: String,

    /// Tool name
    pub name: String,

    /// Tool description
    #[serde(default)]
    pub description: String,

    /// Stored tool type value, when known
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,
}

/// Staged operation settings for one integration, keyed by field name.
pub type OperationValues = BTreeMap<String, String>;

/// Data payload of a canvas node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Node kind
    #[serde(rename = "type")]
    pub node_type: String,

    /// Display label
    #[serde(default)]
    pub label: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attached tool
    #[serde(default)]
    pub tool: Option<ToolRef>,

    /// Per-integration operation settings (`toolOperation.<integration>.<field>`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_operation: BTreeMap<Integration, OperationValues>,

    /// Everything else (prompts, model selection, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A node on the flow canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    /// Node ID
    pub id: String,

    /// Canvas node kind
    #[serde(rename = "type")]
    pub node_type: String,

    /// Payload
    pub data: NodeData,

    /// Canvas position
    #[serde(default)]
    pub position: Position,
}

impl CanvasNode {
    /// Staged values for one integration, if any.
    pub fn operation_values(&self, integration: Integration) -> Option<&OperationValues> {
        self.data.tool_operation.get(&integration)
    }

    /// Integration of the attached tool, if it is one.
    pub fn integration(&self) -> Option<Integration> {
        self.data
            .tool
            .as_ref()
            .and_then(|t| t.tool_type.as_deref())
            .and_then(|t| t.parse().ok())
    }

    /// A copy of this node with `toolOperation.<integration>.<field>` set.
    ///
    /// The receiver is left untouched.
    pub fn with_operation_field(
        &self,
        integration: Integration,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> CanvasNode {
        let mut updated = self.clone();
        updated
            .data
            .tool_operation
            .entry(integration)
            .or_default()
            .insert(field.into(), value.into());
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> CanvasNode {
        serde_json::from_value(serde_json::json!({
            "id": "node-7",
            "type": "agent",
            "data": {
                "type": "agent",
                "label": "Lookup",
                "tool": {"id": "t1", "name": "CRM", "description": "", "type": "salesforce"},
                "toolOperation": {"salesforce": {"operation": "query"}},
                "node": {"systemPrompt": "be brief"}
            },
            "position": {"x": 10.0, "y": 20.0}
        }))
        .unwrap()
    }

    #[test]
    fn test_reads_typed_and_passthrough_data() {
        let node = sample_node();
        assert_eq!(node.integration(), Some(Integration::Salesforce));
        assert_eq!(
            node.operation_values(Integration::Salesforce)
                .and_then(|v| v.get("operation"))
                .map(String::as_str),
            Some("query")
        );
        assert_eq!(node.data.extra["node"]["systemPrompt"], "be brief");
    }

    #[test]
    fn test_with_operation_field_copies() {
        let node = sample_node();
        let updated = node.with_operation_field(Integration::Salesforce, "object", "Contact");

        assert_eq!(updated.data.tool_operation[&Integration::Salesforce]["object"], "Contact");
        assert_eq!(updated.data.tool_operation[&Integration::Salesforce]["operation"], "query");
        assert!(!node.data.tool_operation[&Integration::Salesforce].contains_key("object"));
    }

    #[test]
    fn test_serializes_nested_path() {
        let node = sample_node().with_operation_field(Integration::Sap, "functionName", "BAPI_X");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["data"]["toolOperation"]["sap"]["functionName"], "BAPI_X");
        assert_eq!(json["data"]["node"]["systemPrompt"], "be brief");
    }

    #[test]
    fn test_node_without_tool_has_no_integration() {
        let mut node = sample_node();
        node.data.tool = None;
        assert_eq!(node.integration(), None);
    }
}
