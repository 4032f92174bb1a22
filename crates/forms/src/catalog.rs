//! Tool-type catalog shown by the type picker.

use serde::Serialize;
use std::fmt;
use toolwiz_core::ToolType;

/// Picker group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolGroup {
    /// Enterprise integrations
    Integrations,

    /// General-purpose tools
    Core,

    /// Model-backed tools
    Ai,
}

impl ToolGroup {
    /// Groups in display order.
    pub const ALL: [ToolGroup; 3] = [ToolGroup::Integrations, ToolGroup::Core, ToolGroup::Ai];

    /// Group heading.
    pub fn label(&self) -> &'static str {
        match self {
            ToolGroup::Integrations => "Integrations",
            ToolGroup::Core => "Core Tools",
            ToolGroup::Ai => "AI Tools",
        }
    }
}

impl fmt::Display for ToolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolTypeOption {
    /// Tool kind
    pub value: ToolType,

    /// Display label
    pub label: &'static str,

    /// Picker group
    pub group: ToolGroup,
}

/// Display label of a tool kind.
pub fn label(tool_type: ToolType) -> &'static str {
    match tool_type {
        ToolType::Sap => "SAP",
        ToolType::Workday => "Workday",
        ToolType::Salesforce => "Salesforce",
        ToolType::Databricks => "Databricks",
        ToolType::ApiCall => "API Call",
        ToolType::CustomCode => "Custom Code",
        ToolType::Rag => "RAG",
        ToolType::WebSearch => "Web Search",
        ToolType::Agent => "Agent",
        ToolType::LlmTool => "LLM Tool",
        ToolType::McpServer => "MCP Server",
    }
}

/// Picker group of a tool kind.
pub fn group(tool_type: ToolType) -> ToolGroup {
    match tool_type {
        ToolType::Sap | ToolType::Workday | ToolType::Salesforce | ToolType::Databricks => {
            ToolGroup::Integrations
        }
        ToolType::ApiCall | ToolType::CustomCode => ToolGroup::Core,
        ToolType::Rag | ToolType::WebSearch | ToolType::Agent | ToolType::LlmTool | ToolType::McpServer => {
            ToolGroup::Ai
        }
    }
}

/// All picker entries in catalog order.
pub fn options() -> Vec<ToolTypeOption> {
    ToolType::ALL
        .into_iter()
        .map(|value| ToolTypeOption {
            value,
            label: label(value),
            group: group(value),
        })
        .collect()
}

/// Picker entries grouped, groups in display order.
pub fn grouped() -> Vec<(ToolGroup, Vec<ToolTypeOption>)> {
    let all = options();
    ToolGroup::ALL
        .into_iter()
        .map(|g| (g, all.iter().copied().filter(|o| o.group == g).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        let groups = grouped();
        assert_eq!(groups.len(), 3);

        let (heading, integrations) = &groups[0];
        assert_eq!(heading.label(), "Integrations");
        let labels: Vec<_> = integrations.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["SAP", "Workday", "Salesforce", "Databricks"]);

        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[2].1.len(), 5);
    }

    #[test]
    fn test_every_kind_listed_once() {
        let all = options();
        assert_eq!(all.len(), 11);
        assert_eq!(all[5].value, ToolType::CustomCode);
        assert_eq!(all[5].label, "Custom Code");
    }
}
