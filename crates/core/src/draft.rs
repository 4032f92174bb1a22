//! Tool draft model - the record being created or edited.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::DraftError;

/// Kind of tool being built.
///
/// The set is closed; the snake_case value is what hosts store and exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    /// Retrieval over an indexed corpus
    Rag,

    /// Web search
    WebSearch,

    /// Hand-written code
    CustomCode,

    /// Another agent invoked as a tool
    Agent,

    /// HTTP request to an external API
    ApiCall,

    /// LLM call wrapped as a tool
    LlmTool,

    /// MCP server integration
    McpServer,

    /// SAP ERP
    Sap,

    /// Databricks workspace
    Databricks,

    /// Workday HCM
    Workday,

    /// Salesforce CRM
    Salesforce,
}

impl ToolType {
    /// All tool kinds in catalog order.
    pub const ALL: [ToolType; 11] = [
        ToolType::Sap,
        ToolType::Workday,
        ToolType::Salesforce,
        ToolType::Databricks,
        ToolType::ApiCall,
        ToolType::CustomCode,
        ToolType::Rag,
        ToolType::WebSearch,
        ToolType::Agent,
        ToolType::LlmTool,
        ToolType::McpServer,
    ];

    /// Stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Rag => "rag",
            ToolType::WebSearch => "web_search",
            ToolType::CustomCode => "custom_code",
            ToolType::Agent => "agent",
            ToolType::ApiCall => "api_call",
            ToolType::LlmTool => "llm_tool",
            ToolType::McpServer => "mcp_server",
            ToolType::Sap => "sap",
            ToolType::Databricks => "databricks",
            ToolType::Workday => "workday",
            ToolType::Salesforce => "salesforce",
        }
    }

    /// The enterprise integration backing this kind, if any.
    pub fn integration(&self) -> Option<Integration> {
        match self {
            ToolType::Salesforce => Some(Integration::Salesforce),
            ToolType::Sap => Some(Integration::Sap),
            ToolType::Workday => Some(Integration::Workday),
            ToolType::Databricks => Some(Integration::Databricks),
            _ => None,
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DraftError::UnknownToolType(s.to_string()))
    }
}

/// Enterprise integrations with dedicated configuration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// Salesforce CRM
    Salesforce,

    /// SAP ERP
    Sap,

    /// Workday HCM
    Workday,

    /// Databricks workspace
    Databricks,
}

impl Integration {
    /// All integrations.
    pub const ALL: [Integration; 4] = [
        Integration::Salesforce,
        Integration::Sap,
        Integration::Workday,
        Integration::Databricks,
    ];

    /// Key used under `toolOperation` and as the tool type value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Integration::Salesforce => "salesforce",
            Integration::Sap => "sap",
            Integration::Workday => "workday",
            Integration::Databricks => "databricks",
        }
    }

    /// Tool kind that selects this integration.
    pub fn tool_type(&self) -> ToolType {
        match self {
            Integration::Salesforce => ToolType::Salesforce,
            Integration::Sap => ToolType::Sap,
            Integration::Workday => ToolType::Workday,
            Integration::Databricks => ToolType::Databricks,
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Integration {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integration::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DraftError::UnknownIntegration(s.to_string()))
    }
}

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Text, including JSON carried as unparsed text
    Text(String),

    /// Checkbox state
    Flag(bool),
}

impl ConfigValue {
    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Flag(_) => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Flag(b)
    }
}

/// Open bag of per-integration settings. The wizard never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, ConfigValue>);

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Get a text value. Flags read as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ConfigValue::as_text)
    }

    /// Text value, or `default` when absent or empty.
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.text(key) {
            Some(v) if !v.is_empty() => v,
            _ => default,
        }
    }

    /// Set a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Opaque parameter descriptor, carried through untouched.
pub type Parameter = serde_json::Value;

/// The in-progress tool record.
///
/// The host owns it; the wizard and renderers only read it and request
/// mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDraft {
    /// Tool name
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Selected tool kind; `None` until picked
    #[serde(
        rename = "type",
        default,
        serialize_with = "serialize_tool_type",
        deserialize_with = "deserialize_tool_type"
    )]
    pub tool_type: Option<ToolType>,

    /// Per-integration settings
    #[serde(default)]
    pub config: ConfigMap,

    /// Hand-written source, used by the self-authored kind
    #[serde(default)]
    pub code: String,

    /// Whether the tool is active
    #[serde(default)]
    pub is_active: bool,

    /// Opaque parameter descriptors
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl ToolDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool kind.
    pub fn with_type(mut self, tool_type: ToolType) -> Self {
        self.tool_type = Some(tool_type);
        self
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the hand-written code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Set one config entry.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.set(key, value);
        self
    }

    /// Whether a kind is selected.
    pub fn has_type(&self) -> bool {
        self.tool_type.is_some()
    }

    /// Whether the name is non-blank.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

// Hosts send `""` for "no type selected" and expect it back.
fn serialize_tool_type<S>(tool_type: &Option<ToolType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(tool_type.map(|t| t.as_str()).unwrap_or(""))
}

fn deserialize_tool_type<'de, D>(deserializer: D) -> Result<Option<ToolType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_type_round_trips_through_str() {
        for t in ToolType::ALL {
            assert_eq!(t.as_str().parse::<ToolType>().unwrap(), t);
        }
        assert!("spreadsheet".parse::<ToolType>().is_err());
    }

    #[test]
    fn test_integration_kinds() {
        assert_eq!(ToolType::Sap.integration(), Some(Integration::Sap));
        assert_eq!(ToolType::CustomCode.integration(), None);
        assert_eq!(Integration::Workday.tool_type(), ToolType::Workday);
    }

    #[test]
    fn test_empty_type_deserializes_as_unset() {
        let draft: ToolDraft = serde_json::from_str(r#"{"type": "", "name": ""}"#).unwrap();
        assert!(draft.tool_type.is_none());
        assert!(!draft.has_type());

        let draft: ToolDraft = serde_json::from_str(r#"{"type": "api_call", "name": "My Tool"}"#).unwrap();
        assert_eq!(draft.tool_type, Some(ToolType::ApiCall));
        assert!(draft.has_name());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<ToolDraft, _> = serde_json::from_str(r#"{"type": "teleport"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_values_mix_text_and_flags() {
        let draft: ToolDraft = serde_json::from_str(
            r#"{"type": "sap", "config": {"system_url": "https://sap.example.com", "verbose": true}}"#,
        )
        .unwrap();
        assert_eq!(draft.config.text("system_url"), Some("https://sap.example.com"));
        assert_eq!(draft.config.get("verbose"), Some(&ConfigValue::Flag(true)));
        assert_eq!(draft.config.text("verbose"), None);
        assert_eq!(draft.config.text_or("auth_type", "basic"), "basic");
    }

    #[test]
    fn test_whitespace_name_is_not_a_name() {
        let draft = ToolDraft::new().with_name("   ");
        assert!(!draft.has_name());
    }

    #[test]
    fn test_serializes_type_key() {
        let draft = ToolDraft::new().with_type(ToolType::CustomCode).with_name("X");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "custom_code");
        assert_eq!(json["name"], "X");
    }

    #[test]
    fn test_unset_type_serializes_as_empty_string() {
        let json = serde_json::to_value(ToolDraft::new()).unwrap();
        assert_eq!(json["type"], "");

        let back: ToolDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back.tool_type, None);
        assert_eq!(back, ToolDraft::new());
    }
}
