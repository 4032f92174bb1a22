//! Draft mutation requests.
//!
//! Renderers and the wizard never hold a mutable handle on the draft. They
//! describe the edit (field path + value) and the host applies it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ConfigValue, DraftError, ToolDraft, ToolType};

/// Address of one editable field of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
    /// `name`
    Name,

    /// `description`
    Description,

    /// `type`
    Type,

    /// `code`
    Code,

    /// `is_active`
    IsActive,

    /// `config.<key>`
    Config(String),
}

impl FieldPath {
    /// Path of a config entry.
    pub fn config(key: impl Into<String>) -> Self {
        FieldPath::Config(key.into())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Description => f.write_str("description"),
            FieldPath::Type => f.write_str("type"),
            FieldPath::Code => f.write_str("code"),
            FieldPath::IsActive => f.write_str("is_active"),
            FieldPath::Config(key) => write!(f, "config.{}", key),
        }
    }
}

impl FromStr for FieldPath {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldPath::Name),
            "description" => Ok(FieldPath::Description),
            "type" => Ok(FieldPath::Type),
            "code" => Ok(FieldPath::Code),
            "is_active" => Ok(FieldPath::IsActive),
            other => match other.strip_prefix("config.") {
                Some(key) if !key.is_empty() => Ok(FieldPath::Config(key.to_string())),
                _ => Err(DraftError::UnknownField(other.to_string())),
            },
        }
    }
}

impl TryFrom<String> for FieldPath {
    type Error = DraftError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

/// Kind of input control that produced an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line text input
    Text,

    /// Multi-line text area
    TextArea,

    /// Dropdown
    Select,

    /// Checkbox; the event carries `checked`
    Checkbox,
}

/// A change event from an input control, addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Field name, e.g. `name` or `config.instance_url`
    pub name: String,

    /// Control kind
    pub kind: InputKind,

    /// Text value (text, textarea, select)
    #[serde(default)]
    pub value: String,

    /// Checked state (checkbox)
    #[serde(default)]
    pub checked: bool,
}

impl InputEvent {
    /// Text input change.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            value: value.into(),
            checked: false,
        }
    }

    /// Select change.
    pub fn select(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Select,
            ..Self::text(name, value)
        }
    }

    /// Checkbox toggle.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: String::new(),
            checked,
        }
    }
}

/// New value for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text, select and textarea values
    Text(String),

    /// Checkbox state
    Flag(bool),
}

impl From<FieldValue> for ConfigValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => ConfigValue::Text(s),
            FieldValue::Flag(b) => ConfigValue::Flag(b),
        }
    }
}

/// A described edit: set `path` to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMutation {
    /// Target field
    pub path: FieldPath,

    /// New value
    pub value: FieldValue,
}

impl DraftMutation {
    /// Set a text field.
    pub fn text(path: FieldPath, value: impl Into<String>) -> Self {
        Self {
            path,
            value: FieldValue::Text(value.into()),
        }
    }

    /// Set a boolean field.
    pub fn flag(path: FieldPath, value: bool) -> Self {
        Self {
            path,
            value: FieldValue::Flag(value),
        }
    }

    /// Select a tool kind.
    pub fn tool_type(tool_type: ToolType) -> Self {
        Self::text(FieldPath::Type, tool_type.as_str())
    }
}

impl TryFrom<&InputEvent> for DraftMutation {
    type Error = DraftError;

    fn try_from(event: &InputEvent) -> Result<Self, Self::Error> {
        let path: FieldPath = event.name.parse()?;
        let value = match event.kind {
            InputKind::Checkbox => FieldValue::Flag(event.checked),
            _ => FieldValue::Text(event.value.clone()),
        };
        Ok(Self { path, value })
    }
}

impl ToolDraft {
    /// Apply a single field edit.
    ///
    /// Values are staged as given; nothing is parsed or shape-checked.
    pub fn apply(&mut self, mutation: &DraftMutation) -> Result<(), DraftError> {
        match (&mutation.path, &mutation.value) {
            (FieldPath::Name, FieldValue::Text(v)) => self.name = v.clone(),
            (FieldPath::Description, FieldValue::Text(v)) => self.description = v.clone(),
            (FieldPath::Code, FieldValue::Text(v)) => self.code = v.clone(),
            (FieldPath::Type, FieldValue::Text(v)) => {
                self.tool_type = if v.is_empty() { None } else { Some(v.parse()?) };
            }
            (FieldPath::IsActive, FieldValue::Flag(b)) => self.is_active = *b,
            (FieldPath::Config(key), value) => {
                self.config.set(key.clone(), value.clone());
            }
            (path, FieldValue::Text(_)) => {
                return Err(DraftError::TypeMismatch {
                    field: path.to_string(),
                    expected: "boolean",
                })
            }
            (path, FieldValue::Flag(_)) => {
                return Err(DraftError::TypeMismatch {
                    field: path.to_string(),
                    expected: "text",
                })
            }
        }
        Ok(())
    }

    /// Apply an input event by field name.
    pub fn apply_input(&mut self, event: &InputEvent) -> Result<(), DraftError> {
        let mutation = DraftMutation::try_from(event)?;
        self.apply(&mutation)
    }
}
