//! Declarative field tables.
//!
//! Every integration form is described by static data: which fields exist,
//! how they are entered, and which subset is visible for the selected
//! sub-operation or auth type. One generic renderer walks these tables.

use serde::Serialize;
use toolwiz_core::{ConfigMap, Integration};

/// One option of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Stored value
    pub value: &'static str,

    /// Display label
    pub label: &'static str,
}

/// Shorthand for building option lists.
pub const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text
    Text,

    /// Endpoint address
    Url,

    /// Masked secret
    Password,

    /// Multi-line text
    TextArea,

    /// JSON carried as unparsed text
    Json,

    /// One of a fixed option list
    Select(&'static [SelectOption]),
}

/// Static description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Storage key
    pub key: &'static str,

    /// Display label
    pub label: &'static str,

    /// Input kind
    pub kind: FieldKind,

    /// Marked as required in the form
    pub required: bool,

    /// Placeholder text
    pub placeholder: &'static str,

    /// Value shown when nothing is stored
    pub default: &'static str,

    /// Help line under the input
    pub help: Option<&'static str>,
}

impl FieldSpec {
    /// A field of the given kind.
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            placeholder: "",
            default: "",
            help: None,
        }
    }

    /// A single-line text field.
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// A URL field.
    pub const fn url(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Url)
    }

    /// A masked secret field.
    pub const fn password(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Password)
    }

    /// A multi-line text field.
    pub const fn text_area(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    /// A JSON text field. Defaults to `{}`.
    pub const fn json(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Json).default_value("{}")
    }

    /// A select; `default` is shown while nothing is stored.
    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
        default: &'static str,
    ) -> Self {
        Self::new(key, label, FieldKind::Select(options)).default_value(default)
    }

    /// Mark as required.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Set the placeholder.
    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self { placeholder, ..self }
    }

    /// Set the value shown while nothing is stored.
    pub const fn default_value(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Set the help line.
    pub const fn help(self, help: &'static str) -> Self {
        Self {
            help: Some(help),
            ..self
        }
    }

    /// Options, if this is a select.
    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }
}

// ==================== Operation tables (canvas nodes) ====================

/// One sub-operation and the ordered fields it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationSpec {
    /// Stored discriminator value
    pub value: &'static str,

    /// Display label
    pub label: &'static str,

    /// Visible fields, in display order
    pub fields: &'static [FieldSpec],
}

/// The closed set of sub-operations of one integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationTable {
    /// Integration this table belongs to
    pub integration: Integration,

    /// Section title
    pub title: &'static str,

    /// Sub-operations, in selector order
    pub operations: &'static [OperationSpec],
}

impl OperationTable {
    /// Key of the discriminator field.
    pub const DISCRIMINATOR: &'static str = "operation";

    /// Look up a sub-operation.
    pub fn operation(&self, value: &str) -> Option<&'static OperationSpec> {
        self.operations.iter().find(|op| op.value == value)
    }

    /// Fields visible for `operation`. Nothing for an unset or unknown one.
    pub fn visible_fields(&self, operation: &str) -> &'static [FieldSpec] {
        self.operation(operation).map(|op| op.fields).unwrap_or(&[])
    }

    /// Every field across all sub-operations, first occurrence of each key.
    pub fn all_fields(&self) -> Vec<&'static FieldSpec> {
        let mut seen = Vec::new();
        for field in self.operations.iter().flat_map(|op| op.fields.iter()) {
            if !seen.iter().any(|f: &&FieldSpec| f.key == field.key) {
                seen.push(field);
            }
        }
        seen
    }

    /// Display default for a key.
    pub fn default_for(&self, key: &str) -> &'static str {
        self.all_fields()
            .into_iter()
            .find(|f| f.key == key)
            .map(|f| f.default)
            .unwrap_or("")
    }

    /// The discriminator rendered as a select field.
    pub fn discriminator_options(&self) -> Vec<SelectOption> {
        std::iter::once(opt("", "Select Operation"))
            .chain(self.operations.iter().map(|op| opt(op.value, op.label)))
            .collect()
    }
}

// ==================== Connection tables (tool config) ====================

/// Visibility gate: shown only while `key` holds one of `any_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// Gating key
    pub key: &'static str,

    /// Values that reveal the field
    pub any_of: &'static [&'static str],
}

/// A connection field with its visibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionField {
    /// The field itself
    pub spec: FieldSpec,

    /// Gate; `None` means always visible
    pub when: Option<Condition>,

    /// Credential material, never projected into summaries
    pub credential: bool,
}

impl ConnectionField {
    /// Always-visible field.
    pub const fn always(spec: FieldSpec) -> Self {
        Self {
            spec,
            when: None,
            credential: false,
        }
    }

    /// Field shown only for some values of `key`.
    pub const fn when(spec: FieldSpec, key: &'static str, any_of: &'static [&'static str]) -> Self {
        Self {
            spec,
            when: Some(Condition { key, any_of }),
            credential: false,
        }
    }

    /// Mark as credential material.
    pub const fn credential(self) -> Self {
        Self {
            credential: true,
            ..self
        }
    }
}

/// A titled group of connection fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    /// Heading
    pub title: &'static str,

    /// Fields in display order
    pub fields: &'static [ConnectionField],
}

/// The tool-level configuration form of one integration.
///
/// Conditional fields are gated on the effective value of their
/// discriminator: the stored value, or the field's display default when
/// nothing is stored. A fresh config therefore shows the fields of the
/// default auth type rather than hiding every auth-specific field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionTable {
    /// Integration this table belongs to
    pub integration: Integration,

    /// Form heading
    pub title: &'static str,

    /// Banner heading
    pub banner: &'static str,

    /// Sections, in display order
    pub sections: &'static [SectionSpec],
}

impl ConnectionTable {
    /// Notice shown on every integration form.
    pub const NOTICE: &'static str =
        "Backend functionality coming soon. Configuration will be saved for future implementation.";

    /// Every field, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &'static ConnectionField> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Display default for a key.
    pub fn default_for(&self, key: &str) -> &'static str {
        self.fields()
            .find(|f| f.spec.key == key)
            .map(|f| f.spec.default)
            .unwrap_or("")
    }

    /// Stored value of `key`, or its display default.
    pub fn effective<'a>(&self, config: &'a ConfigMap, key: &str) -> &'a str {
        config.text_or(key, self.default_for(key))
    }

    /// Whether a field is shown for the current config.
    ///
    /// Compares against [`ConnectionTable::effective`], so an unset
    /// `auth_type` counts as its default.
    pub fn is_visible(&self, field: &ConnectionField, config: &ConfigMap) -> bool {
        match field.when {
            None => true,
            Some(cond) => {
                let current = self.effective(config, cond.key);
                cond.any_of.iter().any(|v| *v == current)
            }
        }
    }

    /// Non-credential, ungated settings with defaults applied, plus name and type.
    pub fn summary(&self, name: &str, config: &ConfigMap) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        out.insert("name".to_string(), name.into());
        out.insert("type".to_string(), self.integration.as_str().into());
        for field in self.fields().filter(|f| f.when.is_none() && !f.credential) {
            out.insert(
                field.spec.key.to_string(),
                self.effective(config, field.spec.key).into(),
            );
        }
        serde_json::Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS_A: &[FieldSpec] = &[
        FieldSpec::text("object", "Object").required(),
        FieldSpec::json("fields", "Fields"),
    ];
    const FIELDS_B: &[FieldSpec] = &[
        FieldSpec::text("object", "Object (B)"),
        FieldSpec::select("method", "Method", &[opt("GET", "GET"), opt("POST", "POST")], "GET"),
    ];
    const TABLE: OperationTable = OperationTable {
        integration: Integration::Salesforce,
        title: "Test Operation",
        operations: &[
            OperationSpec { value: "a", label: "A", fields: FIELDS_A },
            OperationSpec { value: "b", label: "B", fields: FIELDS_B },
        ],
    };

    #[test]
    fn test_const_builders() {
        let f = FieldSpec::json("parameters", "Parameters (JSON)")
            .required()
            .placeholder("{}")
            .help("JSON object");
        assert!(f.required);
        assert_eq!(f.default, "{}");
        assert_eq!(f.help, Some("JSON object"));
        assert_eq!(f.kind, FieldKind::Json);
    }

    #[test]
    fn test_visible_fields_by_operation() {
        assert_eq!(TABLE.visible_fields("a").len(), 2);
        assert!(TABLE.visible_fields("").is_empty());
        assert!(TABLE.visible_fields("zzz").is_empty());
    }

    #[test]
    fn test_all_fields_dedups_keys() {
        let keys: Vec<_> = TABLE.all_fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["object", "fields", "method"]);
        assert_eq!(TABLE.default_for("method"), "GET");
        assert_eq!(TABLE.default_for("fields"), "{}");
        assert_eq!(TABLE.default_for("missing"), "");
    }

    #[test]
    fn test_discriminator_options_start_with_placeholder() {
        let options = TABLE.discriminator_options();
        assert_eq!(options[0], opt("", "Select Operation"));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_select_options_accessor() {
        assert_eq!(FIELDS_B[1].options().len(), 2);
        assert!(FIELDS_A[0].options().is_empty());
    }
}
