//! Form renderer abstraction.

use serde::Serialize;
use toolwiz_core::{ConfigMap, DraftMutation, FieldPath, ToolType};

use crate::schema::{ConnectionTable, FieldKind, FieldSpec, OperationTable, SelectOption};
use crate::FormError;

/// A form renderer: a pure function of the current values to a view.
///
/// Renderers never advance wizard steps; edits leave them as [`FieldUpdate`]s
/// produced through [`FormView::edit`].
pub trait FormRenderer: Send + Sync {
    /// Renderer name.
    fn name(&self) -> &str;

    /// Tool kind this renderer configures.
    fn tool_type(&self) -> ToolType;

    /// Render the form for the given values.
    fn render(&self, values: &ConfigMap) -> FormView;
}

/// A point mutation emitted by a form: set `key` to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    /// Field key within the form
    pub key: String,

    /// New value, accepted as-is
    pub value: String,
}

impl FieldUpdate {
    /// As a draft mutation of `config.<key>`.
    pub fn into_mutation(self) -> DraftMutation {
        DraftMutation::text(FieldPath::Config(self.key), self.value)
    }
}

/// Input control used for a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Text input
    Text,

    /// URL input
    Url,

    /// Password input
    Password,

    /// Text area
    TextArea,

    /// Text area holding JSON
    Json,

    /// Dropdown
    Select,
}

impl From<FieldKind> for Control {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Control::Text,
            FieldKind::Url => Control::Url,
            FieldKind::Password => Control::Password,
            FieldKind::TextArea => Control::TextArea,
            FieldKind::Json => Control::Json,
            FieldKind::Select(_) => Control::Select,
        }
    }
}

/// One rendered input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Field key
    pub key: String,

    /// Full dotted name, e.g. `config.instance_url`
    pub path: String,

    /// Display label
    pub label: String,

    /// Input control
    pub control: Control,

    /// Select options; empty for other controls
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    /// Marked as required
    pub required: bool,

    /// Placeholder text
    pub placeholder: String,

    /// Help line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Current value, or the field default when nothing is stored
    pub value: String,
}

impl FieldView {
    fn from_spec(spec: &FieldSpec, prefix: &str, value: &str) -> Self {
        Self {
            key: spec.key.to_string(),
            path: format!("{}.{}", prefix, spec.key),
            label: spec.label.to_string(),
            control: spec.kind.into(),
            options: spec.options().to_vec(),
            required: spec.required,
            placeholder: spec.placeholder.to_string(),
            help: spec.help.map(str::to_string),
            value: value.to_string(),
        }
    }
}

/// A group of inputs, optionally titled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section heading
    pub title: Option<String>,

    /// Visible fields, in display order
    pub fields: Vec<FieldView>,
}

/// Rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Heading
    pub title: String,

    /// Banner, if any
    pub notice: Option<String>,

    /// Sections in display order
    pub sections: Vec<SectionView>,
}

impl FormView {
    /// All visible fields, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldView> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// A visible field by key.
    pub fn field(&self, key: &str) -> Option<&FieldView> {
        self.fields().find(|f| f.key == key)
    }

    /// Keys of the visible fields, in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.fields().map(|f| f.key.as_str()).collect()
    }

    /// Turn an edit of a visible field into an update.
    ///
    /// The value is not inspected; only the key must be on the form.
    pub fn edit(&self, key: &str, value: impl Into<String>) -> Result<FieldUpdate, FormError> {
        if self.field(key).is_none() {
            return Err(FormError::FieldNotVisible(key.to_string()));
        }
        Ok(FieldUpdate {
            key: key.to_string(),
            value: value.into(),
        })
    }
}

/// Renders a tool-level connection form from its table.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionForm {
    table: &'static ConnectionTable,
}

impl ConnectionForm {
    /// Create a renderer over a table.
    pub const fn new(table: &'static ConnectionTable) -> Self {
        Self { table }
    }

    /// Underlying table.
    pub fn table(&self) -> &'static ConnectionTable {
        self.table
    }
}

impl FormRenderer for ConnectionForm {
    fn name(&self) -> &str {
        self.table.title
    }

    fn tool_type(&self) -> ToolType {
        self.table.integration.tool_type()
    }

    fn render(&self, values: &ConfigMap) -> FormView {
        let sections = self
            .table
            .sections
            .iter()
            .map(|section| SectionView {
                title: Some(section.title.to_string()),
                fields: section
                    .fields
                    .iter()
                    .filter(|f| self.table.is_visible(f, values))
                    .map(|f| {
                        FieldView::from_spec(&f.spec, "config", self.table.effective(values, f.spec.key))
                    })
                    .collect(),
            })
            .collect();

        FormView {
            title: self.table.title.to_string(),
            notice: Some(format!("{}: {}", self.table.banner, ConnectionTable::NOTICE)),
            sections,
        }
    }
}

/// Renders a canvas-node operation form from its table.
#[derive(Debug, Clone, Copy)]
pub struct OperationForm {
    table: &'static OperationTable,
}

impl OperationForm {
    /// Create a renderer over a table.
    pub const fn new(table: &'static OperationTable) -> Self {
        Self { table }
    }

    /// Underlying table.
    pub fn table(&self) -> &'static OperationTable {
        self.table
    }

    /// Render with a custom path prefix.
    pub fn render_at(&self, prefix: &str, values: &ConfigMap) -> FormView {
        let operation = values.text(OperationTable::DISCRIMINATOR).unwrap_or("");

        let selector = FieldView {
            key: OperationTable::DISCRIMINATOR.to_string(),
            path: format!("{}.{}", prefix, OperationTable::DISCRIMINATOR),
            label: "Operation Type".to_string(),
            control: Control::Select,
            options: self.table.discriminator_options(),
            required: true,
            placeholder: String::new(),
            help: None,
            value: operation.to_string(),
        };

        let mut fields = vec![selector];
        fields.extend(
            self.table
                .visible_fields(operation)
                .iter()
                .map(|spec| FieldView::from_spec(spec, prefix, values.text_or(spec.key, spec.default))),
        );

        FormView {
            title: self.table.title.to_string(),
            notice: None,
            sections: vec![SectionView { title: None, fields }],
        }
    }
}

impl FormRenderer for OperationForm {
    fn name(&self) -> &str {
        self.table.title
    }

    fn tool_type(&self) -> ToolType {
        self.table.integration.tool_type()
    }

    fn render(&self, values: &ConfigMap) -> FormView {
        self.render_at("config", values)
    }
}
