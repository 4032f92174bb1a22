//! What occupies each step.
//!
//! The wizard picks the content by step and tool type and never looks inside
//! the configuration fields a form renderer manages.

use serde::Serialize;
use toolwiz_core::{ToolDraft, ToolType};
use toolwiz_forms::{catalog, FormView, RendererRegistry, ToolGroup, ToolTypeOption};

use crate::validation::has_preview;
use crate::{ToolCreationWizard, WizardConfig, WizardHost, WizardStatus, WizardStep};

const UNSUPPORTED_MESSAGE: &str = "This feature is not yet supported. Check back in a future update!";

/// Body of the configuration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum ConfigPanel {
    /// A form renderer's output
    Form {
        /// Rendered fields
        form: FormView,
    },

    /// Hand-written code for the self-authored kind
    CodeEditor {
        /// Current code
        code: String,

        /// Editor language
        language: String,
    },

    /// A kind the wizard cannot configure yet
    Unsupported {
        /// Heading
        title: &'static str,

        /// Notice text
        message: &'static str,
    },

    /// No type chosen, or no renderer registered for it
    Empty,
}

impl ConfigPanel {
    /// Choose the panel for a draft.
    pub fn for_draft(draft: &ToolDraft, config: &WizardConfig, registry: &RendererRegistry) -> Self {
        let Some(tool_type) = draft.tool_type else {
            return ConfigPanel::Empty;
        };

        if config.is_self_authored(Some(tool_type)) {
            return ConfigPanel::CodeEditor {
                code: draft.code.clone(),
                language: config.code_language.clone(),
            };
        }

        if let Some(title) = unsupported_title(tool_type) {
            return ConfigPanel::Unsupported {
                title,
                message: UNSUPPORTED_MESSAGE,
            };
        }

        match registry.get(tool_type) {
            Some(renderer) => ConfigPanel::Form {
                form: renderer.render(&draft.config),
            },
            None => ConfigPanel::Empty,
        }
    }
}

fn unsupported_title(tool_type: ToolType) -> Option<&'static str> {
    match tool_type {
        ToolType::McpServer => Some("MCP Server Integration Tool"),
        ToolType::LlmTool => Some("LLM Tool Integration Tool"),
        ToolType::Agent => Some("AI Agent Tool"),
        _ => None,
    }
}

/// Body of the preview step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PreviewPanel {
    /// The self-authored kind previews its own code
    CodeEditor {
        /// Current code
        code: String,

        /// Editor language
        language: String,
    },

    /// Generated code is present
    Generated {
        /// Preview text
        code: String,
    },

    /// Nothing generated yet; offers generation
    Pending {
        /// Button label
        label: &'static str,

        /// Whether the button accepts clicks
        enabled: bool,
    },
}

/// Final read-only summary of the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    /// Tool type value
    pub tool_type: String,

    /// Tool name
    pub name: String,

    /// Description, or `No description`
    pub description: String,

    /// `Active` or `Inactive`
    pub status: &'static str,

    /// Leading part of the preview for generated kinds
    pub code_excerpt: Option<String>,
}

impl ReviewSummary {
    /// Summarize a draft.
    pub fn new(draft: &ToolDraft, preview: Option<&str>, config: &WizardConfig) -> Self {
        let code_excerpt = match preview {
            Some(code) if has_preview(Some(code)) && !config.is_self_authored(draft.tool_type) => {
                Some(excerpt(code, config.review_excerpt_chars))
            }
            _ => None,
        };

        Self {
            tool_type: draft.tool_type.map(|t| t.as_str().to_string()).unwrap_or_default(),
            name: draft.name.clone(),
            description: if draft.description.is_empty() {
                "No description".to_string()
            } else {
                draft.description.clone()
            },
            status: if draft.is_active { "Active" } else { "Inactive" },
            code_excerpt,
        }
    }
}

/// First `max` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Step-specific body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepBody {
    /// Tool type picker
    TypeSelection {
        /// Catalog grouped for display
        groups: Vec<(ToolGroup, Vec<ToolTypeOption>)>,

        /// Current choice
        selected: Option<ToolType>,

        /// Set when editing an existing tool
        locked: bool,
    },

    /// Name, description and the active checkbox
    BasicInfo {
        /// Tool name
        name: String,

        /// Description
        description: String,

        /// Active checkbox
        is_active: bool,
    },

    /// Type-specific settings
    Configuration {
        /// Selected panel
        panel: ConfigPanel,
    },

    /// Code preview
    Preview {
        /// Selected panel
        panel: PreviewPanel,
    },

    /// Summary before submit
    Review {
        /// Summary
        summary: ReviewSummary,
    },
}

/// Content of the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepContent {
    /// Step shown
    pub step: WizardStep,

    /// The step's current validation error
    pub error: Option<String>,

    /// Step-specific body
    pub body: StepBody,
}

impl WizardStatus {
    /// Body of the preview step for the host's current state.
    pub fn preview_panel<H: WizardHost + ?Sized>(&self, host: &H) -> PreviewPanel {
        let draft = host.draft();
        if self.config.is_self_authored(draft.tool_type) {
            return PreviewPanel::CodeEditor {
                code: draft.code.clone(),
                language: self.config.code_language.clone(),
            };
        }

        match host.preview_code() {
            Some(code) if has_preview(Some(code)) => PreviewPanel::Generated {
                code: code.to_string(),
            },
            _ => PreviewPanel::Pending {
                label: if self.is_generating() {
                    "Generating..."
                } else {
                    "Generate Preview Code"
                },
                enabled: !self.is_generating(),
            },
        }
    }
}

impl ToolCreationWizard {
    /// Describe the current step.
    pub fn content<H: WizardHost + ?Sized>(&self, host: &H, registry: &RendererRegistry) -> StepContent {
        let step = self.current_step();
        let draft = host.draft();
        let config = self.config();

        let body = match step {
            WizardStep::TypeSelection => StepBody::TypeSelection {
                groups: catalog::grouped(),
                selected: draft.tool_type,
                locked: self.is_editing(),
            },
            WizardStep::BasicInfo => StepBody::BasicInfo {
                name: draft.name.clone(),
                description: draft.description.clone(),
                is_active: draft.is_active,
            },
            WizardStep::Configuration => StepBody::Configuration {
                panel: ConfigPanel::for_draft(draft, config, registry),
            },
            WizardStep::Preview => StepBody::Preview {
                panel: self.status().preview_panel(host),
            },
            WizardStep::Review => StepBody::Review {
                summary: ReviewSummary::new(draft, host.preview_code(), config),
            },
        };

        StepContent {
            step,
            error: self.error(step).map(str::to_string),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticHost;

    fn config_panel(draft: &ToolDraft) -> ConfigPanel {
        ConfigPanel::for_draft(draft, &WizardConfig::default(), &RendererRegistry::with_builtin())
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 500), "short");
        assert_eq!(excerpt(&"x".repeat(500), 500), "x".repeat(500));
        assert_eq!(excerpt(&"x".repeat(501), 500), format!("{}...", "x".repeat(500)));
        assert_eq!(excerpt("héllo", 2), "hé...");
    }

    #[test]
    fn test_config_panel_by_type() {
        let sap = ToolDraft::new().with_type(ToolType::Sap);
        match config_panel(&sap) {
            ConfigPanel::Form { form } => assert!(form.notice.is_some()),
            other => panic!("expected form, got {:?}", other),
        }

        let code = ToolDraft::new().with_type(ToolType::CustomCode).with_code("print(1)");
        assert_eq!(
            config_panel(&code),
            ConfigPanel::CodeEditor {
                code: "print(1)".to_string(),
                language: "python".to_string(),
            }
        );

        let agent = ToolDraft::new().with_type(ToolType::Agent);
        assert!(matches!(
            config_panel(&agent),
            ConfigPanel::Unsupported { title: "AI Agent Tool", .. }
        ));

        // Core tool forms come from the host; none is registered here.
        let rag = ToolDraft::new().with_type(ToolType::Rag);
        assert_eq!(config_panel(&rag), ConfigPanel::Empty);
        assert_eq!(config_panel(&ToolDraft::new()), ConfigPanel::Empty);
    }

    #[test]
    fn test_review_summary() {
        let config = WizardConfig::default();
        let draft = ToolDraft::new().with_type(ToolType::ApiCall).with_name("Fetch");
        let long = "a".repeat(600);

        let summary = ReviewSummary::new(&draft, Some(&long), &config);
        assert_eq!(summary.tool_type, "api_call");
        assert_eq!(summary.description, "No description");
        assert_eq!(summary.status, "Inactive");
        assert_eq!(summary.code_excerpt.map(|c| c.len()), Some(503));

        let custom = ToolDraft::new().with_type(ToolType::CustomCode).with_name("X");
        assert_eq!(ReviewSummary::new(&custom, Some("code"), &config).code_excerpt, None);
    }

    #[tokio::test]
    async fn test_content_carries_step_error() {
        let mut wizard = ToolCreationWizard::new(false);
        let mut host = StaticHost::new(ToolDraft::new(), None);
        let registry = RendererRegistry::with_builtin();

        assert!(wizard.advance(&mut host).await.is_err());
        let content = wizard.content(&host, &registry);
        assert_eq!(content.step, WizardStep::TypeSelection);
        assert_eq!(content.error.as_deref(), Some("Please select a tool type"));
        match content.body {
            StepBody::TypeSelection { groups, selected, locked } => {
                assert_eq!(groups.len(), 3);
                assert_eq!(selected, None);
                assert!(!locked);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_preview_offers_generation() {
        let mut wizard = ToolCreationWizard::new(true);
        let mut host = StaticHost::new(
            ToolDraft::new().with_type(ToolType::Workday).with_name("HR"),
            Some("seed"),
        );
        wizard.advance(&mut host).await.unwrap();
        wizard.advance(&mut host).await.unwrap();
        host.preview = None;

        let content = wizard.content(&host, &RendererRegistry::with_builtin());
        assert_eq!(
            content.body,
            StepBody::Preview {
                panel: PreviewPanel::Pending {
                    label: "Generate Preview Code",
                    enabled: true,
                },
            }
        );
    }
}
