//! Per-step validation.
//!
//! Validators are pure: they read the draft and the preview state and
//! nothing else. Recording the outcome is the controller's job.

use serde::Serialize;
use std::collections::BTreeMap;
use toolwiz_core::ToolDraft;

use crate::{WizardConfig, WizardStep};

/// Message for a missing tool type.
pub const TYPE_REQUIRED: &str = "Please select a tool type";

/// Message for a blank name.
pub const NAME_REQUIRED: &str = "Tool name is required";

/// Message for a missing preview.
pub const PREVIEW_REQUIRED: &str = "Please generate preview code first";

/// Whether preview text counts as present: non-blank after trimming.
pub fn has_preview(preview: Option<&str>) -> bool {
    preview.is_some_and(|p| !p.trim().is_empty())
}

/// Step validator.
#[derive(Debug, Clone, Copy)]
pub struct StepValidator<'a> {
    config: &'a WizardConfig,
}

impl<'a> StepValidator<'a> {
    /// Create a validator.
    pub fn new(config: &'a WizardConfig) -> Self {
        Self { config }
    }

    /// Validate one step. `Err` carries the user-facing message.
    pub fn check(&self, step: WizardStep, draft: &ToolDraft, preview: Option<&str>) -> Result<(), &'static str> {
        match step {
            WizardStep::TypeSelection if !draft.has_type() => Err(TYPE_REQUIRED),
            WizardStep::BasicInfo if !draft.has_name() => Err(NAME_REQUIRED),
            // Integration fields are staged as-is; nothing to check here.
            WizardStep::Configuration => Ok(()),
            WizardStep::Preview if self.requires_preview(draft) && !has_preview(preview) => Err(PREVIEW_REQUIRED),
            _ => Ok(()),
        }
    }

    /// Whether the draft needs generated preview code.
    pub fn requires_preview(&self, draft: &ToolDraft) -> bool {
        !self.config.is_self_authored(draft.tool_type)
    }

    /// Whether submit is enabled.
    pub fn can_submit(&self, draft: &ToolDraft, preview: Option<&str>, submitting: bool) -> bool {
        !submitting && (!self.requires_preview(draft) || has_preview(preview))
    }
}

/// Last validation outcome per step.
///
/// A run for one step sets or clears that step's entry only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepErrors(BTreeMap<WizardStep, String>);

impl StepErrors {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a validation run.
    pub fn record(&mut self, step: WizardStep, outcome: Result<(), &str>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&step);
            }
            Err(message) => {
                self.0.insert(step, message.to_string());
            }
        }
    }

    /// Current error of a step.
    pub fn get(&self, step: WizardStep) -> Option<&str> {
        self.0.get(&step).map(String::as_str)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no step has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolwiz_core::ToolType;

    fn check(step: WizardStep, draft: &ToolDraft, preview: Option<&str>) -> Result<(), &'static str> {
        let config = WizardConfig::default();
        StepValidator::new(&config).check(step, draft, preview)
    }

    #[test]
    fn test_type_step_requires_type() {
        let draft: ToolDraft = serde_json::from_str(r#"{"type": "", "name": ""}"#).unwrap();
        assert_eq!(check(WizardStep::TypeSelection, &draft, None), Err(TYPE_REQUIRED));

        let draft = ToolDraft::new().with_type(ToolType::Rag);
        assert_eq!(check(WizardStep::TypeSelection, &draft, None), Ok(()));
    }

    #[test]
    fn test_basic_step_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let draft = ToolDraft::new().with_type(ToolType::Sap).with_name(name);
            assert_eq!(check(WizardStep::BasicInfo, &draft, None), Err(NAME_REQUIRED));
        }
        let draft = ToolDraft::new().with_type(ToolType::Sap).with_name(" ERP ");
        assert_eq!(check(WizardStep::BasicInfo, &draft, None), Ok(()));
    }

    #[test]
    fn test_configuration_and_review_always_pass() {
        let draft = ToolDraft::new();
        assert_eq!(check(WizardStep::Configuration, &draft, None), Ok(()));
        assert_eq!(check(WizardStep::Review, &draft, None), Ok(()));
    }

    #[test]
    fn test_preview_required_for_generated_kinds() {
        let draft = ToolDraft::new().with_type(ToolType::ApiCall).with_name("My Tool");
        assert_eq!(check(WizardStep::Preview, &draft, None), Err(PREVIEW_REQUIRED));
        assert_eq!(check(WizardStep::Preview, &draft, Some("  \n")), Err(PREVIEW_REQUIRED));
        assert_eq!(check(WizardStep::Preview, &draft, Some("def run(): pass")), Ok(()));
    }

    #[test]
    fn test_preview_not_required_for_self_authored() {
        let draft = ToolDraft::new()
            .with_type(ToolType::CustomCode)
            .with_name("X")
            .with_code("print(1)");
        assert_eq!(check(WizardStep::Preview, &draft, None), Ok(()));
        assert_eq!(check(WizardStep::Preview, &draft, Some("")), Ok(()));
    }

    #[test]
    fn test_can_submit() {
        let config = WizardConfig::default();
        let validator = StepValidator::new(&config);
        let generated = ToolDraft::new().with_type(ToolType::Salesforce).with_name("CRM");
        let custom = ToolDraft::new().with_type(ToolType::CustomCode).with_name("X");

        assert!(!validator.can_submit(&generated, None, false));
        assert!(validator.can_submit(&generated, Some("code"), false));
        assert!(!validator.can_submit(&generated, Some("code"), true));
        assert!(validator.can_submit(&custom, None, false));
        assert!(!validator.can_submit(&custom, None, true));
    }

    #[test]
    fn test_step_errors_touch_one_entry() {
        let mut errors = StepErrors::new();
        errors.record(WizardStep::TypeSelection, Err(TYPE_REQUIRED));
        errors.record(WizardStep::BasicInfo, Err(NAME_REQUIRED));
        errors.record(WizardStep::TypeSelection, Ok(()));

        assert_eq!(errors.get(WizardStep::TypeSelection), None);
        assert_eq!(errors.get(WizardStep::BasicInfo), Some(NAME_REQUIRED));
    }
}
