//! Wizard controller.
//!
//! Drives the step sequence:
//! ```text
//! TypeSelection → BasicInfo → Configuration → Preview → Review
//! ```
//! Forward moves are validated and may first ask the host for preview code.
//! Backward moves and jumps to visited steps are free.

use toolwiz_core::{DraftMutation, FieldPath, ToolDraft, ToolType};
use tracing::{debug, error, info, warn};

use crate::busy::BusyFlag;
use crate::validation::{has_preview, StepErrors, StepValidator};
use crate::{WizardConfig, WizardError, WizardHost, WizardStatus, WizardStep};

/// Multi-step tool creation wizard.
///
/// Holds only navigation state; the draft and preview live in the host.
#[derive(Debug)]
pub struct ToolCreationWizard {
    config: WizardConfig,
    editing: bool,
    current: WizardStep,
    errors: StepErrors,
    generating: BusyFlag,
    submitting: BusyFlag,
}

impl ToolCreationWizard {
    /// Create a wizard for a new tool, or for editing an existing one.
    pub fn new(editing: bool) -> Self {
        Self {
            config: WizardConfig::default(),
            editing,
            current: Self::start_step_for(editing),
            errors: StepErrors::new(),
            generating: BusyFlag::new(),
            submitting: BusyFlag::new(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    fn start_step_for(editing: bool) -> WizardStep {
        // The type of an existing tool is fixed, so editing skips its step.
        if editing {
            WizardStep::BasicInfo
        } else {
            WizardStep::FIRST
        }
    }

    /// Start a new session, returning to the start step.
    pub fn begin_session(&mut self, editing: bool) {
        self.editing = editing;
        self.current = Self::start_step_for(editing);
        self.errors.clear();
        info!(
            "Wizard session started ({}) at step {}",
            if editing { "editing" } else { "new tool" },
            self.current
        );
    }

    /// Current step.
    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// Step a session starts at.
    pub fn start_step(&self) -> WizardStep {
        Self::start_step_for(self.editing)
    }

    /// Whether an existing tool is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Configuration in use.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Validation outcomes so far.
    pub fn errors(&self) -> &StepErrors {
        &self.errors
    }

    /// Current error of a step.
    pub fn error(&self, step: WizardStep) -> Option<&str> {
        self.errors.get(step)
    }

    /// Whether preview generation is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating.is_set()
    }

    /// Whether submit is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Validator bound to this wizard's configuration.
    pub fn validator(&self) -> StepValidator<'_> {
        StepValidator::new(&self.config)
    }

    /// Validate a step and record the outcome for that step only.
    pub fn validate_step(&mut self, step: WizardStep, draft: &ToolDraft, preview: Option<&str>) -> bool {
        let outcome = self.validator().check(step, draft, preview);
        self.errors.record(step, outcome);
        if let Err(message) = outcome {
            debug!("Step {} invalid: {}", step, message);
        }
        outcome.is_ok()
    }

    /// Whether submit is enabled for the host's current state.
    pub fn can_submit<H: WizardHost + ?Sized>(&self, host: &H) -> bool {
        self.status().can_submit(host)
    }

    /// Snapshot for rendering while an operation holds the wizard.
    ///
    /// Step and editing mode are copied; the busy flags stay live.
    pub fn status(&self) -> WizardStatus {
        WizardStatus {
            step: self.current,
            editing: self.editing,
            config: self.config.clone(),
            generating: self.generating.clone(),
            submitting: self.submitting.clone(),
        }
    }

    /// Move to the next step.
    ///
    /// Leaving `Configuration` for a generated kind with no preview first
    /// awaits the host's preview generation; if that fails the wizard stays
    /// put. At the terminal step this is a no-op.
    pub async fn advance<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> Result<WizardStep, WizardError> {
        let step = self.current;
        if !self.validate_step(step, host.draft(), host.preview_code()) {
            let message = self.errors.get(step).unwrap_or_default().to_string();
            warn!("Cannot leave step {}: {}", step, message);
            return Err(WizardError::Validation { step, message });
        }

        let Some(next) = step.next() else {
            return Ok(step);
        };

        if step == WizardStep::Configuration
            && self.validator().requires_preview(host.draft())
            && !has_preview(host.preview_code())
        {
            self.run_preview(host).await?;
        }

        self.current = next;
        info!("Wizard moved {} -> {}", step, next);
        Ok(next)
    }

    /// Move to the previous step. No validation; no-op at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.current.previous() {
            debug!("Wizard moved back {} -> {}", self.current, previous);
            self.current = previous;
        }
        self.current
    }

    /// Jump to the current step or an earlier one. Never skips ahead.
    pub fn jump_to(&mut self, step: WizardStep) -> bool {
        if step.index() > self.current.index() {
            debug!("Ignoring jump ahead to {}", step);
            return false;
        }
        self.current = step;
        true
    }

    /// Forward a field edit to the host.
    ///
    /// Changing the type of an existing tool is refused.
    pub fn input<H: WizardHost + ?Sized>(&self, host: &mut H, mutation: DraftMutation) -> Result<(), WizardError> {
        if self.editing && mutation.path == FieldPath::Type {
            return Err(WizardError::TypeLocked);
        }
        host.on_input_change(mutation)
            .map_err(|e| WizardError::InputRejected(e.to_string()))
    }

    /// Pick the tool type.
    pub fn select_type<H: WizardHost + ?Sized>(&self, host: &mut H, tool_type: ToolType) -> Result<(), WizardError> {
        self.input(host, DraftMutation::tool_type(tool_type))
    }

    /// Generate preview code on demand from the preview step.
    pub async fn generate_preview<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WizardError> {
        if self.current != WizardStep::Preview
            || !self.validator().requires_preview(host.draft())
            || has_preview(host.preview_code())
        {
            return Err(WizardError::PreviewUnavailable);
        }

        self.run_preview(host).await?;
        self.validate_step(WizardStep::Preview, host.draft(), host.preview_code());
        Ok(())
    }

    async fn run_preview<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WizardError> {
        let _guard = self.generating.hold();
        debug!("Requesting preview code for {}", host.draft().name);

        host.on_preview().await.map_err(|e| {
            error!("Failed to generate preview: {}", e);
            WizardError::PreviewFailed(e.to_string())
        })
    }

    /// Submit the draft. Only on the terminal step.
    ///
    /// The submit flag stays set until the host's call returns; a
    /// [`WizardStatus`] taken beforehand shows the disabled control.
    pub async fn submit<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WizardError> {
        if !self.current.is_last() {
            return Err(WizardError::NotAtTerminalStep);
        }
        if !self.can_submit(host) {
            return Err(WizardError::SubmitDisabled);
        }

        let _guard = self.submitting.hold();
        info!("Submitting tool '{}'", host.draft().name);

        host.on_submit().await.map_err(|e| {
            error!("Failed to submit tool: {}", e);
            WizardError::SubmitFailed(e.to_string())
        })?;

        info!("Tool '{}' submitted", host.draft().name);
        Ok(())
    }

    /// Abandon the session.
    pub fn cancel<H: WizardHost + ?Sized>(&mut self, host: &mut H) {
        info!("Wizard cancelled at step {}", self.current);
        host.on_cancel();
    }
}
