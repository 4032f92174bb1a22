//! Wizard chrome: title, step indicators and navigation controls.

use serde::Serialize;

use crate::busy::BusyFlag;
use crate::validation::StepValidator;
use crate::{ToolCreationWizard, WizardConfig, WizardHost, WizardStep};

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    /// Before the current step
    Completed,

    /// The current step
    Current,

    /// After the current step
    Upcoming,
}

/// One entry of the step bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    /// Step shown
    pub step: WizardStep,

    /// 1-based position
    pub number: usize,

    /// Display label
    pub label: &'static str,

    /// Short description
    pub description: &'static str,

    /// Position relative to the current step
    pub state: IndicatorState,

    /// Whether clicking jumps to the step
    pub clickable: bool,
}

/// A navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Display label
    pub label: &'static str,

    /// Whether the button accepts clicks
    pub enabled: bool,
}

impl Button {
    fn new(label: &'static str, enabled: bool) -> Self {
        Self { label, enabled }
    }
}

/// Buttons shown under the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControls {
    /// Always present
    pub cancel: Button,

    /// Absent on the first step
    pub previous: Option<Button>,

    /// Present on every step but the last
    pub next: Option<Button>,

    /// Present on the last step only
    pub submit: Option<Button>,
}

/// Render-time view of a wizard that does not borrow it.
///
/// Hosts take one before calling [`ToolCreationWizard::advance`],
/// [`ToolCreationWizard::generate_preview`] or [`ToolCreationWizard::submit`]
/// and render from it while the call is pending.
#[derive(Debug, Clone)]
pub struct WizardStatus {
    pub(crate) step: WizardStep,
    pub(crate) editing: bool,
    pub(crate) config: WizardConfig,
    pub(crate) generating: BusyFlag,
    pub(crate) submitting: BusyFlag,
}

impl WizardStatus {
    /// Step at snapshot time.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether an existing tool is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Configuration in use.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Whether preview generation is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating.is_set()
    }

    /// Whether submit is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Whether submit is enabled for the host's current state.
    pub fn can_submit<H: WizardHost + ?Sized>(&self, host: &H) -> bool {
        self.step.is_last()
            && StepValidator::new(&self.config).can_submit(
                host.draft(),
                host.preview_code(),
                self.is_submitting(),
            )
    }

    /// Navigation buttons for the host's current state.
    pub fn controls<H: WizardHost + ?Sized>(&self, host: &H) -> NavControls {
        let previous = self.step.previous().map(|_| Button::new("Previous", true));
        let (next, submit) = if self.step.is_last() {
            let label = if self.is_submitting() {
                "Saving..."
            } else if self.editing {
                "Update Tool"
            } else {
                "Create Tool"
            };
            (None, Some(Button::new(label, self.can_submit(host))))
        } else {
            (Some(Button::new("Next", !self.is_generating())), None)
        };

        NavControls {
            cancel: Button::new("Cancel", true),
            previous,
            next,
            submit,
        }
    }
}

impl ToolCreationWizard {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Tool"
        } else {
            "Create New Tool"
        }
    }

    /// Progress text, e.g. `Step 2 of 5`.
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.current_step().index() + 1, WizardStep::COUNT)
    }

    /// The step bar.
    pub fn indicators(&self) -> Vec<StepIndicator> {
        let current = self.current_step().index();
        WizardStep::ALL
            .iter()
            .map(|&step| {
                let index = step.index();
                let state = match index.cmp(&current) {
                    std::cmp::Ordering::Less => IndicatorState::Completed,
                    std::cmp::Ordering::Equal => IndicatorState::Current,
                    std::cmp::Ordering::Greater => IndicatorState::Upcoming,
                };
                StepIndicator {
                    step,
                    number: index + 1,
                    label: step.label(),
                    description: step.description(),
                    state,
                    clickable: index <= current,
                }
            })
            .collect()
    }

    /// Navigation buttons for the host's current state.
    pub fn controls<H: WizardHost + ?Sized>(&self, host: &H) -> NavControls {
        self.status().controls(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticHost;
    use toolwiz_core::{ToolDraft, ToolType};

    #[test]
    fn test_title() {
        assert_eq!(ToolCreationWizard::new(false).title(), "Create New Tool");
        assert_eq!(ToolCreationWizard::new(true).title(), "Edit Tool");
    }

    #[test]
    fn test_indicators_when_editing() {
        let wizard = ToolCreationWizard::new(true);
        let indicators = wizard.indicators();

        assert_eq!(indicators.len(), 5);
        assert_eq!(indicators[0].state, IndicatorState::Completed);
        assert!(indicators[0].clickable);
        assert_eq!(indicators[1].state, IndicatorState::Current);
        assert_eq!(indicators[1].number, 2);
        assert_eq!(indicators[1].label, "Basic Info");
        assert!(indicators[1].clickable);
        assert!(indicators[2..].iter().all(|i| i.state == IndicatorState::Upcoming && !i.clickable));
        assert_eq!(wizard.progress_label(), "Step 2 of 5");
    }

    #[test]
    fn test_controls_on_first_step() {
        let wizard = ToolCreationWizard::new(false);
        let host = StaticHost::new(ToolDraft::new(), None);
        let controls = wizard.controls(&host);

        assert!(controls.previous.is_none());
        assert_eq!(controls.next, Some(Button::new("Next", true)));
        assert!(controls.submit.is_none());
        assert_eq!(controls.cancel.label, "Cancel");
    }

    #[tokio::test]
    async fn test_submit_button_on_review() {
        let mut wizard = ToolCreationWizard::new(true);
        let draft = ToolDraft::new().with_type(ToolType::ApiCall).with_name("Fetch");
        let mut host = StaticHost::new(draft.clone(), Some("def run(): pass"));
        while !wizard.current_step().is_last() {
            wizard.advance(&mut host).await.unwrap();
        }

        let controls = wizard.controls(&host);
        assert!(controls.next.is_none());
        assert_eq!(controls.previous, Some(Button::new("Previous", true)));
        assert_eq!(controls.submit, Some(Button::new("Update Tool", true)));

        let without_preview = StaticHost::new(draft, None);
        let controls = wizard.controls(&without_preview);
        assert_eq!(controls.submit, Some(Button::new("Update Tool", false)));
    }
}
