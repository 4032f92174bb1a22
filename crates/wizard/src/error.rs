//! Wizard errors.

use thiserror::Error;

use crate::WizardStep;

/// Errors raised by wizard operations.
///
/// All of them are scoped to the current session; none leaves the wizard in
/// a broken state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The current step did not validate; the message is user-facing.
    #[error("Step {step} is invalid: {message}")]
    Validation {
        /// Step that failed
        step: WizardStep,
        /// Message shown for the step
        message: String,
    },

    /// The host failed to generate preview code.
    #[error("Preview generation failed: {0}")]
    PreviewFailed(String),

    /// The host failed to submit the draft.
    #[error("Submit failed: {0}")]
    SubmitFailed(String),

    /// The host rejected a requested draft mutation.
    #[error("Input rejected: {0}")]
    InputRejected(String),

    /// The tool type cannot change while editing an existing tool.
    #[error("Tool type is locked while editing")]
    TypeLocked,

    /// Submit conditions are not met.
    #[error("Submit is disabled")]
    SubmitDisabled,

    /// Submit is only available on the terminal step.
    #[error("Submit is only available on the {} step", WizardStep::LAST)]
    NotAtTerminalStep,

    /// Preview generation is not available for this draft.
    #[error("Preview generation is not available here")]
    PreviewUnavailable,

    /// No step with this key.
    #[error("Unknown step: {0}")]
    UnknownStep(String),
}

/// Errors loading a wizard configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
