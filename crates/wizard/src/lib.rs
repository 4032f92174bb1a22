//! Tool Creation Wizard
//!
//! A five-step state machine that walks a host through building a tool:
//! picking a type, naming it, configuring it, previewing generated code and
//! reviewing before submit. The host owns the draft and the preview; the
//! wizard only reads them and asks for changes through [`WizardHost`].

#![warn(missing_docs)]

pub mod busy;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod host;
pub mod step;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

pub use busy::BusyFlag;
pub use config::WizardConfig;
pub use content::{ConfigPanel, PreviewPanel, ReviewSummary, StepBody, StepContent};
pub use controller::ToolCreationWizard;
pub use error::{ConfigError, WizardError};
pub use host::WizardHost;
pub use step::WizardStep;
pub use validation::{has_preview, StepErrors, StepValidator};
pub use view::{Button, IndicatorState, NavControls, StepIndicator, WizardStatus};
