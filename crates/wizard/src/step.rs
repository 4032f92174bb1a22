//! Wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WizardError;

/// A step of the wizard, in the fixed order
/// `TypeSelection → BasicInfo → Configuration → Preview → Review`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WizardStep {
    /// Pick the tool kind
    TypeSelection,

    /// Name, description and active flag
    BasicInfo,

    /// Kind-specific settings
    Configuration,

    /// Generated or hand-written code
    Preview,

    /// Final summary; submit happens here
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::TypeSelection,
        WizardStep::BasicInfo,
        WizardStep::Configuration,
        WizardStep::Preview,
        WizardStep::Review,
    ];

    /// Number of steps.
    pub const COUNT: usize = Self::ALL.len();

    /// First step.
    pub const FIRST: WizardStep = WizardStep::TypeSelection;

    /// Terminal step; only submit leaves it.
    pub const LAST: WizardStep = WizardStep::Review;

    /// Zero-based position.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::TypeSelection => 0,
            WizardStep::BasicInfo => 1,
            WizardStep::Configuration => 2,
            WizardStep::Preview => 3,
            WizardStep::Review => 4,
        }
    }

    /// Step at a position.
    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    /// Following step, `None` at the terminal step.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, `None` at the first step.
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Short key.
    pub fn key(&self) -> &'static str {
        match self {
            WizardStep::TypeSelection => "type",
            WizardStep::BasicInfo => "basic",
            WizardStep::Configuration => "config",
            WizardStep::Preview => "preview",
            WizardStep::Review => "review",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::TypeSelection => "Tool Type",
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::Configuration => "Configuration",
            WizardStep::Preview => "Preview Code",
            WizardStep::Review => "Review",
        }
    }

    /// One-line description under the label.
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::TypeSelection => "Select the type of tool",
            WizardStep::BasicInfo => "Name and description",
            WizardStep::Configuration => "Tool-specific settings",
            WizardStep::Preview => "Review generated code",
            WizardStep::Review => "Final review and submit",
        }
    }

    /// Whether this is the terminal step.
    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WizardStep {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.key() == s)
            .ok_or_else(|| WizardError::UnknownStep(s.to_string()))
    }
}

impl TryFrom<String> for WizardStep {
    type Error = WizardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WizardStep> for String {
    fn from(step: WizardStep) -> Self {
        step.key().to_string()
    }
}
