//! Wizard configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use toolwiz_core::ToolType;
use tracing::debug;

use crate::ConfigError;

/// Wizard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Tool kind whose code is written by hand; it never needs generated preview code
    pub self_authored: ToolType,

    /// Characters of preview code shown on the review step
    pub review_excerpt_chars: usize,

    /// Language of the code editor
    pub code_language: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            self_authored: ToolType::CustomCode,
            review_excerpt_chars: 500,
            code_language: "python".to_string(),
        }
    }
}

impl WizardConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let config: WizardConfig = serde_json::from_str(&content)?;
        debug!("Loaded wizard config from {}", path.display());
        Ok(config)
    }

    /// Whether a kind is the self-authored one.
    pub fn is_self_authored(&self, tool_type: Option<ToolType>) -> bool {
        tool_type == Some(self.self_authored)
    }
}
