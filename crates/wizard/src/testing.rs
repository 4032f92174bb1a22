//! Test host with a fixed preview.

use async_trait::async_trait;
use toolwiz_core::{DraftMutation, ToolDraft};

use crate::WizardHost;

/// Host whose preview never changes. Generation always fails.
pub(crate) struct StaticHost {
    pub draft: ToolDraft,
    pub preview: Option<String>,
}

impl StaticHost {
    pub fn new(draft: ToolDraft, preview: Option<&str>) -> Self {
        Self {
            draft,
            preview: preview.map(str::to_string),
        }
    }
}

#[async_trait]
impl WizardHost for StaticHost {
    fn draft(&self) -> &ToolDraft {
        &self.draft
    }

    fn preview_code(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn on_input_change(&mut self, mutation: DraftMutation) -> Result<(), anyhow::Error> {
        self.draft.apply(&mutation)?;
        Ok(())
    }

    async fn on_preview(&mut self) -> Result<(), anyhow::Error> {
        anyhow::bail!("no code generator")
    }

    async fn on_submit(&mut self) -> Result<(), anyhow::Error> {
        Ok(())
    }

    fn on_cancel(&mut self) {}
}
