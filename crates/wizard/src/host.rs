//! Host callbacks.

use async_trait::async_trait;
use toolwiz_core::{DraftMutation, ToolDraft};

/// The host of a wizard session.
///
/// The host owns the draft and the preview text. The wizard reads both
/// through this trait and requests every change through a callback; it never
/// keeps a copy.
#[async_trait]
pub trait WizardHost: Send {
    /// The draft being built.
    fn draft(&self) -> &ToolDraft;

    /// Generated preview code, if any.
    fn preview_code(&self) -> Option<&str>;

    /// Apply one field edit to the draft.
    fn on_input_change(&mut self, mutation: DraftMutation) -> Result<(), anyhow::Error>;

    /// Generate preview code. Only a successful call may store preview text.
    async fn on_preview(&mut self) -> Result<(), anyhow::Error>;

    /// Finalize the draft.
    async fn on_submit(&mut self) -> Result<(), anyhow::Error>;

    /// Abandon the session.
    fn on_cancel(&mut self);
}
