//! File-backed wizard host.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use toolwiz_core::{DraftMutation, ToolDraft};
use toolwiz_wizard::WizardHost;
use tracing::{debug, info};

/// Host that keeps a draft loaded from a JSON file.
///
/// Preview code is read from a file on request; submit writes the draft back
/// out, with the preview next to it.
pub struct FileHost {
    draft: ToolDraft,
    preview: Option<String>,
    preview_source: Option<PathBuf>,
    output: PathBuf,
    cancelled: bool,
}

impl FileHost {
    /// Load a draft. Submit overwrites the same file unless redirected.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read draft {}", path.display()))?;
        let draft: ToolDraft = serde_json::from_str(&content)
            .with_context(|| format!("Invalid draft {}", path.display()))?;
        debug!("Loaded draft '{}' from {}", draft.name, path.display());

        Ok(Self {
            draft,
            preview: None,
            preview_source: None,
            output: path.to_path_buf(),
            cancelled: false,
        })
    }

    /// Read preview code from `path` when asked to generate it.
    pub fn with_preview_source(mut self, path: Option<PathBuf>) -> Self {
        self.preview_source = path;
        self
    }

    /// Write submitted drafts to `path`.
    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.output = path;
        self
    }

    /// Where submit writes the draft.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Where the preview is written on submit.
    pub fn preview_output(&self) -> PathBuf {
        self.output.with_extension("preview")
    }

    /// Whether the session was abandoned.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Write the draft to the output path.
    pub async fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.draft)?;
        tokio::fs::write(&self.output, content)
            .await
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        debug!("Saved draft to {}", self.output.display());
        Ok(())
    }
}

#[async_trait]
impl WizardHost for FileHost {
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
        let source = self
            .preview_source
            .as_ref()
            .context("No preview file given")?;
        let code = tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read preview {}", source.display()))?;
        self.preview = Some(code);
        Ok(())
    }

    async fn on_submit(&mut self) -> Result<(), anyhow::Error> {
        self.save().await?;
        if let Some(preview) = &self.preview {
            let path = self.preview_output();
            tokio::fs::write(&path, preview)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        info!("Submitted '{}' to {}", self.draft.name, self.output.display());
        Ok(())
    }

    fn on_cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use toolwiz_core::{FieldPath, ToolType};
    use toolwiz_wizard::{ToolCreationWizard, WizardError, WizardStep};

    async fn write_draft(dir: &TempDir, draft: &ToolDraft) -> PathBuf {
        let path = dir.path().join("draft.json");
        tokio::fs::write(&path, serde_json::to_string(draft).unwrap())
            .await
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_open_and_edit() {
        let dir = TempDir::new().unwrap();
        let path = write_draft(&dir, &ToolDraft::new().with_type(ToolType::Sap)).await;

        let mut host = FileHost::open(&path).await.unwrap();
        host.on_input_change(DraftMutation::text(FieldPath::config("base_url"), "https://erp"))
            .unwrap();
        host.save().await.unwrap();

        let reloaded = FileHost::open(&path).await.unwrap();
        assert_eq!(reloaded.draft().config.text("base_url"), Some("https://erp"));
        assert_eq!(reloaded.draft().tool_type, Some(ToolType::Sap));
    }

    #[tokio::test]
    async fn test_missing_preview_file_fails_generation() {
        let dir = TempDir::new().unwrap();
        let path = write_draft(&dir, &ToolDraft::new().with_type(ToolType::ApiCall).with_name("Fetch")).await;

        let mut host = FileHost::open(&path)
            .await
            .unwrap()
            .with_preview_source(Some(dir.path().join("missing.py")));
        let mut wizard = ToolCreationWizard::new(true);

        wizard.advance(&mut host).await.unwrap();
        let err = wizard.advance(&mut host).await.unwrap_err();
        assert!(matches!(err, WizardError::PreviewFailed(_)));
        assert_eq!(wizard.current_step(), WizardStep::Configuration);
        assert!(host.preview_code().is_none());
    }

    #[tokio::test]
    async fn test_walk_and_submit() {
        let dir = TempDir::new().unwrap();
        let path = write_draft(&dir, &ToolDraft::new().with_type(ToolType::ApiCall).with_name("Fetch")).await;
        let preview = dir.path().join("preview.py");
        tokio::fs::write(&preview, "def run():\n    pass\n").await.unwrap();
        let out = dir.path().join("out.json");

        let mut host = FileHost::open(&path)
            .await
            .unwrap()
            .with_preview_source(Some(preview))
            .with_output(out.clone());
        let mut wizard = ToolCreationWizard::new(false);
        while !wizard.current_step().is_last() {
            wizard.advance(&mut host).await.unwrap();
        }
        wizard.submit(&mut host).await.unwrap();

        let saved = FileHost::open(&out).await.unwrap();
        assert_eq!(saved.draft().name, "Fetch");
        let code = tokio::fs::read_to_string(dir.path().join("out.preview")).await.unwrap();
        assert!(code.starts_with("def run()"));
    }

    #[tokio::test]
    async fn test_cancel_marks_host() {
        let dir = TempDir::new().unwrap();
        let path = write_draft(&dir, &ToolDraft::new()).await;
        let mut host = FileHost::open(&path).await.unwrap();

        ToolCreationWizard::new(false).cancel(&mut host);
        assert!(host.is_cancelled());
    }
}
