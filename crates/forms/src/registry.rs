//! Renderer registry keyed by tool kind.

use std::collections::HashMap;
use std::sync::Arc;

use toolwiz_core::{ConfigMap, Integration, ToolType};
use tracing::debug;

use crate::builtin::connection_table;
use crate::renderer::{ConnectionForm, FormRenderer, FormView};
use crate::FormError;

/// Maps tool kinds to the renderer that configures them.
///
/// Kinds with no entry fall back to whatever the caller shows for
/// unregistered kinds.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<ToolType, Arc<dyn FormRenderer>>,
}

impl RendererRegistry {
    /// Create a registry with the given renderers.
    pub fn new(renderers: Vec<Arc<dyn FormRenderer>>) -> Self {
        let renderers = renderers
            .into_iter()
            .map(|r| (r.tool_type(), r))
            .collect();

        Self { renderers }
    }

    /// Registry pre-loaded with the four integration connection forms.
    pub fn with_builtin() -> Self {
        Self::new(
            Integration::ALL
                .into_iter()
                .map(|i| Arc::new(ConnectionForm::new(connection_table(i))) as Arc<dyn FormRenderer>)
                .collect(),
        )
    }

    /// Register a renderer, replacing any previous one for its kind.
    pub fn register(&mut self, renderer: Arc<dyn FormRenderer>) {
        debug!("Registering form renderer {} for {}", renderer.name(), renderer.tool_type());
        self.renderers.insert(renderer.tool_type(), renderer);
    }

    /// Renderer for a kind.
    pub fn get(&self, tool_type: ToolType) -> Option<Arc<dyn FormRenderer>> {
        self.renderers.get(&tool_type).cloned()
    }

    /// Render the form of a kind.
    pub fn render(&self, tool_type: ToolType, values: &ConfigMap) -> Result<FormView, FormError> {
        self.renderers
            .get(&tool_type)
            .map(|r| r.render(values))
            .ok_or(FormError::NoRenderer(tool_type))
    }

    /// Whether a kind has a renderer.
    pub fn contains(&self, tool_type: ToolType) -> bool {
        self.renderers.contains_key(&tool_type)
    }

    /// Registered kinds, in catalog order.
    pub fn tool_types(&self) -> Vec<ToolType> {
        ToolType::ALL
            .into_iter()
            .filter(|t| self.renderers.contains_key(t))
            .collect()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("tool_types", &self.tool_types())
            .finish()
    }
}
