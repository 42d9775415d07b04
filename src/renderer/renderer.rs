use crate::parser::*;
use crate::renderer::renders::render_blocks;
use crate::renderer::traits::*;
use tracing::debug;

/// Entry point for turning a decoded document into Markdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRenderer;

impl DocumentRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the root's children as blank-line separated blocks. The root's
    /// own tag is not inspected.
    pub fn render(&self, document: &Node) -> String {
        debug!(root = %document.kind, blocks = document.content.len(), "rendering document");
        render_blocks(&document.content, &RenderContext::new())
    }
}
