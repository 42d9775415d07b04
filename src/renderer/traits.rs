/// Per-call rendering state. Copied on every recursive descent; nothing is
/// shared between sibling renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Leading spaces applied to list lines at this depth.
    pub indent: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { indent: 0 }
    }

    pub fn with_indent(&self, indent: usize) -> Self {
        Self { indent }
    }

    /// Context for the children of a list item.
    pub fn nested(&self) -> Self {
        self.with_indent(self.indent + 2)
    }

    pub fn indent(&self) -> String {
        " ".repeat(self.indent)
    }
}

/// Block-level rendering. `None` means the node contributes nothing and is
/// dropped from its parent's block sequence; `Some("")` still takes a slot.
pub trait Render {
    fn render(&self, context: &RenderContext) -> Option<String>;
}
