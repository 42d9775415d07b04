use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::inline::*;
use crate::renderer::lists::*;
use crate::renderer::tables::*;
use crate::renderer::traits::*;
use tracing::debug;

impl Render for Node {
    fn render(&self, context: &RenderContext) -> Option<String> {
        let block = match &self.kind {
            NodeKind::Heading => {
                let level = self.attrs.get_int("level").unwrap_or(0).clamp(1, 6) as usize;
                format!("{} {}", "#".repeat(level), render_inline(&self.content))
            }
            NodeKind::Paragraph => render_inline(&self.content),
            NodeKind::HardBreak => HARD_BREAK.to_string(),
            NodeKind::HorizontalRule => "---".to_string(),
            NodeKind::BulletList => render_list(self, context, ListStyle::Bullet),
            NodeKind::OrderedList => render_list(self, context, ListStyle::Ordered),
            NodeKind::CheckList => render_list(self, context, ListStyle::Check),
            NodeKind::ListItem => {
                render_list_item(self, context, ListStyle::Bullet.prefix()).join("\n")
            }
            NodeKind::CheckListItem => {
                render_list_item(self, context, checkbox_prefix(self)).join("\n")
            }
            NodeKind::Blockquote | NodeKind::CallOutBox => render_quote(&self.content, context),
            NodeKind::Table => render_table(self),
            other => {
                if !self.has_content() {
                    debug!(kind = %other, "dropping empty node");
                    return None;
                }
                debug!(kind = %other, children = self.content.len(), "rendering children of node");
                render_blocks(&self.content, context)
            }
        };
        Some(block)
    }
}

/// Render each node as a block and join the kept ones with a blank line.
pub fn render_blocks(nodes: &[Node], context: &RenderContext) -> String {
    nodes
        .iter()
        .filter_map(|node| node.render(context))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_quote(nodes: &[Node], context: &RenderContext) -> String {
    let body = render_blocks(nodes, context);
    if body.is_empty() {
        return ">".to_string();
    }
    IndentationHelper::prefix_lines(&body, "> ")
}
