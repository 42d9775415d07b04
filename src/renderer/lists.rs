use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::inline::*;
use crate::renderer::traits::*;
use tracing::debug;

/// Line prefix family shared by bullet, ordered and check lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullet,
    Ordered,
    Check,
}

impl ListStyle {
    pub fn for_kind(kind: &NodeKind) -> Option<Self> {
        match kind {
            NodeKind::BulletList => Some(ListStyle::Bullet),
            NodeKind::OrderedList => Some(ListStyle::Ordered),
            NodeKind::CheckList => Some(ListStyle::Check),
            _ => None,
        }
    }

    /// Prefix for a plain list item. Check lists pick per item, see
    /// [`checkbox_prefix`].
    pub fn prefix(&self) -> &'static str {
        match self {
            ListStyle::Bullet | ListStyle::Check => "- ",
            // Markdown renumbers, so every item can use `1.`
            ListStyle::Ordered => "1. ",
        }
    }

    /// Prefix for `item` if it is an item of this list type.
    fn item_prefix(&self, item: &Node) -> Option<&'static str> {
        match (self, &item.kind) {
            (ListStyle::Bullet | ListStyle::Ordered, NodeKind::ListItem) => Some(self.prefix()),
            (ListStyle::Check, NodeKind::CheckListItem) => Some(checkbox_prefix(item)),
            _ => None,
        }
    }
}

pub fn checkbox_prefix(item: &Node) -> &'static str {
    if item.attrs.get_bool("checked") {
        "- [x] "
    } else {
        "- [ ] "
    }
}

/// Render a list node's direct children as lines.
///
/// ProseMirror stores a nested list as a sibling that follows its parent
/// item. Such lists render two spaces deeper, but only once an item has
/// been emitted at this level; a nested list ahead of every item is dropped.
pub fn render_list(node: &Node, context: &RenderContext, style: ListStyle) -> String {
    let mut lines = Vec::new();
    let mut has_item = false;

    for child in &node.content {
        if let Some(prefix) = style.item_prefix(child) {
            lines.extend(render_list_item(child, context, prefix));
            has_item = true;
            continue;
        }

        let Some(nested_style) = ListStyle::for_kind(&child.kind) else {
            continue;
        };
        if !has_item {
            debug!(kind = %child.kind, "dropping nested list that precedes every item");
            continue;
        }
        let nested = render_list(child, &context.nested(), nested_style);
        if !nested.is_empty() {
            lines.extend(nested.split('\n').map(str::to_string));
        }
    }

    lines.join("\n")
}

/// Render one item as lines: the prefix line (carrying the first paragraph
/// when there is one), then every other child as an indented block.
pub fn render_list_item(node: &Node, context: &RenderContext, prefix: &str) -> Vec<String> {
    let prefix_line = format!("{}{}", context.indent(), prefix);
    let Some(first) = node.content.first() else {
        return vec![prefix_line];
    };

    let mut lines = Vec::new();
    let rest = if first.kind == NodeKind::Paragraph {
        let text = render_inline(&first.content);
        let text = IndentationHelper::indent_continuation(&text, prefix_line.len());
        lines.push(format!("{prefix_line}{text}"));
        &node.content[1..]
    } else {
        lines.push(prefix_line);
        &node.content[..]
    };

    let child_context = context.nested();
    for child in rest {
        match child.render(&child_context) {
            None => {}
            Some(block) if block.is_empty() => lines.push(child_context.indent()),
            Some(block) => {
                lines.push(IndentationHelper::indent_all_lines(&block, child_context.indent))
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    fn para(text: &str) -> serde_json::Value {
        json!({"type": "paragraph", "content": [{"type": "text", "text": text}]})
    }

    fn item(text: &str) -> serde_json::Value {
        json!({"type": "list_item", "content": [para(text)]})
    }

    fn check(text: &str, checked: serde_json::Value) -> serde_json::Value {
        json!({"type": "check_list_item", "attrs": {"checked": checked}, "content": [para(text)]})
    }

    fn render(value: serde_json::Value) -> String {
        node(value).render(&RenderContext::new()).unwrap()
    }

    #[test]
    fn test_bullet_list() {
        let list = json!({"type": "bullet_list", "content": [item("A"), item("B")]});
        assert_eq!(render(list), "- A\n- B");
    }

    #[test]
    fn test_ordered_list_uses_one_dot() {
        let list = json!({"type": "ordered_list", "content": [item("A"), item("B"), item("C")]});
        assert_eq!(render(list), "1. A\n1. B\n1. C");
    }

    #[test]
    fn test_check_list() {
        let list = json!({"type": "check_list", "content": [
            check("Done", json!(true)),
            check("Todo", json!(false)),
            check("Stringly", json!("true"))
        ]});
        assert_eq!(render(list), "- [x] Done\n- [ ] Todo\n- [ ] Stringly");
    }

    #[test]
    fn test_sibling_nested_list() {
        let list = json!({"type": "bullet_list", "content": [
            item("parent"),
            {"type": "ordered_list", "content": [item("one"), item("two")]},
            item("after")
        ]});
        assert_eq!(render(list), "- parent\n  1. one\n  1. two\n- after");
    }

    #[test]
    fn test_nested_list_before_any_item_is_dropped() {
        let list = json!({"type": "bullet_list", "content": [
            {"type": "bullet_list", "content": [item("orphan")]},
            item("first")
        ]});
        assert_eq!(render(list), "- first");
    }

    #[test]
    fn test_check_list_nested_under_bullets() {
        let list = json!({"type": "bullet_list", "content": [
            item("parent"),
            {"type": "check_list", "content": [check("sub", json!(true))]}
        ]});
        assert_eq!(render(list), "- parent\n  - [x] sub");
    }

    #[test]
    fn test_foreign_items_are_ignored() {
        let list = json!({"type": "bullet_list", "content": [
            check("wrong list", json!(true)),
            para("stray"),
            item("kept")
        ]});
        assert_eq!(render(list), "- kept");
    }

    #[test]
    fn test_item_without_content() {
        let list = json!({"type": "bullet_list", "content": [{"type": "list_item"}]});
        assert_eq!(render(list), "- ");
    }

    #[test]
    fn test_item_continuation_lines_align_under_prefix() {
        let list = json!({"type": "ordered_list", "content": [
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "line one"},
                    {"type": "hard_break"},
                    {"type": "text", "text": "line two"}
                ]}
            ]}
        ]});
        assert_eq!(render(list), "1. line one\\\n   line two");
    }

    #[test]
    fn test_item_extra_blocks_are_indented() {
        let list = json!({"type": "bullet_list", "content": [
            {"type": "list_item", "content": [para("first"), para("second"), {"type": "paragraph"}]}
        ]});
        assert_eq!(render(list), "- first\n  second\n  ");
    }

    #[test]
    fn test_item_starting_with_non_paragraph() {
        let list = json!({"type": "bullet_list", "content": [
            {"type": "list_item", "content": [{"type": "horizontal_rule"}, {"type": "image"}]}
        ]});
        assert_eq!(render(list), "- \n  ---");
    }

    #[test]
    fn test_list_inside_item_content() {
        let list = json!({"type": "bullet_list", "content": [
            {"type": "list_item", "content": [
                para("outer"),
                {"type": "bullet_list", "content": [item("inner")]}
            ]}
        ]});
        // The inner list renders at the child depth and is then indented again.
        assert_eq!(render(list), "- outer\n    - inner");
    }

    #[test]
    fn test_indent_is_threaded_through_context() {
        let list = node(json!({"type": "bullet_list", "content": [item("deep")]}));
        assert_eq!(
            render_list(&list, &RenderContext::new().with_indent(4), ListStyle::Bullet),
            "    - deep"
        );
    }
}
