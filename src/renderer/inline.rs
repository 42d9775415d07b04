use crate::parser::*;
use crate::renderer::marks::MarkRenderer;

pub const HARD_BREAK: &str = "\\\n";

/// Concatenate inline content with no separators. Non-text wrappers are
/// flattened into their children.
pub fn render_inline(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        match node.kind {
            NodeKind::Text => output.push_str(&MarkRenderer.apply(&node.text, &node.marks)),
            NodeKind::HardBreak => output.push_str(HARD_BREAK),
            _ => {
                if node.has_content() {
                    output.push_str(&render_inline(&node.content));
                }
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nodes(value: serde_json::Value) -> Vec<Node> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_concatenates_runs() {
        let content = nodes(json!([
            {"type": "text", "text": "Hello "},
            {"type": "text", "text": "world", "marks": [{"type": "strong"}]}
        ]));
        assert_eq!(render_inline(&content), "Hello **world**");
    }

    #[test]
    fn test_hard_break() {
        let content = nodes(json!([
            {"type": "text", "text": "one"},
            {"type": "hard_break"},
            {"type": "text", "text": "two"}
        ]));
        assert_eq!(render_inline(&content), "one\\\ntwo");
    }

    #[test]
    fn test_unknown_wrappers_are_flattened() {
        let content = nodes(json!([
            {"type": "mention", "content": [
                {"type": "text", "text": "@ann"}
            ]},
            {"type": "emoji"},
            {"type": "text", "text": "!"}
        ]));
        assert_eq!(render_inline(&content), "@ann!");
    }
}
