use crate::parser::*;
use crate::renderer::components::*;
use tracing::trace;

/// Turns a text run and its marks into inline Markdown.
pub struct MarkRenderer;

impl MarkRenderer {
    pub fn apply(&self, text: &str, marks: &[Mark]) -> String {
        let mut active: Vec<&Mark> = marks.iter().filter(|mark| !mark.kind.is_ignored()).collect();
        if active.is_empty() {
            return text.to_string();
        }

        let has = |kind: MarkKind| active.iter().any(|mark| mark.kind == kind);
        let strong = has(MarkKind::Strong);
        let em = has(MarkKind::Em);
        let strike = has(MarkKind::Strikethrough);
        let code = has(MarkKind::Code);
        let link = has(MarkKind::Link);

        // `***` is ambiguous, so bold+italic switches italic to underscores.
        let em_delimiter = if strong && em { '_' } else { '*' };

        let mut text = if code {
            text.to_string()
        } else {
            MarkdownEscaper::escape_emphasis(text, em_delimiter, strong, strike)
        };
        if (strong || em || strike || code) && !link {
            text = BoundaryPadder::pad(&text);
        }

        active.sort_by_key(|mark| nesting_rank(&mark.kind));

        // Innermost first, so the link ends up outermost.
        for mark in active.iter().rev() {
            text = match &mark.kind {
                MarkKind::Link => match mark.attrs.get_str("href") {
                    Some(href) if !href.is_empty() => {
                        format!("[{}]({})", MarkdownEscaper::escape_link_text(&text), href)
                    }
                    _ => {
                        trace!("skipping link mark without href");
                        text
                    }
                },
                MarkKind::Strong => format!("**{text}**"),
                MarkKind::Em => format!("{em_delimiter}{text}{em_delimiter}"),
                MarkKind::Underline => format!("<u>{text}</u>"),
                MarkKind::Strikethrough => format!("~~{text}~~"),
                MarkKind::Code => wrap_inline_code(&text),
                other => {
                    trace!(mark = %other, "ignoring unsupported mark");
                    text
                }
            };
        }
        text
    }
}

/// Outer-to-inner wrapping order, independent of the order marks arrive in.
fn nesting_rank(kind: &MarkKind) -> u8 {
    match kind {
        MarkKind::Link => 0,
        MarkKind::Strong => 1,
        MarkKind::Em => 2,
        MarkKind::Underline => 3,
        MarkKind::Strikethrough => 4,
        MarkKind::Code => 5,
        _ => 100,
    }
}

/// Wrap in a backtick fence one longer than the longest backtick run inside.
pub fn wrap_inline_code(text: &str) -> String {
    let fence = "`".repeat(max_backtick_run(text) + 1);
    format!("{fence}{text}{fence}")
}

fn max_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
