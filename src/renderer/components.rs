const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Character-level escaping for the different Markdown contexts.
pub struct MarkdownEscaper;

impl MarkdownEscaper {
    /// Escape emphasis-significant characters in a formatted text run.
    ///
    /// Backslashes are always escaped. `*` is escaped when it is the emphasis
    /// delimiter or when bold (`**`) wraps the run, `_` only when it is the
    /// emphasis delimiter, and `~` only under strikethrough.
    pub fn escape_emphasis(text: &str, em_delimiter: char, strong: bool, strike: bool) -> String {
        let escape_star = em_delimiter == '*' || strong;
        let escape_underscore = em_delimiter == '_';

        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            let escape = match c {
                '\\' => true,
                '*' => escape_star,
                '_' => escape_underscore,
                '~' => strike,
                _ => false,
            };
            if escape {
                output.push('\\');
            }
            output.push(c);
        }
        output
    }

    pub fn escape_link_text(text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '\\' | '[' | ']' | '(' | ')') {
                output.push('\\');
            }
            output.push(c);
        }
        output
    }

    pub fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

/// Zero-width-space padding around runs that start or end with CJK
/// punctuation, so emphasis delimiters still open and close next to them.
pub struct BoundaryPadder;

impl BoundaryPadder {
    pub fn pad(text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut output = String::with_capacity(text.len() + 6);
        let first = text.chars().next();
        let last = text.chars().next_back();

        if !text.starts_with(ZERO_WIDTH_SPACE) && first.is_some_and(Self::needs_padding) {
            output.push(ZERO_WIDTH_SPACE);
        }
        output.push_str(text);
        if !text.ends_with(ZERO_WIDTH_SPACE) && last.is_some_and(Self::needs_padding) {
            output.push(ZERO_WIDTH_SPACE);
        }
        output
    }

    fn needs_padding(c: char) -> bool {
        !c.is_whitespace() && is_yakumono(c)
    }
}

/// CJK punctuation, brackets, quotation marks and dashes, plus ASCII `!`/`?`.
pub fn is_yakumono(c: char) -> bool {
    matches!(
        c,
        '、' | '。' | '，' | '．' | '｡' | '､' | '･' | '・'
            | '：' | '；' | '！' | '？' | '!' | '?'
            | '「' | '」' | '『' | '』' | '（' | '）' | '［' | '］' | '【' | '】'
            | '〈' | '〉' | '《' | '》' | '“' | '”' | '‘' | '’'
            | '…' | '‥' | '〜' | '～' | 'ー' | '—' | '―' | '‐' | '‑' | 'ｰ'
    )
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        " ".repeat(depth)
    }

    /// Indent every line after the first, so a multi-line run lines up under
    /// the text that follows a list prefix.
    pub fn indent_continuation(text: &str, width: usize) -> String {
        let pad = Self::indent_for_depth(width);
        text.split('\n')
            .enumerate()
            .map(|(i, line)| if i == 0 { line.to_string() } else { format!("{pad}{line}") })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indent every line; blank lines become pure indentation.
    pub fn indent_all_lines(text: &str, width: usize) -> String {
        if text.is_empty() {
            return String::new();
        }
        let pad = Self::indent_for_depth(width);
        text.split('\n')
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prefix every line; blank lines get the prefix without trailing spaces.
    pub fn prefix_lines(text: &str, prefix: &str) -> String {
        let bare = prefix.trim_end_matches(' ');
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    bare.to_string()
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
