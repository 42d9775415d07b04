use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::inline::*;
use crate::renderer::marks::MarkRenderer;
use tracing::debug;

const CELL_BREAK: &str = "<br>";

/// Render a table as a GFM pipe table.
///
/// The first row is always the header, whatever its cell types. Rows are
/// padded or truncated to the widest row. A table with no cells renders as
/// an empty string.
pub fn render_table(node: &Node) -> String {
    let rows: Vec<Vec<String>> = node
        .content
        .iter()
        .filter(|row| row.kind == NodeKind::TableRow)
        .map(render_row)
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let Some((header, body)) = rows.split_first().filter(|_| columns > 0) else {
        debug!(rows = rows.len(), "table has no cells");
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(header, columns));
    lines.push(format_separator(columns));
    lines.extend(body.iter().map(|row| format_row(row, columns)));
    lines.join("\n")
}

fn render_row(row: &Node) -> Vec<String> {
    row.content
        .iter()
        .filter(|cell| matches!(cell.kind, NodeKind::TableHeader | NodeKind::TableCell))
        .map(render_cell)
        .collect()
}

fn render_cell(cell: &Node) -> String {
    let text = render_cell_content(&cell.content).replace('\n', CELL_BREAK);
    MarkdownEscaper::escape_table_cell(&text)
}

fn render_cell_content(nodes: &[Node]) -> String {
    let mut parts = Vec::new();
    for node in nodes {
        match node.kind {
            NodeKind::Paragraph => {
                if node.has_content() {
                    parts.push(render_inline(&node.content));
                }
            }
            NodeKind::Text => parts.push(MarkRenderer.apply(&node.text, &node.marks)),
            _ => {
                if node.has_content() {
                    parts.push(render_cell_content(&node.content));
                }
            }
        }
    }
    parts.join(CELL_BREAK)
}

fn format_row(cells: &[String], columns: usize) -> String {
    let cells: Vec<&str> = (0..columns)
        .map(|i| cells.get(i).map_or("", |cell| cell.trim()))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn format_separator(columns: usize) -> String {
    format!("| {} |", vec!["---"; columns].join(" | "))
}
