//! # boxnote2md
//!
//! Converts Box Notes (ProseMirror-style JSON documents) into GitHub-Flavored
//! Markdown.
//!
//! ```
//! let note = r#"{"doc":{"type":"doc","content":[
//!     {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Title"}]}
//! ]}}"#;
//! assert_eq!(boxnote2md::render_note(note).unwrap(), "## Title");
//! ```

pub mod parser;
pub mod renderer;

pub use parser::*;
pub use renderer::*;

use anyhow::Result;

/// Decode a note and render its document. Decoding errors are returned
/// before any rendering happens, so a failure never yields partial output.
pub fn render_note(input: &str) -> Result<String> {
    let document = NoteParser::new().parse_document(input)?;
    Ok(render_document(&document))
}

/// Render an already decoded document tree.
pub fn render_document(document: &Node) -> String {
    DocumentRenderer::new().render(document)
}
