use crate::parser::types::*;
use anyhow::{Context, Result};
use tracing::debug;

/// Decodes `.boxnote` JSON into the node tree consumed by the renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoteParser;

impl NoteParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode the whole note. Fails only on JSON that does not match the
    /// note shape; a missing `doc` is reported by [`NoteParser::parse_document`].
    pub fn parse(&self, input: &str) -> Result<BoxNote> {
        // A bare `null` decodes to an empty note, which then lacks a root.
        let note: Option<BoxNote> = serde_json::from_str(input).context("failed to parse JSON")?;
        Ok(note.unwrap_or_default())
    }

    /// Decode the note and return its root node, which must carry a type tag.
    pub fn parse_document(&self, input: &str) -> Result<Node> {
        let note = self.parse(input)?;
        match note.doc {
            Some(doc) if !doc.kind.as_str().is_empty() => {
                debug!(
                    root = %doc.kind,
                    children = doc.content.len(),
                    "decoded note document"
                );
                Ok(doc)
            }
            _ => Err(anyhow::anyhow!("missing doc node")),
        }
    }
}
