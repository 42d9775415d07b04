use anyhow::Result;
use boxnote2md::{render_document, render_note, NoteParser};
use serde_json::json;
use similar::TextDiff;
use std::fs;
use std::path::Path;

/// Render a note fixture and compare it with the expected Markdown next to it.
fn check_fixture(fixture_name: &str) {
    let note_path = format!("tests/notes/{}.boxnote", fixture_name);
    let expected_path = format!("tests/notes/{}.md", fixture_name);

    assert!(
        Path::new(&note_path).exists(),
        "note fixture not found: {}",
        note_path
    );

    let input = fs::read_to_string(&note_path).expect("failed to read note fixture");
    let expected = fs::read_to_string(&expected_path).expect("failed to read expected output");
    let expected = expected.strip_suffix('\n').unwrap_or(&expected);

    let actual = render_note(&input).expect("fixture should render");

    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual.as_str());
        panic!(
            "output mismatch for fixture '{}':\n{}",
            fixture_name,
            diff.unified_diff().header("expected", "actual")
        );
    }
}

#[test]
fn test_basic_fixture() {
    check_fixture("basic");
}

#[test]
fn test_lists_fixture() {
    check_fixture("lists");
}

#[test]
fn test_tables_fixture() {
    check_fixture("tables");
}

#[test]
fn test_heading_and_strong_paragraph() -> Result<()> {
    let note = json!({"doc": {"type": "doc", "content": [
        {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Title"}]},
        {"type": "paragraph", "content": [
            {"type": "text", "text": "Hello "},
            {"type": "text", "text": "world", "marks": [{"type": "strong"}]}
        ]}
    ]}});
    assert_eq!(render_note(&note.to_string())?, "## Title\n\nHello **world**");
    Ok(())
}

#[test]
fn test_bullet_list_end_to_end() -> Result<()> {
    let note = json!({"doc": {"type": "doc", "content": [
        {"type": "bullet_list", "content": [
            {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "A"}]}]},
            {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "B"}]}]}
        ]}
    ]}});
    assert_eq!(render_note(&note.to_string())?, "- A\n- B");
    Ok(())
}

#[test]
fn test_checked_item_end_to_end() -> Result<()> {
    let note = json!({"doc": {"type": "doc", "content": [
        {"type": "check_list", "content": [
            {"type": "check_list_item", "attrs": {"checked": true}, "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "Done"}]}
            ]}
        ]}
    ]}});
    assert_eq!(render_note(&note.to_string())?, "- [x] Done");
    Ok(())
}

#[test]
fn test_table_separator_is_second_line() -> Result<()> {
    let row = |cells: usize| {
        let cells: Vec<_> = (0..cells)
            .map(|i| json!({"type": "table_cell", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": format!("c{i}")}]}
            ]}))
            .collect();
        json!({"type": "table_row", "content": cells})
    };
    let note = json!({"doc": {"type": "doc", "content": [
        {"type": "table", "content": [row(3), row(2), row(4)]}
    ]}});
    let output = render_note(&note.to_string())?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "| --- | --- | --- | --- |");
    assert!(lines.iter().all(|line| line.matches(" | ").count() == 3));
    Ok(())
}

#[test]
fn test_unsupported_types_never_fail() -> Result<()> {
    let note = json!({"doc": {"type": "doc", "content": [
        {"type": "image", "attrs": {"src": "x.png", "width": 120.5}},
        {"type": "layout", "content": [
            {"type": "paragraph", "content": [
                {"type": "text", "text": "kept", "marks": [{"type": "sparkle", "attrs": {"level": [1, 2]}}]}
            ]}
        ]}
    ]}});
    assert_eq!(render_note(&note.to_string())?, "kept");
    Ok(())
}

#[test]
fn test_render_errors() {
    let err = render_note("not json").unwrap_err();
    assert_eq!(err.to_string(), "failed to parse JSON");

    let err = render_note(r#"{"doc": {"content": []}}"#).unwrap_err();
    assert_eq!(err.to_string(), "missing doc node");
}

#[test]
fn test_render_document_matches_render_note() -> Result<()> {
    let input = fs::read_to_string("tests/notes/lists.boxnote")?;
    let document = NoteParser::new().parse_document(&input)?;
    assert_eq!(render_document(&document), render_note(&input)?);
    Ok(())
}
