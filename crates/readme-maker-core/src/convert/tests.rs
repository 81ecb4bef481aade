use super::*;
use readme_markup::parse;
use readme_mdast::{WriterOptions, mdast_to_markdown};

fn convert(source: &str, options: &TranspileOptions) -> Conversion {
    markup_to_mdast(&parse(source), options).unwrap()
}

fn md(source: &str) -> String {
    md_with(source, &TranspileOptions::default())
}

fn md_with(source: &str, options: &TranspileOptions) -> String {
    let conversion = convert(source, options);
    mdast_to_markdown(&conversion.root, &WriterOptions::default())
}

fn structural() -> TranspileOptions {
    TranspileOptions {
        bullets: BulletMode::Structural,
        ..Default::default()
    }
}

#[test]
fn test_title() {
    assert_eq!(md("Title:\tHello World"), "# Hello World\n");
}

#[test]
fn test_title_matches_once() {
    assert_eq!(
        md("Title: Main\nTitle: Second"),
        "# Main\n### Second\n"
    );
}

#[test]
fn test_subheading_uses_key_without_value() {
    assert_eq!(md("Features:"), "### Features\n");
}

#[test]
fn test_subheading_uses_value() {
    assert_eq!(md("Demo: My Demo"), "### My Demo\n");
}

#[test]
fn test_url() {
    assert_eq!(md("\tURL: http://x"), "See a demo [Here](http://x)\n");
}

#[test]
fn test_url_keeps_colons_in_value() {
    assert_eq!(
        md("\tURL: https://example.com:8080/a"),
        "See a demo [Here](https://example.com:8080/a)\n"
    );
}

#[test]
fn test_image_url() {
    assert_eq!(md("\tImageURL: http://y"), "![Screenshot](http://y)\n");
}

#[test]
fn test_empty_urls_still_emit() {
    assert_eq!(md("Demo:\n\tURL:"), "### Demo\nSee a demo [Here]()\n");
    assert_eq!(
        md("Screenshot:\n\tImageURL:"),
        "### Screenshot\n![Screenshot]()\n"
    );
}

#[test]
fn test_bullet_points() {
    assert_eq!(md("\tBulletPoints: [one, two]"), "* one\n* two\n");
}

#[test]
fn test_nested_bullet_points() {
    assert_eq!(
        md("\tBulletPoints: [a, b, [nested1, nested2]]"),
        "* a\n* b\n  * nested1\n  * nested2\n"
    );
}

#[test]
fn test_empty_bullet_points_emit_one_empty_bullet() {
    assert_eq!(md("Features:\n\tBulletPoints: []"), "### Features\n* \n");
}

#[test]
fn test_empty_bullet_points_structural() {
    assert_eq!(
        md_with("Features:\n\tBulletPoints: []", &structural()),
        "### Features\n"
    );
}

#[test]
fn test_legacy_bullets_close_one_level_per_chunk() {
    assert_eq!(
        md("\tBulletPoints: [a, [b, [c]], d]"),
        "* a\n  * b\n    * c\n  * d\n"
    );
    assert_eq!(
        md_with("\tBulletPoints: [a, [b, [c]], d]", &structural()),
        "* a\n  * b\n    * c\n* d\n"
    );
}

#[test]
fn test_bullet_nodes() {
    let conversion = convert("\tBulletPoints: [a, [b]]", &TranspileOptions::default());
    assert_eq!(
        conversion.root.children,
        vec![
            Node::list_item(0, vec![Node::text("a")]),
            Node::list_item(1, vec![Node::text("b")]),
        ]
    );
}

#[test]
fn test_code_block_closed_by_section() {
    let source = "Usage:\n\tCode:\n\t\tSyntax: go\n\t\tContent: |\nfmt.Println(\"hi\")\nFeatures:";
    assert_eq!(
        md(source),
        "### Usage\n```go\nfmt.Println(\"hi\")\n```\n### Features\n"
    );
}

#[test]
fn test_code_block_closed_by_text_marker() {
    let source = "\t\tSyntax: rust\nlet x = 1;\n\tText: |\nAfter.";
    assert_eq!(md(source), "```rust\nlet x = 1;\n```\nAfter.\n");
}

#[test]
fn test_code_block_closed_by_code_marker() {
    let source = "\t\tSyntax: sh\nls\n\tCode:\n\t\tSyntax: sh\npwd\n\tText: |";
    assert_eq!(md(source), "```sh\nls\n```\n```sh\npwd\n```\n");
}

#[test]
fn test_syntax_while_open_closes_previous_block() {
    let source = "\t\tSyntax: a\nx\n\t\tSyntax: b\ny\n\tText: |";
    assert_eq!(md(source), "```a\nx\n```\n```b\ny\n```\n");
}

#[test]
fn test_markers_outside_code_block_emit_nothing() {
    assert_eq!(md("\tText: |\n\tCode:\n\t\tContent: |"), "");
}

#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(md("Usage:\n\n   \n\tText: |\nhello\n\n"), "### Usage\nhello\n");
}

#[test]
fn test_free_text_is_trimmed() {
    assert_eq!(md("   padded text   "), "padded text\n");
}

#[test]
fn test_unknown_indented_field_passes_through() {
    assert_eq!(md("\tAuthor: someone"), "Author: someone\n");
}

#[test]
fn test_code_lines_lose_indentation() {
    let source = "\t\tSyntax: py\nprint(1)\n    return 1\n\tText: |";
    assert_eq!(md(source), "```py\nprint(1)\nreturn 1\n```\n");
}

#[test]
fn test_unindented_colon_line_in_code_block_is_a_section() {
    // Known gap: code lines are not protected from section detection.
    let source = "\t\tSyntax: py\ndef f():\n    return 1";
    assert_eq!(md(source), "```py\n```\n### def f()\nreturn 1\n");
}

#[test]
fn test_unterminated_code_block_is_left_open() {
    let conversion = convert(
        "Usage:\n\t\tSyntax: go\nmain()",
        &TranspileOptions::default(),
    );
    assert_eq!(
        conversion.final_state,
        CodeBlockState::InCodeBlock {
            lang: "go".to_string(),
            line: 2
        }
    );
    assert_eq!(conversion.unterminated_code_block(), Some(2));
    assert_eq!(
        mdast_to_markdown(&conversion.root, &WriterOptions::default()),
        "### Usage\n```go\nmain()\n"
    );
}

#[test]
fn test_unterminated_code_block_can_be_closed() {
    let options = TranspileOptions {
        close_unterminated_code_block: true,
        ..Default::default()
    };
    let conversion = convert("\t\tSyntax: go\nmain()", &options);
    assert_eq!(conversion.final_state, CodeBlockState::Outside);
    assert_eq!(conversion.unterminated_code_block(), None);
    assert_eq!(
        mdast_to_markdown(&conversion.root, &WriterOptions::default()),
        "```go\nmain()\n```\n"
    );
}

#[test]
fn test_closed_code_block_final_state() {
    let conversion = convert("\t\tSyntax: go\nx\nTODO:", &TranspileOptions::default());
    assert!(!conversion.final_state.is_open());
}

#[test]
fn test_conversion_is_deterministic() {
    let source = "Title: T\nUsage:\n\tBulletPoints: [a, [b, c]]\n\t\tSyntax: go\nx\nNotes:";
    assert_eq!(md(source), md(source));
}

#[test]
fn test_structural_bullets_respect_nesting() {
    let source = "\tBulletPoints: [[a, b], c]";
    assert_eq!(md(source), "* a\n* b\n* c\n");
    assert_eq!(md_with(source, &structural()), "  * a\n  * b\n* c\n");
}

#[test]
fn test_structural_bullets_error_reports_line() {
    let result = markup_to_mdast(
        &parse("Usage:\n\tBulletPoints: [a, [b\n"),
        &structural(),
    );
    match result {
        Err(ConvertError::Bullets { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(source, ArrayError::UnclosedBracket { column: 5 });
        }
        other => panic!("expected bullet error, got {other:?}"),
    }
}

#[test]
fn test_structural_error_message() {
    let err = markup_to_mdast(&parse("\tBulletPoints: [a] b"), &structural()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid BulletPoints array at line 1: Unexpected content after the closing ']' at column 5"
    );
}

#[test]
fn test_legacy_bullets_never_fail() {
    assert_eq!(md("\tBulletPoints: [a, [b"), "* a\n  * b\n");
}

#[test]
fn test_bullet_mode_from_str() {
    assert_eq!("legacy".parse::<BulletMode>(), Ok(BulletMode::Legacy));
    assert_eq!("Structural".parse::<BulletMode>(), Ok(BulletMode::Structural));
    assert_eq!(
        "tree".parse::<BulletMode>(),
        Err(ParseBulletModeError("tree".to_string()))
    );
    assert_eq!(BulletMode::Structural.to_string(), "structural");
}

#[test]
fn test_parse_bullet_mode_error_message() {
    assert_eq!(
        ParseBulletModeError("tree".to_string()).to_string(),
        "Unknown bullet mode 'tree': expected 'legacy' or 'structural'"
    );
}
