//! Integration tests for the placeholder scanner.

use varloc::{Segment, parse_template};

// =========================================================================
// Placeholder Extraction
// =========================================================================

#[test]
fn literal_only_template() {
    let template = parse_template("Hello!");
    assert_eq!(template.segments, [Segment::Literal("Hello!".to_string())]);
    assert!(template.placeholders().is_empty());
}

#[test]
fn placeholder_between_literals() {
    let template = parse_template("Hello var{name}!");
    assert_eq!(
        template.segments,
        [
            Segment::Literal("Hello ".to_string()),
            Segment::Placeholder("name".to_string()),
            Segment::Literal("!".to_string()),
        ]
    );
}

#[test]
fn adjacent_placeholders() {
    let template = parse_template("var{a}var{b}");
    assert_eq!(
        template.segments,
        [
            Segment::Placeholder("a".to_string()),
            Segment::Placeholder("b".to_string()),
        ]
    );
}

#[test]
fn repeated_placeholder_appears_once_in_the_name_set() {
    let template = parse_template("var{name} and var{name}");
    let names: Vec<&str> = template.placeholders().into_iter().collect();
    assert_eq!(names, ["name"]);
}

#[test]
fn placeholder_name_may_contain_anything_but_a_closing_brace() {
    let template = parse_template("var{first name}");
    assert_eq!(
        template.segments,
        [Segment::Placeholder("first name".to_string())]
    );
}

#[test]
fn source_is_preserved() {
    let template = parse_template("Hello var{name}!");
    assert_eq!(template.source, "Hello var{name}!");
}

#[test]
fn empty_template() {
    let template = parse_template("");
    assert!(template.segments.is_empty());
    assert!(template.placeholders().is_empty());
}

// =========================================================================
// Malformed Sequences Stay Literal
// =========================================================================

#[test]
fn unterminated_placeholder_stays_literal() {
    let template = parse_template("Hello var{name");
    assert_eq!(
        template.segments,
        [Segment::Literal("Hello var{name".to_string())]
    );
}

#[test]
fn empty_placeholder_stays_literal() {
    let template = parse_template("var{}");
    assert_eq!(template.segments, [Segment::Literal("var{}".to_string())]);
}

#[test]
fn stray_braces_stay_literal() {
    let template = parse_template("a { b } c");
    assert_eq!(template.segments, [Segment::Literal("a { b } c".to_string())]);
}

#[test]
fn var_prefix_without_a_brace_stays_literal() {
    let template = parse_template("variable var{x}");
    assert_eq!(
        template.segments,
        [
            Segment::Literal("variable ".to_string()),
            Segment::Placeholder("x".to_string()),
        ]
    );
}
