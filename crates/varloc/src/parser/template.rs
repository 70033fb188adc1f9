//! Template string scanner using winnow.
//!
//! Scans a template into literal text and `var{name}` placeholder segments.
//! Scanning is infallible: an incomplete placeholder (a `var{` with no closing
//! brace, or an empty `var{}`) is kept as literal text.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Scan a template string into a [`Template`].
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let segments: Vec<Segment> = match repeat(0.., segment).parse_next(&mut remaining) {
        Ok(segments) if remaining.is_empty() => segments,
        // The char-wise literal fallback consumes every character, so this
        // arm only guards against a scanner regression: keep the raw text.
        _ => vec![Segment::Literal(input.to_string())],
    };

    Template {
        source: input.to_string(),
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Scan a single segment (placeholder or literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Scan a `var{name}` placeholder.
///
/// The name is a non-empty run of characters excluding `}`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("var{", take_while(1.., |c: char| c != '}'), '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Scan a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
