//! Placeholder substitution over scanned templates.

use crate::parser::{Segment, Template};
use crate::types::Variables;

/// Substitute placeholder values into a scanned template.
///
/// Every occurrence of a placeholder is substituted, including repeated
/// names. A placeholder with no matching variable is reconstructed as the
/// literal `var{name}` token; this is not an error.
pub fn interpolate(template: &Template, variables: &Variables) -> String {
    let mut output = String::with_capacity(template.source.len());
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => match variables.get(name) {
                Some(value) => output.push_str(&value.to_string()),
                None => {
                    output.push_str("var{");
                    output.push_str(name);
                    output.push('}');
                }
            },
        }
    }
    output
}
