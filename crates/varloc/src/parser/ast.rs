//! Public AST types for scanned templates.
//!
//! These types are public to enable external tooling (coverage checkers,
//! translation table validators, etc.).

use std::collections::BTreeSet;

/// A scanned template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// The original template text.
    pub source: String,
    /// The scanned segments, in order.
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A `var{name}` placeholder, holding the name.
    Placeholder(String),
}

impl Template {
    /// The set of placeholder names appearing in this template.
    ///
    /// A repeated placeholder appears once. Used to validate cross-locale
    /// template consistency and variation overrides at construction time.
    pub fn placeholders(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}
