//! Scanner for `var{name}` placeholder templates.
//!
//! This module turns template strings into an AST of literal and placeholder
//! segments. The AST drives interpolation and exposes the placeholder name
//! set used for cross-locale consistency checks.

pub mod ast;
mod template;

pub use ast::{Segment, Template};
pub use template::parse_template;
