//! Parser for the brace dialect.
//!
//! # Architecture
//!
//! Every `{ ... }` span is parsed as an independent token sequence. A sequence
//! yields a list of sibling values which is then folded into a single group:
//!
//! 1. A bare `{` appends the group parsed from its span as-is
//! 2. `"name": {` parses the span and relabels the resulting root group
//! 3. A sequence whose only sibling is a root group returns that group; any
//!    other sequence is wrapped in a fresh root group
//!
//! Together these let one procedure handle the outer document, anonymous nested
//! objects, and named nested objects.
//!
//! Spans are nested frames on an explicit stack rather than native recursion,
//! so input depth never touches the call stack. A depth limit still bounds
//! memory (see [`Parser::with_depth_limit`]).
//!
//! # Stray tokens
//!
//! Outside the field and object productions the default parser skips tokens
//! silently: commas are never checked as separators. [`Parser::strict`] turns
//! those into [`ParseError::UnexpectedToken`] and requires exactly one comma
//! between sibling entries.

mod braces;
mod core;
mod error;


pub use core::{DEFAULT_DEPTH_LIMIT, Parser};
pub use error::ParseError;
