//! curly: tokenizer, parser and renderer for a minimal JSON dialect.
//!
//! The dialect has objects, named string fields, named integer fields and
//! named nested objects. No arrays, booleans, null, signed or fractional
//! numbers, or string escapes.
//!
//! # Example
//!
//! ```
//! use curly_lib::{Document, render};
//!
//! let source = r#"{"name": "curly", "version": {"major": 1}}"#;
//!
//! let root = Document::new(source).parse().expect("valid document");
//! print!("{}", render(&root));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod render;
pub mod value;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod render_tests;

use std::ops::Range;

pub use diagnostics::ErrorPrinter;
pub use lexer::{LexError, Token, TokenKind, scan};
pub use parser::{DEFAULT_DEPTH_LIMIT, ParseError, Parser};
pub use printer::TreePrinter;
pub use render::render;
pub use value::{Group, NumberField, StringField, Value};

/// Errors from either pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Byte range of the source the error points at.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Lex(e) => e.span(),
            Self::Parse(e) => e.span(),
        }
    }

    /// Short annotation shown under the offending span.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lex(LexError::UnexpectedCharacter { .. }) => "not valid here",
            Self::Lex(LexError::UnterminatedString { .. }) => "no closing `\"`",
            Self::Lex(LexError::TruncatedNumber { .. }) => "last value in the input",
            Self::Parse(ParseError::ExpectedColon { .. }) => "expected `:`",
            Self::Parse(ParseError::UnbalancedBraces { .. }) => "unclosed `{`",
            Self::Parse(ParseError::InvalidNumber { .. }) => "out of range",
            Self::Parse(ParseError::MalformedField { .. }) => "expected a value",
            Self::Parse(ParseError::UnexpectedToken { .. }) => "unexpected",
            Self::Parse(ParseError::DepthLimitExceeded { .. }) => "too deeply nested",
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Source text plus the parser configuration to run on it.
///
/// Runs the whole pipeline: [`scan`], then [`Parser::parse`].
#[derive(Debug, Clone, Copy)]
pub struct Document<'src> {
    source: &'src str,
    parser: Parser,
}

impl<'src> Document<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            parser: Parser::new(),
        }
    }

    /// See [`Parser::with_depth_limit`].
    pub fn with_depth_limit(mut self, limit: Option<u32>) -> Self {
        self.parser = self.parser.with_depth_limit(limit);
        self
    }

    /// See [`Parser::strict`].
    pub fn strict(mut self, value: bool) -> Self {
        self.parser = self.parser.strict(value);
        self
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn tokens(&self) -> Result<Vec<Token<'src>>> {
        Ok(scan(self.source)?)
    }

    pub fn parse(&self) -> Result<Value> {
        let tokens = self.tokens()?;
        Ok(self.parser.parse(&tokens)?)
    }
}

/// Scans and parses `source` with the default configuration.
pub fn parse_str(source: &str) -> Result<Value> {
    Document::new(source).parse()
}
