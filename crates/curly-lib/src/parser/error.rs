use std::num::ParseIntError;
use std::ops::Range;

use crate::lexer::TokenKind;

/// Structural errors. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected `:` after field name \"{name}\"")]
    ExpectedColon { name: String, span: Range<usize> },

    #[error("unbalanced braces: this `{{` is never closed")]
    UnbalancedBraces { span: Range<usize> },

    #[error("invalid number `{text}`: {reason}")]
    InvalidNumber {
        text: String,
        #[source]
        reason: ParseIntError,
        span: Range<usize>,
    },

    #[error("field \"{name}\" has no value; expected a string, number or object")]
    MalformedField { name: String, span: Range<usize> },

    #[error("unexpected {found}")]
    UnexpectedToken { found: TokenKind, span: Range<usize> },

    #[error("nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: u32, span: Range<usize> },
}

impl ParseError {
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::ExpectedColon { span, .. }
            | Self::UnbalancedBraces { span }
            | Self::InvalidNumber { span, .. }
            | Self::MalformedField { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::DepthLimitExceeded { span, .. } => span.clone(),
        }
    }
}
