//! Tokenizer for the brace dialect.
//!
//! Produces borrowed tokens: the `text` of a token is a slice of the source, and
//! the `span` covers the whole lexeme (string tokens include their quotes in the
//! span but not in the text).
//!
//! ## Error handling
//!
//! Scanning is fail-fast. The first lexical error aborts the scan and the tokens
//! collected so far are dropped.

use std::ops::Range;

use logos::Logos;
use serde::Serialize;

/// Token kinds recognized by the dialect.
#[derive(Logos, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// No escapes: the literal ends at the first `"` after the opening one.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    #[regex(r"[0-9]+")]
    NumberLiteral,

    #[regex(r"[ \t\r\n]+")]
    #[doc(hidden)]
    Whitespace, // Lexer-internal only
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::StringLiteral => "string literal",
            Self::NumberLiteral => "number literal",
            Self::Whitespace => "whitespace",
        };
        f.write_str(s)
    }
}

/// A scanned token. `text` is the lexeme without surrounding quotes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Range<usize>) -> Self {
        Self { kind, text, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Range<usize> },

    #[error("unterminated string literal")]
    UnterminatedString { span: Range<usize> },

    /// A value must be followed by at least a closing brace.
    #[error("input ends with a number; expected `}}` after it")]
    TruncatedNumber { span: Range<usize> },
}

impl LexError {
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::UnexpectedCharacter { span, .. }
            | Self::UnterminatedString { span }
            | Self::TruncatedNumber { span } => span.clone(),
        }
    }
}

/// Tokenizes `source` in one left-to-right pass.
///
/// Post-processes the Logos output:
/// - Drops whitespace
/// - Strips the quotes from string literal text
/// - Rejects a digit run that touches the end of input
/// - Classifies Logos errors into [`LexError`] variants
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(TokenKind::Whitespace) => {}
            Ok(TokenKind::StringLiteral) => {
                let text = &source[span.start + 1..span.end - 1];
                tokens.push(Token::new(TokenKind::StringLiteral, text, span));
            }
            Ok(TokenKind::NumberLiteral) => {
                if span.end == source.len() {
                    return Err(LexError::TruncatedNumber { span });
                }
                tokens.push(Token::new(TokenKind::NumberLiteral, lexer.slice(), span));
            }
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span)),
            Err(()) => return Err(classify_error(source, span.start)),
        }
    }

    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "scan finished");
    Ok(tokens)
}

/// A `"` only fails to lex when no closing quote follows it anywhere.
fn classify_error(source: &str, start: usize) -> LexError {
    let ch = source[start..].chars().next().unwrap_or('\0');
    if ch == '"' {
        return LexError::UnterminatedString {
            span: start..source.len(),
        };
    }
    LexError::UnexpectedCharacter {
        ch,
        span: start..start + ch.len_utf8(),
    }
}
