//! Brace depth matching.

use crate::lexer::{Token, TokenKind};

/// Closing brace index for every opening brace, computed in one pass.
///
/// Equivalent to counting depth forward from each `{` (start at 1, `{` adds
/// one, `}` subtracts one, stop at zero) without rescanning nested spans.
#[derive(Debug)]
pub(super) struct BraceMap {
    closing: Vec<Option<usize>>,
}

impl BraceMap {
    pub(super) fn build(tokens: &[Token<'_>]) -> Self {
        let mut closing = vec![None; tokens.len()];
        let mut open = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::LeftBrace => open.push(index),
                TokenKind::RightBrace => {
                    // A `}` with nothing open is a stray token, left to the parser.
                    if let Some(start) = open.pop() {
                        closing[start] = Some(index);
                    }
                }
                _ => {}
            }
        }

        Self { closing }
    }

    /// Index of the brace closing `open`, if it lies before `end`.
    pub(super) fn closing(&self, open: usize, end: usize) -> Option<usize> {
        self.closing
            .get(open)
            .copied()
            .flatten()
            .filter(|&close| close < end)
    }
}
