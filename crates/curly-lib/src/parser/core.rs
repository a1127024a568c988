//! Parser configuration and the span stack machine.

use std::ops::Range;

use super::braces::BraceMap;
use super::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::value::{Group, Value};

pub const DEFAULT_DEPTH_LIMIT: u32 = 4096;

/// Builds a value tree from scanned tokens.
///
/// ```
/// use curly_lib::{Parser, lexer::scan};
///
/// let tokens = scan(r#"{"a": 1}"#).unwrap();
/// let root = Parser::new().parse(&tokens).unwrap();
/// assert!(root.get("a").is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    depth_limit: Option<u32>,
    strict: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            depth_limit: Some(DEFAULT_DEPTH_LIMIT),
            strict: false,
        }
    }

    /// Set the brace nesting limit. None = unbounded.
    ///
    /// The document's own braces count as depth 1. Opening a deeper span
    /// fails with [`ParseError::DepthLimitExceeded`].
    ///
    /// Parsing, rendering, printing and dropping the tree never recurse. The
    /// derived `Serialize`, `Clone`, `PartialEq` and `Debug` impls do, one
    /// frame per level, so keep a limit when the tree is serialized.
    pub fn with_depth_limit(mut self, limit: Option<u32>) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Reject stray tokens and require comma separators between entries.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    pub fn depth_limit(&self) -> Option<u32> {
        self.depth_limit
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parses `tokens` into a root group.
    pub fn parse(&self, tokens: &[Token<'_>]) -> Result<Value, ParseError> {
        let machine = Machine {
            config: *self,
            tokens,
            braces: BraceMap::build(tokens),
            current: Frame::new(tokens.len(), None),
            parents: Vec::new(),
            pos: 0,
        };
        let root = machine.run()?;
        tracing::debug!(
            tokens = tokens.len(),
            strict = self.strict,
            "parse finished"
        );
        Ok(root)
    }
}

/// Separator state of a frame. Only consulted in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Expect {
    /// Nothing parsed yet: an entry may start, a comma may not.
    FirstEntry,
    /// An entry just finished: only a comma (or the end) may follow.
    Separator,
    /// A comma was consumed: another entry must follow.
    NextEntry { comma: Range<usize> },
}

/// One token sequence being parsed: the document, or the inside of a brace pair.
#[derive(Debug)]
struct Frame {
    /// Index of the closing brace, or the token count for the document.
    end: usize,
    /// Field name to put on the finished group.
    label: Option<String>,
    children: Vec<Value>,
    expect: Expect,
}

impl Frame {
    fn new(end: usize, label: Option<String>) -> Self {
        Self {
            end,
            label,
            children: Vec::new(),
            expect: Expect::FirstEntry,
        }
    }

    fn finish(self) -> Value {
        let mut group = into_root(self.children);
        match self.label {
            Some(name) => {
                Value::Group(Group::named(name, std::mem::take(&mut group.children)))
            }
            None => Value::Group(group),
        }
    }
}

/// A lone root group is passed through; anything else gets wrapped.
fn into_root(mut children: Vec<Value>) -> Group {
    if let [Value::Group(group)] = children.as_mut_slice()
        && group.is_root()
    {
        return std::mem::take(group);
    }
    Group::root(children)
}

struct Machine<'t, 'src> {
    config: Parser,
    tokens: &'t [Token<'src>],
    braces: BraceMap,
    current: Frame,
    parents: Vec<Frame>,
    pos: usize,
}

impl<'t, 'src> Machine<'t, 'src> {
    fn run(mut self) -> Result<Value, ParseError> {
        loop {
            if self.pos >= self.current.end {
                if self.config.strict
                    && let Expect::NextEntry { comma } = &self.current.expect
                {
                    return Err(ParseError::UnexpectedToken {
                        found: TokenKind::Comma,
                        span: comma.clone(),
                    });
                }

                let end = self.current.end;
                let Some(parent) = self.parents.pop() else {
                    return Ok(self.current.finish());
                };
                let child = std::mem::replace(&mut self.current, parent);
                self.current.children.push(child.finish());
                // Step over the closing brace.
                self.pos = end + 1;
                continue;
            }

            self.step()?;
        }
    }

    fn step(&mut self) -> Result<(), ParseError> {
        let tokens = self.tokens;
        let token = &tokens[self.pos];

        match token.kind {
            TokenKind::LeftBrace => {
                self.begin_entry(token)?;
                self.open_span(self.pos, None)
            }
            TokenKind::StringLiteral => {
                self.begin_entry(token)?;
                self.field(token)
            }
            TokenKind::Comma if self.config.strict => {
                if self.current.expect != Expect::Separator {
                    return Err(unexpected(token));
                }
                self.current.expect = Expect::NextEntry {
                    comma: token.span.clone(),
                };
                self.pos += 1;
                Ok(())
            }
            _ if self.config.strict => Err(unexpected(token)),
            _ => {
                tracing::trace!(kind = ?token.kind, offset = token.span.start, "skipping stray token");
                self.pos += 1;
                Ok(())
            }
        }
    }

    /// Marks the start of an entry. Strict mode rejects a missing comma.
    fn begin_entry(&mut self, token: &Token<'_>) -> Result<(), ParseError> {
        if self.config.strict && self.current.expect == Expect::Separator {
            return Err(unexpected(token));
        }
        self.current.expect = Expect::Separator;
        Ok(())
    }

    /// `"name": <value>` starting at the name token.
    fn field(&mut self, name_token: &Token<'src>) -> Result<(), ParseError> {
        let name = name_token.text;

        match self.peek(self.pos + 1) {
            Some(token) if token.kind == TokenKind::Colon => {}
            found => {
                return Err(ParseError::ExpectedColon {
                    name: name.to_owned(),
                    span: found.map_or_else(|| name_token.span.clone(), |t| t.span.clone()),
                });
            }
        }

        let value_pos = self.pos + 2;
        let Some(value) = self.peek(value_pos) else {
            return Err(ParseError::MalformedField {
                name: name.to_owned(),
                span: name_token.span.start..self.tokens[self.pos + 1].span.end,
            });
        };

        match value.kind {
            TokenKind::NumberLiteral => {
                let number = value
                    .text
                    .parse::<u64>()
                    .map_err(|reason| ParseError::InvalidNumber {
                        text: value.text.to_owned(),
                        reason,
                        span: value.span.clone(),
                    })?;
                self.current.children.push(Value::number(name, number));
                self.pos = value_pos + 1;
                Ok(())
            }
            TokenKind::StringLiteral => {
                self.current
                    .children
                    .push(Value::string(name, value.text));
                self.pos = value_pos + 1;
                Ok(())
            }
            TokenKind::LeftBrace => self.open_span(value_pos, Some(name.to_owned())),
            _ => Err(ParseError::MalformedField {
                name: name.to_owned(),
                span: value.span.clone(),
            }),
        }
    }

    /// Pushes a frame for the tokens strictly between the brace at `open` and
    /// its match.
    fn open_span(&mut self, open: usize, label: Option<String>) -> Result<(), ParseError> {
        let span = self.tokens[open].span.clone();

        let Some(close) = self.braces.closing(open, self.current.end) else {
            return Err(ParseError::UnbalancedBraces { span });
        };

        if let Some(limit) = self.config.depth_limit
            && self.parents.len() >= limit as usize
        {
            return Err(ParseError::DepthLimitExceeded { limit, span });
        }

        let child = Frame::new(close, label);
        let parent = std::mem::replace(&mut self.current, child);
        self.parents.push(parent);
        self.pos = open + 1;
        Ok(())
    }

    /// Token at `index` if it lies inside the current span.
    fn peek(&self, index: usize) -> Option<&'t Token<'src>> {
        if index < self.current.end {
            self.tokens.get(index)
        } else {
            None
        }
    }
}

fn unexpected(token: &Token<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind,
        span: token.span.clone(),
    }
}
