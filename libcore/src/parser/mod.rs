//! Turning a line of infix text into a [`Symbol`](crate::Symbol)
//!
//! Text is split into tokens by [`lex_tokens`] and composed to a tree by [`parse`].

use crate::parser::token::Token;
use std::error;
use std::fmt;

mod astifier;
mod lexer;
pub mod token;

pub use astifier::{parse, MAX_DEPTH};
pub use lexer::lex_tokens;

/// A character the lexer does not know.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexError {
    pub character: char,
    /// Byte offset into the lexed text
    pub position: usize,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    /// A mandatory token is missing, `found` is `None` at the end of input.
    Expected {
        expected: Token,
        found: Option<Token>,
    },
    UnexpectedToken(Token),
    UnexpectedEnd,
    /// Tokens left over after a complete expression
    TrailingTokens(Vec<Token>),
    /// The tree would be deeper than [`MAX_DEPTH`]
    TooDeep,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError::Lex(error)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(error: SyntaxError) -> Self {
        ParseError::Syntax(error)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unexpected char: {} at position {}",
            self.character, self.position
        )
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxError::Expected {
                expected,
                found: Some(found),
            } => write!(f, "expected {}, found {}", expected, found),
            SyntaxError::Expected {
                expected,
                found: None,
            } => write!(f, "expected {}, found end of input", expected),
            SyntaxError::UnexpectedToken(token) => write!(f, "unexpected token: {}", token),
            SyntaxError::UnexpectedEnd => write!(f, "unexpected end"),
            SyntaxError::TrailingTokens(tokens) => {
                let rest = tokens
                    .iter()
                    .map(Token::to_string)
                    .collect::<Vec<String>>()
                    .join(" ");
                write!(f, "extra tokens: {}", rest)
            }
            SyntaxError::TooDeep => write!(f, "nested deeper than {}", MAX_DEPTH),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Lex(error) => write!(f, "{}", error),
            ParseError::Syntax(error) => write!(f, "{}", error),
        }
    }
}

impl error::Error for LexError {}
impl error::Error for SyntaxError {}
impl error::Error for ParseError {}
