use nom::branch::alt;
use nom::character::complete::{alpha1, char, digit1, multispace0};
use nom::combinator::{map, recognize, value};
use nom::sequence::pair;
use nom::IResult;

use super::token::Token;
use super::LexError;

// operators
fn lex_operator(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Plus, char('+')),
        value(Token::Minus, char('-')),
        value(Token::Multiply, char('*')),
        value(Token::Divide, char('/')),
        value(Token::Faculty, char('!')),
    ))(input)
}

// punctuation
fn lex_punctuation(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Comma, char(',')),
        value(Token::BracketL, char('(')),
        value(Token::BracketR, char(')')),
    ))(input)
}

// Literals
fn lex_integer(input: &str) -> IResult<&str, Token> {
    map(digit1, |digits: &str| Token::Number(digits.to_owned()))(input)
}

fn lex_negative_integer(input: &str) -> IResult<&str, Token> {
    map(recognize(pair(char('-'), digit1)), |digits: &str| {
        Token::Number(digits.to_owned())
    })(input)
}

fn lex_ident(input: &str) -> IResult<&str, Token> {
    map(alpha1, |ident: &str| Token::Ident(ident.to_owned()))(input)
}

/// A `-` only becomes part of the literal when nothing precedes it or the
/// previous token leaves an operand open.
fn lex_token<'a>(input: &'a str, previous: Option<&Token>) -> IResult<&'a str, Token> {
    if previous.map_or(true, Token::opens_operand) {
        if let Ok(result) = lex_negative_integer(input) {
            return Ok(result);
        }
    }
    alt((lex_operator, lex_punctuation, lex_integer, lex_ident))(input)
}

fn skip_whitespace(input: &str) -> &str {
    multispace0::<&str, ()>(input).map_or(input, |(rest, _)| rest)
}

pub fn lex_tokens(code: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut rest = skip_whitespace(code);
    while let Some(character) = rest.chars().next() {
        match lex_token(rest, tokens.last()) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = skip_whitespace(remaining);
            }
            Err(_) => {
                return Err(LexError {
                    character,
                    position: code.len() - rest.len(),
                })
            }
        }
    }
    Ok(tokens)
}
