//! Composing tokens to an AST
//!
//! Recursive descent, one method per precedence tier:
//!
//! ```txt
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := primary ('!')*
//! primary    := NUMBER | IDENT '(' [expression (',' expression)*] ')' | '(' expression ')'
//! ```

use super::token::Token;
use super::SyntaxError;
use crate::symbol::{Operator, Symbol};

/// Deepest tree the parser builds, brackets and calls count towards it as well
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree together with its depth
type Parsed = (Symbol, usize);

fn grow(depth: usize) -> Result<usize, SyntaxError> {
    if depth > MAX_DEPTH {
        Err(SyntaxError::TooDeep)
    } else {
        Ok(depth)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    /// Open brackets around the current position
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            position: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consumes the next token if it equals `expected`
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), SyntaxError> {
        if self.eat(&expected) {
            Ok(())
        } else {
            Err(SyntaxError::Expected {
                expected,
                found: self.peek().cloned(),
            })
        }
    }

    fn nested<T, F>(&mut self, parse: F) -> Result<T, SyntaxError>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<T, SyntaxError>,
    {
        if self.nesting >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep);
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    fn expression(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut symbol, mut depth) = self.term()?;
        loop {
            let operator = match self.peek() {
                Some(Token::Plus) => Operator::Plus,
                Some(Token::Minus) => Operator::Minus,
                _ => return Ok((symbol, depth)),
            };
            self.position += 1;
            let (right, right_depth) = self.term()?;
            depth = grow(depth.max(right_depth) + 1)?;
            symbol = Symbol::new_binary(operator, symbol, right);
        }
    }

    fn term(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut symbol, mut depth) = self.factor()?;
        loop {
            let operator = match self.peek() {
                Some(Token::Multiply) => Operator::Multiply,
                Some(Token::Divide) => Operator::Divide,
                _ => return Ok((symbol, depth)),
            };
            self.position += 1;
            let (right, right_depth) = self.factor()?;
            depth = grow(depth.max(right_depth) + 1)?;
            symbol = Symbol::new_binary(operator, symbol, right);
        }
    }

    fn factor(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut symbol, mut depth) = self.primary()?;
        while self.eat(&Token::Faculty) {
            depth = grow(depth + 1)?;
            symbol = Symbol::new_factorial(symbol);
        }
        Ok((symbol, depth))
    }

    fn primary(&mut self) -> Result<Parsed, SyntaxError> {
        match self.advance() {
            None => Err(SyntaxError::UnexpectedEnd),
            Some(Token::Number(digits)) => Ok((Symbol::new_literal(digits), 1)),
            Some(Token::Ident(ident)) => {
                self.expect(Token::BracketL)?;
                let (childs, depth) = self.nested(Parser::arguments)?;
                Ok((Symbol::new_call(ident, childs), grow(depth + 1)?))
            }
            Some(Token::BracketL) => {
                let parsed = self.nested(Parser::expression)?;
                self.expect(Token::BracketR)?;
                Ok(parsed)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken(token.clone())),
        }
    }

    /// Arguments of a call and the depth of the deepest one, the opening bracket is already
    /// consumed.
    fn arguments(&mut self) -> Result<(Vec<Symbol>, usize), SyntaxError> {
        let mut childs = vec![];
        let mut depth = 0;
        if self.eat(&Token::BracketR) {
            return Ok((childs, depth));
        }
        loop {
            let (child, child_depth) = self.expression()?;
            childs.push(child);
            depth = depth.max(child_depth);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(Token::BracketR)?;
        Ok((childs, depth))
    }
}

/// Parses the whole token sequence into one expression.
///
/// Trees deeper than [`MAX_DEPTH`] are rejected with [`SyntaxError::TooDeep`].
pub fn parse(tokens: &[Token]) -> Result<Symbol, SyntaxError> {
    let mut parser = Parser::new(tokens);
    let (symbol, _) = parser.expression()?;
    if parser.position < tokens.len() {
        return Err(SyntaxError::TrailingTokens(
            tokens[parser.position..].to_vec(),
        ));
    }
    Ok(symbol)
}

#[cfg(test)]
mod specs {
    use super::*;
    use crate::parser::lex_tokens;

    fn new_literal(text: &str) -> Symbol {
        Symbol::new_literal(text)
    }

    fn new_op(operator: Operator, left: Symbol, right: Symbol) -> Symbol {
        Symbol::new_binary(operator, left, right)
    }

    fn new_func(ident: &str, childs: Vec<Symbol>) -> Symbol {
        Symbol::new_call(ident, childs)
    }

    fn parse_code(code: &str) -> Result<Symbol, SyntaxError> {
        let tokens = lex_tokens(code).expect("lex");
        parse(&tokens)
    }

    #[test]
    fn single_literal() {
        let actual = parse_code("42").expect("parse");
        assert_eq!(actual, new_literal("42"));
    }

    #[test]
    fn bin_operator_simple() {
        let actual = parse_code("5-3").expect("parse");
        assert_eq!(
            actual,
            new_op(Operator::Minus, new_literal("5"), new_literal("3"))
        );
    }

    #[test]
    fn unary_minus_literal() {
        let actual = parse_code("-5+3").expect("parse");
        assert_eq!(
            actual,
            new_op(Operator::Plus, new_literal("-5"), new_literal("3"))
        );

        let actual = parse_code("5*-3").expect("parse");
        assert_eq!(
            actual,
            new_op(Operator::Multiply, new_literal("5"), new_literal("-3"))
        );
    }

    #[test]
    fn bin_operator_order_of_operations() {
        let actual = parse_code("1+2*3").expect("parse");
        let expected = new_op(
            Operator::Plus,
            new_literal("1"),
            new_op(Operator::Multiply, new_literal("2"), new_literal("3")),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn left_associative() {
        let actual = parse_code("8-3-1").expect("parse");
        let expected = new_op(
            Operator::Minus,
            new_op(Operator::Minus, new_literal("8"), new_literal("3")),
            new_literal("1"),
        );
        assert_eq!(actual, expected);

        let actual = parse_code("8/4*2").expect("parse");
        let expected = new_op(
            Operator::Multiply,
            new_op(Operator::Divide, new_literal("8"), new_literal("4")),
            new_literal("2"),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn operators_with_brackets_front() {
        let actual = parse_code("(1+2)/3").expect("parse");
        let expected = new_op(
            Operator::Divide,
            new_op(Operator::Plus, new_literal("1"), new_literal("2")),
            new_literal("3"),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn double_brackets() {
        let actual = parse_code("((4))").expect("parse");
        assert_eq!(actual, new_literal("4"));
    }

    #[test]
    fn postfix_operator_simple() {
        let actual = parse_code("5!").expect("parse");
        assert_eq!(actual, Symbol::new_factorial(new_literal("5")));
    }

    #[test]
    fn postfix_operator_stacked() {
        let actual = parse_code("5!!").expect("parse");
        assert_eq!(
            actual,
            Symbol::new_factorial(Symbol::new_factorial(new_literal("5")))
        );
    }

    #[test]
    fn postfix_binds_tighter_than_product() {
        let actual = parse_code("2*3!").expect("parse");
        let expected = new_op(
            Operator::Multiply,
            new_literal("2"),
            Symbol::new_factorial(new_literal("3")),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn function_with_single_arg() {
        let actual = parse_code("sqrt(16)").expect("parse");
        assert_eq!(actual, new_func("sqrt", vec![new_literal("16")]));
    }

    #[test]
    fn function_without_args() {
        let actual = parse_code("f()").expect("parse");
        assert_eq!(actual, new_func("f", vec![]));
    }

    #[test]
    fn function_with_multiple_args() {
        let actual = parse_code("foo(1,2,3)").expect("parse");
        assert_eq!(
            actual,
            new_func(
                "foo",
                vec![new_literal("1"), new_literal("2"), new_literal("3")]
            )
        );
    }

    #[test]
    fn function_nested_with_inner_operator() {
        let actual = parse_code("f(1+2, g(3))").expect("parse");
        let expected = new_func(
            "f",
            vec![
                new_op(Operator::Plus, new_literal("1"), new_literal("2")),
                new_func("g", vec![new_literal("3")]),
            ],
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn unexpected_end() {
        assert_eq!(parse_code("2+"), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse_code(""), Err(SyntaxError::UnexpectedEnd));
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(
            parse_code("2+*3"),
            Err(SyntaxError::UnexpectedToken(Token::Multiply))
        );
        assert_eq!(
            parse_code("()"),
            Err(SyntaxError::UnexpectedToken(Token::BracketR))
        );
        assert_eq!(
            parse_code("--5"),
            Err(SyntaxError::UnexpectedToken(Token::Minus))
        );
    }

    #[test]
    fn missing_brackets() {
        assert_eq!(
            parse_code("sqrt 4"),
            Err(SyntaxError::Expected {
                expected: Token::BracketL,
                found: Some(Token::Number("4".to_owned())),
            })
        );
        assert_eq!(
            parse_code("(1+2"),
            Err(SyntaxError::Expected {
                expected: Token::BracketR,
                found: None,
            })
        );
        assert_eq!(
            parse_code("f(1 2)"),
            Err(SyntaxError::Expected {
                expected: Token::BracketR,
                found: Some(Token::Number("2".to_owned())),
            })
        );
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(
            parse_code("2+3)"),
            Err(SyntaxError::TrailingTokens(vec![Token::BracketR]))
        );
        assert_eq!(
            parse_code("2 3"),
            Err(SyntaxError::TrailingTokens(vec![Token::Number(
                "3".to_owned()
            )]))
        );
    }

    #[test]
    fn nesting_limit() {
        let code = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_code(&code(MAX_DEPTH)), Ok(new_literal("1")));
        assert_eq!(parse_code(&code(MAX_DEPTH + 1)), Err(SyntaxError::TooDeep));
        assert_eq!(parse_code(&code(10_000)), Err(SyntaxError::TooDeep));
    }

    #[test]
    fn nested_calls_limit() {
        let code = format!("{}1{}", "f(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse_code(&code), Err(SyntaxError::TooDeep));
    }

    #[test]
    fn tree_depth_limit() {
        assert_eq!(
            parse_code(&format!("1{}", "!".repeat(10_000))),
            Err(SyntaxError::TooDeep)
        );
        assert_eq!(
            parse_code(&format!("1{}", "+1".repeat(10_000))),
            Err(SyntaxError::TooDeep)
        );
        assert!(parse_code(&format!("1{}", "!".repeat(MAX_DEPTH - 1))).is_ok());
    }
}
