use crate::parser::{self, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn ident(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

/// Node of a parsed infix expression.
///
/// Literals keep their text verbatim (including a folded sign), nothing gets evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Literal(String),
    Binary {
        operator: Operator,
        left: Box<Symbol>,
        right: Box<Symbol>,
    },
    Factorial(Box<Symbol>),
    /// Arity is not checked against the ident
    Call { ident: String, childs: Vec<Symbol> },
}

impl Symbol {
    pub fn new_literal(text: &str) -> Symbol {
        Symbol::Literal(String::from(text))
    }

    pub fn new_binary(operator: Operator, left: Symbol, right: Symbol) -> Symbol {
        Symbol::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn new_factorial(child: Symbol) -> Symbol {
        Symbol::Factorial(Box::new(child))
    }

    pub fn new_call(ident: &str, childs: Vec<Symbol>) -> Symbol {
        Symbol::Call {
            ident: String::from(ident),
            childs,
        }
    }

    /// Tokenizes and parses a single infix expression.
    pub fn parse(code: &str) -> Result<Symbol, ParseError> {
        let tokens = parser::lex_tokens(code)?;
        Ok(parser::parse(&tokens)?)
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Symbol::Literal(_) => 1,
            Symbol::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Symbol::Factorial(child) => 1 + child.depth(),
            Symbol::Call { childs, .. } => {
                1 + childs.iter().map(Symbol::depth).max().unwrap_or(0)
            }
        }
    }
}
