use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    // literals
    Ident(String),
    Number(String),
    // operators
    Plus,
    Minus,
    Divide,
    Multiply,
    Faculty,
    // grouping
    Comma,
    BracketL,
    BracketR,
}

impl Token {
    /// The character of a single-character token, `None` for literals.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Token::Ident(_) | Token::Number(_) => None,
            Token::Plus => Some('+'),
            Token::Minus => Some('-'),
            Token::Divide => Some('/'),
            Token::Multiply => Some('*'),
            Token::Faculty => Some('!'),
            Token::Comma => Some(','),
            Token::BracketL => Some('('),
            Token::BracketR => Some(')'),
        }
    }

    /// Whether a `-` directly following this token starts a negative literal.
    pub fn opens_operand(&self) -> bool {
        match self {
            Token::BracketL
            | Token::Comma
            | Token::Plus
            | Token::Minus
            | Token::Multiply
            | Token::Divide => true,
            Token::Ident(_) | Token::Number(_) | Token::Faculty | Token::BracketR => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::Number(digits) => write!(f, "{}", digits),
            _ => match self.symbol() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}
