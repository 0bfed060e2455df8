use crate::symbol::{Operator, Symbol};
use std::collections::HashMap;

/// Ranks used to decide about brackets when dumping.
///
/// Independent of the parser, which encodes its tiers in the grammar.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
pub enum Precedence {
    PSum = 1,
    PProduct = 2,
    PFaculty = 3,
    PHighest = 4,
}

impl Symbol {
    pub fn precedence(&self) -> Precedence {
        match self {
            Symbol::Binary { operator, .. } => match operator {
                Operator::Plus | Operator::Minus => Precedence::PSum,
                Operator::Multiply | Operator::Divide => Precedence::PProduct,
            },
            Symbol::Factorial(_) | Symbol::Call { .. } => Precedence::PFaculty,
            Symbol::Literal(_) => Precedence::PHighest,
        }
    }

    pub fn is_factorial(&self) -> bool {
        match self {
            Symbol::Factorial(_) => true,
            _ => false,
        }
    }
}

pub enum FormatItem {
    Tag(&'static str),
    /// The ident of the call
    Ident,
    /// Argument at position, empty if missing
    Child(usize),
}

pub struct FunctionFormat {
    /// Calls with fewer arguments fall back to the default format
    pub min_args: usize,
    pub items: Vec<FormatItem>,
}

pub struct FormatContext {
    pub symbols: HashMap<&'static str, &'static str>,
    pub functions: HashMap<&'static str, FunctionFormat>,
    pub default_function: Vec<FormatItem>,
}

impl FormatContext {
    pub fn get<'b>(&self, key: &'b str) -> &'b str {
        self.symbols.get(key).copied().unwrap_or(key)
    }

    pub fn function_items(&self, ident: &str, arg_count: usize) -> &[FormatItem] {
        match self.functions.get(ident) {
            Some(format) if arg_count >= format.min_args => &format.items,
            _ => &self.default_function,
        }
    }
}
