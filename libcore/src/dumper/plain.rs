use super::base::Precedence;
use crate::symbol::Symbol;
use std::fmt;

fn dump_atomic(symbol: &Symbol, bracket: bool, string: &mut String) {
    if bracket {
        string.push('(');
        dump_impl(symbol, string);
        string.push(')');
    } else {
        dump_impl(symbol, string);
    }
}

/// Brackets everything the parser would otherwise group differently.
fn dump_impl(symbol: &Symbol, string: &mut String) {
    match symbol {
        Symbol::Literal(text) => string.push_str(text),
        Symbol::Binary {
            operator,
            left,
            right,
        } => {
            let pre_root = symbol.precedence();
            dump_atomic(left, left.precedence() < pre_root, string);
            string.push(' ');
            string.push_str(operator.ident());
            string.push(' ');
            dump_atomic(right, right.precedence() <= pre_root, string);
        }
        Symbol::Factorial(child) => {
            let bracket = child.is_factorial() || child.precedence() < Precedence::PFaculty;
            dump_atomic(child, bracket, string);
            string.push('!');
        }
        Symbol::Call { ident, childs } => {
            string.push_str(ident);
            string.push('(');
            let mut first = true;
            for child in childs.iter() {
                if !first {
                    string.push_str(", ");
                }
                dump_impl(child, string);
                first = false;
            }
            string.push(')');
        }
    }
}

/// Infix text in the solver's notation, e.g. `(1 + 3) * sqrt(36)`
pub fn dump_plain(symbol: &Symbol) -> String {
    let mut string = String::new();
    dump_impl(symbol, &mut string);
    string
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", dump_plain(self))
    }
}
