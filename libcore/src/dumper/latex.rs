use super::base::*;
use crate::symbol::{Operator, Symbol};

pub trait LaTeX {
    fn write_latex<W>(&self, writer: &mut W) -> Result<(), std::io::Error>
    where
        W: std::io::Write;

    fn writeln_latex<W>(&self, writer: &mut W) -> Result<(), std::io::Error>
    where
        W: std::io::Write;
}

fn create_context() -> FormatContext {
    use FormatItem::*;
    FormatContext {
        symbols: hashmap! {
            "(" => "\\left(",
            ")" => "\\right)",
            "+" => " + ",
            "-" => " - ",
            "*" => " \\cdot ",
        },
        functions: hashmap! {
            "sqrt" => FunctionFormat {
                min_args: 0,
                items: vec![Tag("\\sqrt{"), Child(0), Tag("}")],
            },
            "lg" => FunctionFormat {
                min_args: 0,
                items: vec![Tag("\\lg\\left("), Child(0), Tag("\\right)")],
            },
            "lb" => FunctionFormat {
                min_args: 0,
                items: vec![Tag("\\mathrm{lb}\\left("), Child(0), Tag("\\right)")],
            },
            "log" => FunctionFormat {
                min_args: 2,
                items: vec![
                    Tag("\\log_{"),
                    Child(0),
                    Tag("}\\left("),
                    Child(1),
                    Tag("\\right)"),
                ],
            },
        },
        // TODO: Render the remaining arguments once a notation for them is agreed on
        default_function: vec![
            Tag("\\operatorname{"),
            Ident,
            Tag("}\\left("),
            Child(0),
            Tag("\\right)"),
        ],
    }
}

fn dump_atomic(context: &FormatContext, symbol: &Symbol, bracket: bool, string: &mut String) {
    if bracket {
        string.push_str(context.get("("));
        dump_impl(context, symbol, string);
        string.push_str(context.get(")"));
    } else {
        dump_impl(context, symbol, string);
    }
}

fn dump_impl(context: &FormatContext, symbol: &Symbol, string: &mut String) {
    match symbol {
        Symbol::Literal(text) => string.push_str(text),
        // The fraction delimits its parts itself
        Symbol::Binary {
            operator: Operator::Divide,
            left,
            right,
        } => {
            string.push_str("\\frac{");
            dump_impl(context, left, string);
            string.push_str("}{");
            dump_impl(context, right, string);
            string.push('}');
        }
        Symbol::Binary {
            operator,
            left,
            right,
        } => {
            let pre_root = symbol.precedence();
            let pre_right = right.precedence();
            dump_atomic(context, left, left.precedence() < pre_root, string);
            string.push_str(context.get(operator.ident()));
            // a - (b - c) keeps its brackets
            let bracket_right = pre_right < pre_root
                || (*operator == Operator::Minus && pre_right == Precedence::PSum);
            dump_atomic(context, right, bracket_right, string);
        }
        Symbol::Factorial(child) => {
            let bracket = child.is_factorial() || child.precedence() < Precedence::PFaculty;
            dump_atomic(context, child, bracket, string);
            string.push('!');
        }
        Symbol::Call { ident, childs } => {
            for item in context.function_items(ident, childs.len()).iter() {
                match item {
                    FormatItem::Tag(tag) => string.push_str(tag),
                    FormatItem::Ident => string.push_str(ident),
                    FormatItem::Child(index) => {
                        if let Some(child) = childs.get(*index) {
                            dump_impl(context, child, string);
                        }
                    }
                }
            }
        }
    }
}

pub fn dump_latex(symbol: &Symbol) -> String {
    let context = create_context();
    let mut string = String::new();
    dump_impl(&context, symbol, &mut string);
    string
}

/// Shows `code` literally, escaping what LaTeX would interpret.
pub fn escape_text(code: &str) -> String {
    let safe = code
        .replace('\\', "\\\\")
        .replace('{', "\\{")
        .replace('}', "\\}");
    format!("\\text{{{}}}", safe)
}

/// Renders an infix expression, falling back to the escaped text when it does not parse.
pub fn infix_to_latex(code: &str) -> String {
    match Symbol::parse(code) {
        Ok(symbol) => dump_latex(&symbol),
        Err(_) => escape_text(code),
    }
}

impl LaTeX for Symbol {
    fn write_latex<W>(&self, writer: &mut W) -> Result<(), std::io::Error>
    where
        W: std::io::Write,
    {
        write!(writer, "{}", dump_latex(self))
    }

    fn writeln_latex<W>(&self, writer: &mut W) -> Result<(), std::io::Error>
    where
        W: std::io::Write,
    {
        writeln!(writer, "{}", dump_latex(self))
    }
}
