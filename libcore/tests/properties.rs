use points_core::parser::{lex_tokens, parse};
use points_core::{
    dump_latex, dump_plain, infix_to_latex, LexError, Operator, ParseError, Symbol, SyntaxError,
    Token,
};
use rstest::rstest;

fn lit(text: &str) -> Symbol {
    Symbol::new_literal(text)
}

fn op(operator: Operator, left: Symbol, right: Symbol) -> Symbol {
    Symbol::new_binary(operator, left, right)
}

fn hand_built() -> Vec<Symbol> {
    vec![
        op(Operator::Minus, lit("8"), op(Operator::Minus, lit("3"), lit("1"))),
        op(Operator::Minus, op(Operator::Minus, lit("8"), lit("3")), lit("1")),
        op(
            Operator::Multiply,
            op(Operator::Plus, lit("1"), lit("3")),
            op(Operator::Plus, lit("2"), lit("4")),
        ),
        op(
            Operator::Divide,
            lit("12"),
            op(Operator::Divide, lit("6"), lit("3")),
        ),
        op(
            Operator::Multiply,
            lit("2"),
            op(Operator::Multiply, lit("3"), lit("4")),
        ),
        Symbol::new_factorial(Symbol::new_factorial(lit("3"))),
        Symbol::new_factorial(op(Operator::Plus, lit("1"), lit("2"))),
        Symbol::new_call(
            "log",
            vec![lit("2"), op(Operator::Multiply, lit("4"), lit("-2"))],
        ),
        Symbol::new_call("f", vec![]),
        op(
            Operator::Plus,
            lit("-5"),
            Symbol::new_call("sqrt", vec![Symbol::new_factorial(lit("4"))]),
        ),
    ]
}

#[rstest]
#[case("(1+2)*3", "\\left(1 + 2\\right) \\cdot 3")]
#[case("1+2*3", "1 + 2 \\cdot 3")]
#[case("(1+2)/3", "\\frac{1 + 2}{3}")]
#[case("5!!", "\\left(5!\\right)!")]
#[case("sqrt(16)", "\\sqrt{16}")]
#[case("log(2,8)", "\\log_{2}\\left(8\\right)")]
#[case("foo(1,2,3)", "\\operatorname{foo}\\left(1\\right)")]
#[case("lb(sqrt(16))*3!", "\\mathrm{lb}\\left(\\sqrt{16}\\right) \\cdot 3!")]
#[case("(8 - 2) * 4", "\\left(8 - 2\\right) \\cdot 4")]
fn renders(#[case] code: &str, #[case] expected: &str) {
    assert_eq!(infix_to_latex(code), expected);
}

#[rstest]
#[case("2+", ParseError::Syntax(SyntaxError::UnexpectedEnd))]
#[case("2+*3", ParseError::Syntax(SyntaxError::UnexpectedToken(Token::Multiply)))]
#[case("#5", ParseError::Lex(LexError { character: '#', position: 0 }))]
#[case("2+3)", ParseError::Syntax(SyntaxError::TrailingTokens(vec![Token::BracketR])))]
fn rejects(#[case] code: &str, #[case] expected: ParseError) {
    assert_eq!(Symbol::parse(code), Err(expected));
}

#[test]
fn deep_nesting_falls_back() {
    let code = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(
        Symbol::parse(&code),
        Err(ParseError::Syntax(SyntaxError::TooDeep))
    );
    assert_eq!(infix_to_latex(&code), format!("\\text{{{}}}", code));
}

#[test]
fn minus_disambiguation() {
    assert_eq!(
        Symbol::parse("-5+3").unwrap(),
        op(Operator::Plus, lit("-5"), lit("3"))
    );
    assert_eq!(
        Symbol::parse("5-3").unwrap(),
        op(Operator::Minus, lit("5"), lit("3"))
    );
    assert_eq!(
        Symbol::parse("5*-3").unwrap(),
        op(Operator::Multiply, lit("5"), lit("-3"))
    );
}

#[test]
fn rendering_is_deterministic() {
    let codes = ["(1+3)*(2+4)", "sqrt(16)*3!/lg(100)", "8-(3-1)*f(1,2)", "2+"];
    for code in codes.iter() {
        let first = infix_to_latex(code);
        for _ in 0..10 {
            assert_eq!(infix_to_latex(code), first);
        }
    }
}

#[test]
fn plain_dump_round_trips() {
    for symbol in hand_built() {
        let code = dump_plain(&symbol);
        let tokens = lex_tokens(&code).expect("lex");
        assert_eq!(parse(&tokens), Ok(symbol), "re-parsing {}", code);
    }
}

#[test]
fn latex_keeps_grouping() {
    let actual = hand_built()
        .iter()
        .map(dump_latex)
        .collect::<Vec<String>>();
    let expected = vec![
        "8 - \\left(3 - 1\\right)",
        "8 - 3 - 1",
        "\\left(1 + 3\\right) \\cdot \\left(2 + 4\\right)",
        "\\frac{12}{\\frac{6}{3}}",
        "2 \\cdot 3 \\cdot 4",
        "\\left(3!\\right)!",
        "\\left(1 + 2\\right)!",
        "\\log_{2}\\left(4 \\cdot -2\\right)",
        "\\operatorname{f}\\left(\\right)",
        "-5 + \\sqrt{4!}",
    ];
    assert_eq!(actual, expected);
}

#[test]
fn well_formed_input_is_fully_consumed() {
    let codes = ["1", "f(1, g(2, 3), -4)", "((1))!", "1 - -2", "lg(100)/lb(4)"];
    for code in codes.iter() {
        let tokens = lex_tokens(code).expect("lex");
        assert!(parse(&tokens).is_ok(), "{}", code);
    }
}
