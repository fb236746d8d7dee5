use quill::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::core::Parser},
};

fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().to_vec();

    (program, errors)
}

fn parse_display(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");

    program.to_string()
}

#[test]
fn parses_let_statements() {
    let (program, errors) = parse("let x = 5; let y = true; let foobar = y;");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 3);

    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];

    for (statement, (expected_name, expected_value)) in program.statements.iter().zip(expected) {
        match statement {
            Statement::Let { name, value, .. } => {
                assert_eq!(name, expected_name);
                assert_eq!(value.to_string(), expected_value);
            },
            other => panic!("expected let statement, got {other}"),
        }
    }
}

#[test]
fn parses_return_statements() {
    let (program, errors) = parse("return 5; return a + b;");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 2);

    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }), "got {statement}");
    }

    assert_eq!(program.to_string(), "return 5; return (a + b)");
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(parse_display("let a = 1"), "let a = 1");
    assert_eq!(parse_display("1 + 2"), "(1 + 2)");
    assert_eq!(parse_display("a; b\nc"), "a; b; c");
}

#[test]
fn operator_precedence_renders_fully_parenthesized() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_eq!(parse_display(source), expected, "source: {source}");
    }
}

#[test]
fn logic_operators_sit_between_equality_and_comparison() {
    let cases = [("a && b || c", "((a && b) || c)"),
                 ("a || b && c", "(a || (b && c))"),
                 ("1 < 2 && 3 < 4", "((1 < 2) && (3 < 4))"),
                 ("a == b && c", "(a == (b && c))")];

    for (source, expected) in cases {
        assert_eq!(parse_display(source), expected, "source: {source}");
    }
}

#[test]
fn parses_if_expressions() {
    assert_eq!(parse_display("if (x < y) { x }"), "if ((x < y)) { x }");
    assert_eq!(parse_display("if (x < y) { x } else { y }"), "if ((x < y)) { x }else { y }");
}

#[test]
fn parses_function_literals() {
    assert_eq!(parse_display("fn(x, y) { x + y; }"), "fn(x, y) { (x + y) }");
    assert_eq!(parse_display("fn() {}"), "fn() { }");
    assert_eq!(parse_display("fn(x) { fn(y) { x + y } }"), "fn(x) { fn(y) { (x + y) } }");
}

#[test]
fn function_parameters_must_be_identifiers() {
    let (_, errors) = parse("fn(1) { 1 }");

    assert_eq!(errors[0].to_string(),
               "expectPeek: wrong peek token type. expected=IDENT, got=INT (line 1, column 4)");
}

#[test]
fn parses_collection_literals() {
    assert_eq!(parse_display("[1, 2 * 2, 3]"), "[1, (2 * 2), 3]");
    assert_eq!(parse_display("[]"), "[]");
    assert_eq!(parse_display("{}"), "{}");
    assert_eq!(parse_display("{\"a\": 1, 2: 3, true: 4}"), "{a:1, 2:3, true:4}");
}

#[test]
fn hash_pairs_keep_source_order() {
    let (program, errors) = parse("{\"b\": 2, \"a\": 1}");
    assert!(errors.is_empty());

    match &program.statements[0] {
        Statement::Expression { expr: Expr::HashLiteral { pairs, .. },
                                .. } => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0].0.to_string(), "b");
            assert_eq!(pairs[1].0.to_string(), "a");
        },
        other => panic!("expected hash literal, got {other}"),
    }
}

#[test]
fn trailing_commas_are_rejected() {
    let (_, errors) = parse("[1, 2,]");
    assert!(errors.iter()
                  .any(|error| error.to_string().contains("found no prefix parse function for RBRACKET")),
            "errors: {errors:?}");

    let (_, errors) = parse("{\"a\": 1,}");
    assert!(errors.iter()
                  .any(|error| error.to_string().contains("found no prefix parse function for RBRACE")),
            "errors: {errors:?}");
}

#[test]
fn records_errors_and_continues() {
    let (_, errors) = parse("let x 5; let = 10; let 838383;");

    assert_eq!(errors.len(), 4, "errors: {errors:?}");
    assert_eq!(errors[0].to_string(),
               "expectPeek: wrong peek token type. expected=ASSIGN, got=INT (line 1, column 7)");
    assert_eq!(errors[1].to_string(),
               "expectPeek: wrong peek token type. expected=IDENT, got=ASSIGN (line 1, column 14)");
    assert_eq!(errors[2].to_string(),
               "found no prefix parse function for ASSIGN (line 1, column 14)");
    assert_eq!(errors[3].to_string(),
               "expectPeek: wrong peek token type. expected=IDENT, got=INT (line 1, column 24)");
}

#[test]
fn integer_overflow_is_a_parse_error() {
    let (_, errors) = parse("99999999999999999999");

    assert_eq!(errors[0].to_string(),
               "could not parse 99999999999999999999 as integer (line 1, column 1)");
}

#[test]
fn illegal_tokens_surface_as_missing_prefix_errors() {
    let (_, errors) = parse("5 @ 5");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(),
               "found no prefix parse function for ILLEGAL (line 1, column 3)");
}

#[test]
fn printer_round_trips() {
    let sources = ["let a = 5; let b = a * 2; b + 1",
                   "if (x < y) { x } else { y }",
                   "let f = fn(x, y) { x + y }; f(1, 2 * 3)",
                   "a * [1, 2][0] + add(1, 2)",
                   "{1:2, 3:4}[3]",
                   "return -a != !b"];

    for source in sources {
        let first = parse_display(source);
        let second = parse_display(&first);
        assert_eq!(first, second, "source: {source}");
    }
}
