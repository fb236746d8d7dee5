use std::{cell::RefCell, rc::Rc};

use quill::{interpreter::value::environment::Environment, run, run_with_env};

fn eval_display(source: &str) -> String {
    match run(source) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(error) => format!("ERROR: {error}"),
    }
}

fn assert_result(source: &str, expected: &str) {
    assert_eq!(eval_display(source), expected, "source: {source}");
}

#[test]
fn end_to_end_scenarios() {
    assert_result("let a = 5; let b = a * 2; b + 1", "11");
    assert_result("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_result("let adder = fn(x){ fn(y){ x + y } }; let add2 = adder(2); add2(3)", "5");
    assert_result("let map = fn(a,f){ let it = fn(i,acc){ if (i == len(a)) { acc } else { it(i+1, push(acc, f(a[i]))) } }; it(0, []) }; map([1,2,3], fn(x){x*x})",
                  "[1, 4, 9]");
    assert_result("{\"a\":1,\"b\":2}[\"b\"]", "2");
    assert_result("len(\"hello\") + len([1,2,3])", "8");
    assert_result("5 + true", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_result("foobar", "ERROR: identifier not found: foobar");
}

#[test]
fn integer_arithmetic() {
    assert_result("5", "5");
    assert_result("-5", "-5");
    assert_result("5 + 5 + 5 + 5 - 10", "10");
    assert_result("2 * 2 * 2 * 2 * 2", "32");
    assert_result("-50 + 100 + -50", "0");
    assert_result("5 * 2 + 10", "20");
    assert_result("5 + 2 * 10", "25");
    assert_result("20 + 2 * -10", "0");
    assert_result("50 / 2 * 2 + 10", "60");
    assert_result("2 * (5 + 10)", "30");
    assert_result("3 * 3 * 3 + 10", "37");
    assert_result("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
    assert_result("7 / 2", "3");
}

#[test]
fn comparison_and_logic() {
    assert_result("true", "true");
    assert_result("false", "false");
    assert_result("1 < 2", "true");
    assert_result("1 > 2", "false");
    assert_result("1 == 1", "true");
    assert_result("1 != 1", "false");
    assert_result("true == true", "true");
    assert_result("true != false", "true");
    assert_result("(1 < 2) == true", "true");
    assert_result("true && false", "false");
    assert_result("true || false", "true");
    assert_result("1 < 2 && 3 < 4", "true");
    assert_result("1 > 2 || 3 > 4", "false");
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_result("!true", "false");
    assert_result("!false", "true");
    assert_result("!5", "false");
    assert_result("!!5", "true");
    assert_result("!0", "false");
    assert_result("!\"\"", "false");
    assert_result("!(if (false) { 1 })", "true");
}

#[test]
fn if_expressions() {
    assert_result("if (true) { 10 }", "10");
    assert_result("if (false) { 10 }", "null");
    assert_result("if (1) { 10 }", "10");
    assert_result("if (0) { 1 } else { 2 }", "1");
    assert_result("if (1 < 2) { 10 } else { 20 }", "10");
    assert_result("if (1 > 2) { 10 } else { 20 }", "20");
}

#[test]
fn return_statements() {
    assert_result("return 7; 8", "7");
    assert_result("return 10; return 9;", "10");
    assert_result("9; return 2 * 5; 9;", "10");
    assert_result("let f = fn() { if (true) { if (true) { return 9; } return 10; } return 11; }; f()",
                  "9");
    assert_result("let noisy = fn() { 1; 2; 3 }; noisy()", "3");
}

#[test]
fn bindings_and_scope() {
    assert_result("let a = 5; a;", "5");
    assert_result("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    assert_result("let len = 5; len", "5");
    assert_result("let x = 5; let f = fn(){ x }; let g = fn(){ let x = 9; f() }; g()", "5");
}

#[test]
fn closures_and_higher_order_functions() {
    assert_result("let add = fn(a, b) { a + b }; let apply = fn(f, x, y) { f(x, y) }; apply(add, 2, 3)",
                  "5");
    assert_result("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10)",
                  "55");
    assert_result("fn(x) { x + 2 }", "fn(x) { (x + 2) }");
}

#[test]
fn call_arity_is_not_validated() {
    assert_result("let f = fn(x, y) { x }; f(1)", "1");
    assert_result("let f = fn(x) { x }; f(1, 2)", "1");
    assert_result("let f = fn(x, y) { y }; f(1)", "ERROR: identifier not found: y");
}

#[test]
fn strings() {
    assert_result("\"hello\"", "hello");
    assert_result("\"Hello\" + \" \" + \"World!\"", "Hello World!");
    assert_result("let greet = fn(name) { \"Hello \" + name + \"!\" }; greet(\"quill\")",
                  "Hello quill!");
    assert_result("\"Hello\" - \"World\"", "ERROR: unknown operator: STRING - STRING");
    assert_result("\"a\" == \"a\"", "ERROR: unknown operator: STRING == STRING");
}

#[test]
fn arrays() {
    assert_result("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_result("[1, 2, 3][0]", "1");
    assert_result("[1, 2, 3][1 + 1]", "3");
    assert_result("let a = [1, 2, 3]; a[2]", "3");
    assert_result("[1, 2, 3][3]", "null");
    assert_result("[1, 2, 3][-1]", "null");
    assert_result("[][0]", "null");
}

#[test]
fn array_builtins_are_pure() {
    assert_result("let a = [1, 2]; push(a, 3); a", "[1, 2]");
    assert_result("let a = [1, 2]; push(a, 3)", "[1, 2, 3]");
    assert_result("let a = [1, 2, 3]; rest(a); a", "[1, 2, 3]");
    assert_result("rest([1, 2, 3])", "[2, 3]");
    assert_result("rest([1])", "[]");
    assert_result("rest([])", "null");
}

#[test]
fn builtin_functions() {
    assert_result("len(\"\")", "0");
    assert_result("len(\"hello world\")", "11");
    assert_result("len([])", "0");
    assert_result("len([1, 2, 3])", "3");
    assert_result("first([1, 2, 3])", "1");
    assert_result("first([])", "null");
    assert_result("last([1, 2, 3])", "3");
    assert_result("last([])", "null");
    assert_result("push([], 1)", "[1]");
    assert_result("puts(\"lines\", 1)", "null");
}

#[test]
fn every_builtin_name_resolves() {
    use quill::interpreter::evaluator::builtin::{BUILTIN_NAMES, lookup};

    for name in BUILTIN_NAMES {
        assert!(lookup(name).is_some(), "builtin missing: {name}");
    }

    assert!(lookup("missing").is_none());
}

#[test]
fn builtin_errors() {
    assert_result("len(1)", "ERROR: argument to `len` not supported, got INTEGER");
    assert_result("len(\"one\", \"two\")", "ERROR: wrong number of arguments. got=2, want=1");
    assert_result("first(1)", "ERROR: argument to `first` must be ARRAY, got INTEGER");
    assert_result("last(1)", "ERROR: argument to `last` must be ARRAY, got INTEGER");
    assert_result("rest(1)", "ERROR: argument to `rest` must be ARRAY, got INTEGER");
    assert_result("push(1, 1)", "ERROR: argument to `push` must be ARRAY, got INTEGER");
    assert_result("puts()", "null");
}

#[test]
fn hashes() {
    assert_result("{\"a\": 1}", "{a: 1}");
    assert_result("{1: \"one\"}[1]", "one");
    assert_result("{true: 10}[true]", "10");
    assert_result("{\"a\": 1}[\"b\"]", "null");
    assert_result("{}[\"a\"]", "null");
    assert_result("{\"a\": 1, \"a\": 2}[\"a\"]", "2");
    assert_result("let key = \"k\"; {key: 5}[\"k\"]", "5");
    assert_result("let h = {\"count\": 1 + 1}; h[\"co\" + \"unt\"]", "2");
}

#[test]
fn runtime_errors_short_circuit() {
    assert_result("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_result("-true", "ERROR: unknown operator: -BOOLEAN");
    assert_result("true + false", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("5; true + false; 5", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("if (10 > 1) { true + false; }", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("1 && 2", "ERROR: unknown operator: INTEGER && INTEGER");
    assert_result("5 && true", "ERROR: type mismatch: INTEGER && BOOLEAN");
    assert_result("[1, 2][fn(x) { x }]", "ERROR: index operator not supported: ARRAY");
    assert_result("5[0]", "ERROR: index operator not supported: INTEGER");
    assert_result("5(1)", "ERROR: not a function: INTEGER");
    assert_result("{\"name\": \"quill\"}[fn(x) { x }]", "ERROR: unusable as hash key: FUNCTION");
    assert_result("{fn(x) { x }: 1}", "ERROR: unusable as hash key: FUNCTION");
}

#[test]
fn valueless_statements_produce_no_result() {
    assert!(run("let a = 1;").unwrap().is_none());
    assert!(run("").unwrap().is_none());
    assert_eq!(eval_display("let a = 1; a"), "1");
}

#[test]
fn parse_failures_are_reported_before_evaluation() {
    let error = run("let x 5").unwrap_err();
    assert!(error.to_string().starts_with("expectPeek: wrong peek token type."),
            "error: {error}");
}

#[test]
fn environment_persists_across_runs() {
    let env = Rc::new(RefCell::new(Environment::new()));

    run_with_env("let counter = fn(x) { if (x > 100) { x } else { counter(x + 1) } }",
                 &env).unwrap();
    let result = run_with_env("counter(0)", &env).unwrap();

    assert_eq!(result.unwrap().to_string(), "101");
}
