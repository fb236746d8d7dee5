//! # quill
//!
//! quill is a small, dynamically-typed, expression-oriented scripting
//! language. Source text is tokenized, parsed into a tree with a Pratt
//! parser, and evaluated by a tree-walking interpreter against a
//! lexically-scoped, closure-capturing environment chain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::{core::Value, environment::Environment},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator; its `Display` forms are the
/// fully-parenthesized strings shown by the REPL.
///
/// # Responsibilities
/// - Defines expression, statement, block, and program types.
/// - Attaches source positions to AST nodes for error reporting.
/// - Renders the canonical string form of every node.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors carry source positions; runtime errors
/// render to the stable message strings the language promises.
///
/// # Responsibilities
/// - Defines error enums for both failure taxonomies.
/// - Renders human-readable messages via `Display`.
/// - Integrates with standard error handling through `std::error::Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment chain to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the data types flowing between phases.
/// - Manages the flow of errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Drives the core over line-based input with a persistent top-level
/// environment, echoing tokens, the parsed tree, and results.
pub mod repl;

/// Parses and evaluates a source string in a fresh environment.
///
/// Returns the final value of the program, or `None` when the last
/// statement produces no value (for instance a bare `let`).
///
/// # Errors
/// Returns the first parse error when the source does not parse, or the
/// runtime error that stopped evaluation.
///
/// # Examples
/// ```
/// use quill::run;
///
/// let result = run("let answer = 6 * 7; answer").unwrap();
/// assert_eq!(result.unwrap().to_string(), "42");
///
/// // 'x' is not defined, so evaluation fails.
/// let result = run("let y = x + 1");
/// assert!(result.is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let env = Rc::new(RefCell::new(Environment::new()));

    run_with_env(source, &env)
}

/// Parses and evaluates a source string against a caller-owned
/// environment.
///
/// The REPL and script mode use this to keep bindings alive across
/// inputs; [`run`] is the one-shot variant.
///
/// # Errors
/// Returns the first parse error when the source does not parse, or the
/// runtime error that stopped evaluation.
///
/// # Examples
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use quill::{interpreter::value::environment::Environment, run_with_env};
///
/// let env = Rc::new(RefCell::new(Environment::new()));
///
/// run_with_env("let base = 10", &env).unwrap();
/// let result = run_with_env("base + 5", &env).unwrap();
///
/// assert_eq!(result.unwrap().to_string(), "15");
/// ```
pub fn run_with_env(source: &str,
                    env: &Rc<RefCell<Environment>>)
                    -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    Ok(eval_program(&program, env)?)
}
