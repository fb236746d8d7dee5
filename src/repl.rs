//! The interactive read-eval-print loop.
//!
//! Reads one line at a time, echoes the token stream and the parsed
//! program's string form, and prints the evaluated result. A single
//! top-level environment persists across inputs, so bindings from earlier
//! lines stay visible.

use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
        value::environment::Environment,
    },
};

/// The input prompt.
pub const PROMPT: &str = "> ";

/// Runs the REPL until the input reaches end of file.
///
/// Each line is tokenized and echoed, parsed and echoed, then evaluated.
/// Parse errors are listed behind a banner and skip evaluation; runtime
/// failures print as `ERROR: <message>`. Statements that produce no value
/// (a bare `let`) print nothing.
///
/// # Errors
/// Returns any I/O error from the input or output handles.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        print_tokens(&line, &mut output)?;

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(parser.errors(), &mut output)?;
            continue;
        }

        writeln!(output, "{program}")?;

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}

fn print_tokens(line: &str, output: &mut impl Write) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return Ok(());
        }

        writeln!(output, "{token}")?;
    }
}

fn print_parse_errors(errors: &[ParseError], output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Whoops! Parsing failed.")?;
    writeln!(output, "parser errors:")?;

    for error in errors {
        writeln!(output, "\t{error}")?;
    }

    Ok(())
}
