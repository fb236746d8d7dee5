use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use quill::repl;

/// quill is a small, dynamically-typed, expression-oriented scripting
/// language with first-class functions, arrays, and hash maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a script file instead of starting the interactive session.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_script(&path),
        None => run_repl(),
    }
}

fn run_script(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        std::process::exit(1);
    });

    match quill::run(&source) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn run_repl() {
    let user = username().unwrap_or_else(|| {
        eprintln!("Failed to resolve the current user.");
        std::process::exit(1);
    });

    println!("Hello {user}! This is the quill programming language.");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = repl::start(stdin.lock(), stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn username() -> Option<String> {
    std::env::var("USER").or_else(|_| std::env::var("USERNAME")).ok()
}
