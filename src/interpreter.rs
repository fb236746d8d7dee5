/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, applies operator
/// and call semantics, manages the environment chain, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions recursively.
/// - Captures closures and binds call arguments.
/// - Propagates `return` values and runtime errors to the right boundary.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an integer,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal,
///   and source position.
/// - Handles string literals, identifiers, keywords, and operators.
/// - Surfaces invalid input as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using top-down operator precedence (Pratt) parsing.
/// Parsing is best-effort: errors accumulate while the parser skips ahead,
/// so one pass can report several problems.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces the grammar, recording errors with source positions.
/// - Resolves operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value variants used during execution, the
/// hashable-key contract for hash maps, and the environment chain that
/// gives the language lexical scope and closures.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Derives `HashKey` digests for hashable values.
/// - Provides the scoped, closure-capturing `Environment`.
pub mod value;
