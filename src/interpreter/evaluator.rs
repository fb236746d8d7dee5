/// Core evaluation logic.
///
/// Contains the expression dispatch, program/block/statement evaluation,
/// and the control type that carries `return` values and runtime failures
/// through the call stack.
pub mod core;

/// Unary operator evaluation.
///
/// Implements logical NOT (with the language's truthiness rules) and
/// arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements all binary operations, dispatched on the operand type pair:
/// integer arithmetic and comparison, string concatenation, and boolean
/// logic.
pub mod binary;

/// Indexing and hash construction.
///
/// Implements array and hash indexing as well as hash literal evaluation,
/// including the hashable-key checks.
pub mod index;

/// Function application.
///
/// Handles calls of user-defined closures (environment extension,
/// positional parameter binding, return unwrapping) and of built-ins.
pub mod function;

/// Built-in functions.
///
/// The fixed name-to-builtin table and the native implementations of
/// `len`, `first`, `last`, `rest`, `push`, and `puts`.
pub mod builtin;
