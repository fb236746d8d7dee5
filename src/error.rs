/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code. Parse
/// errors include unexpected tokens, missing prefix parse functions, and
/// invalid integer literals. Each error carries the source position of the
/// offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, type mismatches, unsupported
/// operators, and built-in argument violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
