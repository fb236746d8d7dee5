/// Core parsing machinery.
///
/// Contains the `Parser` state (current and peek tokens, accumulated
/// errors), the precedence ladder, and the Pratt expression loop.
pub mod core;

/// Expression parsing.
///
/// Implements the prefix and infix parse functions: literals, identifiers,
/// operator applications, conditionals, function literals, calls,
/// collections, and indexing.
pub mod expression;

/// Statement parsing.
///
/// Implements the program loop and the `let`, `return`, expression, and
/// block statement forms.
pub mod statement;
