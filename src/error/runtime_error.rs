#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered message strings are part of the language's observable
/// behavior and are exercised by the integration tests.
pub enum RuntimeError {
    /// A name was neither bound in any environment frame nor a built-in.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator symbol (`!` or `-`).
        operator: &'static str,
        /// The type tag of the operand.
        right:    &'static str,
    },
    /// An infix operator was applied to same-typed operands it does not
    /// support.
    UnknownInfixOperator {
        /// The type tag of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: &'static str,
        /// The type tag of the right operand.
        right:    &'static str,
    },
    /// An infix operator was applied to operands of differing types.
    TypeMismatch {
        /// The type tag of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: &'static str,
        /// The type tag of the right operand.
        right:    &'static str,
    },
    /// A call expression's callee evaluated to a non-callable value.
    NotAFunction {
        /// The type tag of the callee.
        type_tag: &'static str,
    },
    /// The index operator was applied to a value that supports no indexing.
    IndexNotSupported {
        /// The type tag of the indexed value.
        type_tag: &'static str,
    },
    /// A value that cannot produce a `HashKey` was used as a hash key.
    UnusableHashKey {
        /// The type tag of the offending key.
        type_tag: &'static str,
    },
    /// A built-in function received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many arguments the built-in requires.
        want: usize,
    },
    /// A built-in function received an argument of an unsupported type.
    UnsupportedArgument {
        /// The built-in's name.
        function: &'static str,
        /// The type tag of the offending argument.
        type_tag: &'static str,
    },
    /// A built-in function required an argument of a specific type.
    WrongArgumentType {
        /// The built-in's name.
        function: &'static str,
        /// The type tag the built-in requires.
        expected: &'static str,
        /// The type tag of the offending argument.
        got:      &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },

            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },

            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },

            Self::NotAFunction { type_tag } => write!(f, "not a function: {type_tag}"),

            Self::IndexNotSupported { type_tag } => {
                write!(f, "index operator not supported: {type_tag}")
            },

            Self::UnusableHashKey { type_tag } => {
                write!(f, "unusable as hash key: {type_tag}")
            },

            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::UnsupportedArgument { function, type_tag } => {
                write!(f, "argument to `{function}` not supported, got {type_tag}")
            },

            Self::WrongArgumentType { function,
                                      expected,
                                      got, } => {
                write!(f, "argument to `{function}` must be {expected}, got {got}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
