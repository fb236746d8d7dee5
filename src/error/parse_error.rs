use crate::interpreter::lexer::{Position, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The token following the current one did not have the expected kind.
    UnexpectedPeek {
        /// The token kind the parser required at this point.
        expected: TokenKind,
        /// The token kind that was actually found.
        got:      TokenKind,
        /// The source position of the offending token.
        position: Position,
    },
    /// No expression can begin with the current token.
    NoPrefixParseFunction {
        /// The token kind that cannot start an expression.
        kind:     TokenKind,
        /// The source position of the offending token.
        position: Position,
    },
    /// An integer literal did not fit into a signed 64-bit integer.
    InvalidIntegerLiteral {
        /// The literal text as it appeared in the source.
        literal:  String,
        /// The source position of the literal.
        position: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedPeek { expected,
                                   got,
                                   position, } => {
                write!(f,
                       "expectPeek: wrong peek token type. expected={expected}, got={got} ({position})")
            },

            Self::NoPrefixParseFunction { kind, position } => {
                write!(f, "found no prefix parse function for {kind} ({position})")
            },

            Self::InvalidIntegerLiteral { literal, position } => {
                write!(f, "could not parse {literal} as integer ({position})")
            },
        }
    }
}

impl std::error::Error for ParseError {}
