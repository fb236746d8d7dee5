use crate::interpreter::lexer::{Position, TokenKind};

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression shapes of the language, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls, collections, and indexing. Each variant records the source
/// position of the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// The referenced name.
        name:     String,
        /// Position of the identifier token.
        position: Position,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal's value.
        value:    i64,
        /// Position of the literal token.
        position: Position,
    },
    /// A string literal.
    StringLiteral {
        /// The literal's contents, without the delimiters.
        value:    String,
        /// Position of the literal token.
        position: Position,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal's value.
        value:    bool,
        /// Position of the literal token.
        position: Position,
    },
    /// A unary operation (`!x`, `-x`).
    UnaryOp {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        right:    Box<Expr>,
        /// Position of the operator token.
        position: Position,
    },
    /// A binary operation (arithmetic, comparison, or logic).
    BinaryOp {
        /// Left operand.
        left:     Box<Expr>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Expr>,
        /// Position of the operator token.
        position: Position,
    },
    /// Conditional expression with a mandatory consequence block and an
    /// optional alternative block.
    IfExpr {
        /// The condition expression.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, when present.
        alternative: Option<Block>,
        /// Position of the `if` token.
        position:    Position,
    },
    /// A function literal, `fn(params) { body }`.
    FunctionLiteral {
        /// The parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Position of the `fn` token.
        position:   Position,
    },
    /// A call expression; the callee is itself an expression.
    FunctionCall {
        /// The expression being called.
        function:  Box<Expr>,
        /// The argument expressions, in order.
        arguments: Vec<Expr>,
        /// Position of the `(` token.
        position:  Position,
    },
    /// An array literal, `[e, e]`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Expr>,
        /// Position of the `[` token.
        position: Position,
    },
    /// A hash literal, `{k: v, k: v}`. Pairs keep their source order.
    HashLiteral {
        /// The key/value expression pairs, in source order.
        pairs:    Vec<(Expr, Expr)>,
        /// Position of the `{` token.
        position: Position,
    },
    /// An indexing expression, `collection[index]`.
    Index {
        /// The expression being indexed.
        collection: Box<Expr>,
        /// The index expression.
        index:      Box<Expr>,
        /// Position of the `[` token.
        position:   Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Identifier { position, .. }
            | Self::IntegerLiteral { position, .. }
            | Self::StringLiteral { position, .. }
            | Self::BooleanLiteral { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::IfExpr { position, .. }
            | Self::FunctionLiteral { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::ArrayLiteral { position, .. }
            | Self::HashLiteral { position, .. }
            | Self::Index { position, .. } => *position,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding statement, `let <name> = <expr>;`.
    Let {
        /// The bound name.
        name:     String,
        /// The bound value.
        value:    Expr,
        /// Position of the `let` token.
        position: Position,
    },
    /// A return statement, `return <expr>;`.
    Return {
        /// The returned value.
        value:    Expr,
        /// Position of the `return` token.
        position: Position,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Position of the expression's first token.
        position: Position,
    },
}

/// A brace-delimited sequence of statements, as used by `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Position of the `{` token.
    pub position:   Position,
}

/// An ordered sequence of statements; the root of every parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The program's statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl UnaryOperator {
    /// The operator denoted by a token kind, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }

    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// The operator denoted by a token kind, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Lt => Some(Self::Less),
            TokenKind::Gt => Some(Self::Greater),
            TokenKind::Eq => Some(Self::Equal),
            TokenKind::NotEq => Some(Self::NotEqual),
            TokenKind::And => Some(Self::And),
            TokenKind::Or => Some(Self::Or),
            _ => None,
        }
    }

    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, right, .. } => write!(f, "({op}{right})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::IfExpr { condition,
                           consequence,
                           alternative,
                           .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::FunctionCall { function, arguments, .. } => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            },
            Self::Index { collection, index, .. } => write!(f, "({collection}[{index}])"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value}"),
            Self::Return { value, .. } => write!(f, "return {value}"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{statement}")?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
