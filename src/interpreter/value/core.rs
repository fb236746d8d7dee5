use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::value::{
        environment::Environment,
        hash_key::{HashKey, HashPair, fnv1a},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and collections. Aggregate variants share
/// their payload through `Rc`, so cloning a value is cheap and the built-ins
/// that "modify" arrays allocate fresh ones instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`). Carries no other state, so
    /// comparison by discriminant is identity comparison.
    Boolean(bool),
    /// An immutable string value.
    String(Rc<str>),
    /// The absence of a value. Falsy, like `Boolean(false)`.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A mapping from hashable keys to values. Each entry keeps the original
    /// key value alongside the stored value.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A built-in function implemented natively.
    Builtin(Builtin),
}

/// A closure: parameter names, a body, and the environment the function
/// literal was evaluated in. Calls extend the captured environment, not the
/// caller's.
pub struct Function {
    /// The parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment.
    pub env:        Rc<RefCell<Environment>>,
}

// A closure and its captured environment can reach each other (recursive
// bindings), so the derived impl would not terminate.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// A built-in function: its name and the native implementation.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the built-in is looked up under.
    pub name: &'static str,
    /// The native implementation.
    pub func: fn(Vec<Value>) -> Result<Value, RuntimeError>,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the short type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(5).type_tag(), "INTEGER");
    /// assert_eq!(Value::Null.type_tag(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `Boolean(false)` and `Null` are falsy; every other value is
    /// truthy, including `0` and the empty string.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Derives the value's [`HashKey`], when the value is hashable.
    ///
    /// Only integers, booleans, and strings are hashable; all other variants
    /// return `None`. Values with the same type and semantic equality produce
    /// identical keys.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let a = Value::String("name".into());
    /// let b = Value::String("name".into());
    ///
    /// assert_eq!(a.hash_key(), b.hash_key());
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey { type_tag: self.type_tag(),
                                                   hash:     *value as u64, }),
            Self::Boolean(value) => Some(HashKey { type_tag: self.type_tag(),
                                                   hash:     u64::from(*value), }),
            Self::String(value) => Some(HashKey { type_tag: self.type_tag(),
                                                  hash:     fnv1a(value.as_bytes()), }),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
