use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::core::{Builtin, Value},
};

/// The names of all built-in functions.
pub const BUILTIN_NAMES: &[&str] = &["len", "first", "last", "rest", "push", "puts"];

/// Looks up a built-in by name.
///
/// Identifier resolution consults this table only after the environment
/// chain misses, so user bindings can shadow built-ins.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    let builtin = match name {
        "len" => Builtin { name: "len", func: len },
        "first" => Builtin { name: "first", func: first },
        "last" => Builtin { name: "last", func: last },
        "rest" => Builtin { name: "rest", func: rest },
        "push" => Builtin { name: "push", func: push },
        "puts" => Builtin { name: "puts", func: puts },
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}

/// Checks that the argument list has exactly the expected length.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::builtin::check_arity, value::core::Value};
///
/// let args = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity(&args, 2).is_ok());
/// assert!(check_arity(&args, 1).is_err());
/// ```
pub const fn check_arity(args: &[Value], want: usize) -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}

/// The length of a string (in bytes) or of an array (in elements).
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::builtin::len, value::core::Value};
///
/// let result = len(vec![Value::String("hello".into())]).unwrap();
/// assert_eq!(result.to_string(), "5");
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn len(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::String(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        value => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         type_tag: value.type_tag(), }),
    }
}

/// The first element of an array, or `Null` when it is empty.
pub fn first(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        value => Err(RuntimeError::WrongArgumentType { function: "first",
                                                       expected: "ARRAY",
                                                       got:      value.type_tag(), }),
    }
}

/// The last element of an array, or `Null` when it is empty.
pub fn last(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        value => Err(RuntimeError::WrongArgumentType { function: "last",
                                                       expected: "ARRAY",
                                                       got:      value.type_tag(), }),
    }
}

/// A new array holding everything after the first element, or `Null` for an
/// empty array. The input array is never modified.
pub fn rest(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::Null);
            }

            Ok(Value::Array(Rc::new(elements[1..].to_vec())))
        },
        value => Err(RuntimeError::WrongArgumentType { function: "rest",
                                                       expected: "ARRAY",
                                                       got:      value.type_tag(), }),
    }
}

/// A new array with the given value appended. The input array is never
/// modified.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use quill::interpreter::{evaluator::builtin::push, value::core::Value};
///
/// let array = Value::Array(Rc::new(vec![Value::Integer(1)]));
///
/// let result = push(vec![array.clone(), Value::Integer(2)]).unwrap();
/// assert_eq!(result.to_string(), "[1, 2]");
/// assert_eq!(array.to_string(), "[1]");
/// ```
pub fn push(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity(&args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut appended = elements.as_ref().clone();
            appended.push(args[1].clone());

            Ok(Value::Array(Rc::new(appended)))
        },
        value => Err(RuntimeError::WrongArgumentType { function: "push",
                                                       expected: "ARRAY",
                                                       got:      value.type_tag(), }),
    }
}

/// Prints each argument's display form on its own line and returns `Null`.
#[allow(clippy::unnecessary_wraps)]
pub fn puts(args: Vec<Value>) -> Result<Value, RuntimeError> {
    for value in &args {
        println!("{value}");
    }

    Ok(Value::Null)
}
