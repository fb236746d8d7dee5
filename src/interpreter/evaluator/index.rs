use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{
            core::Value,
            environment::Environment,
            hash_key::{HashKey, HashPair},
        },
    },
};

/// Applies the index operator to already evaluated operands.
///
/// Arrays accept integer indexes; hashes accept any hashable key. Anything
/// else, including an array indexed with a non-integer, is
/// `index operator not supported`.
pub fn eval_index_expression(collection: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(index)) => Ok(eval_array_index(elements, *index)),
        (Value::Hash(pairs), key) => eval_hash_index(pairs, key),
        _ => Err(RuntimeError::IndexNotSupported { type_tag: collection.type_tag(), }),
    }
}

/// Array indexing. Out-of-range indexes (negative or past the end) yield
/// `Null` rather than an error.
#[must_use]
pub fn eval_array_index(elements: &[Value], index: i64) -> Value {
    usize::try_from(index).ok()
                          .and_then(|index| elements.get(index))
                          .cloned()
                          .unwrap_or(Value::Null)
}

/// Hash indexing. A non-hashable key is an error; a missing key yields
/// `Null`.
pub fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>,
                       key: &Value)
                       -> Result<Value, RuntimeError> {
    let hash_key = key.hash_key()
                      .ok_or(RuntimeError::UnusableHashKey { type_tag: key.type_tag(), })?;

    Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
}

/// Evaluates a hash literal.
///
/// Each key is evaluated and checked for hashability before its value, and
/// pairs are processed in source order; a duplicate key overwrites the
/// earlier entry.
pub fn eval_hash_literal(pairs: &[(Expr, Expr)],
                         env: &Rc<RefCell<Environment>>)
                         -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { type_tag: key.type_tag(), })?;

        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}
