use std::rc::Rc;

use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies a binary operator to two already evaluated operands.
///
/// Dispatch follows the operand type pair: integer/integer,
/// string/string, and boolean/boolean each have their own operator set.
/// Operands of differing types are a `type mismatch`; a matching pair with
/// no operator set is an `unknown operator`.
pub fn eval_binary_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value)
                      -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary_op(op, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_binary_op(op, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_binary_op(op, *l, *r),
        _ if left.type_tag() != right.type_tag() => {
            Err(RuntimeError::TypeMismatch { left:     left.type_tag(),
                                             operator: op.symbol(),
                                             right:    right.type_tag(), })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_tag(),
                                                      operator: op.symbol(),
                                                      right:    right.type_tag(), }),
    }
}

/// Integer arithmetic and comparison.
///
/// Division truncates toward zero; division by zero is left to the native
/// `i64` semantics.
pub fn eval_integer_binary_op(op: BinaryOperator,
                              left: i64,
                              right: i64)
                              -> Result<Value, RuntimeError> {
    match op {
        BinaryOperator::Add => Ok(Value::Integer(left + right)),
        BinaryOperator::Sub => Ok(Value::Integer(left - right)),
        BinaryOperator::Mul => Ok(Value::Integer(left * right)),
        BinaryOperator::Div => Ok(Value::Integer(left / right)),
        BinaryOperator::Less => Ok(Value::Boolean(left < right)),
        BinaryOperator::Greater => Ok(Value::Boolean(left > right)),
        BinaryOperator::Equal => Ok(Value::Boolean(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(left != right)),
        BinaryOperator::And | BinaryOperator::Or => {
            Err(RuntimeError::UnknownInfixOperator { left:     "INTEGER",
                                                     operator: op.symbol(),
                                                     right:    "INTEGER", })
        },
    }
}

/// String operations; only concatenation is defined.
pub fn eval_string_binary_op(op: BinaryOperator,
                             left: &str,
                             right: &str)
                             -> Result<Value, RuntimeError> {
    match op {
        BinaryOperator::Add => Ok(Value::String(Rc::from(format!("{left}{right}")))),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: op.symbol(),
                                                      right:    "STRING", }),
    }
}

/// Boolean equality and logic.
///
/// Both operands were already evaluated by the caller, so `&&` and `||`
/// do not short-circuit; this is observable and part of the language.
pub fn eval_boolean_binary_op(op: BinaryOperator,
                              left: bool,
                              right: bool)
                              -> Result<Value, RuntimeError> {
    match op {
        BinaryOperator::Equal => Ok(Value::Boolean(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(left != right)),
        BinaryOperator::And => Ok(Value::Boolean(left && right)),
        BinaryOperator::Or => Ok(Value::Boolean(left || right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "BOOLEAN",
                                                      operator: op.symbol(),
                                                      right:    "BOOLEAN", }),
    }
}
