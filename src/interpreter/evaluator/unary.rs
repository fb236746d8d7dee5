use crate::{ast::UnaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies a unary operator to an already evaluated operand.
pub fn eval_unary_op(op: UnaryOperator, right: &Value) -> Result<Value, RuntimeError> {
    match op {
        UnaryOperator::Not => Ok(eval_not(right)),
        UnaryOperator::Negate => eval_negate(right),
    }
}

/// Logical NOT under the language's truthiness rules: `!true` is `false`,
/// `!false` and `!null` are `true`, and every other value negates to
/// `false` (so `!0` is `false`).
#[must_use]
pub const fn eval_not(right: &Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!*value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Arithmetic negation; defined for integers only.
pub fn eval_negate(right: &Value) -> Result<Value, RuntimeError> {
    match right {
        Value::Integer(value) => Ok(Value::Integer(-value)),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: UnaryOperator::Negate.symbol(),
                                                       right:    right.type_tag(), }),
    }
}
