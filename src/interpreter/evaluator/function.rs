use std::{cell::RefCell, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Control, EvalResult, eval_block},
        value::{
            core::{Function, Value},
            environment::Environment,
        },
    },
};

/// Applies a callable value to already evaluated arguments.
///
/// A user-defined function runs its body in a fresh environment frame on
/// top of its *captured* environment (not the caller's) and unwraps a
/// top-level `return`; a body that produces no value yields `Null`.
/// Built-ins are invoked directly. Anything else is `not a function`.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let env = extend_function_env(function, arguments);

            match eval_block(&function.body, &env) {
                Ok(value) => Ok(value.unwrap_or(Value::Null)),
                Err(Control::Return(value)) => Ok(value),
                Err(failure) => Err(failure),
            }
        },
        Value::Builtin(builtin) => Ok((builtin.func)(arguments)?),
        _ => Err(RuntimeError::NotAFunction { type_tag: callee.type_tag(), }.into()),
    }
}

/// Builds the call frame: a new environment enclosed by the function's
/// captured one, with parameters bound to arguments positionally.
///
/// Pairing stops when either list runs out. Extra arguments are ignored;
/// missing ones leave their parameters unbound, which surfaces later as
/// `identifier not found` if the body reads them.
pub fn extend_function_env(function: &Function, arguments: Vec<Value>) -> Rc<RefCell<Environment>> {
    let mut env = Environment::enclosed(Rc::clone(&function.env));

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.set(parameter, argument);
    }

    Rc::new(RefCell::new(env))
}
