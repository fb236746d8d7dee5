use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, function, index, unary},
        value::{
            core::{Function, Value},
            environment::Environment,
        },
    },
};

/// Non-local control flow carried through the evaluator as the error arm of
/// a `Result`.
///
/// A `return` statement and a runtime failure behave identically inside a
/// block: both bubble out of every enclosing statement untouched. They part
/// ways at the boundaries, where a function call unwraps `Return` into a
/// plain value and a program unwraps both.
#[derive(Debug)]
pub enum Control {
    /// An unwinding `return`, carrying the returned value.
    Return(Value),
    /// A runtime failure, carrying the error.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Control {
    fn from(error: RuntimeError) -> Self {
        Self::Failure(error)
    }
}

/// Result type used by the evaluator.
///
/// Evaluation functions return either a value of type `T` or a [`Control`]
/// describing why evaluation stopped early.
pub type EvalResult<T> = Result<T, Control>;

/// Evaluates a whole program against the given environment.
///
/// Statements run in order. A `return` stops the program and yields the
/// returned value; a failure stops the program and yields the error.
/// Otherwise the result is the last statement's value, or `None` when that
/// statement produces no value (a `let`), which the REPL renders as no
/// output.
///
/// # Errors
/// Returns the first [`RuntimeError`] any statement produces.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use quill::interpreter::{
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::environment::Environment,
/// };
///
/// let mut parser = Parser::new(Lexer::new("let x = 2; x * 3"));
/// let program = parser.parse_program();
/// let env = Rc::new(RefCell::new(Environment::new()));
///
/// let result = eval_program(&program, &env).unwrap();
/// assert_eq!(result.unwrap().to_string(), "6");
/// ```
pub fn eval_program(program: &Program,
                    env: &Rc<RefCell<Environment>>)
                    -> Result<Option<Value>, RuntimeError> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Control::Return(value)) => return Ok(Some(value)),
            Err(Control::Failure(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds its value in the passed environment and produces no value;
/// `return` raises [`Control::Return`]; an expression statement produces
/// the expression's value.
pub fn eval_statement(statement: &Statement,
                      env: &Rc<RefCell<Environment>>)
                      -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name, value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Err(Control::Return(value))
        },
        Statement::Expression { expr, .. } => Ok(Some(eval_expression(expr, env)?)),
    }
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a block never unwraps [`Control::Return`]: the
/// `?` lets it bubble so the enclosing function call (or program) stops the
/// correct scope. Blocks share the passed environment; only function calls
/// introduce new frames.
pub fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates an expression to a value.
///
/// This is the heart of the tree walk: a single exhaustive match over the
/// expression union, recursing for operands and delegating the operator,
/// index, and call semantics to their modules.
pub fn eval_expression(expr: &Expr, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::String(Rc::from(value.as_str()))),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),
        Expr::Identifier { name, .. } => eval_identifier(name, env),
        Expr::UnaryOp { op, right, .. } => {
            let right = eval_expression(right, env)?;
            Ok(unary::eval_unary_op(*op, &right)?)
        },
        Expr::BinaryOp { left, op, right, .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(binary::eval_binary_op(*op, &left, &right)?)
        },
        Expr::IfExpr { condition,
                       consequence,
                       alternative,
                       .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::FunctionCall { function, arguments, .. } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::apply_function(&callee, arguments)
        },
        Expr::ArrayLiteral { elements, .. } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::HashLiteral { pairs, .. } => index::eval_hash_literal(pairs, env),
        Expr::Index { collection, index, .. } => {
            let collection = eval_expression(collection, env)?;
            let index = eval_expression(index, env)?;
            Ok(index::eval_index_expression(&collection, &index)?)
        },
    }
}

/// Resolves an identifier: environment chain first, then the built-in
/// table.
pub fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(value) = builtin::lookup(name) {
        return Ok(value);
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() }.into())
}

/// Evaluates an `if` expression.
///
/// A truthy condition selects the consequence, otherwise the alternative
/// when present, otherwise `Null`. A taken branch whose last statement
/// produces no value also yields `Null`.
pub fn eval_if_expression(condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          env: &Rc<RefCell<Environment>>)
                          -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        Ok(eval_block(consequence, env)?.unwrap_or(Value::Null))
    } else if let Some(alternative) = alternative {
        Ok(eval_block(alternative, env)?.unwrap_or(Value::Null))
    } else {
        Ok(Value::Null)
    }
}

/// Evaluates a list of expressions left to right, stopping at the first
/// failure. Used for call arguments and array elements.
pub fn eval_expressions(exprs: &[Expr], env: &Rc<RefCell<Environment>>) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}
