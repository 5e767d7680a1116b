use std::rc::Rc;

use log::{debug, info};

use crate::class::LoxClass;
use crate::error::{LoxError, Result};
use crate::function::LoxFunction;
use crate::token::Token;
use crate::value::Value;

/// Anything the evaluator can apply to a list of arguments.
pub trait Callable {
    fn arity(&self) -> usize;
    fn call(&self, arguments: &[Value]) -> Result<Value>;
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        LoxFunction::arity(self)
    }

    fn call(&self, arguments: &[Value]) -> Result<Value> {
        LoxFunction::call(self, arguments)
    }
}

impl Callable for Rc<LoxClass> {
    fn arity(&self) -> usize {
        LoxClass::arity(self)
    }

    fn call(&self, arguments: &[Value]) -> Result<Value> {
        self.instantiate(arguments)
    }
}

fn checked_call<C: Callable + ?Sized>(
    callee: &C,
    paren: &Token,
    arguments: &[Value],
) -> Result<Value> {
    if arguments.len() != callee.arity() {
        return Err(LoxError::arity(paren.line, callee.arity(), arguments.len()));
    }
    callee.call(arguments)
}

/// Invokes a callable value (native function, closure or class).
pub fn call_value(callee: &Value, paren: &Token, arguments: &[Value]) -> Result<Value> {
    match callee {
        Value::NativeFunction { name, arity, func } => {
            debug!("Calling native function '{}'", name);
            if arguments.len() != *arity {
                return Err(LoxError::arity(paren.line, *arity, arguments.len()));
            }
            let result = func(arguments).map_err(|msg| LoxError::runtime(paren.line, msg))?;
            info!("Native function '{}' returned: {}", name, result);
            Ok(result)
        }

        Value::Function(function) => checked_call(function.as_ref(), paren, arguments),

        Value::Class(class) => {
            debug!("Constructing instance of '{}'", class.name());
            checked_call(class, paren, arguments)
        }

        _ => {
            debug!("Error: {} is not callable", callee);
            Err(LoxError::NotCallable { line: paren.line })
        }
    }
}
