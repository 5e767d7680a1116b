//! User-defined functions and methods: a declaration plus the environment it
//! closed over.
//!
//! Statement execution belongs to the evaluator, which hands its compiled body
//! to the object model through the [`FunctionBody`] trait. This module only
//! sets up the scopes a body runs in and interprets how it finished.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};

use crate::environment::Environment;
use crate::error::{IResult, InterpretError, Result};
use crate::instance::LoxInstance;
use crate::token::Token;
use crate::value::Value;

/// Name bound to the receiver inside a method.
pub const THIS: &str = "this";

/// Name of the method a class runs when it is called.
pub const INITIALIZER: &str = "init";

/// Executable body of a function, supplied by the evaluator.
///
/// `execute` runs with `env` already holding the parameters. A body finishes
/// by returning `Ok(())` (falls off the end) or
/// `Err(InterpretError::ReturnSignal(value))` (explicit `return`).
pub trait FunctionBody {
    fn execute(&self, env: &Rc<RefCell<Environment>>) -> IResult<()>;
}

/// A `fun` or method declaration as produced by the parser.
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Box<dyn FunctionBody>,
}

impl FunctionDecl {
    pub fn new(name: Token, params: Vec<Token>, body: Box<dyn FunctionBody>) -> Self {
        Self { name, params, body }
    }
}

impl fmt::Debug for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDecl")
            .field("name", &self.name.lexeme)
            .field("params", &self.params.len())
            .finish_non_exhaustive()
    }
}

/// A closure: declaration + captured environment.
#[derive(Clone)]
pub struct LoxFunction {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
    is_initializer: bool,
}

impl LoxFunction {
    pub fn new(
        declaration: Rc<FunctionDecl>,
        closure: Rc<RefCell<Environment>>,
        is_initializer: bool,
    ) -> Self {
        debug!(
            "Creating function '{}' (initializer: {})",
            declaration.name.lexeme, is_initializer
        );

        Self {
            declaration,
            closure,
            is_initializer,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    pub fn is_initializer(&self) -> bool {
        self.is_initializer
    }

    pub fn closure(&self) -> &Rc<RefCell<Environment>> {
        &self.closure
    }

    /// Returns a copy of this function whose closure is a fresh child scope
    /// holding `this → instance`. `self` is left untouched, and the new scope
    /// still encloses the original closure, so captured outer variables stay
    /// shared between the two.
    pub fn bind(&self, instance: &Rc<LoxInstance>) -> LoxFunction {
        debug!("Binding method '{}' to {}", self.name(), instance);

        let mut environment = Environment::with_enclosing(self.closure.clone());
        environment.define(THIS, Value::Instance(instance.clone()));

        LoxFunction {
            declaration: self.declaration.clone(),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }

    /// Runs the body with `arguments` bound to the parameters.
    ///
    /// Arity is checked by the caller (see [`crate::callable::call_value`]).
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        debug!("Calling user-defined function '{}'", self.name());

        let mut environment = Environment::with_enclosing(self.closure.clone());
        for (param, arg_val) in self.declaration.params.iter().zip(arguments.iter()) {
            environment.define(&param.lexeme, arg_val.clone());
        }
        let environment = Rc::new(RefCell::new(environment));

        let returned = match self.declaration.body.execute(&environment) {
            Ok(()) => Value::Nil,
            Err(InterpretError::ReturnSignal(val)) => val,
            Err(InterpretError::RuntimeError(e)) => return Err(e),
        };

        if self.is_initializer {
            // `init` always yields the receiver, whatever the body returned.
            return self
                .closure
                .borrow()
                .get(THIS, self.declaration.name.line);
        }

        info!("Function '{}' returned: {}", self.name(), returned);
        Ok(returned)
    }
}

impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxFunction")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("is_initializer", &self.is_initializer)
            .finish()
    }
}

impl fmt::Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}
