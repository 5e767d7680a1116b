//! Scripted function bodies standing in for the evaluator.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rox_objects as lox;

use lox::environment::Environment;
use lox::error::{IResult, InterpretError, LoxError};
use lox::function::{FunctionBody, FunctionDecl, LoxFunction, INITIALIZER, THIS};
use lox::token::{Token, TokenType};
use lox::value::Value;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ident(name: &str) -> Token {
    Token::identifier(name, 1)
}

fn receiver(env: &Rc<RefCell<Environment>>) -> IResult<Rc<lox::instance::LoxInstance>> {
    match env.borrow().get(THIS, 1)? {
        Value::Instance(instance) => Ok(instance),
        other => Err(LoxError::runtime(1, format!("'this' is {}", other)).into()),
    }
}

/// `return this.<field>;`
pub struct ReturnField(pub &'static str);

impl FunctionBody for ReturnField {
    fn execute(&self, env: &Rc<RefCell<Environment>>) -> IResult<()> {
        let value = receiver(env)?.get(&ident(self.0))?;
        Err(InterpretError::ReturnSignal(value))
    }
}

/// `return <constant>;`
pub struct ReturnConst(pub Value);

impl FunctionBody for ReturnConst {
    fn execute(&self, _env: &Rc<RefCell<Environment>>) -> IResult<()> {
        Err(InterpretError::ReturnSignal(self.0.clone()))
    }
}

/// `return <variable>;`
pub struct ReturnVar(pub &'static str);

impl FunctionBody for ReturnVar {
    fn execute(&self, env: &Rc<RefCell<Environment>>) -> IResult<()> {
        let value = env.borrow().get(self.0, 1)?;
        Err(InterpretError::ReturnSignal(value))
    }
}

/// `this.<field> = <param>;` followed by an optional bare `return;`.
pub struct AssignField {
    pub field: &'static str,
    pub param: &'static str,
    pub early_return: bool,
}

impl FunctionBody for AssignField {
    fn execute(&self, env: &Rc<RefCell<Environment>>) -> IResult<()> {
        let value = env.borrow().get(self.param, 1)?;
        receiver(env)?.set(&ident(self.field), value);
        if self.early_return {
            return Err(InterpretError::ReturnSignal(Value::Nil));
        }
        Ok(())
    }
}

/// `<name> = <name> + 1;` on a captured variable.
pub struct Increment(pub &'static str);

impl FunctionBody for Increment {
    fn execute(&self, env: &Rc<RefCell<Environment>>) -> IResult<()> {
        let current = env.borrow().get(self.0, 1)?;
        let Value::Number(n) = current else {
            return Err(LoxError::runtime(1, "Operand must be a number.").into());
        };
        env.borrow_mut().assign(self.0, Value::Number(n + 1.0), 1)?;
        Ok(())
    }
}

/// Body that fails with a runtime error.
pub struct Fail(pub &'static str);

impl FunctionBody for Fail {
    fn execute(&self, _env: &Rc<RefCell<Environment>>) -> IResult<()> {
        Err(LoxError::runtime(7, self.0).into())
    }
}

pub fn global_env() -> Rc<RefCell<Environment>> {
    Rc::new(RefCell::new(Environment::new()))
}

/// Declares a function closing over `closure`. Methods named `init` become
/// initializers, as a class declaration evaluator would mark them.
pub fn function<B: FunctionBody + 'static>(
    name: &str,
    params: &[&str],
    body: B,
    closure: &Rc<RefCell<Environment>>,
) -> LoxFunction {
    let decl = FunctionDecl::new(
        Token::new(TokenType::IDENTIFIER, name, 1),
        params.iter().map(|p| ident(p)).collect(),
        Box::new(body),
    );
    LoxFunction::new(Rc::new(decl), closure.clone(), name == INITIALIZER)
}
