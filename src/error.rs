//! Error hierarchy for the **Lox object model**.
//!
//! Property lookup, variable lookup and calls convert their failure modes
//! into one of the variants defined here, so the surrounding evaluator sees a
//! single `Result<T>` alias and can turn any of them into a runtime report.
//!
//! Non-local control flow (`return` out of a function body) travels on the
//! separate [`InterpretError`] type so it never leaks into user diagnostics.
//!
//! The module **does not** print diagnostics itself

use thiserror::Error;

use log::info;

use crate::value::Value;

/// Canonical error type used throughout the object model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// Property read that matched neither a field nor a method anywhere in
    /// the superclass chain.
    #[error("[line {line}] Error: Undefined property '{name}'.")]
    UndefinedProperty {
        /// Offending property name.
        name: String,

        /// 1‑based line of the property access.
        line: usize,
    },

    /// Variable lookup or assignment that exhausted the environment chain.
    #[error("[line {line}] Error: Undefined variable '{name}'.")]
    UndefinedVariable { name: String, line: usize },

    /// Callee invoked with the wrong number of arguments.
    #[error("[line {line}] Error: Expected {expected} arguments but got {got}.")]
    Arity {
        expected: usize,
        got: usize,
        line: usize,
    },

    /// Call on a value that is neither a function nor a class.
    #[error("[line {line}] Error: Can only call functions and classes.")]
    NotCallable { line: usize },

    /// Any other runtime failure raised by a function body.
    #[error("[line {line}] Error: {message}")]
    Runtime { message: String, line: usize },
}

impl LoxError {
    /// Helper constructor for failed property reads.
    pub fn undefined_property<S: Into<String>>(line: usize, name: S) -> Self {
        let name: String = name.into();

        info!("Creating UndefinedProperty error: line={}, name={}", line, name);

        LoxError::UndefinedProperty { name, line }
    }

    /// Helper constructor for the **environment**.
    pub fn undefined_variable<S: Into<String>>(line: usize, name: S) -> Self {
        let name: String = name.into();

        info!("Creating UndefinedVariable error: line={}, name={}", line, name);

        LoxError::UndefinedVariable { name, line }
    }

    /// Helper constructor for call sites with a mismatched argument count.
    pub fn arity(line: usize, expected: usize, got: usize) -> Self {
        info!(
            "Creating Arity error: line={}, expected={}, got={}",
            line, expected, got
        );

        LoxError::Arity {
            expected,
            got,
            line,
        }
    }

    /// Helper constructor for errors raised from inside function bodies.
    pub fn runtime<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", line, message);

        LoxError::Runtime { message, line }
    }

    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            LoxError::UndefinedProperty { line, .. }
            | LoxError::UndefinedVariable { line, .. }
            | LoxError::Arity { line, .. }
            | LoxError::NotCallable { line }
            | LoxError::Runtime { line, .. } => *line,
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

/// Outcome of executing a function body: either a real error or the unwinding
/// `return` signal carrying the returned value.
#[derive(Error, Debug)]
pub enum InterpretError {
    #[error(transparent)]
    RuntimeError(#[from] LoxError),

    #[error("Return signal with value: {0}")]
    ReturnSignal(Value),
}

/// Convenient alias for function-body results.
pub type IResult<T> = std::result::Result<T, InterpretError>;
