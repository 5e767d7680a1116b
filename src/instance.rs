use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};

use crate::class::LoxClass;
use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;

/// A runtime object: its class plus the fields assigned so far.
///
/// Always handled as `Rc<LoxInstance>`; the fields sit behind a `RefCell` so
/// every holder of the handle (variables, bound methods) sees the same state.
pub struct LoxInstance {
    class: Rc<LoxClass>,
    fields: RefCell<HashMap<String, Value>>,
}

impl LoxInstance {
    pub fn new(class: Rc<LoxClass>) -> Rc<Self> {
        info!("Creating instance of '{}'", class.name());

        Rc::new(Self {
            class,
            fields: RefCell::new(HashMap::new()),
        })
    }

    pub fn class(&self) -> &Rc<LoxClass> {
        &self.class
    }

    /// Reads a property: a field if one is set, otherwise a method bound to
    /// this instance. Methods are rebound on every read.
    pub fn get(self: &Rc<Self>, name: &Token) -> Result<Value> {
        if let Some(value) = self.fields.borrow().get(&name.lexeme) {
            debug!("Field '{}' hit: {}", name.lexeme, value);
            return Ok(value.clone());
        }

        if let Some(method) = self.class.find_method(&name.lexeme) {
            return Ok(Value::Function(Rc::new(method.bind(self))));
        }

        Err(LoxError::undefined_property(name.line, name.lexeme.as_str()))
    }

    /// Creates or overwrites a field. Never consults the class.
    pub fn set(&self, name: &Token, value: Value) {
        debug!("Setting field '{}' = {}", name.lexeme, value);
        self.fields.borrow_mut().insert(name.lexeme.clone(), value);
    }

    /// Names of the fields currently set, sorted.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl PartialEq for LoxInstance {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for LoxInstance {
    // Fields may hold methods bound back to this instance, so only names are
    // printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxInstance")
            .field("class", &self.class.name())
            .field("fields", &self.field_names())
            .finish()
    }
}

impl fmt::Display for LoxInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.name())
    }
}
