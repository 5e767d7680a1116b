use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};

use crate::error::Result;
use crate::function::{LoxFunction, INITIALIZER};
use crate::instance::LoxInstance;
use crate::value::Value;

/// A class: name, optional superclass and method table.
///
/// Classes are immutable once built and shared through `Rc` by their
/// instances and subclasses.
#[derive(Debug)]
pub struct LoxClass {
    name: String,
    superclass: Option<Rc<LoxClass>>,
    methods: HashMap<String, Rc<LoxFunction>>,
}

impl LoxClass {
    /// Builds a class from its methods in declaration order. A name declared
    /// twice keeps the later method.
    pub fn new<S, I>(name: S, superclass: Option<Rc<LoxClass>>, methods: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = LoxFunction>,
    {
        let name: String = name.into();

        let mut table = HashMap::new();
        for method in methods {
            table.insert(method.name().to_string(), Rc::new(method));
        }

        info!(
            "Class '{}' created with {} method(s), superclass: {}",
            name,
            table.len(),
            superclass.as_ref().map_or("none", |s| s.name())
        );

        Self {
            name,
            superclass,
            methods: table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Rc<LoxClass>> {
        self.superclass.as_ref()
    }

    /// Looks `name` up in this class, then up the superclass chain.
    pub fn find_method(&self, name: &str) -> Option<Rc<LoxFunction>> {
        if let Some(method) = self.methods.get(name) {
            debug!("Method '{}' found on class '{}'", name, self.name);
            Some(method.clone())
        } else if let Some(superclass) = &self.superclass {
            debug!(
                "Method '{}' not on '{}', ascending to '{}'",
                name, self.name, superclass.name
            );
            superclass.find_method(name)
        } else {
            None
        }
    }

    /// Number of arguments a call to the class takes: that of `init`, if any.
    pub fn arity(&self) -> usize {
        self.find_method(INITIALIZER)
            .map_or(0, |initializer| initializer.arity())
    }

    /// Creates a new instance and runs `init` on it when the class has one.
    pub fn instantiate(self: &Rc<Self>, arguments: &[Value]) -> Result<Value> {
        let instance = LoxInstance::new(self.clone());

        if let Some(initializer) = self.find_method(INITIALIZER) {
            debug!("Running initializer of '{}'", self.name);
            initializer.bind(&instance).call(arguments)?;
        }

        Ok(Value::Instance(instance))
    }
}

impl fmt::Display for LoxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
