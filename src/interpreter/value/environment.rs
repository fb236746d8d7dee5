use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a name-to-value store with an optional link to the
/// enclosing environment.
///
/// Lookup walks the chain innermost-first; `set` always writes to the
/// current frame. Frames are shared through `Rc<RefCell<_>>`, so a closure
/// keeps its defining environment alive for as long as the closure itself is
/// reachable. The chain forms a tree (closures cannot create cycles), which
/// makes reference counting sufficient.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use quill::interpreter::value::{core::Value, environment::Environment};
///
/// let outer = Rc::new(RefCell::new(Environment::new()));
/// outer.borrow_mut().set("x", Value::Integer(5));
///
/// let mut inner = Environment::enclosed(Rc::clone(&outer));
/// inner.set("y", Value::Integer(7));
///
/// assert_eq!(inner.get("x").unwrap().to_string(), "5");
/// assert_eq!(inner.get("y").unwrap().to_string(), "7");
/// assert!(outer.borrow().get("y").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None, }
    }

    /// Creates an empty environment whose lookups fall back to `outer`.
    ///
    /// This is how function calls extend a closure's captured environment:
    /// the new frame holds the parameter bindings, the outer link reaches
    /// the definition site.
    #[must_use]
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Looks up a name, walking the chain from the innermost frame outward.
    ///
    /// Returns a clone of the bound value, or `None` when no frame binds the
    /// name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in the current frame, shadowing any outer binding of the
    /// same name.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
