use std::collections::HashMap;

use crate::interpreter::object::core::Object;

/// Stores the values bound with `let`.
///
/// The language has no block scoping: a binding made inside an `if` block is
/// visible after it, so a single flat map is enough.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    store: HashMap<String, Object>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding by name.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::{core::Object, environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Object::Integer(5));
    ///
    /// assert_eq!(env.get("x"), Some(&Object::Integer(5)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Object> {
        self.store.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}
