//! Lookup table from an action to its operation implementation.
//!
//! An explicit registry object built once at startup and passed into the
//! pipeline. No ambient global state: callers own the registry and its
//! lifetime. A lookup miss is not an error; the pipeline treats it as a
//! silent no-op for the affected rows.
use std::collections::HashMap;

use crate::core::processing::ops::{Division, Minus, Multiply, Operation, Plus};
use crate::types::Action;

pub struct OperationRegistry {
    operations: HashMap<Action, Box<dyn Operation>>,
}

impl OperationRegistry {
    /// An empty registry. Useful for tests; production code wants
    /// [`OperationRegistry::with_builtins`].
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// A registry populated with exactly the four built-in operations.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Action::Plus, Box::new(Plus));
        registry.register(Action::Minus, Box::new(Minus));
        registry.register(Action::Multiply, Box::new(Multiply));
        registry.register(Action::Division, Box::new(Division));
        registry
    }

    pub fn register(&mut self, action: Action, operation: Box<dyn Operation>) {
        self.operations.insert(action, operation);
    }

    pub fn lookup(&self, action: Action) -> Option<&dyn Operation> {
        self.operations.get(&action).map(|op| op.as_ref())
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
