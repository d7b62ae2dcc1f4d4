//! Lexically scoped name-to-value bindings.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runtime_error::RuntimeError;
use crate::token::Token;
use crate::value::Value;

struct Frame {
    values: HashMap<String, Value>,
    parent: Option<Environment>,
}

/// A shared handle to one frame of a lexical scope chain.
///
/// Cloning an `Environment` clones the handle, not the frame: every clone
/// still observes `define`/`assign` calls made through any other clone.
/// This is what lets a closure capture "the environment active at its point
/// of declaration" by value while still seeing later mutations to it.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}

impl Environment {
    /// Creates a new frame with no parent — the global scope.
    pub fn global() -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            values: HashMap::new(),
            parent: None,
        })))
    }

    /// Creates a new frame whose parent is `self`, for entering a block or
    /// function call.
    pub fn child(&self) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            values: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// Binds `name` in this frame, shadowing any outer binding of the same
    /// name. Redefining a name already bound in this same frame silently
    /// overwrites it.
    pub fn define(&self, name: &str, value: Value) {
        self.0.borrow_mut().values.insert(name.to_string(), value);
    }

    /// Looks up `name`, starting at this frame and walking up the parent
    /// chain. Fails with [`RuntimeError::undefined_variable`] if no frame
    /// in the chain binds it.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        let frame = self.0.borrow();
        if let Some(value) = frame.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &frame.parent {
            Some(parent) => {
                let parent = parent.clone();
                drop(frame);
                parent.get(name)
            }
            None => Err(RuntimeError::undefined_variable(&name.lexeme, name.span)),
        }
    }

    /// Mutates the nearest existing binding of `name` in the chain. Never
    /// creates a new binding — an unresolved name is a runtime error.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let mut frame = self.0.borrow_mut();
        if frame.values.contains_key(&name.lexeme) {
            frame.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }
        match &frame.parent {
            Some(parent) => {
                let parent = parent.clone();
                drop(frame);
                parent.assign(name, value)
            }
            None => Err(RuntimeError::undefined_variable(&name.lexeme, name.span)),
        }
    }
}
