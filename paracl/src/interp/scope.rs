//! Scope chain for variable resolution
//!
//! A `Vec<HashMap>` of frames, innermost last. Frames are pushed and popped
//! in lockstep with `Scope` nodes, so dropping a frame releases its bindings
//! immediately.

use super::error::{InterpResult, RuntimeError};
use std::collections::HashMap;

/// Stack of name -> value frames
#[derive(Debug, Default)]
pub struct ScopeChain {
    /// index 0 is the outermost frame
    frames: Vec<HashMap<String, i32>>,
}

impl ScopeChain {
    /// Create an empty chain, no frame is live yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new innermost frame
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Leave the innermost frame
    /// Panics if no frame is live
    pub fn pop(&mut self) {
        if self.frames.pop().is_none() {
            panic!("Cannot pop an empty scope chain");
        }
    }

    /// Number of live frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Look a name up from the innermost frame outward
    pub fn read(&self, name: &str) -> InterpResult<i32> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
            .ok_or_else(|| RuntimeError::undeclared_variable(name))
    }

    /// Overwrite the innermost existing binding of `name`, or create one in
    /// the innermost frame when no frame binds it yet.
    /// Panics if no frame is live
    pub fn write(&mut self, name: &str, value: i32) {
        if let Some(slot) = self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
        {
            *slot = value;
            return;
        }
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(name.to_string(), value);
            }
            None => panic!("Cannot bind `{name}` outside of any scope frame"),
        }
    }

    /// Check if a name is bound in any live frame
    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::error::ErrorKind;

    #[test]
    fn test_write_then_read() {
        let mut chain = ScopeChain::new();
        chain.push();
        chain.write("x", 42);
        assert_eq!(chain.read("x").unwrap(), 42);
    }

    #[test]
    fn test_read_undeclared() {
        let mut chain = ScopeChain::new();
        chain.push();
        let err = chain.read("y").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UndeclaredVariable);
        assert!(err.message.contains('y'));
    }

    #[test]
    fn test_read_on_empty_chain() {
        let chain = ScopeChain::new();
        assert!(chain.read("x").is_err());
    }

    #[test]
    fn test_push_pop() {
        let mut chain = ScopeChain::new();
        chain.push();
        chain.write("x", 1);

        chain.push();
        chain.write("y", 2);
        assert_eq!(chain.read("x").unwrap(), 1);
        assert_eq!(chain.read("y").unwrap(), 2);
        assert_eq!(chain.depth(), 2);

        chain.pop();
        assert_eq!(chain.read("x").unwrap(), 1);
        assert!(chain.read("y").is_err());
        assert_eq!(chain.depth(), 1);
    }

    #[test]
    fn test_write_mutates_outer_binding() {
        let mut chain = ScopeChain::new();
        chain.push();
        chain.write("x", 1);

        chain.push();
        chain.write("x", 2);
        chain.pop();

        // The inner write reached the outer frame instead of shadowing
        assert_eq!(chain.read("x").unwrap(), 2);
    }

    #[test]
    fn test_write_declares_in_innermost_frame() {
        let mut chain = ScopeChain::new();
        chain.push();
        chain.push();
        chain.write("fresh", 7);
        assert!(chain.contains("fresh"));

        chain.pop();
        assert!(!chain.contains("fresh"));
    }

    #[test]
    fn test_deep_nesting() {
        let mut chain = ScopeChain::new();
        for i in 0..1000 {
            chain.push();
            chain.write(&format!("var_{i}"), i);
        }
        assert_eq!(chain.depth(), 1000);
        assert_eq!(chain.read("var_0").unwrap(), 0);
        assert_eq!(chain.read("var_999").unwrap(), 999);

        for _ in 0..1000 {
            chain.pop();
        }
        assert_eq!(chain.depth(), 0);
        assert!(!chain.contains("var_0"));
    }

    #[test]
    #[should_panic(expected = "Cannot pop an empty scope chain")]
    fn test_pop_empty_panics() {
        let mut chain = ScopeChain::new();
        chain.pop();
    }

    #[test]
    #[should_panic(expected = "outside of any scope frame")]
    fn test_write_without_frame_panics() {
        let mut chain = ScopeChain::new();
        chain.write("x", 1);
    }
}
