//! Abstract Syntax Tree definitions

mod arena;
mod expr;
mod span;

pub use arena::*;
pub use expr::*;
pub use span::*;

use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node with its source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub location: Location,
}

/// A parsed program: the arena that owns the tree and its root `Scope`
#[derive(Debug, Serialize)]
pub struct Program {
    pub arena: Arena,
    pub root: NodeId,
}
