//! Tree-walking interpreter

mod error;
mod eval;
mod input;
mod scope;

pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use eval::Interpreter;
pub use input::IntReader;
pub use scope::ScopeChain;

use crate::ast::{Arena, NodeId};
use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Evaluate the tree rooted at `root` against the given streams
pub fn evaluate<R: BufRead, W: Write>(arena: &Arena, root: NodeId, input: R, output: W) -> Result<()> {
    Interpreter::new(arena, input, output).run(root)
}

/// Evaluate against the process's standard input and output
pub fn evaluate_stdio(arena: &Arena, root: NodeId) -> Result<()> {
    evaluate(arena, root, io::stdin().lock(), io::stdout().lock())
}
