//! Tree-walking evaluator

use super::error::RuntimeError;
use super::input::IntReader;
use super::scope::ScopeChain;
use crate::ast::{Arena, NodeId, NodeKind};
use crate::error::Result;
use std::io::{BufRead, Write};

/// Stack growth parameters for deeply nested programs
const STACK_RED_ZONE: usize = 128 * 1024; // 128KB remaining triggers growth
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024; // Grow by 4MB each time

/// The interpreter
///
/// Holds the only mutable state of a run: the scope chain and the value
/// register. Every expression leaves its result in the register; booleans are
/// 0 and 1 there.
pub struct Interpreter<'a, R, W> {
    arena: &'a Arena,
    scopes: ScopeChain,
    register: i32,
    input: IntReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(arena: &'a Arena, input: R, output: W) -> Self {
        Interpreter {
            arena,
            scopes: ScopeChain::new(),
            register: 0,
            input: IntReader::new(input),
            output,
        }
    }

    /// Value left by the most recently evaluated expression
    pub fn register(&self) -> i32 {
        self.register
    }

    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluate a program root and flush the output stream
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self, root: NodeId) -> Result<()> {
        self.evaluate(root)?;
        self.output
            .flush()
            .map_err(|e| RuntimeError::io_error(&e).at(self.arena[root].location))?;
        tracing::debug!(register = self.register, "run finished");
        Ok(())
    }

    /// Evaluate one node with automatic stack growth for deep nesting
    pub fn evaluate(&mut self, id: NodeId) -> Result<()> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.evaluate_inner(id))
    }

    fn evaluate_inner(&mut self, id: NodeId) -> Result<()> {
        let arena = self.arena;
        let node = &arena[id];
        match &node.kind {
            NodeKind::Number(n) => self.register = *n,

            NodeKind::Input => {
                self.register = self.input.next_int().map_err(|e| e.at(node.location))?;
            }

            NodeKind::Var(name) => {
                self.register = self.scopes.read(name).map_err(|e| e.at(node.location))?;
            }

            NodeKind::Unary { op, operand } => {
                let value = self.value_of(*operand)?;
                self.register = op.apply(value);
            }

            NodeKind::Binary { op, left, right } => {
                let lhs = self.value_of(*left)?;
                let rhs = self.value_of(*right)?;
                self.register = op
                    .apply(lhs, rhs)
                    .ok_or_else(|| RuntimeError::division_by_zero().at(node.location))?;
            }

            NodeKind::Compare { op, left, right } => {
                let lhs = self.value_of(*left)?;
                let rhs = self.value_of(*right)?;
                self.register = i32::from(op.apply(lhs, rhs));
            }

            // Both sides always run, there is no short circuit
            NodeKind::Logic { op, left, right } => {
                let lhs = self.truthy(*left)?;
                let rhs = self.truthy(*right)?;
                self.register = i32::from(op.apply(lhs, rhs));
            }

            NodeKind::Assign { target, value } => {
                let value = self.value_of(*value)?;
                self.scopes.write(target, value);
                self.register = value;
            }

            NodeKind::Decl(_) => {}

            NodeKind::Scope(stmts) => {
                self.with_frame(|this| stmts.iter().try_for_each(|&stmt| this.evaluate(stmt)))?;
            }

            NodeKind::If {
                predicate,
                then_scope,
                else_scope,
            } => {
                if self.truthy(*predicate)? {
                    self.evaluate(*then_scope)?;
                } else if let Some(else_scope) = else_scope {
                    self.evaluate(*else_scope)?;
                }
            }

            NodeKind::While { predicate, body } => {
                while self.truthy(*predicate)? {
                    self.evaluate(*body)?;
                }
            }

            NodeKind::Output(expr) => {
                let value = self.value_of(*expr)?;
                writeln!(self.output, "{value}")
                    .map_err(|e| RuntimeError::io_error(&e).at(node.location))?;
            }
        }
        Ok(())
    }

    fn value_of(&mut self, id: NodeId) -> Result<i32> {
        self.evaluate(id)?;
        Ok(self.register)
    }

    fn truthy(&mut self, id: NodeId) -> Result<bool> {
        Ok(self.value_of(id)? != 0)
    }

    /// Run `f` inside a fresh frame; the frame is popped whatever `f` returns
    fn with_frame<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.push();
        tracing::trace!(depth = self.scopes.depth(), "enter scope");
        let result = f(self);
        self.scopes.pop();
        tracing::trace!(depth = self.scopes.depth(), "leave scope");
        result
    }
}
