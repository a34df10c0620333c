//! Runtime errors for the interpreter
//!
//! Helpers below produce a location-free [`RuntimeError`]; the evaluator
//! pins it to the node that raised it with [`RuntimeError::at`].

use crate::ast::Location;
use crate::error::{Category, Diagnostic};
use std::fmt;

/// Runtime error during interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Read of a name no live frame binds
    UndeclaredVariable,
    /// Division or remainder by zero
    DivisionByZero,
    /// Input exhausted or not an integer
    InvalidInput,
    /// Output stream failure
    IoError,
}

impl ErrorKind {
    pub fn category(self) -> Category {
        match self {
            ErrorKind::UndeclaredVariable => Category::UndeclaredVariable,
            ErrorKind::DivisionByZero => Category::DivisionByZero,
            ErrorKind::InvalidInput => Category::InvalidInput,
            ErrorKind::IoError => Category::IoError,
        }
    }
}

impl RuntimeError {
    pub fn undeclared_variable(name: &str) -> Self {
        RuntimeError {
            kind: ErrorKind::UndeclaredVariable,
            message: format!("{name} was not declared in this scope"),
        }
    }

    pub fn division_by_zero() -> Self {
        RuntimeError {
            kind: ErrorKind::DivisionByZero,
            message: "division by zero".to_string(),
        }
    }

    pub fn end_of_input() -> Self {
        RuntimeError {
            kind: ErrorKind::InvalidInput,
            message: "unexpected end of input, expected an integer".to_string(),
        }
    }

    pub fn not_an_integer(word: &str) -> Self {
        RuntimeError {
            kind: ErrorKind::InvalidInput,
            message: format!("expected an integer on input, got `{word}`"),
        }
    }

    pub fn io_error(err: &std::io::Error) -> Self {
        RuntimeError {
            kind: ErrorKind::IoError,
            message: format!("IO error: {err}"),
        }
    }

    /// Attach the location of the node that raised the error
    pub fn at(self, location: Location) -> Diagnostic {
        Diagnostic::new(self.kind.category(), self.message, location)
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Runtime error: {}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for interpreter operations
pub type InterpResult<T> = Result<T, RuntimeError>;
