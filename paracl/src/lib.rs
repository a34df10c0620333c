//! ParaCL Interpreter Library
//!
//! Lexer, parser and tree-walking evaluator for ParaCL, a small C-like
//! language of integer variables, arithmetic, `if`/`while`, `?` input and
//! `print` output.

pub mod ast;
pub mod dot;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod source;

pub use ast::Location;
pub use error::{Diagnostic, Result};
pub use source::SourceText;

use ast::Program;
use std::io::{BufRead, Write};

/// Tokenize and parse a whole program
pub fn parse_source(source: &SourceText) -> Result<Program> {
    let tokens = lexer::tokenize(source)?;
    parser::parse(tokens)
}

/// Parse and evaluate a program against the given streams
pub fn run_source<R: BufRead, W: Write>(source: &SourceText, input: R, output: W) -> Result<()> {
    let program = parse_source(source)?;
    interp::evaluate(&program.arena, program.root, input, output)
}
