//! Lexer implementation using logos

mod token;

pub use token::Token;

use crate::ast::Location;
use crate::error::{Diagnostic, Result};
use crate::source::SourceText;
use logos::Logos;

/// Tokenize source code
pub fn tokenize(source: &SourceText) -> Result<Vec<(Token, Location)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source.as_str());

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let location = Location::new(source.position(span.start), source.position(span.end));
        match result {
            Ok(token) => tokens.push((token, location)),
            Err(()) => {
                return Err(Diagnostic::lexer(
                    format!("unrecognized lexeme `{}`", lexer.slice()),
                    location,
                ));
            }
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
