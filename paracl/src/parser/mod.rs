//! Parser implementation using lalrpop

use crate::ast::{Arena, Location, Position, Program};
use crate::error::{Diagnostic, Result};
use crate::lexer::Token;


lalrpop_util::lalrpop_mod!(
    #[allow(clippy::all)]
    grammar
);

/// Parse tokens into a fresh arena rooted at one `Scope`
pub fn parse(tokens: Vec<(Token, Location)>) -> Result<Program> {
    let mut arena = Arena::new();
    let token_iter = tokens
        .into_iter()
        .map(|(tok, loc)| (loc.begin, tok, loc.end));

    let root = grammar::ProgramParser::new()
        .parse(&mut arena, token_iter)
        .map_err(syntax_error)?;

    tracing::debug!(nodes = arena.len(), "parsed");
    Ok(Program { arena, root })
}

type ParseError = lalrpop_util::ParseError<Position, Token, &'static str>;

fn syntax_error(error: ParseError) -> Diagnostic {
    match error {
        lalrpop_util::ParseError::InvalidToken { location } => {
            Diagnostic::syntax("invalid token", one_past(location))
        }
        lalrpop_util::ParseError::UnrecognizedEof { location, expected } => Diagnostic::syntax(
            format!("unexpected end of input{}", expecting(&expected)),
            one_past(location),
        ),
        lalrpop_util::ParseError::UnrecognizedToken {
            token: (begin, tok, end),
            expected,
        } => Diagnostic::syntax(
            format!("unexpected `{tok}`{}", expecting(&expected)),
            Location::new(begin, end),
        ),
        lalrpop_util::ParseError::ExtraToken {
            token: (begin, tok, end),
        } => Diagnostic::syntax(format!("extra token `{tok}`"), Location::new(begin, end)),
        lalrpop_util::ParseError::User { error } => Diagnostic::syntax(error, one_past(Position::default())),
    }
}

fn one_past(position: Position) -> Location {
    Location::on_line(position.line, position.column, 1)
}

fn expecting(expected: &[String]) -> String {
    if expected.is_empty() {
        return String::new();
    }
    format!(", expecting {}", expected.join(" or "))
}
