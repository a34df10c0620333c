//! Source location tracking

use serde::{Deserialize, Serialize};

/// A line/column pair, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

// lalrpop requires a default location for empty productions
impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in the source code.
///
/// `end` points one column past the last character, so a single-character
/// token at column 5 spans `5..6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub begin: Position,
    pub end: Position,
}

impl Location {
    pub fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    /// Span covering `len` columns on a single line
    pub fn on_line(line: usize, column: usize, len: usize) -> Self {
        Self {
            begin: Position::new(line, column),
            end: Position::new(line, column + len),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.begin.line == self.end.line
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}
