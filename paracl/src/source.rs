//! Program text kept for the whole run
//!
//! Built once by the driver and passed by reference to the lexer and to the
//! diagnostic renderer. Lines are never re-read from disk.

use crate::ast::Position;
use std::path::Path;

/// The program source, indexed by 1-based line number
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Read a program file
    pub fn read(path: &Path) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(Self::new)
    }

    /// Full program text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines, counting a trailing line without a newline
    pub fn line_count(&self) -> usize {
        if self.text.ends_with('\n') {
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }

    /// Line `n` (1-based) without its terminator
    pub fn line(&self, n: usize) -> Option<&str> {
        if n == 0 || n > self.line_count() {
            return None;
        }
        let start = self.line_starts[n - 1];
        let end = self
            .line_starts
            .get(n)
            .map_or(self.text.len(), |next| next - 1);
        let line = &self.text[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Line/column of a byte offset; columns count characters
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = self.text[start..offset].chars().count() + 1;
        Position::new(line, column)
    }

    /// Byte offset of a line/column, clamped to the text
    pub fn offset(&self, position: Position) -> usize {
        let Some(&start) = self.line_starts.get(position.line.saturating_sub(1)) else {
            return self.text.len();
        };
        self.text[start..]
            .char_indices()
            .nth(position.column.saturating_sub(1))
            .map_or(self.text.len(), |(i, _)| start + i)
    }
}
