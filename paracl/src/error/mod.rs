//! Error types and reporting

use crate::ast::Location;
use crate::source::SourceText;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// What went wrong, printed as the first word of a rendered diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Unrecognized lexeme
    LexicalError,
    /// Grammar violation
    SyntaxError,
    /// Read of a name no live frame binds
    UndeclaredVariable,
    /// Right operand of `/` or `%` was zero
    DivisionByZero,
    /// The input stream was exhausted or held something other than an integer
    InvalidInput,
    /// Writing to the output stream failed
    IoError,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::LexicalError => "LexicalError",
            Category::SyntaxError => "SyntaxError",
            Category::UndeclaredVariable => "UndeclaredVariable",
            Category::DivisionByZero => "DivisionByZero",
            Category::InvalidInput => "InvalidInput",
            Category::IoError => "IoError",
        }
    }

    /// Raised by the interpreter rather than the front end
    pub fn is_runtime(self) -> bool {
        !matches!(self, Category::LexicalError | Category::SyntaxError)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure pointing into the source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category}: {message}, at line #{}", .location.begin.line)]
pub struct Diagnostic {
    pub category: Category,
    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    pub fn new(category: Category, message: impl Into<String>, location: Location) -> Self {
        Self {
            category,
            message: message.into(),
            location,
        }
    }

    pub fn lexer(message: impl Into<String>, location: Location) -> Self {
        Self::new(Category::LexicalError, message, location)
    }

    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self::new(Category::SyntaxError, message, location)
    }

    /// Render against the program text, see [`render`]
    pub fn render(&self, source: &SourceText) -> String {
        render(self.category, &self.message, self.location, source)
    }
}

/// Format a diagnostic with the offending line and a caret underline.
///
/// ```text
/// <category>: <message>, at line #<line>:
/// <source line>
/// <spaces><carets>
/// ```
///
/// The caret line has `begin.column - 1` spaces and `end.column - begin.column`
/// carets. A span running over several lines is underlined to the end of its
/// first line.
pub fn render(category: Category, message: &str, location: Location, source: &SourceText) -> String {
    let line = source.line(location.begin.line).unwrap_or("");
    let indent = location.begin.column.saturating_sub(1);
    let width = if location.is_single_line() {
        location.end.column.saturating_sub(location.begin.column)
    } else {
        (line.chars().count() + 1).saturating_sub(location.begin.column)
    };
    format!(
        "{category}: {message}, at line #{}:\n{line}\n{}{}",
        location.begin.line,
        " ".repeat(indent),
        "^".repeat(width),
    )
}

/// Report a diagnostic on stderr with ariadne
pub fn report_pretty(filename: &str, source: &SourceText, diagnostic: &Diagnostic) -> std::io::Result<()> {
    use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

    let start = source.offset(diagnostic.location.begin);
    let end = source.offset(diagnostic.location.end).max(start);

    Report::build(ReportKind::Error, (filename, start..end))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(diagnostic.category.as_str())
        .with_label(
            Label::new((filename, start..end))
                .with_message(&diagnostic.message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    fn src() -> SourceText {
        SourceText::new("x = 1;\nprint y + x;\n")
    }

    #[test]
    fn test_render_single_column() {
        let text = render(
            Category::UndeclaredVariable,
            "y was not declared in this scope",
            Location::on_line(2, 7, 1),
            &src(),
        );
        assert_eq!(
            text,
            "UndeclaredVariable: y was not declared in this scope, at line #2:\nprint y + x;\n      ^"
        );
    }

    #[test]
    fn test_render_wide_span() {
        let text = render(Category::DivisionByZero, "division by zero", Location::on_line(2, 7, 5), &src());
        insta::assert_snapshot!(text, @r"
        DivisionByZero: division by zero, at line #2:
        print y + x;
              ^^^^^
        ");
    }

    #[test]
    fn test_render_is_reproducible() {
        let source = src();
        let loc = Location::on_line(1, 1, 1);
        let first = render(Category::SyntaxError, "unexpected `=`", loc, &source);
        let second = render(Category::SyntaxError, "unexpected `=`", loc, &source);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_zero_width_span() {
        let text = render(Category::SyntaxError, "unexpected end of input", Location::on_line(1, 7, 0), &src());
        assert_eq!(text, "SyntaxError: unexpected end of input, at line #1:\nx = 1;\n      ");
    }

    #[test]
    fn test_render_multi_line_span() {
        let loc = Location::new(Position::new(1, 5), Position::new(2, 3));
        let text = render(Category::DivisionByZero, "division by zero", loc, &src());
        assert!(text.ends_with("x = 1;\n    ^^"));
    }

    #[test]
    fn test_render_line_out_of_range() {
        let text = render(Category::SyntaxError, "oops", Location::on_line(9, 1, 1), &src());
        assert_eq!(text, "SyntaxError: oops, at line #9:\n\n^");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::lexer("unrecognized lexeme `$`", Location::on_line(3, 2, 1));
        assert_eq!(diag.to_string(), "LexicalError: unrecognized lexeme `$`, at line #3");
        assert_eq!(diag.render(&src()), render(diag.category, &diag.message, diag.location, &src()));
    }

    #[test]
    fn test_category_runtime_split() {
        assert!(!Category::LexicalError.is_runtime());
        assert!(!Category::SyntaxError.is_runtime());
        assert!(Category::UndeclaredVariable.is_runtime());
        assert!(Category::DivisionByZero.is_runtime());
        assert!(Category::InvalidInput.is_runtime());
    }
}
