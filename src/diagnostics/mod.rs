//! Diagnostics for tinyts
//!
//! Checking stops at the first problem, so a failed parse or check produces
//! exactly one [`Diagnostic`]: a stable code, a message, the span of the
//! offending source and optional notes. It renders either rustc-style for a
//! terminal or as JSON.

use serde::Serialize;
use std::path::PathBuf;

pub mod error_codes;
pub use error_codes::*;

/// A source location span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Source file path (`<input>` for programs given on the command line)
    pub file: PathBuf,

    /// Byte offsets, end exclusive
    pub start: usize,
    pub end: usize,

    /// 1-indexed line and column of `start`
    pub start_line: usize,
    pub start_col: usize,

    /// 1-indexed line and column of `end`
    pub end_line: usize,
    pub end_col: usize,
}

impl Span {
    pub fn new(
        file: PathBuf,
        start: usize,
        end: usize,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file,
            start,
            end,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Smallest span covering `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        let last = if self.end >= other.end { self } else { other };
        Span {
            file: self.file.clone(),
            start: first.start,
            end: last.end,
            start_line: first.start_line,
            start_col: first.start_col,
            end_line: last.end_line,
            end_col: last.end_col,
        }
    }
}

/// A parse or type error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable error code (e.g. "E1005")
    pub code: String,

    pub message: String,

    /// The offending source
    pub span: Span,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start building an error with `code` at `span`
    pub fn error(code: impl Into<String>, span: Span) -> DiagnosticBuilder {
        DiagnosticBuilder {
            diagnostic: Diagnostic {
                code: code.into(),
                message: String::new(),
                span,
                notes: Vec::new(),
            },
        }
    }

    /// Single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// rustc-style rendering with the offending line underlined
    pub fn to_human_readable(&self, source: &str) -> String {
        let mut output = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            self.code,
            self.message,
            self.span.file.display(),
            self.span.start_line,
            self.span.start_col
        );

        let line = self
            .span
            .start_line
            .checked_sub(1)
            .and_then(|index| source.lines().nth(index));
        if let Some(line) = line {
            output.push_str(&format!(
                "   |\n{:>3} | {}\n   |",
                self.span.start_line, line
            ));

            let underline_start = self.span.start_col.saturating_sub(1);
            let underline_len = if self.span.end_line == self.span.start_line {
                self.span.end_col.saturating_sub(self.span.start_col)
            } else {
                line.len().saturating_sub(underline_start)
            }
            .max(1);

            output.push_str(&format!(
                " {}{}\n",
                " ".repeat(underline_start),
                "^".repeat(underline_len)
            ));
        }

        for note in &self.notes {
            output.push_str(&format!("   = note: {}\n", note));
        }

        output
    }
}

/// Builder for constructing diagnostics
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.diagnostic.message = message.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
