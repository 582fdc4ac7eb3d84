//! Parser for tinyts programs
//!
//! This module provides:
//! - Lexer (tokenization)
//! - Parser (term construction for one dialect)
//! - The `TermSyntax` seam between the parser and the dialects
//! - Span tracking

pub mod ast;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod span;

pub use ast::TermSyntax;
pub use lexer::Lexer;
pub use parser::Parser;
pub use span::SourceFile;

use crate::diagnostics::Diagnostic;
use std::path::Path;

/// Parse source code into the term type of one dialect
pub fn parse_source<T: TermSyntax>(source: &str, path: &Path) -> Result<T, Diagnostic> {
    let source_file = SourceFile::new(path.to_path_buf(), source.to_string());
    let lexer = Lexer::new(&source_file);
    let mut parser = Parser::<T>::new(lexer)?;
    let term = parser.parse_program()?;
    log::debug!("parsed {} program from {}", T::DIALECT, path.display());
    Ok(term)
}
