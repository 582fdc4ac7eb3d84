//! Lexer for the tinyts surface syntax

use crate::diagnostics::{Diagnostic, Span};
use crate::parser::span::SourceFile;
use logos::Logos;

/// Token types for tinyts
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum TokenKind {
    // Keywords
    #[token("boolean")]
    Boolean,
    #[token("const")]
    Const,
    #[token("false")]
    False,
    #[token("function")]
    Function,
    #[token("number")]
    Number,
    #[token("return")]
    Return,
    #[token("true")]
    True,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    NumberLit(f64),

    // Identifiers
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Operators
    #[token("+")]
    Plus,
    #[token("?")]
    Question,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token(".")]
    Dot,

    // End of input
    Eof,
}

impl TokenKind {
    /// How the token reads in diagnostics
    pub fn describe(&self) -> String {
        let text = match self {
            TokenKind::Boolean => "boolean",
            TokenKind::Const => "const",
            TokenKind::False => "false",
            TokenKind::Function => "function",
            TokenKind::Number => "number",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::NumberLit(n) => return format!("number `{}`", n),
            TokenKind::Ident(name) => return format!("identifier `{}`", name),
            TokenKind::Plus => "+",
            TokenKind::Question => "?",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semi => ";",
            TokenKind::Eq => "=",
            TokenKind::FatArrow => "=>",
            TokenKind::Dot => ".",
            TokenKind::Eof => return "end of input".to_string(),
        };
        format!("`{}`", text)
    }
}

/// A token with its span
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Lexer for tinyts source code
pub struct Lexer<'a> {
    source: &'a SourceFile,
    logos_lexer: logos::Lexer<'a, TokenKind>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source file
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            logos_lexer: TokenKind::lexer(source.content()),
            at_eof: false,
        }
    }

    /// Get the next token; keeps returning `Eof` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Token, Diagnostic> {
        if self.at_eof {
            return Ok(Token::new(TokenKind::Eof, self.source.eof_span()));
        }

        match self.logos_lexer.next() {
            Some(Ok(kind)) => {
                let span_range = self.logos_lexer.span();
                let span = self.source.span(span_range.start, span_range.end);
                Ok(Token::new(kind, span))
            }
            Some(Err(())) => {
                let span_range = self.logos_lexer.span();
                let span = self.source.span(span_range.start, span_range.end);
                Err(
                    Diagnostic::error(crate::diagnostics::error_codes::syntax::UNEXPECTED_TOKEN, span)
                        .message(format!(
                            "Unexpected character: {:?}",
                            self.logos_lexer.slice()
                        ))
                        .build(),
                )
            }
            None => {
                self.at_eof = true;
                Ok(Token::new(TokenKind::Eof, self.source.eof_span()))
            }
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
