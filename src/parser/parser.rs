//! Recursive descent parser for tinyts
//!
//! Precedence, loosest first: `c ? a : b` (right associative), `a + b` (left
//! associative), then calls and property accesses.
#![allow(clippy::result_large_err)]

use std::marker::PhantomData;

use crate::diagnostics::error_codes::syntax;
use crate::diagnostics::{Diagnostic, Span};
use crate::parser::ast::TermSyntax;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::typechecker::types::{ParamType, PropType, Type};

/// A statement before it is nested into the statements that follow it
enum Stmt<T> {
    Expr(T),
    Const {
        name: String,
        init: T,
        span: Span,
    },
    Function {
        name: String,
        params: Vec<ParamType>,
        ret_type: Type,
        body: T,
        span: Span,
    },
}

/// Parser producing the term type `T` of one dialect
pub struct Parser<T> {
    tokens: Vec<Token>,
    pos: usize,
    _term: PhantomData<T>,
}

impl<T: TermSyntax> Parser<T> {
    /// Create a new parser, tokenizing the whole input up front
    pub fn new(mut lexer: Lexer<'_>) -> Result<Self, Diagnostic> {
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            _term: PhantomData,
        })
    }

    /// Parse a complete program
    pub fn parse_program(&mut self) -> Result<T, Diagnostic> {
        let program = self.parse_statements(false)?;
        self.expect(TokenKind::Eof)?;
        Ok(program)
    }

    /// Parse statements up to end of input, or up to the closing `}` of a
    /// block, where the last statement must be `return <expr>`.
    fn parse_statements(&mut self, in_block: bool) -> Result<T, Diagnostic> {
        let end = if in_block {
            TokenKind::RBrace
        } else {
            TokenKind::Eof
        };

        let mut stmts = Vec::new();
        loop {
            if in_block && self.check(&TokenKind::Return) {
                self.advance();
                let value = self.parse_expr()?;
                self.eat(&TokenKind::Semi);
                if !self.check(&TokenKind::RBrace) {
                    return Err(self.error_unexpected("`}` after `return`"));
                }
                stmts.push(Stmt::Expr(value));
                break;
            }

            if self.check(&end) {
                if in_block {
                    return Err(Diagnostic::error(syntax::MISSING_RETURN, self.current_span())
                        .message("block body must end with `return <expr>;`")
                        .build());
                }
                if stmts.is_empty() {
                    return Err(self.error_unexpected("expression"));
                }
                break;
            }

            let stmt = self.parse_stmt()?;
            let is_declaration = matches!(stmt, Stmt::Function { .. });
            stmts.push(stmt);

            if !self.eat(&TokenKind::Semi) && !is_declaration && !self.check(&end) {
                return Err(self.error_unexpected("`;`"));
            }
        }

        let mut term = None;
        for stmt in stmts.into_iter().rev() {
            term = Some(Self::nest(stmt, term)?);
        }
        term.ok_or_else(|| self.error_unexpected("expression"))
    }

    /// Attach `rest` (the statements after `stmt`) to `stmt`
    fn nest(stmt: Stmt<T>, rest: Option<T>) -> Result<T, Diagnostic> {
        match stmt {
            Stmt::Expr(body) => match rest {
                None => Ok(body),
                Some(rest) => {
                    let span = body.span().merge(rest.span());
                    Self::supported(T::seq(body, rest, span.clone()), "statement sequences", span)
                }
            },
            Stmt::Const { name, init, span } => Self::supported(
                T::const_binding(name, init, rest, span.clone()),
                "`const` bindings",
                span,
            ),
            Stmt::Function {
                name,
                params,
                ret_type,
                body,
                span,
            } => Self::supported(
                T::rec_func(name, params, ret_type, body, rest, span.clone()),
                "`function` declarations",
                span,
            ),
        }
    }

    fn parse_stmt(&mut self) -> Result<Stmt<T>, Diagnostic> {
        if self.check(&TokenKind::Const) {
            self.parse_const()
        } else if self.check(&TokenKind::Function) {
            self.parse_function_decl()
        } else {
            Ok(Stmt::Expr(self.parse_expr()?))
        }
    }

    fn parse_const(&mut self) -> Result<Stmt<T>, Diagnostic> {
        let start_span = self.expect(TokenKind::Const)?.span;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let init = self.parse_expr()?;
        let span = start_span.merge(init.span());

        Ok(Stmt::Const { name, init, span })
    }

    fn parse_function_decl(&mut self) -> Result<Stmt<T>, Diagnostic> {
        let start_span = self.expect(TokenKind::Function)?.span;
        let (name, _) = self.expect_ident()?;
        let params = self.parse_params()?;

        if !self.eat(&TokenKind::Colon) {
            return Err(Diagnostic::error(syntax::MISSING_RETURN_TYPE, self.current_span())
                .message(format!("function `{}` must declare its return type", name))
                .build());
        }
        let ret_type = self.parse_type()?;
        let (body, end_span) = self.parse_block()?;

        Ok(Stmt::Function {
            name,
            params,
            ret_type,
            body,
            span: start_span.merge(&end_span),
        })
    }

    /// Parse `{ ...; return e; }`, returning the body and the span of `}`
    fn parse_block(&mut self) -> Result<(T, Span), Diagnostic> {
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_statements(true)?;
        let close = self.expect(TokenKind::RBrace)?;
        Ok((body, close.span))
    }

    fn parse_params(&mut self) -> Result<Vec<ParamType>, Diagnostic> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            let (name, _) = self.expect_ident()?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?;
            params.push(ParamType::new(name, ty));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    fn parse_type(&mut self) -> Result<Type, Diagnostic> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Type::Number)
            }
            TokenKind::Boolean => {
                self.advance();
                Ok(Type::Boolean)
            }
            TokenKind::LParen => {
                let params = self.parse_params()?;
                self.expect(TokenKind::FatArrow)?;
                let ret_type = self.parse_type()?;
                Ok(Type::func(params, ret_type))
            }
            TokenKind::LBrace => {
                if !T::OBJECT_TYPES {
                    return Err(Self::unsupported("object types", token.span));
                }
                self.advance();
                let mut props = Vec::new();
                while !self.check(&TokenKind::RBrace) {
                    let (name, _) = self.expect_ident()?;
                    self.expect(TokenKind::Colon)?;
                    let ty = self.parse_type()?;
                    props.push(PropType::new(name, ty));
                    if !self.eat(&TokenKind::Comma) && !self.eat(&TokenKind::Semi) {
                        break;
                    }
                }
                self.expect(TokenKind::RBrace)?;
                Ok(Type::object(props))
            }
            _ => Err(self.error_unexpected("type")),
        }
    }

    fn parse_expr(&mut self) -> Result<T, Diagnostic> {
        let cond = self.parse_additive()?;
        if !self.eat(&TokenKind::Question) {
            return Ok(cond);
        }

        let thn = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let els = self.parse_expr()?;
        let span = cond.span().merge(els.span());
        Self::supported(
            T::conditional(cond, thn, els, span.clone()),
            "conditional expressions",
            span,
        )
    }

    fn parse_additive(&mut self) -> Result<T, Diagnostic> {
        let mut left = self.parse_postfix()?;

        while self.eat(&TokenKind::Plus) {
            let right = self.parse_postfix()?;
            let span = left.span().merge(right.span());
            left = T::add(left, right, span);
        }

        Ok(left)
    }

    fn parse_postfix(&mut self) -> Result<T, Diagnostic> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.eat(&TokenKind::LParen) {
                let mut args = Vec::new();
                while !self.check(&TokenKind::RParen) {
                    args.push(self.parse_expr()?);
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                let close = self.expect(TokenKind::RParen)?;
                let span = expr.span().merge(&close.span);
                expr = Self::supported(T::call(expr, args, span.clone()), "function calls", span)?;
            } else if self.eat(&TokenKind::Dot) {
                let (prop, prop_span) = self.expect_ident()?;
                let span = expr.span().merge(&prop_span);
                expr = Self::supported(
                    T::object_get(expr, prop, span.clone()),
                    "property accesses",
                    span,
                )?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<T, Diagnostic> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::NumberLit(value) => {
                self.advance();
                Ok(T::number(value, token.span))
            }
            TokenKind::True => {
                self.advance();
                Ok(T::boolean(true, token.span))
            }
            TokenKind::False => {
                self.advance();
                Ok(T::boolean(false, token.span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Self::supported(T::var(name, token.span.clone()), "variables", token.span)
            }
            TokenKind::LParen if self.at_arrow() => self.parse_arrow(),
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBrace => self.parse_object_literal(),
            _ => Err(self.error_unexpected("expression")),
        }
    }

    /// `(` starts an arrow function when followed by `)` or `name :`
    fn at_arrow(&self) -> bool {
        match self.peek_at(1) {
            TokenKind::RParen => true,
            TokenKind::Ident(_) => matches!(self.peek_at(2), TokenKind::Colon),
            _ => false,
        }
    }

    fn parse_arrow(&mut self) -> Result<T, Diagnostic> {
        let start_span = self.current_span();
        let params = self.parse_params()?;
        let ret_type = if self.eat(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::FatArrow)?;

        let (body, end_span) = if self.check(&TokenKind::LBrace) {
            self.parse_block()?
        } else {
            let body = self.parse_expr()?;
            let end_span = body.span().clone();
            (body, end_span)
        };

        let span = start_span.merge(&end_span);
        Self::supported(
            T::func(params, ret_type, body, span.clone()),
            "function literals",
            span,
        )
    }

    fn parse_object_literal(&mut self) -> Result<T, Diagnostic> {
        let start_span = self.expect(TokenKind::LBrace)?.span;

        let mut props = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            let (name, _) = self.expect_ident()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_expr()?;
            props.push((name, value));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        let close = self.expect(TokenKind::RBrace)?;
        let span = start_span.merge(&close.span);
        Self::supported(T::object_new(props, span.clone()), "object literals", span)
    }

    // Helper methods

    fn supported(term: Option<T>, what: &str, span: Span) -> Result<T, Diagnostic> {
        term.ok_or_else(|| Self::unsupported(what, span))
    }

    fn unsupported(what: &str, span: Span) -> Diagnostic {
        Diagnostic::error(syntax::UNSUPPORTED_SYNTAX, span)
            .message(format!(
                "{} are not part of the `{}` dialect",
                what,
                T::DIALECT
            ))
            .build()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_at(&self, offset: usize) -> &TokenKind {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Span {
        self.peek().span.clone()
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Diagnostic> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.error_unexpected(&kind.describe()))
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Span), Diagnostic> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name, token.span))
            }
            _ => Err(self.error_unexpected("identifier")),
        }
    }

    fn error_unexpected(&self, expected: &str) -> Diagnostic {
        let token = self.peek();
        let code = if token.kind == TokenKind::Eof {
            syntax::UNEXPECTED_EOF
        } else {
            syntax::UNEXPECTED_TOKEN
        };
        Diagnostic::error(code, token.span.clone())
            .message(format!(
                "Expected {}, found {}",
                expected,
                token.kind.describe()
            ))
            .build()
    }
}
