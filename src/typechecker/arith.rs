//! Arithmetic dialect: booleans, numbers, `+` and `?:`.

use super::error::TypeError;
use super::rules;
use super::types::Type;
use super::Dialect;
use crate::diagnostics::Span;
use crate::parser::TermSyntax;

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    True {
        span: Span,
    },
    False {
        span: Span,
    },
    Number {
        value: f64,
        span: Span,
    },
    Add {
        left: Box<Term>,
        right: Box<Term>,
        span: Span,
    },
    If {
        cond: Box<Term>,
        thn: Box<Term>,
        els: Box<Term>,
        span: Span,
    },
}

impl TermSyntax for Term {
    const DIALECT: Dialect = Dialect::Arith;

    fn span(&self) -> &Span {
        match self {
            Term::True { span }
            | Term::False { span }
            | Term::Number { span, .. }
            | Term::Add { span, .. }
            | Term::If { span, .. } => span,
        }
    }

    fn boolean(value: bool, span: Span) -> Self {
        if value {
            Term::True { span }
        } else {
            Term::False { span }
        }
    }

    fn number(value: f64, span: Span) -> Self {
        Term::Number { value, span }
    }

    fn add(left: Self, right: Self, span: Span) -> Self {
        Term::Add {
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    fn conditional(cond: Self, thn: Self, els: Self, span: Span) -> Option<Self> {
        Some(Term::If {
            cond: Box::new(cond),
            thn: Box::new(thn),
            els: Box::new(els),
            span,
        })
    }
}

/// Infer the type of an arithmetic term.
///
/// Operands of `+` are checked left to right and the left one is rejected
/// before the right one is looked at. Conditional branches are compared by
/// outermost kind only.
pub fn typecheck(term: &Term) -> Result<Type, TypeError> {
    log::trace!("arith: checking term at {}..{}", term.span().start, term.span().end);

    match term {
        Term::True { .. } | Term::False { .. } => Ok(Type::Boolean),
        Term::Number { .. } => Ok(Type::Number),
        Term::Add { left, right, .. } => rules::add(&**left, &**right, typecheck),
        Term::If {
            cond,
            thn,
            els,
            span,
        } => {
            let cond_ty = typecheck(cond)?;
            if !matches!(cond_ty, Type::Boolean) {
                return Err(TypeError::BooleanExpected {
                    found: cond_ty,
                    span: cond.span().clone(),
                });
            }
            let then_ty = typecheck(thn)?;
            let else_ty = typecheck(els)?;
            if std::mem::discriminant(&then_ty) != std::mem::discriminant(&else_ty) {
                return Err(TypeError::BranchTypeMismatch {
                    then_type: then_ty,
                    else_type: else_ty,
                    span: span.clone(),
                });
            }
            Ok(then_ty)
        }
    }
}
