//! Recursive functions dialect.
//!
//! Builds on the bindings and functions dialect without the conditional.
//! A `function` declaration sees its own name inside its body, and so does a
//! function literal bound directly by `const` when its return type is
//! declared.

use std::iter;

use super::env::TypeEnv;
use super::error::TypeError;
use super::rules::{self, Compat};
use super::types::{ParamType, Type};
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
    Var {
        name: String,
        span: Span,
    },
    Func {
        params: Vec<ParamType>,
        ret_type: Option<Type>,
        body: Box<Term>,
        span: Span,
    },
    Call {
        func: Box<Term>,
        args: Vec<Term>,
        span: Span,
    },
    Seq {
        body: Box<Term>,
        rest: Box<Term>,
        span: Span,
    },
    Const {
        name: String,
        init: Box<Term>,
        rest: Option<Box<Term>>,
        span: Span,
    },
    RecFunc {
        name: String,
        params: Vec<ParamType>,
        ret_type: Type,
        body: Box<Term>,
        rest: Option<Box<Term>>,
        span: Span,
    },
}

impl TermSyntax for Term {
    const DIALECT: Dialect = Dialect::RecFunc;

    fn span(&self) -> &Span {
        match self {
            Term::True { span }
            | Term::False { span }
            | Term::Number { span, .. }
            | Term::Add { span, .. }
            | Term::Var { span, .. }
            | Term::Func { span, .. }
            | Term::Call { span, .. }
            | Term::Seq { span, .. }
            | Term::Const { span, .. }
            | Term::RecFunc { span, .. } => span,
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

    fn var(name: String, span: Span) -> Option<Self> {
        Some(Term::Var { name, span })
    }

    fn func(params: Vec<ParamType>, ret_type: Option<Type>, body: Self, span: Span) -> Option<Self> {
        Some(Term::Func {
            params,
            ret_type,
            body: Box::new(body),
            span,
        })
    }

    fn call(func: Self, args: Vec<Self>, span: Span) -> Option<Self> {
        Some(Term::Call {
            func: Box::new(func),
            args,
            span,
        })
    }

    fn seq(body: Self, rest: Self, span: Span) -> Option<Self> {
        Some(Term::Seq {
            body: Box::new(body),
            rest: Box::new(rest),
            span,
        })
    }

    fn const_binding(name: String, init: Self, rest: Option<Self>, span: Span) -> Option<Self> {
        Some(Term::Const {
            name,
            init: Box::new(init),
            rest: rest.map(Box::new),
            span,
        })
    }

    fn rec_func(
        name: String,
        params: Vec<ParamType>,
        ret_type: Type,
        body: Self,
        rest: Option<Self>,
        span: Span,
    ) -> Option<Self> {
        Some(Term::RecFunc {
            name,
            params,
            ret_type,
            body: Box::new(body),
            rest: rest.map(Box::new),
            span,
        })
    }
}

pub fn typecheck(term: &Term, env: &TypeEnv) -> Result<Type, TypeError> {
    check(term, env, None)
}

/// `parent` is set only while checking the `init` of a `Const`. It lets a
/// function literal bound directly by `const` refer to itself; every other
/// position is checked with no parent.
fn check(term: &Term, env: &TypeEnv, parent: Option<&Term>) -> Result<Type, TypeError> {
    log::trace!("rec-func: checking term at {}..{}", term.span().start, term.span().end);

    match term {
        Term::True { .. } | Term::False { .. } => Ok(Type::Boolean),
        Term::Number { .. } => Ok(Type::Number),
        Term::Add { left, right, .. } => rules::add(&**left, &**right, |t| check(t, env, None)),
        Term::Var { name, span } => rules::var(env, name, span),
        Term::Func {
            params,
            ret_type,
            body,
            span,
        } => {
            let mut fn_env = env.extend(rules::param_bindings(params));
            if let (Some(Term::Const { name, .. }), Some(declared)) = (parent, ret_type) {
                log::debug!("binding `{}` inside its own function body", name);
                fn_env = fn_env.bind(name.clone(), Type::func(params.clone(), declared.clone()));
            }
            let body_ty = check(body, &fn_env, None)?;
            rules::func_type(params, ret_type.as_ref(), body_ty, Compat::Exact, span)
        }
        Term::Call { func, args, span } => {
            rules::call(&**func, args.as_slice(), span, Compat::Exact, |t| {
                check(t, env, None)
            })
        }
        Term::Seq { body, rest, .. } => {
            check(body, env, None)?;
            check(rest, env, None)
        }
        Term::Const {
            name, init, rest, ..
        } => {
            let init_ty = check(init, env, Some(term))?;
            match rest {
                Some(rest) => check(rest, &env.bind(name.clone(), init_ty), None),
                None => Ok(init_ty),
            }
        }
        Term::RecFunc {
            name,
            params,
            ret_type,
            body,
            rest,
            span,
        } => {
            let self_ty = Type::func(params.clone(), ret_type.clone());
            // The function's own name is bound after its parameters.
            let body_env = env.extend(
                rules::param_bindings(params).chain(iter::once((name.clone(), self_ty))),
            );
            let body_ty = check(body, &body_env, None)?;
            let self_ty = rules::func_type(params, Some(ret_type), body_ty, Compat::Exact, span)?;
            match rest {
                Some(rest) => check(rest, &env.bind(name.clone(), self_ty), None),
                None => Ok(self_ty),
            }
        }
    }
}
