//! Subtyping dialect.
//!
//! The objects dialect without the conditional, where call arguments and
//! function bodies only need to be subtypes of the declared parameter and
//! return types. Objects are subtyped by width and depth, functions
//! contravariantly in their parameters and covariantly in their result.
//!
//! The term enum and checker mirror `obj.rs` rule for rule. The only
//! differences are `Compat::Subtype` wherever `obj` uses `Compat::Exact`, and
//! the missing conditional.

use super::env::TypeEnv;
use super::error::TypeError;
use super::rules::{self, Compat};
use super::types::{ParamType, PropType, Type};
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
    ObjectNew {
        props: Vec<(String, Term)>,
        span: Span,
    },
    ObjectGet {
        obj: Box<Term>,
        prop: String,
        span: Span,
    },
}

impl TermSyntax for Term {
    const DIALECT: Dialect = Dialect::Sub;
    const OBJECT_TYPES: bool = true;

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
            | Term::ObjectNew { span, .. }
            | Term::ObjectGet { span, .. } => span,
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

    fn object_new(props: Vec<(String, Self)>, span: Span) -> Option<Self> {
        Some(Term::ObjectNew { props, span })
    }

    fn object_get(obj: Self, prop: String, span: Span) -> Option<Self> {
        Some(Term::ObjectGet {
            obj: Box::new(obj),
            prop,
            span,
        })
    }
}

pub fn typecheck(term: &Term, env: &TypeEnv) -> Result<Type, TypeError> {
    log::trace!("sub: checking term at {}..{}", term.span().start, term.span().end);

    match term {
        Term::True { .. } | Term::False { .. } => Ok(Type::Boolean),
        Term::Number { .. } => Ok(Type::Number),
        Term::Add { left, right, .. } => rules::add(&**left, &**right, |t| typecheck(t, env)),
        Term::Var { name, span } => rules::var(env, name, span),
        Term::Func {
            params,
            ret_type,
            body,
            span,
        } => {
            let fn_env = env.extend(rules::param_bindings(params));
            let body_ty = typecheck(body, &fn_env)?;
            rules::func_type(params, ret_type.as_ref(), body_ty, Compat::Subtype, span)
        }
        Term::Call { func, args, span } => {
            rules::call(&**func, args.as_slice(), span, Compat::Subtype, |t| {
                typecheck(t, env)
            })
        }
        Term::Seq { body, rest, .. } => {
            typecheck(body, env)?;
            typecheck(rest, env)
        }
        Term::Const {
            name, init, rest, ..
        } => {
            let init_ty = typecheck(init, env)?;
            match rest {
                Some(rest) => typecheck(rest, &env.bind(name.clone(), init_ty)),
                None => Ok(init_ty),
            }
        }
        Term::ObjectNew { props, .. } => {
            let props = props
                .iter()
                .map(|(name, value)| Ok(PropType::new(name.clone(), typecheck(value, env)?)))
                .collect::<Result<Vec<_>, TypeError>>()?;
            Ok(Type::object(props))
        }
        Term::ObjectGet { obj, prop, span } => {
            let obj_ty = typecheck(obj, env)?;
            rules::object_get(obj_ty, prop, span)
        }
    }
}
