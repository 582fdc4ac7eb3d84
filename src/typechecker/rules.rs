//! Typing rules shared by several dialects.
//!
//! Each dialect walks its own term type; these helpers take the dialect's
//! recursive check as a closure so the rule itself is written once.

use super::env::TypeEnv;
use super::error::TypeError;
use super::relations::{is_equal_type, is_subtype_of};
use super::types::{ParamType, Type};
use crate::diagnostics::Span;
use crate::parser::TermSyntax;

/// How an actual type is compared against an expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compat {
    /// Structural equality
    Exact,
    /// Structural subtyping (actual <: expected)
    Subtype,
}

impl Compat {
    pub fn accepts(self, actual: &Type, expected: &Type) -> bool {
        match self {
            Compat::Exact => is_equal_type(actual, expected),
            Compat::Subtype => is_subtype_of(actual, expected),
        }
    }
}

/// `left + right`; the right operand is not checked when the left one fails
pub fn add<T, F>(left: &T, right: &T, mut check: F) -> Result<Type, TypeError>
where
    T: TermSyntax,
    F: FnMut(&T) -> Result<Type, TypeError>,
{
    let left_ty = check(left)?;
    if !matches!(left_ty, Type::Number) {
        return Err(TypeError::LeftOperandNotNumber {
            found: left_ty,
            span: left.span().clone(),
        });
    }
    let right_ty = check(right)?;
    if !matches!(right_ty, Type::Number) {
        return Err(TypeError::RightOperandNotNumber {
            found: right_ty,
            span: right.span().clone(),
        });
    }
    Ok(Type::Number)
}

/// `cond ? thn : els` with branches compared by structural equality
pub fn conditional<T, F>(cond: &T, thn: &T, els: &T, span: &Span, mut check: F) -> Result<Type, TypeError>
where
    T: TermSyntax,
    F: FnMut(&T) -> Result<Type, TypeError>,
{
    let cond_ty = check(cond)?;
    if !matches!(cond_ty, Type::Boolean) {
        return Err(TypeError::BooleanExpected {
            found: cond_ty,
            span: cond.span().clone(),
        });
    }
    let then_ty = check(thn)?;
    let else_ty = check(els)?;
    if !is_equal_type(&then_ty, &else_ty) {
        return Err(TypeError::BranchTypeMismatch {
            then_type: then_ty,
            else_type: else_ty,
            span: span.clone(),
        });
    }
    Ok(then_ty)
}

pub fn var(env: &TypeEnv, name: &str, span: &Span) -> Result<Type, TypeError> {
    env.lookup(name).cloned().ok_or_else(|| TypeError::UnknownVariable {
        name: name.to_string(),
        span: span.clone(),
    })
}

/// Parameter bindings for a function scope, in declaration order
pub fn param_bindings(params: &[ParamType]) -> impl Iterator<Item = (String, Type)> + '_ {
    params.iter().map(|p| (p.name.clone(), p.ty.clone()))
}

/// Resolve a function literal's type from its declared and inferred returns.
///
/// When a return type is declared, the body's type must be compatible with it
/// and the declared type is the one reported.
pub fn func_type(
    params: &[ParamType],
    declared: Option<&Type>,
    body_ty: Type,
    compat: Compat,
    span: &Span,
) -> Result<Type, TypeError> {
    let ret_type = match declared {
        Some(declared) => {
            if !compat.accepts(&body_ty, declared) {
                return Err(TypeError::ReturnTypeMismatch {
                    declared: declared.clone(),
                    found: body_ty,
                    span: span.clone(),
                });
            }
            declared.clone()
        }
        None => body_ty,
    };
    Ok(Type::func(params.to_vec(), ret_type))
}

/// `func(args...)`: callee kind, then arity, then each argument left to right
pub fn call<T, F>(func: &T, args: &[T], span: &Span, compat: Compat, mut check: F) -> Result<Type, TypeError>
where
    T: TermSyntax,
    F: FnMut(&T) -> Result<Type, TypeError>,
{
    let (params, ret_type) = match check(func)? {
        Type::Func { params, ret_type } => (params, ret_type),
        other => {
            return Err(TypeError::NotAFunction {
                found: other,
                span: func.span().clone(),
            })
        }
    };

    if params.len() != args.len() {
        return Err(TypeError::ArityMismatch {
            expected: params.len(),
            found: args.len(),
            span: span.clone(),
        });
    }

    for (position, (arg, param)) in args.iter().zip(params.iter()).enumerate() {
        let arg_ty = check(arg)?;
        if !compat.accepts(&arg_ty, &param.ty) {
            return Err(TypeError::ArgumentTypeMismatch {
                position: position + 1,
                param: param.name.clone(),
                expected: param.ty.clone(),
                found: arg_ty,
                span: arg.span().clone(),
            });
        }
    }

    Ok(*ret_type)
}

/// `obj.prop` on an already checked object type
pub fn object_get(obj_ty: Type, prop: &str, span: &Span) -> Result<Type, TypeError> {
    if !matches!(obj_ty, Type::Object { .. }) {
        return Err(TypeError::NotAnObject {
            property: prop.to_string(),
            found: obj_ty,
            span: span.clone(),
        });
    }
    match obj_ty.prop(prop) {
        Some(ty) => Ok(ty.clone()),
        None => Err(TypeError::UnknownProperty {
            property: prop.to_string(),
            object: obj_ty,
            span: span.clone(),
        }),
    }
}
