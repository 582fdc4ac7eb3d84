//! Abstract syntax shared by the dialects
//!
//! The parser does not build a tree of its own. It reports each construct it
//! recognises to a [`TermSyntax`] implementation, which is the closed term
//! type of one dialect. A dialect that lacks a construct keeps the default
//! constructor, which returns `None`, and the parser rejects the construct
//! with `E0011`.
//!
//! Statement sequences arrive already nested: `e; rest` becomes
//! [`TermSyntax::seq`], `const x = e; rest` becomes
//! [`TermSyntax::const_binding`], and `function f(..): R { .. } rest` becomes
//! [`TermSyntax::rec_func`]. The last statement of a sequence has no `rest`.

use crate::diagnostics::Span;
use crate::typechecker::types::{ParamType, Type};
use crate::typechecker::Dialect;

/// Term constructors the parser drives
pub trait TermSyntax: Sized {
    /// Dialect this term vocabulary belongs to
    const DIALECT: Dialect;

    /// Whether object types (`{ a: number }`) may appear in annotations
    const OBJECT_TYPES: bool = false;

    /// Source span of the term
    fn span(&self) -> &Span;

    fn boolean(value: bool, span: Span) -> Self;

    fn number(value: f64, span: Span) -> Self;

    fn add(left: Self, right: Self, span: Span) -> Self;

    fn conditional(_cond: Self, _thn: Self, _els: Self, _span: Span) -> Option<Self> {
        None
    }

    fn var(_name: String, _span: Span) -> Option<Self> {
        None
    }

    fn func(
        _params: Vec<ParamType>,
        _ret_type: Option<Type>,
        _body: Self,
        _span: Span,
    ) -> Option<Self> {
        None
    }

    fn call(_func: Self, _args: Vec<Self>, _span: Span) -> Option<Self> {
        None
    }

    fn seq(_body: Self, _rest: Self, _span: Span) -> Option<Self> {
        None
    }

    fn const_binding(_name: String, _init: Self, _rest: Option<Self>, _span: Span) -> Option<Self> {
        None
    }

    fn rec_func(
        _name: String,
        _params: Vec<ParamType>,
        _ret_type: Type,
        _body: Self,
        _rest: Option<Self>,
        _span: Span,
    ) -> Option<Self> {
        None
    }

    fn object_new(_props: Vec<(String, Self)>, _span: Span) -> Option<Self> {
        None
    }

    fn object_get(_obj: Self, _prop: String, _span: Span) -> Option<Self> {
        None
    }
}
