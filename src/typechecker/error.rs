//! Type errors raised by the dialect checkers.
//!
//! A check stops at the first error. Every variant carries the span of the
//! offending term so it can be lowered into a [`Diagnostic`].

use thiserror::Error;

use super::types::Type;
use crate::diagnostics::error_codes::types as codes;
use crate::diagnostics::{Diagnostic, Span};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    #[error("condition must be `boolean`, found `{found}`")]
    BooleanExpected { found: Type, span: Span },

    #[error("conditional branches have different types: `{then_type}` and `{else_type}`")]
    BranchTypeMismatch {
        then_type: Type,
        else_type: Type,
        span: Span,
    },

    #[error("left operand of `+` must be `number`, found `{found}`")]
    LeftOperandNotNumber { found: Type, span: Span },

    #[error("right operand of `+` must be `number`, found `{found}`")]
    RightOperandNotNumber { found: Type, span: Span },

    #[error("unknown variable `{name}`")]
    UnknownVariable { name: String, span: Span },

    #[error("function body has type `{found}`, but the declared return type is `{declared}`")]
    ReturnTypeMismatch {
        declared: Type,
        found: Type,
        span: Span,
    },

    #[error("cannot call a value of type `{found}`")]
    NotAFunction { found: Type, span: Span },

    #[error("function expects {expected} argument(s), but {found} were given")]
    ArityMismatch {
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("argument {position} has type `{found}`, but parameter `{param}` expects `{expected}`")]
    ArgumentTypeMismatch {
        /// 1-based argument position
        position: usize,
        param: String,
        expected: Type,
        found: Type,
        span: Span,
    },

    #[error("cannot read property `{property}` of non-object type `{found}`")]
    NotAnObject {
        property: String,
        found: Type,
        span: Span,
    },

    #[error("unknown property `{property}` on type `{object}`")]
    UnknownProperty {
        property: String,
        object: Type,
        span: Span,
    },
}

impl TypeError {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            TypeError::BooleanExpected { .. } => codes::BOOLEAN_EXPECTED,
            TypeError::BranchTypeMismatch { .. } => codes::BRANCH_TYPE_MISMATCH,
            TypeError::LeftOperandNotNumber { .. } => codes::LEFT_OPERAND_NOT_NUMBER,
            TypeError::RightOperandNotNumber { .. } => codes::RIGHT_OPERAND_NOT_NUMBER,
            TypeError::UnknownVariable { .. } => codes::UNKNOWN_VARIABLE,
            TypeError::ReturnTypeMismatch { .. } => codes::RETURN_TYPE_MISMATCH,
            TypeError::NotAFunction { .. } => codes::NOT_A_FUNCTION,
            TypeError::ArityMismatch { .. } => codes::ARITY_MISMATCH,
            TypeError::ArgumentTypeMismatch { .. } => codes::ARGUMENT_TYPE_MISMATCH,
            TypeError::NotAnObject { .. } => codes::NOT_AN_OBJECT,
            TypeError::UnknownProperty { .. } => codes::UNKNOWN_PROPERTY,
        }
    }

    /// Span of the offending term
    pub fn span(&self) -> &Span {
        match self {
            TypeError::BooleanExpected { span, .. }
            | TypeError::BranchTypeMismatch { span, .. }
            | TypeError::LeftOperandNotNumber { span, .. }
            | TypeError::RightOperandNotNumber { span, .. }
            | TypeError::UnknownVariable { span, .. }
            | TypeError::ReturnTypeMismatch { span, .. }
            | TypeError::NotAFunction { span, .. }
            | TypeError::ArityMismatch { span, .. }
            | TypeError::ArgumentTypeMismatch { span, .. }
            | TypeError::NotAnObject { span, .. }
            | TypeError::UnknownProperty { span, .. } => span,
        }
    }

    /// Lower into a reportable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = Diagnostic::error(self.code(), self.span().clone()).message(self.to_string());

        let note = match self {
            TypeError::LeftOperandNotNumber { .. } => {
                Some("the left operand is checked before the right one".to_string())
            }
            TypeError::UnknownVariable { name, .. } => Some(format!(
                "`{}` must be bound by a parameter, `const` or `function` before it is used",
                name
            )),
            TypeError::UnknownProperty { object, .. } => match object {
                Type::Object { props } if !props.is_empty() => Some(format!(
                    "available properties: {}",
                    props
                        .iter()
                        .map(|p| format!("`{}`", p.name))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                _ => None,
            },
            _ => None,
        };

        match note {
            Some(note) => builder.note(note).build(),
            None => builder.build(),
        }
    }
}

impl From<TypeError> for Diagnostic {
    fn from(err: TypeError) -> Self {
        err.to_diagnostic()
    }
}
