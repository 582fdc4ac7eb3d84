//! Structural type relations
//!
//! `is_equal_type` is used by the exact-match dialects wherever two types must
//! agree (branches, arguments, declared return types). `is_subtype_of` takes its
//! place at argument and return positions in the subtyping dialect.

use super::types::Type;

/// Structural type equality.
///
/// Function parameters are compared by position (names ignored); object
/// properties are compared by name (order ignored) with equal cardinality.
pub fn is_equal_type(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Boolean, Type::Boolean) | (Type::Number, Type::Number) => true,
        (
            Type::Func {
                params: a_params,
                ret_type: a_ret,
            },
            Type::Func {
                params: b_params,
                ret_type: b_ret,
            },
        ) => {
            a_params.len() == b_params.len()
                && a_params
                    .iter()
                    .zip(b_params.iter())
                    .all(|(ap, bp)| is_equal_type(&ap.ty, &bp.ty))
                && is_equal_type(a_ret, b_ret)
        }
        (Type::Object { props: a_props }, Type::Object { props: b_props }) => {
            a_props.len() == b_props.len()
                && b_props
                    .iter()
                    .all(|bp| a.prop(&bp.name).is_some_and(|aty| is_equal_type(aty, &bp.ty)))
        }
        _ => false,
    }
}

/// `a <: b`: a value of type `a` may be used where `b` is expected.
///
/// Functions are contravariant in their parameters (same count required) and
/// covariant in the return type. Objects are covariant and width-permissive:
/// `a` needs every property of `b`, and may have more.
pub fn is_subtype_of(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Boolean, Type::Boolean) | (Type::Number, Type::Number) => true,
        (
            Type::Func {
                params: a_params,
                ret_type: a_ret,
            },
            Type::Func {
                params: b_params,
                ret_type: b_ret,
            },
        ) => {
            a_params.len() == b_params.len()
                && a_params
                    .iter()
                    .zip(b_params.iter())
                    .all(|(ap, bp)| is_subtype_of(&bp.ty, &ap.ty))
                && is_subtype_of(a_ret, b_ret)
        }
        (Type::Object { .. }, Type::Object { props: b_props }) => b_props
            .iter()
            .all(|bp| a.prop(&bp.name).is_some_and(|aty| is_subtype_of(aty, &bp.ty))),
        _ => false,
    }
}

#[cfg(test)]
#[path = "relations_tests.rs"]
mod tests;
