use super::*;
use crate::typechecker::types::{ParamType, PropType};
use proptest::prelude::*;

fn obj(props: &[(&str, Type)]) -> Type {
    Type::object(
        props
            .iter()
            .map(|(name, ty)| PropType::new(*name, ty.clone()))
            .collect(),
    )
}

fn func(params: &[(&str, Type)], ret: Type) -> Type {
    Type::func(
        params
            .iter()
            .map(|(name, ty)| ParamType::new(*name, ty.clone()))
            .collect(),
        ret,
    )
}

fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![Just(Type::Boolean), Just(Type::Number)];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (prop::collection::vec(inner.clone(), 0..3), inner.clone()).prop_map(
                |(params, ret)| {
                    let params = params
                        .into_iter()
                        .enumerate()
                        .map(|(i, ty)| ParamType::new(format!("p{}", i), ty))
                        .collect();
                    Type::func(params, ret)
                }
            ),
            prop::collection::btree_map("[a-e]", inner, 0..4).prop_map(|props| {
                Type::object(
                    props
                        .into_iter()
                        .map(|(name, ty)| PropType::new(name, ty))
                        .collect(),
                )
            }),
        ]
    })
}

/// Reverse object properties and rename function parameters, recursively
fn scramble(ty: &Type) -> Type {
    match ty {
        Type::Boolean | Type::Number => ty.clone(),
        Type::Func { params, ret_type } => Type::func(
            params
                .iter()
                .map(|p| ParamType::new(format!("renamed_{}", p.name), scramble(&p.ty)))
                .collect(),
            scramble(ret_type),
        ),
        Type::Object { props } => Type::object(
            props
                .iter()
                .rev()
                .map(|p| PropType::new(p.name.clone(), scramble(&p.ty)))
                .collect(),
        ),
    }
}

#[test]
fn test_primitive_equality() {
    assert!(is_equal_type(&Type::Number, &Type::Number));
    assert!(is_equal_type(&Type::Boolean, &Type::Boolean));
    assert!(!is_equal_type(&Type::Number, &Type::Boolean));
    assert!(!is_equal_type(&Type::Number, &func(&[], Type::Number)));
}

#[test]
fn test_object_equality_ignores_order() {
    let ab = obj(&[("a", Type::Number), ("b", Type::Boolean)]);
    let ba = obj(&[("b", Type::Boolean), ("a", Type::Number)]);
    assert!(is_equal_type(&ab, &ba));
    assert!(is_equal_type(&ba, &ab));
}

#[test]
fn test_object_equality_requires_same_width() {
    let a = obj(&[("a", Type::Number)]);
    let ab = obj(&[("a", Type::Number), ("b", Type::Number)]);
    assert!(!is_equal_type(&a, &ab));
    assert!(!is_equal_type(&ab, &a));
}

#[test]
fn test_object_equality_compares_property_types() {
    let a_num = obj(&[("a", Type::Number)]);
    let a_bool = obj(&[("a", Type::Boolean)]);
    let b_num = obj(&[("b", Type::Number)]);
    assert!(!is_equal_type(&a_num, &a_bool));
    assert!(!is_equal_type(&a_num, &b_num));
}

#[test]
fn test_function_equality_ignores_parameter_names() {
    let f = func(&[("x", Type::Number)], Type::Boolean);
    let g = func(&[("y", Type::Number)], Type::Boolean);
    assert!(is_equal_type(&f, &g));
}

#[test]
fn test_function_equality_is_positional() {
    let f = func(&[("x", Type::Number), ("y", Type::Boolean)], Type::Number);
    let g = func(&[("y", Type::Boolean), ("x", Type::Number)], Type::Number);
    let h = func(&[("x", Type::Number)], Type::Number);
    let k = func(&[("x", Type::Number), ("y", Type::Boolean)], Type::Boolean);
    assert!(!is_equal_type(&f, &g));
    assert!(!is_equal_type(&f, &h));
    assert!(!is_equal_type(&f, &k));
}

#[test]
fn test_width_subtyping() {
    let ab = obj(&[("a", Type::Number), ("b", Type::Number)]);
    let a = obj(&[("a", Type::Number)]);
    assert!(is_subtype_of(&ab, &a));
    assert!(!is_subtype_of(&a, &ab));
    assert!(is_subtype_of(&a, &obj(&[])));
}

#[test]
fn test_depth_subtyping() {
    let inner_wide = obj(&[("x", Type::Number), ("y", Type::Boolean)]);
    let inner = obj(&[("x", Type::Number)]);
    let outer_wide = obj(&[("p", inner_wide)]);
    let outer = obj(&[("p", inner)]);
    assert!(is_subtype_of(&outer_wide, &outer));
    assert!(!is_subtype_of(&outer, &outer_wide));
}

#[test]
fn test_function_parameters_are_contravariant() {
    let takes_a = func(&[("o", obj(&[("a", Type::Number)]))], Type::Number);
    let takes_ab = func(
        &[("o", obj(&[("a", Type::Number), ("b", Type::Number)]))],
        Type::Number,
    );
    assert!(is_subtype_of(&takes_a, &takes_ab));
    assert!(!is_subtype_of(&takes_ab, &takes_a));
}

#[test]
fn test_function_return_is_covariant() {
    let returns_ab = func(&[], obj(&[("a", Type::Number), ("b", Type::Boolean)]));
    let returns_a = func(&[], obj(&[("a", Type::Number)]));
    assert!(is_subtype_of(&returns_ab, &returns_a));
    assert!(!is_subtype_of(&returns_a, &returns_ab));
}

#[test]
fn test_function_subtyping_has_no_parameter_width() {
    let one = func(&[("x", Type::Number)], Type::Number);
    let two = func(&[("x", Type::Number), ("y", Type::Number)], Type::Number);
    assert!(!is_subtype_of(&one, &two));
    assert!(!is_subtype_of(&two, &one));
}

#[test]
fn test_subtyping_never_crosses_tags() {
    assert!(!is_subtype_of(&Type::Number, &Type::Boolean));
    assert!(!is_subtype_of(&obj(&[]), &func(&[], Type::Number)));
    assert!(!is_subtype_of(&func(&[], Type::Number), &obj(&[])));
}

proptest! {
    #[test]
    fn prop_equality_is_reflexive(ty in arb_type()) {
        prop_assert!(is_equal_type(&ty, &ty));
    }

    #[test]
    fn prop_equality_is_symmetric(a in arb_type(), b in arb_type()) {
        prop_assert_eq!(is_equal_type(&a, &b), is_equal_type(&b, &a));
    }

    #[test]
    fn prop_equality_ignores_names_and_order(ty in arb_type()) {
        let scrambled = scramble(&ty);
        prop_assert!(is_equal_type(&ty, &scrambled));
        prop_assert!(is_equal_type(&scrambled, &ty));
    }

    #[test]
    fn prop_subtyping_is_reflexive(ty in arb_type()) {
        prop_assert!(is_subtype_of(&ty, &ty));
    }

    #[test]
    fn prop_equal_types_are_mutual_subtypes(a in arb_type(), b in arb_type()) {
        if is_equal_type(&a, &b) {
            prop_assert!(is_subtype_of(&a, &b));
            prop_assert!(is_subtype_of(&b, &a));
        }
    }

    #[test]
    fn prop_extra_property_is_a_subtype(ty in arb_type(), extra in arb_type()) {
        if let Type::Object { props } = &ty {
            let mut wider = props.clone();
            wider.push(PropType::new("zz_extra", extra));
            let wider = Type::object(wider);
            prop_assert!(is_subtype_of(&wider, &ty));
            prop_assert!(!is_equal_type(&wider, &ty));
        }
    }
}
