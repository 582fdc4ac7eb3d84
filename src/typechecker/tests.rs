use super::*;
use pretty_assertions::assert_eq;

fn check(source: &str, dialect: Dialect) -> Result<Type, Diagnostic> {
    check_source(source, Path::new("test.ts"), dialect)
}

fn check_ok(source: &str, dialect: Dialect) -> Type {
    match check(source, dialect) {
        Ok(ty) => ty,
        Err(diagnostic) => panic!("expected `{}` to check, got {:?}", source, diagnostic),
    }
}

/// Code of the diagnostic a failing check reports
fn check_err(source: &str, dialect: Dialect) -> String {
    match check(source, dialect) {
        Ok(ty) => panic!("expected `{}` to fail, got type `{}`", source, ty),
        Err(diagnostic) => diagnostic.code,
    }
}

fn num_func(name: &str) -> Type {
    Type::func(vec![ParamType::new(name, Type::Number)], Type::Number)
}

// ---------------------------------------------------------------------------
// arith

#[test]
fn test_addition_is_number() {
    assert_eq!(check_ok("1 + 2", Dialect::Arith), Type::Number);
}

#[test]
fn test_conditional_takes_then_type() {
    assert_eq!(check_ok("true ? 1 : 0", Dialect::Arith), Type::Number);
    assert_eq!(check_ok("false ? true : false", Dialect::Arith), Type::Boolean);
}

#[test]
fn test_conditional_branch_mismatch() {
    assert_eq!(check_err("true ? true : 0", Dialect::Arith), "E1002");
}

#[test]
fn test_conditional_requires_boolean() {
    assert_eq!(check_err("1 ? 1 : 0", Dialect::Arith), "E1001");
}

#[test]
fn test_left_operand_error_wins() {
    assert_eq!(check_err("true + false", Dialect::Arith), "E1003");
    assert_eq!(check_err("1 + true", Dialect::Arith), "E1004");
}

#[test]
fn test_arith_rejects_variables() {
    assert_eq!(check_err("x", Dialect::Arith), "E0011");
}

// ---------------------------------------------------------------------------
// basic

#[test]
fn test_const_binding_and_use() {
    assert_eq!(check_ok("const x = 1; x + 2", Dialect::Basic), Type::Number);
}

#[test]
fn test_bare_const_has_init_type() {
    assert_eq!(check_ok("const x = true;", Dialect::Basic), Type::Boolean);
}

#[test]
fn test_sequence_returns_last_type() {
    assert_eq!(check_ok("1; true", Dialect::Basic), Type::Boolean);
}

#[test]
fn test_sequence_still_checks_discarded_statement() {
    assert_eq!(check_err("1 + true; 2", Dialect::Basic), "E1004");
}

#[test]
fn test_unknown_variable() {
    assert_eq!(check_err("y", Dialect::Basic), "E1005");
}

#[test]
fn test_function_literal_type() {
    assert_eq!(check_ok("(x: number) => x + 1", Dialect::Basic), num_func("x"));
}

#[test]
fn test_declared_return_type_mismatch() {
    assert_eq!(check_err("(x: number): boolean => x", Dialect::Basic), "E1006");
}

#[test]
fn test_call_returns_function_result() {
    let source = "const add = (a: number, b: number) => a + b; add(1, 2)";
    assert_eq!(check_ok(source, Dialect::Basic), Type::Number);
}

#[test]
fn test_call_on_non_function() {
    assert_eq!(check_err("const x = 1; x(1)", Dialect::Basic), "E1007");
}

#[test]
fn test_arity_mismatch_is_reported_before_arguments() {
    assert_eq!(check_err("((x: number) => x)(1, 2)", Dialect::Basic), "E1008");
    // The extra argument is ill-typed, but arity is checked first.
    assert_eq!(check_err("((x: number) => x)(1, true + 1)", Dialect::Basic), "E1008");
}

#[test]
fn test_argument_type_mismatch() {
    assert_eq!(check_err("((x: number) => x)(true)", Dialect::Basic), "E1009");
}

#[test]
fn test_const_shadowing_only_affects_rest() {
    let source = "const x = 1; const f = (y: number) => x; const x = true; f(1)";
    assert_eq!(check_ok(source, Dialect::Basic), Type::Number);
}

#[test]
fn test_duplicate_parameter_last_wins() {
    let source = "(x: number, x: boolean) => x";
    let expected = Type::func(
        vec![
            ParamType::new("x", Type::Number),
            ParamType::new("x", Type::Boolean),
        ],
        Type::Boolean,
    );
    assert_eq!(check_ok(source, Dialect::Basic), expected);
}

#[test]
fn test_parameters_do_not_leak_out_of_function() {
    assert_eq!(check_err("const f = (x: number) => x; x", Dialect::Basic), "E1005");
}

#[test]
fn test_const_bound_recursion_needs_rec_func_dialect() {
    let source = "const f = (x: number): number => f(x)";
    assert_eq!(check_err(source, Dialect::Basic), "E1005");
}

#[test]
fn test_nested_conditional_compares_full_structure() {
    let source = "true ? (x: number) => x : (y: boolean) => 1";
    assert_eq!(check_err(source, Dialect::Basic), "E1002");
}

// ---------------------------------------------------------------------------
// obj

#[test]
fn test_object_property_access() {
    let source = "const obj = { a: 1, b: true }; obj.a;";
    assert_eq!(check_ok(source, Dialect::Obj), Type::Number);
}

#[test]
fn test_unknown_property() {
    let source = "const obj = { a: 1, b: true }; obj.c;";
    assert_eq!(check_err(source, Dialect::Obj), "E1011");
}

#[test]
fn test_property_access_on_non_object() {
    assert_eq!(check_err("const n = 1; n.a", Dialect::Obj), "E1010");
}

#[test]
fn test_object_literal_type_keeps_order() {
    let ty = check_ok("{ b: true, a: 1 }", Dialect::Obj);
    assert_eq!(ty.to_string(), "{ b: boolean, a: number }");
}

#[test]
fn test_duplicate_properties_are_kept() {
    let ty = check_ok("{ a: 1, a: true }", Dialect::Obj);
    assert_eq!(
        ty,
        Type::object(vec![
            PropType::new("a", Type::Number),
            PropType::new("a", Type::Boolean),
        ])
    );
    assert_eq!(check_ok("{ a: 1, a: true }.a", Dialect::Obj), Type::Number);
}

#[test]
fn test_object_equality_ignores_property_order() {
    let source = "const f = (o: { a: number, b: boolean }) => o.a; f({ b: true, a: 1 })";
    assert_eq!(check_ok(source, Dialect::Obj), Type::Number);
}

#[test]
fn test_object_types_rejected_outside_object_dialects() {
    assert_eq!(check_err("(o: { a: number }) => 1", Dialect::Basic), "E0011");
}

// ---------------------------------------------------------------------------
// sub

const WIDTH_CALL: &str = "const f = (obj: {a: number}) => obj.a; f({a: 1, b: true});";

#[test]
fn test_width_subtyping_at_call_site() {
    assert_eq!(check_ok(WIDTH_CALL, Dialect::Sub), Type::Number);
}

#[test]
fn test_exact_dialect_rejects_wider_argument() {
    assert_eq!(check_err(WIDTH_CALL, Dialect::Obj), "E1009");
}

#[test]
fn test_narrower_argument_rejected() {
    let source = "const f = (obj: {a: number, b: number}) => obj.a; f({a: 1});";
    assert_eq!(check_err(source, Dialect::Sub), "E1009");
}

#[test]
fn test_declared_return_accepts_subtype() {
    let source = "(x: number): { a: number } => { return { a: x, b: true }; }";
    let ty = check_ok(source, Dialect::Sub);
    assert_eq!(
        ty,
        Type::func(
            vec![ParamType::new("x", Type::Number)],
            Type::object(vec![PropType::new("a", Type::Number)])
        )
    );
    assert_eq!(check_err(source, Dialect::Obj), "E1006");
}

#[test]
fn test_function_argument_contravariance() {
    let source = "const apply = (g: (o: { a: number, b: number }) => number) => g({ a: 1, b: 2 }); \
                  apply((o: { a: number }) => o.a)";
    assert_eq!(check_ok(source, Dialect::Sub), Type::Number);

    let reversed = "const apply = (g: (o: { a: number }) => number) => g({ a: 1 }); \
                    apply((o: { a: number, b: number }) => o.b)";
    assert_eq!(check_err(reversed, Dialect::Sub), "E1009");
}

#[test]
fn test_sub_has_no_conditional() {
    assert_eq!(check_err("true ? 1 : 2", Dialect::Sub), "E0011");
}

// ---------------------------------------------------------------------------
// rec-func

#[test]
fn test_const_bound_recursion() {
    let source = "const f = (x: number): number => f(x)";
    assert_eq!(check_ok(source, Dialect::RecFunc), num_func("x"));
}

#[test]
fn test_function_declaration_binding_escapes() {
    let source = "function fact(n: number): number { return fact(n); } fact(3)";
    assert_eq!(check_ok(source, Dialect::RecFunc), Type::Number);
}

#[test]
fn test_function_declaration_requires_return_type() {
    assert_eq!(check_err("function f(n: number) { return n; }", Dialect::RecFunc), "E0013");
}

#[test]
fn test_function_declaration_outside_rec_func() {
    let source = "function f(n: number): number { return n; } 1";
    assert_eq!(check_err(source, Dialect::Basic), "E0011");
}

#[test]
fn test_rec_func_has_no_conditional() {
    assert_eq!(check_err("true ? 1 : 2", Dialect::RecFunc), "E0011");
}

// ---------------------------------------------------------------------------
// dialects

#[test]
fn test_dialect_names_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.name().parse::<Dialect>(), Ok(dialect));
    }
    assert_eq!(Dialect::RecFunc.to_string(), "rec-func");
    assert!("recfunc".parse::<Dialect>().is_err());
}

#[test]
fn test_arithmetic_programs_check_in_every_dialect() {
    for dialect in Dialect::ALL {
        assert_eq!(check_ok("1 + 2 + 3", dialect), Type::Number);
    }
}

#[test]
fn test_type_error_diagnostic_carries_span() {
    let diag = check("1 + true", Dialect::Arith).unwrap_err();
    assert_eq!(diag.code, "E1004");
    assert_eq!(diag.span.start_col, 5);
    assert_eq!(diag.span.end_col, 9);
}
