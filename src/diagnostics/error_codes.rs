//! Error code definitions and documentation

/// Syntax/parsing errors (E0xxx)
pub mod syntax {
    pub const UNEXPECTED_TOKEN: &str = "E0001";
    pub const UNEXPECTED_EOF: &str = "E0008";
    pub const UNSUPPORTED_SYNTAX: &str = "E0011";
    pub const MISSING_RETURN: &str = "E0012";
    pub const MISSING_RETURN_TYPE: &str = "E0013";
}

/// Type errors (E1xxx)
pub mod types {
    pub const BOOLEAN_EXPECTED: &str = "E1001";
    pub const BRANCH_TYPE_MISMATCH: &str = "E1002";
    pub const LEFT_OPERAND_NOT_NUMBER: &str = "E1003";
    pub const RIGHT_OPERAND_NOT_NUMBER: &str = "E1004";
    pub const UNKNOWN_VARIABLE: &str = "E1005";
    pub const RETURN_TYPE_MISMATCH: &str = "E1006";
    pub const NOT_A_FUNCTION: &str = "E1007";
    pub const ARITY_MISMATCH: &str = "E1008";
    pub const ARGUMENT_TYPE_MISMATCH: &str = "E1009";
    pub const NOT_AN_OBJECT: &str = "E1010";
    pub const UNKNOWN_PROPERTY: &str = "E1011";
}

/// Long-form explanation for an error code, as printed by `tinyts --explain`
pub fn explain(code: &str) -> Option<&'static str> {
    let text = match code.to_ascii_uppercase().as_str() {
        "E0001" => "The parser found a token it did not expect at this position.",
        "E0008" => "The program ended before the construct being parsed was complete.",
        "E0011" => {
            "The construct is valid in some dialect, but not in the one selected with \
             `--mode`. For example `?:` conditionals only exist in `arith`, `basic` \
             and `obj`, and `function` declarations only in `rec-func`."
        }
        "E0012" => "A block body `{ ... }` must end with a `return <expr>;` statement.",
        "E0013" => {
            "A `function` declaration must annotate its return type, e.g. \
             `function f(n: number): number { return n; }`."
        }
        "E1001" => "The condition of `c ? a : b` must have type `boolean`.",
        "E1002" => {
            "Both branches of `c ? a : b` must have the same type. In `arith` mode only \
             the outermost kind (`number` or `boolean`) is compared."
        }
        "E1003" => {
            "The left operand of `+` must have type `number`. It is checked before the \
             right operand, so it is reported even when both are wrong."
        }
        "E1004" => "The right operand of `+` must have type `number`.",
        "E1005" => "The variable is not bound by an enclosing parameter, `const` or `function`.",
        "E1006" => {
            "The type of a function body does not match its declared return type. In \
             `sub` mode the body type only needs to be a subtype of the declared type."
        }
        "E1007" => "Only values of function type can be called.",
        "E1008" => "A function must be called with exactly as many arguments as it has parameters.",
        "E1009" => {
            "An argument's type does not match the parameter's declared type. In `sub` \
             mode the argument only needs to be a subtype: objects may carry extra \
             properties, and function arguments are compared contravariantly."
        }
        "E1010" => "Properties can only be read from values of object type.",
        "E1011" => "The object type has no property with this name.",
        _ => return None,
    };
    Some(text)
}
