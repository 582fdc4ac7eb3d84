//! Type values shared by every dialect
//!
//! Types are plain structural values: two types are related by
//! [`is_equal_type`](super::relations::is_equal_type) or
//! [`is_subtype_of`](super::relations::is_subtype_of), never by identity.
//! The derived `PartialEq` is exact syntactic identity (names and order
//! included) and is only meant for tests and diagnostics.

use serde::Serialize;
use std::fmt;

/// A fully resolved type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum Type {
    Boolean,
    Number,
    /// Function type; parameter order is significant, names are not
    Func {
        params: Vec<ParamType>,
        #[serde(rename = "retType")]
        ret_type: Box<Type>,
    },
    /// Object type; property order is kept for display only
    Object { props: Vec<PropType> },
}

/// A named function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamType {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// A named object property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropType {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl ParamType {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl PropType {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Type {
    /// Build a function type
    pub fn func(params: Vec<ParamType>, ret_type: Type) -> Self {
        Type::Func {
            params,
            ret_type: Box::new(ret_type),
        }
    }

    /// Build an object type
    pub fn object(props: Vec<PropType>) -> Self {
        Type::Object { props }
    }

    /// Find a property by name (first match wins)
    pub fn prop(&self, name: &str) -> Option<&Type> {
        match self {
            Type::Object { props } => props.iter().find(|p| p.name == name).map(|p| &p.ty),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Number => write!(f, "number"),
            Type::Func { params, ret_type } => {
                let params = params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.ty))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({}) => {}", params, ret_type)
            }
            Type::Object { props } if props.is_empty() => write!(f, "{{}}"),
            Type::Object { props } => {
                let props = props
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.ty))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{ {} }}", props)
            }
        }
    }
}
