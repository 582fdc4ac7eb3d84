//! tinyts
//!
//! A static type checker for a small TypeScript-like expression language,
//! offered as five dialects of increasing power: arithmetic, bindings and
//! functions, objects, recursive functions and structural subtyping.

pub mod cli;
pub mod diagnostics;
pub mod parser;
pub mod typechecker;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::diagnostics::{Diagnostic, Span};
    pub use crate::typechecker::{check_source, Dialect, Type, TypeEnv, TypeError};
}
