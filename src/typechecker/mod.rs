//! Type checker for the tinyts dialects
//!
//! Each dialect has its own closed term type and checker. They share the type
//! representation, the type relations, the scope representation and the rules
//! in [`rules`]. [`check_source`] parses and checks a whole program in one go.

pub mod arith;
pub mod basic;
pub mod env;
pub mod error;
pub mod obj;
pub mod rec_func;
pub mod relations;
pub mod rules;
pub mod sub;
pub mod types;

pub use env::TypeEnv;
pub use error::TypeError;
pub use relations::{is_equal_type, is_subtype_of};
pub use types::{ParamType, PropType, Type};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::diagnostics::Diagnostic;
use crate::parser::{parse_source, TermSyntax};

/// The language level a program is checked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Dialect {
    /// Booleans, numbers, `+` and `?:`
    Arith,
    /// Adds variables, functions, calls, sequencing and `const`
    Basic,
    /// Adds object literals and property access
    Obj,
    /// Adds self-referential functions, drops `?:`
    #[value(name = "rec-func")]
    RecFunc,
    /// Objects with structural subtyping, drops `?:`
    Sub,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Arith,
        Dialect::Basic,
        Dialect::Obj,
        Dialect::RecFunc,
        Dialect::Sub,
    ];

    /// Name used by `--mode`
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Arith => "arith",
            Dialect::Basic => "basic",
            Dialect::Obj => "obj",
            Dialect::RecFunc => "rec-func",
            Dialect::Sub => "sub",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("unknown dialect `{}`", s))
    }
}

/// A dialect's term type paired with its checker
pub trait Typecheck: TermSyntax {
    fn typecheck(&self, env: &TypeEnv) -> Result<Type, TypeError>;
}

impl Typecheck for arith::Term {
    fn typecheck(&self, _env: &TypeEnv) -> Result<Type, TypeError> {
        arith::typecheck(self)
    }
}

impl Typecheck for basic::Term {
    fn typecheck(&self, env: &TypeEnv) -> Result<Type, TypeError> {
        basic::typecheck(self, env)
    }
}

impl Typecheck for obj::Term {
    fn typecheck(&self, env: &TypeEnv) -> Result<Type, TypeError> {
        obj::typecheck(self, env)
    }
}

impl Typecheck for rec_func::Term {
    fn typecheck(&self, env: &TypeEnv) -> Result<Type, TypeError> {
        rec_func::typecheck(self, env)
    }
}

impl Typecheck for sub::Term {
    fn typecheck(&self, env: &TypeEnv) -> Result<Type, TypeError> {
        sub::typecheck(self, env)
    }
}

/// Parse `source` as dialect `T` and check it in an empty scope
pub fn check_as<T: Typecheck>(source: &str, path: &Path) -> Result<Type, Diagnostic> {
    let term = parse_source::<T>(source, path)?;
    term.typecheck(&TypeEnv::new()).map_err(Diagnostic::from)
}

/// Parse and check a whole program.
///
/// Parse errors and the first type error are both reported as diagnostics;
/// checking stops at the first problem found.
pub fn check_source(source: &str, path: &Path, dialect: Dialect) -> Result<Type, Diagnostic> {
    log::debug!("checking {} in `{}` mode", path.display(), dialect);

    let result = match dialect {
        Dialect::Arith => check_as::<arith::Term>(source, path),
        Dialect::Basic => check_as::<basic::Term>(source, path),
        Dialect::Obj => check_as::<obj::Term>(source, path),
        Dialect::RecFunc => check_as::<rec_func::Term>(source, path),
        Dialect::Sub => check_as::<sub::Term>(source, path),
    };

    match &result {
        Ok(ty) => log::debug!("{} has type `{}`", path.display(), ty),
        Err(diagnostic) => log::debug!(
            "{} failed to check with {}",
            path.display(),
            diagnostic.code
        ),
    }
    result
}

#[cfg(test)]
mod tests;
