//! Type environment
//!
//! A persistent chain of scopes. Extending an environment allocates a new
//! frame that points at its parent, so the caller's environment is never
//! modified and frames can be shared freely between nested scopes.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::Type;

#[derive(Debug)]
struct Frame {
    bindings: HashMap<String, Type>,
    parent: Option<Arc<Frame>>,
}

/// Mapping from variable names to their types
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    top: Option<Arc<Frame>>,
}

impl TypeEnv {
    /// Create a new empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// A child environment holding `bindings` on top of `self`.
    ///
    /// When a name occurs more than once in `bindings`, the last occurrence
    /// wins.
    pub fn extend<I>(&self, bindings: I) -> TypeEnv
    where
        I: IntoIterator<Item = (String, Type)>,
    {
        let bindings: HashMap<String, Type> = bindings.into_iter().collect();
        log::debug!(
            "entering scope binding [{}]",
            bindings.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        TypeEnv {
            top: Some(Arc::new(Frame {
                bindings,
                parent: self.top.clone(),
            })),
        }
    }

    /// A child environment with a single extra binding
    pub fn bind(&self, name: impl Into<String>, ty: Type) -> TypeEnv {
        self.extend([(name.into(), ty)])
    }

    /// Look up a variable's type, innermost scope first
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        let mut frame = self.top.as_deref();
        while let Some(current) = frame {
            if let Some(ty) = current.bindings.get(name) {
                return Some(ty);
            }
            frame = current.parent.as_deref();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typechecker::types::ParamType;

    #[test]
    fn test_type_env() {
        let env = TypeEnv::new().bind("x", Type::Number);

        assert_eq!(env.lookup("x"), Some(&Type::Number));
        assert_eq!(env.lookup("y"), None);
        assert_eq!(TypeEnv::new().lookup("x"), None);
    }

    #[test]
    fn test_child_env_sees_parent() {
        let parent = TypeEnv::new().bind("x", Type::Number);
        let child = parent.bind("y", Type::Boolean);

        assert_eq!(child.lookup("x"), Some(&Type::Number));
        assert_eq!(child.lookup("y"), Some(&Type::Boolean));
    }

    #[test]
    fn test_extending_leaves_parent_untouched() {
        let parent = TypeEnv::new().bind("x", Type::Number);
        let child = parent.bind("x", Type::Boolean).bind("z", Type::Number);

        assert_eq!(child.lookup("x"), Some(&Type::Boolean));
        assert_eq!(parent.lookup("x"), Some(&Type::Number));
        assert_eq!(parent.lookup("z"), None);
    }

    #[test]
    fn test_duplicate_names_in_one_scope_last_wins() {
        let env = TypeEnv::new().extend([
            ("x".to_string(), Type::Number),
            ("x".to_string(), Type::Boolean),
        ]);
        assert_eq!(env.lookup("x"), Some(&Type::Boolean));
    }

    #[test]
    fn test_env_is_shareable_across_threads() {
        let f = Type::func(vec![ParamType::new("n", Type::Number)], Type::Number);
        let env = TypeEnv::new().bind("f", f.clone());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let env = env.bind(format!("v{}", i), Type::Boolean);
                std::thread::spawn(move || env.lookup("f").cloned())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(f.clone()));
        }
    }
}
