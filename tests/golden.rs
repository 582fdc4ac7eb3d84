//! Golden program tests
//!
//! Every `tests/programs/<mode>/*.ts` file starts with an `// expect:` header
//! naming either the rendered type of the program or `error <CODE>`. The file
//! is checked in the dialect named by its directory.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

use tinyts::prelude::{check_source, Diagnostic, Dialect};

const EXPECT_PREFIX: &str = "// expect:";

/// Collect the `.ts` programs of one dialect, sorted for stable output
fn programs(dialect: Dialect) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("programs")
        .join(dialect.name());

    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", dir.display(), e))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "ts"))
        .collect();
    paths.sort();
    paths
}

fn expectation(path: &Path, source: &str) -> String {
    source
        .lines()
        .next()
        .and_then(|line| line.strip_prefix(EXPECT_PREFIX))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| panic!("{} has no `{}` header", path.display(), EXPECT_PREFIX))
}

fn outcome(path: &Path, source: &str, dialect: Dialect) -> String {
    let result: Result<_, Diagnostic> = check_source(source, path, dialect);
    match result {
        Ok(ty) => ty.to_string(),
        Err(diagnostic) => format!("error {}", diagnostic.code),
    }
}

fn run_golden_tests(dialect: Dialect) {
    let paths = programs(dialect);
    assert!(!paths.is_empty(), "no golden programs for `{}`", dialect);

    let mut expected = Vec::new();
    let mut actual = Vec::new();
    for path in &paths {
        let source = fs::read_to_string(path).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        expected.push(format!("{}: {}", name, expectation(path, &source)));
        actual.push(format!("{}: {}", name, outcome(path, &source, dialect)));
    }

    assert_eq!(expected.join("\n"), actual.join("\n"));
}

#[test]
fn golden_arith() {
    run_golden_tests(Dialect::Arith);
}

#[test]
fn golden_basic() {
    run_golden_tests(Dialect::Basic);
}

#[test]
fn golden_obj() {
    run_golden_tests(Dialect::Obj);
}

#[test]
fn golden_rec_func() {
    run_golden_tests(Dialect::RecFunc);
}

#[test]
fn golden_sub() {
    run_golden_tests(Dialect::Sub);
}

/// Well-typed programs keep their type in the later dialects that still have
/// every construct they use
#[test]
fn golden_programs_agree_with_later_dialects() {
    let later = [
        (Dialect::Basic, vec![Dialect::Obj, Dialect::RecFunc, Dialect::Sub]),
        (Dialect::Obj, vec![Dialect::Sub]),
    ];
    for (dialect, others) in later {
        for path in programs(dialect) {
            let source = fs::read_to_string(&path).unwrap();
            let expected = expectation(&path, &source);
            // rec-func and sub have no conditional
            if expected.starts_with("error") || source.contains('?') {
                continue;
            }
            for other in &others {
                assert_eq!(
                    outcome(&path, &source, *other),
                    expected,
                    "{} in `{}` mode",
                    path.display(),
                    other
                );
            }
        }
    }
}
