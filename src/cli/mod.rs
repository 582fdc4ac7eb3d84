//! Command-line interface for tinyts
//!
//! `tinyts '<program>' --mode <dialect>` checks a program and prints its type.
//! `tinyts --explain <CODE>` prints the long-form text for a diagnostic code.

use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::diagnostics::error_codes;
use crate::typechecker::{check_source, Dialect, Type};

/// Path reported in diagnostics for program text given on the command line
const INPUT_PATH: &str = "<input>";

/// tinyts - a type checker for a small TypeScript-like language
#[derive(Parser, Debug)]
#[command(name = "tinyts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Program text to check
    #[arg(value_name = "SOURCE", required_unless_present = "explain")]
    pub source: Option<String>,

    /// Dialect to check the program in
    #[arg(long, value_enum, required_unless_present = "explain")]
    pub mode: Option<Dialect>,

    /// Print the result or the diagnostic as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log checker progress (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Explain a diagnostic code (e.g. E1009) and exit
    #[arg(long, value_name = "CODE", conflicts_with = "source")]
    pub explain: Option<String>,
}

/// Everything a run prints, and how it exits
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub success: bool,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Outcome {
            stdout: Some(stdout),
            stderr: None,
            success: true,
        }
    }

    fn failure_stdout(stdout: String) -> Self {
        Outcome {
            stdout: Some(stdout),
            stderr: None,
            success: false,
        }
    }

    fn failure_stderr(stderr: String) -> Self {
        Outcome {
            stdout: None,
            stderr: Some(stderr),
            success: false,
        }
    }
}

#[derive(Serialize)]
struct TypeReport<'a> {
    #[serde(rename = "type")]
    ty: &'a Type,
    display: String,
}

impl Cli {
    /// Compute what this invocation prints without touching the terminal
    pub fn execute(&self) -> Outcome {
        if let Some(code) = &self.explain {
            return explain(code);
        }

        // clap guarantees both are present when `--explain` is absent
        let (Some(source), Some(mode)) = (&self.source, self.mode) else {
            return Outcome::failure_stderr("error: SOURCE and --mode are required".to_string());
        };

        match check_source(source, Path::new(INPUT_PATH), mode) {
            Ok(ty) if self.json => {
                let report = TypeReport {
                    ty: &ty,
                    display: ty.to_string(),
                };
                match serde_json::to_string(&report) {
                    Ok(json) => Outcome::success(json),
                    Err(e) => Outcome::failure_stderr(format!("error: failed to encode type: {}", e)),
                }
            }
            Ok(ty) => Outcome::success(ty.to_string()),
            Err(diagnostic) if self.json => Outcome::failure_stdout(diagnostic.to_json()),
            Err(diagnostic) => {
                Outcome::failure_stderr(diagnostic.to_human_readable(source).trim_end().to_string())
            }
        }
    }
}

fn explain(code: &str) -> Outcome {
    match error_codes::explain(code) {
        Some(text) => Outcome::success(format!("{}: {}", code.to_ascii_uppercase(), text)),
        None => Outcome::failure_stderr(format!(
            "Unknown error code: {}\n\nValid error codes:\n  E0xxx  Syntax errors (E0001, E0008, E0011-E0013)\n  E1xxx  Type errors (E1001-E1011)",
            code
        )),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Parse the command line, check the program and report
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{:?}", cli);

    let outcome = cli.execute();
    if let Some(out) = &outcome.stdout {
        println!("{}", out);
    }
    if let Some(err) = &outcome.stderr {
        eprintln!("{}", err);
    }

    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
