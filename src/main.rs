//! tinyts CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    tinyts::cli::run()
}
