//! Command-line runner: `architecture-lint [BACKEND_DIR]`.
//!
//! Without an argument the backend directory is looked up from the current
//! directory upwards, then from this tool's manifest directory upwards.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use architecture_lint::{BACKEND_DIR, lint_backend_sources};

fn main() -> ExitCode {
    let Some(backend_dir) = std::env::args_os().nth(1).map(PathBuf::from).or_else(locate_backend)
    else {
        let _ = writeln!(
            io::stderr().lock(),
            "no `{BACKEND_DIR}/Cargo.toml` found above the current or manifest directory"
        );
        return ExitCode::FAILURE;
    };
    match lint_backend_sources(&backend_dir) {
        Ok(summary) => {
            let _ = writeln!(io::stdout().lock(), "{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "{err}");
            ExitCode::FAILURE
        }
    }
}

fn locate_backend() -> Option<PathBuf> {
    let starts = [
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    starts.into_iter().flatten().find_map(|start| {
        start
            .ancestors()
            .map(|dir| dir.join(BACKEND_DIR))
            .find(|candidate| candidate.join("Cargo.toml").is_file())
    })
}
