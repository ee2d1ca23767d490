use std::process::ExitCode;

use clap::Parser;

use pypiforge::cli::{self, Args};
use pypiforge::error::Error;

fn main() -> ExitCode {
    let args = Args::parse();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            // A conflicting destination file is reported, not propagated;
            // re-running with -f completes the tree.
            Some(Error::FileExists { .. }) => {
                cli::print_error(&err.to_string());
                ExitCode::SUCCESS
            }
            _ => {
                cli::print_error(&format!("{err:#}"));
                ExitCode::FAILURE
            }
        },
    }
}
