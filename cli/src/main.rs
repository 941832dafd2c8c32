//! Command-line entry point
//!
//! Takes no arguments and reads no input: one invocation prints exactly one
//! labeled 128-character sequence to stdout and exits 0. The only failure
//! path is an unavailable entropy source, which exits 1 with a diagnostic on
//! stderr.

use std::process::ExitCode;

use bitseq_core::generate_from_entropy;

fn main() -> ExitCode {
    match generate_from_entropy() {
        Ok(sequence) => {
            println!("Unique binary sequence: {sequence}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
