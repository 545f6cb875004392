//! # Checkin CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only runs
//! it and turns an error into a message on stderr and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
