//! # CLI Behavior
//!
//! This is **one possible client** for checkin, not the application itself. It is the
//! only place that knows about terminal I/O, exit codes and where export files land.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Commands
//!
//! - `validate`, `format`, `status`: single values, no records needed
//! - `list`, `export`, `stats`, `search`: read a JSON records file given with `--input`
//! - `config`: show or change `config.json`
//!
//! Running `checkin` with no command prints the grouped help.
//!
//! `export` writes to the configured file name unless `--output` says otherwise;
//! `--output -` streams the artifact to stdout. Logs always go to stderr
//! (`-v` or `CHECKIN_LOG=debug`).
//!
//! A failing `validate` exits non-zero after printing every field verdict.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, logging, and one handler per command
//! - `render`: output formatting (tables, colors, verdicts)
//! - `setup`: argument parsing via clap, help text

mod commands;
mod render;
pub mod setup;

pub use commands::run;
