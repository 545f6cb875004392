//! # Checkin Architecture
//!
//! Checkin is the **validation and report engine** behind an event registration and
//! check-in front end. It is a library that happens to have a CLI: the same core could
//! sit behind a web form, a kiosk or a batch job.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, saves export files     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads records, applies the status policy                 │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - export, validate, stats, search, format, status, config  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validation, format, forms, transform, stats, report) │
//! │  - Pure, deterministic functions over plain values          │
//! │  - No clock, no I/O, no global mutable state                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records enter through a [`source::RecordSource`]; the core never issues network
//! calls and never writes records back.
//!
//! ## Determinism
//!
//! Nothing in the core reads the current time. Birth-date checks take `today`, the HTML
//! report takes its "generated at" stamp, and every displayed timestamp is rendered at
//! the UTC offset from [`config::CheckinConfig`]. Regexes and the report template are
//! compiled once into immutable statics.
//!
//! ## Module Overview
//!
//! - [`validation`]: field predicates (phone, email, name, cédula, age, free text)
//! - [`format`]: keystroke formatters for phone and cédula
//! - [`messages`]: the closed set of validation error kinds and their Spanish text
//! - [`forms`]: tagged field kinds, required/optional rules, verdicts, form reducer
//! - [`model`]: `Attendee` and the two status vocabularies
//! - [`transform`]: backend record ↔ attendee mapping and outbound request bodies
//! - [`stats`]: dashboard aggregates and search
//! - [`report`]: CSV and printable HTML builders
//! - [`source`]: where records come from
//! - [`commands`] / [`api`]: the command layer and its facade
//! - [`config`]: report and mapping settings
//! - [`error`]: error types
//! - `cli`: argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod messages;
pub mod model;
pub mod report;
pub mod source;
pub mod stats;
pub mod transform;
pub mod validation;
