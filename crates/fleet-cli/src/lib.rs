//! # Fleet CLI
//!
//! Command parsing and execution shared by the interactive REPL, the
//! `run` script runner and the `demo` subcommand. The binary lives in
//! `main.rs`; everything here is testable without a terminal.

pub mod commands;
pub mod exec;
pub mod interactive;
