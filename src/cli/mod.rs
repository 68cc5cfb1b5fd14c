//! Command Line Interface (CLI) layer for tilecut.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for extract and preview runs over
//! the built-in terrain sheets.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
