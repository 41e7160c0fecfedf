//! Command Line Interface (CLI) layer for paircalc.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) that wires user-provided options to the library
//! functionality exposed via `paircalc::api`.
//!
//! If you are embedding paircalc into another application, prefer using
//! the high-level `paircalc::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
