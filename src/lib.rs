#![doc = r#"
paircalc — a batch calculator over CSV files of numeric pairs.

Given an arithmetic action (plus, minus, multiply, division) and a CSV file
whose rows carry two integers in the first field (`"72;-58"`), paircalc
streams each row through a single-pass pipeline: parse the operand pair,
compute the result, classify it, and append one line to exactly one of two
append-only sinks. Valid results (strictly positive) go to the result log as
`v1;v2;result`; everything else goes to the diagnostic log as
`Numbers v1 and v2 are wrong`. Start and finish markers bracket every run on
both sinks, and both sinks are truncated before each run.

The crate powers the paircalc CLI and can be embedded in your own Rust
applications through the library API.

Quick start: run a batch to log files
-------------------------------------
```rust,no_run
use std::path::Path;
use paircalc::{Action, RunParams, run_csv};

fn main() -> paircalc::Result<()> {
    let params = RunParams {
        action: Action::Division,
        result_log: "storage/result.csv".into(),
        diagnostic_log: "storage/log.txt".into(),
    };

    let report = run_csv(Path::new("numbers.csv"), &params)?;
    println!(
        "rows={} valid={} invalid={}",
        report.rows, report.valid, report.invalid
    );
    Ok(())
}
```

Custom operations
-----------------
The pipeline dispatches through an [`OperationRegistry`]; the built-in table
maps each [`Action`] to one of the four arithmetic operations. The
[`Operation`] trait is public, so embedders driving the pipeline directly can
register their own implementations.

Error handling
--------------
All public functions return `paircalc::Result<T>`. Configuration failures
(wrong action, missing or unreadable input, sinks that cannot be opened)
surface as [`Error`] variants before any log line is written. Per-row
"wrongness" — division by zero, non-positive results — is data, not an
error: the scan continues and the row lands in the diagnostic sink.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the operation set, registry, row parser, and pipeline.
- [`io`] — append-only log sinks.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::RunParams;
pub use crate::error::{Error, Result};
pub use crate::types::Action;

// Processing primitives
pub use crate::core::processing::ops::{Division, Minus, Multiply, Operation, Plus};
pub use crate::core::processing::parser::parse_row;
pub use crate::core::processing::pipeline::{Pipeline, PipelineState, RunReport};
pub use crate::core::processing::registry::OperationRegistry;

// Sinks
pub use crate::io::sinks::LogSink;

// High-level API re-exports
pub use crate::api::{run_csv, validate_input};
