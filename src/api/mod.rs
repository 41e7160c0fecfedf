//! High-level, ergonomic library API: validate an input file and run one
//! batch through the pipeline. Prefer these entrypoints over the low-level
//! processing modules when embedding paircalc in another application.
use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::core::params::RunParams;
use crate::core::processing::pipeline::{Pipeline, RunReport};
use crate::core::processing::registry::OperationRegistry;
use crate::error::{Error, Result};
use crate::io::sinks::LogSink;

/// Validate the input data file: it must exist and be readable.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingDataFile {
            path: path.to_path_buf(),
        });
    }

    match File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Error::UnreadableDataFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Run one batch: validate the input, truncate and open both sinks, then
/// stream every row of `input` through the pipeline for `params.action`.
///
/// Configuration and resource failures return before any log line is
/// written. Per-row "wrongness" never fails the run; it lands in the
/// diagnostic sink and is counted in the returned [`RunReport`].
pub fn run_csv(input: &Path, params: &RunParams) -> Result<RunReport> {
    validate_input(input)?;

    let result_sink = LogSink::create(&params.result_log).map_err(|e| Error::SinkOpen {
        name: "Result File",
        source: e,
    })?;
    let diagnostic_sink = LogSink::create(&params.diagnostic_log).map_err(|e| Error::SinkOpen {
        name: "Log File",
        source: e,
    })?;

    let registry = OperationRegistry::with_builtins();
    let rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(input)?);

    info!("Starting {} run over {:?}", params.action, input);

    let report = Pipeline::new(&registry, result_sink, diagnostic_sink).run(params.action, rows)?;

    info!(
        "Finished {} run: {} rows, {} valid, {} invalid",
        params.action, report.rows, report.valid, report.invalid
    );

    Ok(report)
}
