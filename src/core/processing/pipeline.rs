//! The row-processing pipeline.
//!
//! A single-pass, single-threaded sequential scan: read one CSV row, parse
//! its operand pair, resolve the operation for the run's action, compute,
//! classify, and append one line to exactly one sink. Start and finish
//! markers bracket the scan on both sinks.
//!
//! The pipeline moves `Idle -> Running -> Drained`. `Drained` is terminal:
//! [`Pipeline::run`] consumes the pipeline, so a drained pipeline cannot be
//! reused.
use std::io::Read;

use tracing::debug;

use crate::core::processing::parser::parse_row;
use crate::core::processing::registry::OperationRegistry;
use crate::error::Result;
use crate::io::sinks::LogSink;
use crate::types::Action;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PipelineState {
    Idle,
    Running,
    Drained,
}

/// Counters for one completed run.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct RunReport {
    /// Rows read from the input file.
    pub rows: usize,
    /// Rows whose result was positive, written to the result sink.
    pub valid: usize,
    /// Rows whose result was non-positive, written to the diagnostic sink.
    pub invalid: usize,
    /// Rows skipped because no operation was registered for the action.
    pub skipped: usize,
}

pub struct Pipeline<'r> {
    registry: &'r OperationRegistry,
    result_sink: LogSink,
    diagnostic_sink: LogSink,
    state: PipelineState,
}

impl<'r> Pipeline<'r> {
    pub fn new(
        registry: &'r OperationRegistry,
        result_sink: LogSink,
        diagnostic_sink: LogSink,
    ) -> Self {
        Self {
            registry,
            result_sink,
            diagnostic_sink,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Drain the CSV reader through the pipeline.
    ///
    /// Writes the start marker to both sinks, processes every row in input
    /// order, then writes the finish marker to both sinks. An unregistered
    /// action skips rows silently: no sink write, no error.
    pub fn run<R: Read>(mut self, action: Action, mut rows: csv::Reader<R>) -> Result<RunReport> {
        self.state = PipelineState::Running;
        self.write_both(&format!("Started {action} operation"))?;

        let mut report = RunReport::default();
        let mut record = csv::StringRecord::new();

        while rows.read_record(&mut record)? {
            report.rows += 1;

            let (value1, value2) = parse_row(record.get(0).unwrap_or(""));

            let Some(operation) = self.registry.lookup(action) else {
                debug!("no operation registered for {action}, skipping row");
                report.skipped += 1;
                continue;
            };

            let result = operation.compute(value1, value2);

            if operation.is_valid(result) {
                self.result_sink
                    .write_line(&format!("{value1};{value2};{result}"))?;
                report.valid += 1;
            } else {
                self.diagnostic_sink
                    .write_line(&format!("Numbers {value1} and {value2} are wrong"))?;
                report.invalid += 1;
            }
        }

        self.state = PipelineState::Drained;
        self.write_both(&format!("Finished {action} operation"))?;

        debug!(
            "drained {} rows: {} valid, {} invalid, {} skipped",
            report.rows, report.valid, report.invalid, report.skipped
        );
        Ok(report)
    }

    fn write_both(&mut self, line: &str) -> Result<()> {
        self.result_sink.write_line(line)?;
        self.diagnostic_sink.write_line(line)?;
        Ok(())
    }
}
