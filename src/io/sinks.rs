//! Append-only log sinks.
//!
//! Each run owns two sinks: the result sink (valid rows) and the diagnostic
//! sink (wrong rows). A sink is created by removing any file left over from a
//! previous run and opening fresh in append mode, so a run always starts from
//! empty sinks. Every write appends one line with a CRLF terminator and
//! flushes, preserving row order. The underlying file closes on drop on all
//! exit paths.
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct LogSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogSink {
    /// Truncate-and-open: delete the previous run's file if present, create
    /// parent directories, then open in append mode.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Append one line plus CRLF and flush it to disk.
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\r\n")?;
        self.writer.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
