//! Stream driver feeding record lines through the converter.
//!
//! The driver owns no global state: input and output are handed in by the
//! caller, so tests can run it over in-memory buffers.

use std::io::{self, BufRead, Write};

use log::{debug, trace};
use thiserror::Error;

use crate::{Mode, convert};

/// Counters describing a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input, excluding the final empty read.
    pub lines_read: usize,
    /// Rows written to the output, header included.
    pub rows_written: usize,
    /// Lines that produced no data row.
    pub lines_skipped: usize,
}

/// I/O failures that stop a run.
///
/// Malformed records never surface here; they are skipped by the converter.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading the next line from the input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    /// Writing or flushing a row failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

fn write_row<W: Write>(output: &mut W, row: &str) -> Result<(), RunError> {
    output
        .write_all(row.as_bytes())
        .and_then(|()| output.write_all(b"\n"))
        .map_err(RunError::Write)
}

/// Convert every line of `input` and write the rows to `output`.
///
/// The first line is converted twice: once for the header row and once for
/// its own data row. Every later line yields at most one data row. The loop
/// stops at the first empty read. Bytes that are not valid UTF-8 are replaced
/// rather than treated as an error.
///
/// # Errors
/// Returns [`RunError`] if reading from `input` or writing to `output` fails.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let summary = peek2csv::run(Cursor::new("name: alice, age: 30\n"), &mut out)?;
/// assert_eq!(out, b"name,age\nalice,30\n");
/// assert_eq!(summary.rows_written, 2);
/// # Ok::<(), peek2csv::RunError>(())
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Summary, RunError> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).map_err(RunError::Read)?;
        if read == 0 {
            break;
        }
        summary.lines_read += 1;
        let line = String::from_utf8_lossy(&buf);
        trace!("line {}: {:?}", summary.lines_read, line);

        if summary.lines_read == 1 {
            if let Some(header) = convert(&line, Mode::Header) {
                write_row(&mut output, &header)?;
                summary.rows_written += 1;
            }
        }

        match convert(&line, Mode::Data) {
            Some(row) => {
                write_row(&mut output, &row)?;
                summary.rows_written += 1;
            }
            None => {
                debug!("line {} produced no row", summary.lines_read);
                summary.lines_skipped += 1;
            }
        }
    }

    output.flush().map_err(RunError::Write)?;
    Ok(summary)
}
