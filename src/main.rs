//! CLI entry point for the `peek2csv` tool.
//!
//! Reads records from standard input and writes CSV rows to standard output.
//! Diagnostics go to standard error and are controlled through `RUST_LOG`.

use std::io::{self, BufWriter};

use log::{error, info};
use peek2csv::{RunError, run};

fn main() {
    env_logger::init();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match run(stdin, stdout) {
        Ok(summary) => info!(
            "read {} lines, wrote {} rows, skipped {} lines",
            summary.lines_read, summary.rows_written, summary.lines_skipped
        ),
        Err(RunError::Write(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            info!("output closed early: {err}");
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
