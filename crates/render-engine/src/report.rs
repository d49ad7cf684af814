//! Human-readable run reporting.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use quotereel_common::error::QuotereelResult;

/// Counts and timing for a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Non-header, non-blank rows seen.
    pub rows: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Malformed rows.
    pub skipped: usize,
    pub output_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Receives pipeline events in row order.
pub trait RunReporter {
    fn run_started(&mut self, _output_dir: &Path) -> QuotereelResult<()> {
        Ok(())
    }

    fn job_started(&mut self, index: usize, author: &str) -> QuotereelResult<()>;

    /// A row without a delimiter was dropped.
    fn row_skipped(&mut self, index: usize, line: &str) -> QuotereelResult<()>;

    fn job_succeeded(&mut self, index: usize, output: &Path) -> QuotereelResult<()>;

    fn job_failed(&mut self, index: usize, diagnostic: &str) -> QuotereelResult<()>;

    fn run_finished(&mut self, summary: &RunSummary) -> QuotereelResult<()>;
}

/// Plain-text reporter, stdout by default.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunReporter for ConsoleReporter<W> {
    fn job_started(&mut self, index: usize, author: &str) -> QuotereelResult<()> {
        writeln!(self.out, "Generating video {index}: {author}")?;
        Ok(())
    }

    fn row_skipped(&mut self, index: usize, line: &str) -> QuotereelResult<()> {
        writeln!(
            self.out,
            "WARNING: Line {index} is not in the correct format and will be skipped: {line}"
        )?;
        Ok(())
    }

    fn job_succeeded(&mut self, index: usize, _output: &Path) -> QuotereelResult<()> {
        writeln!(self.out, "Video {index} created successfully!")?;
        Ok(())
    }

    fn job_failed(&mut self, index: usize, diagnostic: &str) -> QuotereelResult<()> {
        writeln!(self.out, "ERROR: Could not create video {index}.")?;
        writeln!(self.out, "FFmpeg error message:")?;
        writeln!(self.out, "{}", diagnostic.trim_end())?;
        Ok(())
    }

    fn run_finished(&mut self, summary: &RunSummary) -> QuotereelResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Process finished!")?;
        writeln!(
            self.out,
            "{} succeeded, {} failed, {} skipped",
            summary.succeeded, summary.failed, summary.skipped
        )?;
        writeln!(
            self.out,
            "Your videos have been saved to the '{}' folder.",
            summary.output_dir.display()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Create the output directory if it is missing.
pub fn ensure_output_dir(path: &Path) -> QuotereelResult<()> {
    if !path.is_dir() {
        tracing::info!(path = %path.display(), "Creating output directory");
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}
