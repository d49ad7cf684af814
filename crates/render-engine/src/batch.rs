//! Sequential batch driver: one row, one job, one encoder run.

use chrono::Utc;

use quotereel_common::config::AppConfig;
use quotereel_common::error::QuotereelResult;
use quotereel_model::record::{QuoteRecord, RenderJob};
use quotereel_model::source::Row;

use crate::backend::{RenderBackend, RenderOutcome};
use crate::command::FfmpegCommand;
use crate::overlay::OverlaySpec;
use crate::report::{ensure_output_dir, RunReporter, RunSummary};

/// Lifecycle of a single job. `Failed` is terminal but does not stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Formatting,
    Invoking,
    Succeeded,
    Failed,
}

/// Everything needed to run one job.
#[derive(Debug, Clone)]
pub struct PlannedJob {
    pub job: RenderJob,
    pub overlay: OverlaySpec,
    pub command: FfmpegCommand,
}

impl PlannedJob {
    pub fn new(record: QuoteRecord, index: usize, config: &AppConfig) -> Self {
        let job = RenderJob::new(record, index, config);
        let overlay = OverlaySpec::for_record(&job.record, config);
        let command = FfmpegCommand::for_job(&job, &overlay.to_filter(), config);
        Self {
            job,
            overlay,
            command,
        }
    }
}

/// Drives rows through formatting, rendering, and reporting.
pub struct BatchRunner<'a, B> {
    config: &'a AppConfig,
    backend: B,
}

impl<'a, B: RenderBackend> BatchRunner<'a, B> {
    pub fn new(config: &'a AppConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Process every row in order.
    ///
    /// Malformed rows and encoder failures are reported and skipped. Errors
    /// from the row source, the reporter, or a backend that cannot start
    /// abort the run.
    pub fn run<I, P>(&mut self, rows: I, reporter: &mut P) -> QuotereelResult<RunSummary>
    where
        I: IntoIterator<Item = QuotereelResult<Row>>,
        P: RunReporter + ?Sized,
    {
        let output_dir = self.config.paths.output_dir.clone();
        let started_at = Utc::now();
        ensure_output_dir(&output_dir)?;
        reporter.run_started(&output_dir)?;

        tracing::info!(
            backend = self.backend.name(),
            output_dir = %output_dir.display(),
            "Starting batch"
        );

        let mut summary = RunSummary {
            rows: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            output_dir,
            started_at,
            finished_at: started_at,
        };

        for row in rows {
            let row = row?;
            summary.rows += 1;
            match row {
                Row::Malformed { index, line } => {
                    tracing::warn!(index, line = %line, "Skipping row without author delimiter");
                    reporter.row_skipped(index, &line)?;
                    summary.skipped += 1;
                }
                Row::Record { index, record } => {
                    match self.run_job(index, record, reporter)? {
                        JobState::Succeeded => summary.succeeded += 1,
                        _ => summary.failed += 1,
                    }
                }
            }
        }

        summary.finished_at = Utc::now();
        tracing::info!(
            rows = summary.rows,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            elapsed_secs = summary.elapsed_secs(),
            "Batch finished"
        );
        reporter.run_finished(&summary)?;
        Ok(summary)
    }

    fn run_job<P>(
        &mut self,
        index: usize,
        record: QuoteRecord,
        reporter: &mut P,
    ) -> QuotereelResult<JobState>
    where
        P: RunReporter + ?Sized,
    {
        let mut state = JobState::Pending;
        reporter.job_started(index, &record.author)?;

        advance(&mut state, JobState::Formatting, index);
        let planned = PlannedJob::new(record, index, self.config);

        advance(&mut state, JobState::Invoking, index);
        match self.backend.render(&planned.command)? {
            RenderOutcome::Success => {
                advance(&mut state, JobState::Succeeded, index);
                reporter.job_succeeded(index, &planned.job.output_path)?;
            }
            RenderOutcome::Failure {
                exit_code,
                diagnostic,
            } => {
                advance(&mut state, JobState::Failed, index);
                tracing::warn!(index, exit_code = ?exit_code, "Render failed");
                reporter.job_failed(index, &diagnostic)?;
            }
        }

        Ok(state)
    }
}

fn advance(state: &mut JobState, next: JobState, index: usize) {
    tracing::debug!(index, from = ?*state, to = ?next, "Job state");
    *state = next;
}
