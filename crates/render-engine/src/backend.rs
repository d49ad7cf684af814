//! Render backends: where an [`FfmpegCommand`] actually runs.

use std::process::{Command, Stdio};

use quotereel_common::error::{QuotereelError, QuotereelResult};

use crate::command::FfmpegCommand;

/// Result of one encoder run. A non-zero exit is an expected outcome, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Success,
    Failure {
        /// `None` when the process was killed by a signal.
        exit_code: Option<i32>,
        /// Captured stderr, decoded lossily.
        diagnostic: String,
    },
}

/// Trait for render backends.
pub trait RenderBackend {
    /// Run the command to completion.
    ///
    /// Returns `Err` only when the command could not be run at all.
    fn render(&mut self, command: &FfmpegCommand) -> QuotereelResult<RenderOutcome>;

    /// Check if this backend is available on the system.
    fn is_available(&self) -> bool;

    /// Backend name.
    fn name(&self) -> &str;
}

/// Runs ffmpeg as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct FfmpegBackend {
    program: String,
}

impl FfmpegBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RenderBackend for FfmpegBackend {
    fn render(&mut self, command: &FfmpegCommand) -> QuotereelResult<RenderOutcome> {
        let args = command.build_args();
        tracing::debug!(program = command.program(), args = ?args, "Running ffmpeg");

        let start = std::time::Instant::now();
        let output = Command::new(command.program())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                QuotereelError::render(format!("Failed to start {}: {e}", command.program()))
            })?;

        tracing::debug!(
            status = %output.status,
            elapsed_secs = start.elapsed().as_secs_f64(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "ffmpeg exited"
        );

        if output.status.success() {
            Ok(RenderOutcome::Success)
        } else {
            Ok(RenderOutcome::Failure {
                exit_code: output.status.code(),
                diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    fn is_available(&self) -> bool {
        command_exists(&self.program)
    }

    fn name(&self) -> &str {
        "ffmpeg"
    }
}

/// Whether `binary` can be launched, either as a path or through `PATH`.
///
/// The name is spawned directly with `-version`, never through a shell. Any
/// exit status counts as available; only a failed spawn does not.
pub fn command_exists(binary: &str) -> bool {
    if binary.trim().is_empty() {
        return false;
    }
    Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        let mut backend = FfmpegBackend::new("true");
        let outcome = backend.render(&FfmpegCommand::new("true", "x.mp4")).unwrap();
        assert_eq!(outcome, RenderOutcome::Success);
    }

    #[test]
    fn test_non_zero_exit_captures_stderr() {
        // sh -c '<script>' out.mp4
        let command = FfmpegCommand::new("sh", "out.mp4")
            .overwrite(false)
            .output_arg("-c")
            .output_arg("echo 'Unsupported codec' >&2; echo ignored; exit 1");
        let outcome = FfmpegBackend::new("sh").render(&command).unwrap();

        match outcome {
            RenderOutcome::Failure {
                exit_code,
                diagnostic,
            } => {
                assert_eq!(exit_code, Some(1));
                assert_eq!(diagnostic.trim(), "Unsupported codec");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_stderr_is_decoded_lossily() {
        let command = FfmpegCommand::new("sh", "out.mp4")
            .overwrite(false)
            .output_arg("-c")
            .output_arg("printf 'bad \\377 byte' >&2; exit 3");
        let outcome = FfmpegBackend::new("sh").render(&command).unwrap();
        match outcome {
            RenderOutcome::Failure {
                exit_code,
                diagnostic,
            } => {
                assert_eq!(exit_code, Some(3));
                assert!(diagnostic.starts_with("bad "));
                assert!(diagnostic.ends_with(" byte"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut backend = FfmpegBackend::new("quotereel-no-such-binary");
        let err = backend
            .render(&FfmpegCommand::new("quotereel-no-such-binary", "x.mp4"))
            .unwrap_err();
        assert!(matches!(err, QuotereelError::Render { .. }));
        assert!(!backend.is_available());
    }

    #[test]
    fn test_command_exists_finds_program_on_path() {
        assert!(command_exists("sh"));
        assert!(!command_exists(""));
    }

    #[test]
    fn test_command_exists_does_not_run_shell_text() {
        let marker = std::env::temp_dir().join(format!(
            "quotereel-command-exists-{}",
            std::process::id()
        ));
        std::fs::remove_file(&marker).ok();

        let name = format!("true; touch {}", marker.display());
        assert!(!command_exists(&name));
        assert!(!marker.exists());
    }
}
