//! Render every quote row to a video.

use quotereel_common::config::AppConfig;
use quotereel_model::source::RowSource;
use quotereel_render_engine::{BatchRunner, ConsoleReporter, FfmpegBackend, RenderBackend};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let backend = FfmpegBackend::new(&config.encoding.ffmpeg_bin);
    if !backend.is_available() {
        anyhow::bail!(
            "{} not found. Install ffmpeg or set encoding.ffmpeg_bin in the config.",
            config.encoding.ffmpeg_bin
        );
    }

    let rows = RowSource::open(&config.paths.input_file, config.text.delimiter)
        .map_err(|e| anyhow::anyhow!("Failed to open quote file: {e}"))?;

    let mut reporter = ConsoleReporter::stdout();
    let mut runner = BatchRunner::new(config, backend);
    runner.run(rows, &mut reporter)?;

    Ok(())
}
