//! Dry run: show what `generate` would execute.

use quotereel_common::config::AppConfig;
use quotereel_model::source::{Row, RowSource};
use quotereel_render_engine::PlannedJob;

pub fn run(config: &AppConfig, limit: Option<usize>) -> anyhow::Result<()> {
    let rows = RowSource::open(&config.paths.input_file, config.text.delimiter)
        .map_err(|e| anyhow::anyhow!("Failed to open quote file: {e}"))?;

    println!("Previewing jobs from: {}", config.paths.input_file.display());

    for row in rows.take(limit.unwrap_or(usize::MAX)) {
        match row? {
            Row::Record { index, record } => {
                let planned = PlannedJob::new(record, index, config);
                println!();
                println!("# Row {index}: {}", planned.job.record.author);
                println!("#   -> {}", planned.job.output_path.display());
                println!("{}", planned.command.command_line());
            }
            Row::Malformed { index, line } => {
                println!();
                println!("# Row {index}: skipped (no delimiter): {line}");
            }
        }
    }

    Ok(())
}
