use std::path::{Path, PathBuf};

use quotereel_common::config::AppConfig;
use quotereel_common::error::QuotereelResult;
use quotereel_model::source::RowSource;
use quotereel_render_engine::{
    BatchRunner, ConsoleReporter, FfmpegCommand, RenderBackend, RenderOutcome,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("quotes.csv")
}

/// Fails the job whose output ends with `fail_suffix`, succeeds otherwise.
struct FakeEncoder {
    fail_suffix: &'static str,
    filters: Vec<String>,
}

impl RenderBackend for FakeEncoder {
    fn render(&mut self, command: &FfmpegCommand) -> QuotereelResult<RenderOutcome> {
        let args = command.build_args();
        let vf = args.iter().position(|a| a == "-vf").expect("filter flag present");
        self.filters.push(args[vf + 1].clone());

        if command.output().to_string_lossy().ends_with(self.fail_suffix) {
            Ok(RenderOutcome::Failure {
                exit_code: Some(1),
                diagnostic: "Unsupported codec".to_string(),
            })
        } else {
            Ok(RenderOutcome::Success)
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "fake"
    }
}

fn config_for(out_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.paths.input_file = fixture_path();
    config.paths.output_dir = out_dir.to_path_buf();
    config
}

#[test]
fn fixture_batch_reports_every_row() {
    quotereel_common::logging::init_default_logging();

    let out_dir = std::env::temp_dir().join(format!("quotereel-fixture-{}", std::process::id()));
    let config = config_for(&out_dir);
    let rows = RowSource::open(&config.paths.input_file, config.text.delimiter)
        .expect("fixture should open");

    let backend = FakeEncoder {
        fail_suffix: "quote_video_2.mp4",
        filters: Vec::new(),
    };
    let mut runner = BatchRunner::new(&config, backend);
    let mut reporter = ConsoleReporter::new(Vec::new());

    let summary = runner.run(rows, &mut reporter).expect("batch should finish");
    let printed = String::from_utf8(reporter.into_inner()).unwrap();

    assert_eq!(summary.rows, 4);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);

    assert!(printed.contains("Generating video 1: Steve Jobs\nVideo 1 created successfully!\n"));
    assert!(printed.contains(
        "Generating video 2: Albert Einstein\nERROR: Could not create video 2.\nFFmpeg error message:\nUnsupported codec\n"
    ));
    assert!(printed.contains(
        "WARNING: Line 3 is not in the correct format and will be skipped: Just a quote with no author\n"
    ));
    assert!(printed.contains("Generating video 4: John Lennon\nVideo 4 created successfully!\n"));
    assert!(printed.contains("Process finished!"));

    let filters = &runner.backend().filters;
    assert_eq!(filters.len(), 3);
    assert!(filters[0].contains("text='The only way to do great work is to\nlove what you do'"));
    assert!(filters[0].contains("text='- Steve Jobs'"));
    assert!(filters[1].contains("text='In the middle of difficulty lies\nopportunity'"));
    assert!(filters[2].contains("text='Life is what happens\\: to you, while\nyou'\\''re busy"));

    assert!(out_dir.is_dir());
    std::fs::remove_dir_all(&out_dir).ok();
}
