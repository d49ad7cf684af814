//! quotereel CLI — batch-render quote videos with ffmpeg.
//!
//! Usage:
//!   quotereel generate [OPTIONS]     Render one video per quote row
//!   quotereel preview [OPTIONS]      Print the ffmpeg commands without running them
//!   quotereel check [OPTIONS]        Check ffmpeg and asset availability
//!   quotereel init-config [PATH]     Write a default configuration file

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use quotereel_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "quotereel",
    about = "Batch-generate quote videos from a CSV of quotes",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (JSON); defaults to the standard location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one video per quote row
    Generate {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print each job's ffmpeg command line without running it
    Preview {
        #[command(flatten)]
        overrides: Overrides,

        /// Stop after this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check that ffmpeg and the configured assets are present
    Check {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (defaults to the standard config location)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Per-run overrides of the configuration file.
#[derive(Args, Debug)]
struct Overrides {
    /// Quote file (header line, then `quote,author` rows)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Background image
    #[arg(long)]
    background: Option<PathBuf>,

    /// Audio track
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Font file
    #[arg(long)]
    font: Option<PathBuf>,

    /// Clip duration in seconds
    #[arg(long)]
    duration: Option<u32>,

    /// Quote wrap width in columns
    #[arg(long)]
    wrap_width: Option<usize>,
}

impl Overrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(input) = self.input {
            config.paths.input_file = input;
        }
        if let Some(output) = self.output {
            config.paths.output_dir = output;
        }
        if let Some(background) = self.background {
            config.paths.background_image = background;
        }
        if let Some(audio) = self.audio {
            config.paths.audio_file = audio;
        }
        if let Some(font) = self.font {
            config.paths.font_file = font;
        }
        if let Some(duration) = self.duration {
            config.encoding.duration_secs = duration;
        }
        if let Some(wrap_width) = self.wrap_width {
            config.text.wrap_width = wrap_width;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    quotereel_common::logging::init_logging(&config.logging);
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Generate { overrides } => {
            overrides.apply(&mut config);
            config.validate()?;
            commands::generate::run(&config)
        }
        Commands::Preview { overrides, limit } => {
            overrides.apply(&mut config);
            config.validate()?;
            commands::preview::run(&config, limit)
        }
        Commands::Check { overrides } => {
            overrides.apply(&mut config);
            commands::check::run(&config)
        }
        Commands::InitConfig { path, force } => commands::init_config::run(path, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "quotereel",
            "generate",
            "--input",
            "data/q.csv",
            "--duration",
            "6",
            "--wrap-width",
            "30",
        ]);
        let Commands::Generate { overrides } = cli.command else {
            panic!("expected generate");
        };
        let mut config = AppConfig::default();
        overrides.apply(&mut config);
        assert_eq!(config.paths.input_file, PathBuf::from("data/q.csv"));
        assert_eq!(config.encoding.duration_secs, 6);
        assert_eq!(config.text.wrap_width, 30);
        assert_eq!(config.paths.audio_file, PathBuf::from("music.mp3"));
    }
}
