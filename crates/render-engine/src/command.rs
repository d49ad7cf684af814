//! FFmpeg command builder.

use std::path::{Path, PathBuf};

use quotereel_common::config::AppConfig;
use quotereel_model::record::RenderJob;

/// Builder for one ffmpeg invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    /// Executable name or path
    program: String,
    /// Input arguments, each group ending in `-i <path>`
    input_args: Vec<String>,
    /// Output arguments (after all inputs)
    output_args: Vec<String>,
    /// Output file path
    output: PathBuf,
    /// Whether to overwrite output
    overwrite: bool,
}

impl FfmpegCommand {
    /// Create a new command writing to `output`.
    pub fn new(program: impl Into<String>, output: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            input_args: Vec::new(),
            output_args: Vec::new(),
            output: output.as_ref().to_path_buf(),
            overwrite: true,
        }
    }

    /// Command for a render job: the background image looped as video, the
    /// audio track as a second input, the overlay filter, and fixed encoding.
    pub fn for_job(job: &RenderJob, overlay_filter: &str, config: &AppConfig) -> Self {
        let encoding = &config.encoding;
        Self::new(&encoding.ffmpeg_bin, &job.output_path)
            .looped_image_input(&config.paths.background_image)
            .input(&config.paths.audio_file)
            .video_filter(overlay_filter)
            .video_codec(&encoding.video_codec)
            .duration(encoding.duration_secs)
            .audio_codec(&encoding.audio_codec)
            .shortest()
            .pixel_format(&encoding.pixel_format)
    }

    /// Whether to pass `-y`.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Add a still image repeated for the whole output.
    pub fn looped_image_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input_args.push("-loop".to_string());
        self.input_args.push("1".to_string());
        self.input(path)
    }

    /// Add a plain input file.
    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.input_args.push("-i".to_string());
        self.input_args
            .push(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Add an output argument.
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Set video filter.
    pub fn video_filter(self, filter: impl Into<String>) -> Self {
        self.output_arg("-vf").output_arg(filter)
    }

    /// Set video codec.
    pub fn video_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:v").output_arg(codec)
    }

    /// Truncate the output to `seconds`.
    pub fn duration(self, seconds: u32) -> Self {
        self.output_arg("-t").output_arg(seconds.to_string())
    }

    /// Set audio codec.
    pub fn audio_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:a").output_arg(codec)
    }

    /// Stop at the end of the shortest input stream.
    pub fn shortest(self) -> Self {
        self.output_arg("-shortest")
    }

    /// Set output pixel format.
    pub fn pixel_format(self, format: impl Into<String>) -> Self {
        self.output_arg("-pix_fmt").output_arg(format)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.input_args.len() + self.output_args.len() + 2);

        if self.overwrite {
            args.push("-y".to_string());
        }

        args.extend(self.input_args.iter().cloned());
        args.extend(self.output_args.iter().cloned());
        args.push(self.output.to_string_lossy().to_string());

        args
    }

    /// Shell-quoted command line, for previews and logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.build_args())
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
