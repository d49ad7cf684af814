//! Check the encoder and configured assets.

use std::path::Path;

use quotereel_common::config::AppConfig;
use quotereel_render_engine::command_exists;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("quotereel System Check");
    println!("{}", "=".repeat(50));

    let mut missing = 0;

    if command_exists(&config.encoding.ffmpeg_bin) {
        println!("[OK] Encoder: {}", config.encoding.ffmpeg_bin);
    } else {
        println!("[MISSING] Encoder: {}", config.encoding.ffmpeg_bin);
        missing += 1;
    }

    let paths = &config.paths;
    for (label, path) in [
        ("Quote file", &paths.input_file),
        ("Background image", &paths.background_image),
        ("Audio track", &paths.audio_file),
        ("Font", &paths.font_file),
    ] {
        if !report_file(label, path) {
            missing += 1;
        }
    }

    if paths.output_dir.is_dir() {
        println!("[OK] Output directory: {}", paths.output_dir.display());
    } else {
        println!(
            "[INFO] Output directory: {} (will be created)",
            paths.output_dir.display()
        );
    }

    if let Err(e) = config.validate() {
        println!("[WARN] {e}");
        missing += 1;
    }

    println!();
    if missing == 0 {
        println!("Everything is in place. quotereel is ready.");
    } else {
        println!("{missing} problem(s) found. See above for fixes.");
    }

    Ok(())
}

fn report_file(label: &str, path: &Path) -> bool {
    let present = path.is_file();
    let tag = if present { "[OK]" } else { "[MISSING]" };
    println!("{tag} {label}: {}", path.display());
    present
}
