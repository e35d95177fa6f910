use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use argh::FromArgs;
use frames_core::extract::extract_pixel_data;
use log::{error, info};

#[derive(FromArgs)]
/// Extract RGB565 pixel data from LVGL C arrays into raw .bin files.
struct Args {
    /// optional input and output directory overrides, in that order
    #[argh(positional)]
    dirs: Vec<PathBuf>,
}

struct Tally {
    success: usize,
    total: usize,
}

impl Tally {
    fn all_converted(&self) -> bool {
        self.total > 0 && self.success == self.total
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let mut dirs = args.dirs.into_iter();
    let input_dir = dirs
        .next()
        .unwrap_or_else(|| PathBuf::from("components/lvgl_ui"));
    let output_dir = dirs
        .next()
        .unwrap_or_else(|| PathBuf::from("sd_card_files/frames"));

    let tally = run(&input_dir, &output_dir);
    if tally.all_converted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Convert every frame*.c under `input_dir`. Failures are logged and
/// counted, never fatal.
fn run(input_dir: &Path, output_dir: &Path) -> Tally {
    info!("Input directory:  {}", input_dir.display());
    info!("Output directory: {}", output_dir.display());

    let frames = match discover_frames(input_dir) {
        Ok(frames) => frames,
        Err(err) => {
            error!("Failed to read {}: {}", input_dir.display(), err);
            return Tally {
                success: 0,
                total: 0,
            };
        }
    };
    if frames.is_empty() {
        error!("No frame*.c files found in {}", input_dir.display());
        return Tally {
            success: 0,
            total: 0,
        };
    }

    info!("Found {} frame files to convert:", frames.len());
    for path in &frames {
        info!("  - {}", path.file_name().unwrap_or_default().to_string_lossy());
    }

    let mut success = 0usize;
    for path in &frames {
        match convert(path, output_dir) {
            Ok(()) => success += 1,
            Err(err) => error!("Failed to convert {}: {}", path.display(), err),
        }
    }

    info!("Conversion complete: {}/{} successful", success, frames.len());
    Tally {
        success,
        total: frames.len(),
    }
}

/// List frame*.c files in `dir`, lexicographically sorted.
fn discover_frames(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut frames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("frame") && name.ends_with(".c") {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}

fn convert(c_path: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Read lossily; asset sources occasionally carry stray non-UTF-8 bytes
    // in comments.
    let raw = fs::read(c_path)?;
    let source = String::from_utf8_lossy(&raw);

    let data = extract_pixel_data(&source)?;

    let stem = c_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("invalid file name")?;
    fs::create_dir_all(out_dir)?;
    let bin_path = out_dir.join(format!("{stem}.bin"));
    fs::write(&bin_path, &data)?;

    info!("Created {} ({} bytes)", bin_path.display(), data.len());
    Ok(())
}
