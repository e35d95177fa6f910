use std::path::{Path, PathBuf};

use argh::FromArgs;
use frames_core::carray;
use log::{info, warn};

/// Frames in the boot animation sequence.
const FRAME_COUNT: usize = 3;

#[derive(FromArgs)]
/// Convert animation frame PNGs into LVGL C arrays.
struct Args {
    /// image directory
    #[argh(
        option,
        short = 'd',
        default = "PathBuf::from(\"components/lvgl_ui/images\")"
    )]
    image_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    for i in 0..FRAME_COUNT {
        let png_path = args.image_dir.join(format!("anim_frame_{i}.png"));
        if !png_path.exists() {
            warn!("{} not found", png_path.display());
            continue;
        }
        let c_path = args.image_dir.join(format!("anim_frame_{i}.c"));
        convert(&png_path, &c_path, &format!("anim_frame_{i}"));
    }
}

fn convert(png_path: &Path, c_path: &Path, name: &str) {
    let image = image::open(png_path).expect("Failed to open input image");
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let data = carray::pack_pixels(rgb.as_raw());
    let source = carray::render(name, width, height, &data);
    std::fs::write(c_path, source).expect("Failed to write C source file");

    info!("Converted {} -> {}", png_path.display(), c_path.display());
    info!("  Size: {}x{}, Data: {} bytes", width, height, data.len());
}
