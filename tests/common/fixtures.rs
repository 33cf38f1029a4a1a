//! Test fixtures: scratch directories and generated input images.

use std::path::{Path, PathBuf};

use e1002_convert::assets::AssetLoader;
use e1002_convert::models::DeviceCatalog;
use tempfile::TempDir;

/// Catalog from the embedded device profiles
pub fn embedded_catalog() -> DeviceCatalog {
    DeviceCatalog::load(&AssetLoader::default()).expect("embedded devices.json should parse")
}

/// Scratch directory removed on drop
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write an 8-bit PNG with the given color type and raw sample data
pub fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: png::ColorType,
    data: &[u8],
) -> PathBuf {
    let file = std::fs::File::create(path).expect("Failed to create PNG");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    writer
        .write_image_data(data)
        .expect("Failed to write PNG data");
    path.to_path_buf()
}

/// Write a flat RGB PNG
pub fn write_solid_rgb(path: &Path, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let data: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    write_png(path, width, height, png::ColorType::Rgb, &data)
}

/// Write a horizontal RGB gradient from black to white
pub fn write_gradient(path: &Path, width: u32, height: u32) -> PathBuf {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    write_png(path, width, height, png::ColorType::Rgb, &data)
}
