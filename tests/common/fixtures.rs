//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use greendither::rendering::encode_rgba;

/// Ramp colors as RGB triples, darkest first
pub const RAMP_RGB: [[u8; 3]; 4] = [
    [0, 34, 0],
    [64, 120, 64],
    [144, 186, 144],
    [210, 235, 210],
];

/// Horizontal black-to-white gradient, identical on every row
pub fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .flat_map(|i| {
            let v = ((i % width) * 255 / (width - 1).max(1)) as u8;
            [v, v, v, 255]
        })
        .collect()
}

/// Single-color RGBA image
pub fn solid_rgba(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(width * height)
}

/// Encode `rgba` and write it to `dir/name`
pub fn write_png(dir: &Path, name: &str, rgba: &[u8], width: usize, height: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_rgba(rgba, width, height).unwrap()).unwrap();
    path
}

/// Write a YAML config file to `dir/config.yaml`
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}
