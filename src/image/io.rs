//! PNG and JSON files for the demo binaries.
//!
//! Errors are reported as strings that name the offending path.
use super::PixelGrid;
use image::GrayImage;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load an image from disk and convert it to an 8-bit grayscale grid.
pub fn load_grayscale_grid(path: &Path) -> Result<PixelGrid, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (width, height) = img.dimensions();
    PixelGrid::from_vec(width as usize, height as usize, img.into_raw())
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save a grid as a single-channel PNG; intensities are written unchanged.
pub fn save_grayscale_grid(grid: &PixelGrid, path: &Path) -> Result<(), String> {
    let (Ok(width), Ok(height)) = (u32::try_from(grid.width()), u32::try_from(grid.height()))
    else {
        return Err(format!(
            "Grid {}x{} is too large for {}",
            grid.width(),
            grid.height(),
            path.display()
        ));
    };
    let image = GrayImage::from_raw(width, height, grid.data().to_vec())
        .ok_or_else(|| format!("Grid buffer does not match {width}x{height}"))?;
    create_parent_dirs(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Pretty-print `value` as JSON into `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_parent_dirs(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))?;
    writer
        .flush()
        .map_err(|e| format!("Failed to flush {}: {e}", path.display()))
}

fn create_parent_dirs(path: &Path) -> Result<(), String> {
    match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create directory {}: {e}", dir.display())),
        None => Ok(()),
    }
}
