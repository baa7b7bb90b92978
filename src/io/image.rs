//! Conversion between image files and pixel grids

use std::path::Path;

use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::io::configuration::MAX_CHANNEL_VALUE;
use crate::io::error::{MosaicError, Result, invalid_source_data};
use crate::spatial::grid::{Grid, Pixel};

/// Convert an RGB image buffer into a grid with one row per image row
///
/// # Errors
///
/// Returns an error if the buffer's pixel count does not match its dimensions
pub fn grid_from_rgb(rgb: &RgbImage) -> Result<Grid> {
    let dimensions = (rgb.height() as usize, rgb.width() as usize);
    let pixels: Vec<Pixel> = rgb.pixels().map(|pixel| pixel.0.map(i64::from)).collect();

    Array2::from_shape_vec(dimensions, pixels)
        .map_err(|source| MosaicError::Shape { dimensions, source })
}

/// Convert a grid into an RGB image buffer, clamping channels to `[0, 255]`
///
/// # Errors
///
/// Returns an error if the grid has no pixels or is too large for an image
pub fn grid_to_rgb(grid: &Grid) -> Result<RgbImage> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_source_data(&format!(
            "cannot encode an empty {rows}x{cols} grid"
        )));
    }

    let height = u32::try_from(rows)
        .map_err(|err| invalid_source_data(&format!("grid height {rows}: {err}")))?;
    let width = u32::try_from(cols)
        .map_err(|err| invalid_source_data(&format!("grid width {cols}: {err}")))?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let pixel = grid
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or_default();
        Rgb(pixel.map(|channel| channel.clamp(0, MAX_CHANNEL_VALUE) as u8))
    }))
}

/// Load an image file as a grid of RGB pixels; alpha is discarded
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    grid_from_rgb(&img.to_rgb8())
}

/// Write a grid to disk, inferring the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn encode_image<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let img = grid_to_rgb(grid)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    img.save(path).map_err(|source| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
