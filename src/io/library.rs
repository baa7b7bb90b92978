//! Builds a uniform tile library from a directory of images

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, info};

use crate::io::configuration::{SUPPORTED_EXTENSIONS, TILE_RESIZE_FILTER};
use crate::io::error::{MosaicError, Result, invalid_parameter, invalid_source_data};
use crate::io::image::grid_from_rgb;
use crate::spatial::tiles::TileLibrary;

/// True when the path has one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Supported image files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn collect_tile_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read tile directory",
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Width matching `height` at the aspect ratio of `img`, never below one
pub fn scaled_width(img: &DynamicImage, height: u32) -> u32 {
    if img.height() == 0 {
        return height.max(1);
    }
    let ratio = f64::from(img.width()) / f64::from(img.height());
    (f64::from(height) * ratio).round().max(1.0) as u32
}

/// Load every supported image in `dir` as a tile of exactly `tile_height` rows
///
/// The first image in path order fixes the tile width from its aspect ratio.
/// Every image is then scaled and centre-cropped to that width and height so
/// all tiles share one cell size.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_height` is zero
/// - The directory cannot be read
/// - A supported image file fails to decode
/// - The directory contains no supported images
pub fn build_tile_library<P: AsRef<Path>>(dir: P, tile_height: u32) -> Result<TileLibrary> {
    let dir = dir.as_ref();
    if tile_height == 0 {
        return Err(invalid_parameter(
            "tile_height",
            &tile_height,
            &"tiles must be at least one pixel high",
        ));
    }

    let mut library = TileLibrary::default();
    let mut tile_width = None;

    for path in collect_tile_paths(dir)? {
        let img = image::open(&path).map_err(|source| MosaicError::ImageLoad {
            path: path.clone(),
            source,
        })?;

        let width = *tile_width.get_or_insert_with(|| scaled_width(&img, tile_height));
        let tile = img.resize_to_fill(width, tile_height, TILE_RESIZE_FILTER);
        library.push(grid_from_rgb(&tile.to_rgb8())?);
        debug!("Loaded tile {}", path.display());
    }

    if library.is_empty() {
        return Err(invalid_source_data(&format!(
            "no tile images found in '{}'",
            dir.display()
        )));
    }

    info!(
        "Built tile library of {} tiles from '{}'",
        library.len(),
        dir.display()
    );
    Ok(library)
}
