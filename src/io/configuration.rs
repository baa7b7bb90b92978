//! Constants and runtime defaults for the mosaic tool

use image::imageops::FilterType;

/// File extensions (lowercase) accepted as tiles when scanning a directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp",
];

/// Resampling filter used when scaling tiles to the cell size
pub const TILE_RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Largest channel value written to an output image
pub const MAX_CHANNEL_VALUE: i64 = 255;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// Progress bar display settings
/// Template for the cell progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}";
/// Characters used to draw the progress bar
pub const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏ ";
