//! Photomosaic construction from a library of tile images
//!
//! The source image is cut into tile-sized cells. For each cell a shortlist of
//! tiles is chosen by average-colour distance, then the closest tile pixel by
//! pixel replaces the cell in the output.

#![forbid(unsafe_code)]

/// Candidate filtering, tile selection and mosaic assembly
pub mod algorithm;
/// Image files, tile directories, command line, progress and errors
pub mod io;
/// Pixel and grid colour arithmetic
pub mod math;
/// Grids, coordinates and the tile library
pub mod spatial;

pub use algorithm::build_mosaic;
pub use io::error::{MosaicError, Result};
