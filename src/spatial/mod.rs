//! Spatial data structures for pixel grids and tile libraries
//!
//! This module contains:
//! - Grid, pixel and coordinate types
//! - Bounds-aware piece extraction and insertion
//! - The tile library and its average-colour index

/// Pixel grids and sub-grid operations
pub mod grid;
/// Tile library and average-colour index
pub mod tiles;

pub use grid::{AverageColor, CellSize, Coordinate, Grid, Pixel};
pub use tiles::{TileIndex, TileLibrary};
