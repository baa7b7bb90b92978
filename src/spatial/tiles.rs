//! Tile library and its precomputed average-colour index

use crate::math::average_color;
use crate::spatial::grid::{AverageColor, CellSize, Grid};

/// Ordered collection of tile grids
///
/// Tiles are expected to share one shape; the first tile's shape is taken as
/// the mosaic cell size. Order matters: it is the tie-break order for every
/// ranking over the library.
#[derive(Debug, Clone, Default)]
pub struct TileLibrary {
    tiles: Vec<Grid>,
}

impl TileLibrary {
    /// Wrap an ordered list of tiles
    pub const fn new(tiles: Vec<Grid>) -> Self {
        Self { tiles }
    }

    /// All tiles in library order
    pub fn tiles(&self) -> &[Grid] {
        &self.tiles
    }

    /// Tile at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Grid> {
        self.tiles.get(index)
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the library holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Cell size dictated by the first tile
    pub fn cell_size(&self) -> Option<CellSize> {
        self.tiles.first().map(CellSize::of)
    }

    /// Add a tile at the end of the library
    pub fn push(&mut self, tile: Grid) {
        self.tiles.push(tile);
    }

    /// Consume the library and return its tiles
    pub fn into_tiles(self) -> Vec<Grid> {
        self.tiles
    }
}

impl From<Vec<Grid>> for TileLibrary {
    fn from(tiles: Vec<Grid>) -> Self {
        Self::new(tiles)
    }
}

/// Average colour of every tile, computed once per run
///
/// Entry `i` belongs to tile `i` of the library the index was built from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileIndex {
    averages: Vec<AverageColor>,
}

impl TileIndex {
    /// Compute the average colour of each tile in order
    pub fn build(tiles: &[Grid]) -> Self {
        Self {
            averages: tiles.iter().map(average_color).collect(),
        }
    }

    /// Averages in tile order
    pub fn averages(&self) -> &[AverageColor] {
        &self.averages
    }

    /// Number of indexed tiles
    pub const fn len(&self) -> usize {
        self.averages.len()
    }

    /// True when no tiles are indexed
    pub const fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}

/// Build the average-colour index for a library
pub fn build_index(library: &TileLibrary) -> TileIndex {
    TileIndex::build(library.tiles())
}
