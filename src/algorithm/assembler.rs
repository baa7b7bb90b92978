//! Mosaic assembly: sweeps the image cell by cell and places the best tile

use log::{debug, info};

use crate::algorithm::candidates::rank_candidates;
use crate::algorithm::selection::best_candidate;
use crate::io::error::{Result, invalid_parameter, invalid_source_data};
use crate::spatial::grid::{
    CellSize, Coordinate, Grid, cell_count, cell_origins, extract_piece, insert_piece,
};
use crate::spatial::tiles::{TileIndex, TileLibrary};

/// Outcome of filling one mosaic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    /// Upper-left corner of the cell in the output
    pub origin: Coordinate,
    /// Library index of the tile written into the cell
    pub tile: usize,
}

/// Builds mosaics from a fixed tile library
///
/// Holds the library, its average-colour index (computed once on
/// construction) and the candidate count used by the coarse filter.
#[derive(Debug)]
pub struct MosaicAssembler<'a> {
    library: &'a TileLibrary,
    index: TileIndex,
    cell: CellSize,
    candidates: usize,
}

impl<'a> MosaicAssembler<'a> {
    /// Prepare an assembler, indexing every tile of the library
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The library contains no tiles
    /// - The first tile has a zero dimension
    /// - `candidates` is zero
    pub fn new(library: &'a TileLibrary, candidates: usize) -> Result<Self> {
        let cell = library
            .cell_size()
            .ok_or_else(|| invalid_source_data(&"tile library is empty"))?;

        if cell.is_degenerate() {
            return Err(invalid_source_data(&format!(
                "first tile has degenerate size {}x{}",
                cell.height, cell.width
            )));
        }

        if candidates == 0 {
            return Err(invalid_parameter(
                "candidates",
                &candidates,
                &"at least one candidate must be considered",
            ));
        }

        let index = TileIndex::build(library.tiles());
        info!(
            "Indexed {} tiles with cell size {}x{}",
            index.len(),
            cell.height,
            cell.width
        );

        Ok(Self {
            library,
            index,
            cell,
            candidates,
        })
    }

    /// Cell size taken from the first tile
    pub const fn cell_size(&self) -> CellSize {
        self.cell
    }

    /// Number of candidates passed from the coarse to the fine stage
    pub const fn candidates(&self) -> usize {
        self.candidates
    }

    /// The precomputed average-colour index
    pub const fn index(&self) -> &TileIndex {
        &self.index
    }

    /// Number of cells needed to cover `image`
    pub fn cell_count(&self, image: &Grid) -> usize {
        cell_count(image.dim(), self.cell)
    }

    /// Choose a tile for the piece at `origin` of `output` and write it there
    ///
    /// Returns the library index of the placed tile, or `None` if no tile
    /// could be chosen (only possible for an empty piece).
    pub fn fill_cell(&self, output: &mut Grid, origin: Coordinate) -> Option<usize> {
        let piece = extract_piece(output, origin, self.cell);
        if piece.is_empty() {
            return None;
        }

        let ranked = rank_candidates(&piece, self.index.averages(), self.candidates);
        let shortlist: Vec<&Grid> = ranked
            .iter()
            .filter_map(|&index| self.library.get(index))
            .collect();

        let position = best_candidate(&piece, &shortlist)?;
        let tile_index = ranked.get(position).copied()?;
        let tile = self.library.get(tile_index)?;

        insert_piece(output, origin, tile);
        debug!(
            "Cell ({}, {}) <- tile {tile_index}",
            origin.row, origin.col
        );
        Some(tile_index)
    }

    /// Build the mosaic for `image`, leaving the input untouched
    pub fn assemble(&self, image: &Grid) -> Grid {
        self.assemble_with_progress(image, |_| {})
    }

    /// Build the mosaic, reporting every placed cell to `on_cell`
    ///
    /// Cells are visited row-major. Each piece is read from the output buffer
    /// before that cell is written; cells never overlap, so this equals
    /// reading from the original image.
    pub fn assemble_with_progress<F>(&self, image: &Grid, mut on_cell: F) -> Grid
    where
        F: FnMut(CellPlacement),
    {
        let mut output = image.clone();

        for origin in cell_origins(output.dim(), self.cell) {
            if let Some(tile) = self.fill_cell(&mut output, origin) {
                on_cell(CellPlacement { origin, tile });
            }
        }

        output
    }
}

/// Build a mosaic of `image` from `library`, shortlisting `candidates` tiles
/// per cell by average colour before comparing them pixel by pixel
///
/// # Errors
///
/// Returns an error if the library is empty, its first tile is degenerate, or
/// `candidates` is zero.
pub fn build_mosaic(image: &Grid, library: &TileLibrary, candidates: usize) -> Result<Grid> {
    let assembler = MosaicAssembler::new(library, candidates)?;
    Ok(assembler.assemble(image))
}
