//! Pixel grids and bounds-aware rectangular sub-grid operations
//!
//! Every operation here clips against the grid it reads from or writes to
//! instead of failing: a piece requested past the right or bottom edge comes
//! back smaller, and a piece written past the edge is truncated. Edge cells of
//! images whose size is not a multiple of the tile size rely on this.

use std::ops::Range;

use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis, Slice};

/// An RGB pixel; channels are conventionally in `[0, 255]` but never clamped
///
/// Channels are `i64` so distances between any values in the `i32` range,
/// and sums of those distances over realistic grids, cannot overflow.
pub type Pixel = [i64; 3];

/// Per-channel mean colour of a grid
pub type AverageColor = [f64; 3];

/// A rectangular grid of pixels indexed by `(row, col)`
///
/// Used for the source image, the output mosaic, tiles and extracted pieces.
pub type Grid = Array2<Pixel>;

/// Upper-left corner of a rectangular region within a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Row index (vertical)
    pub row: usize,
    /// Column index (horizontal)
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from a row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Height and width of a mosaic cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSize {
    /// Number of pixel rows
    pub height: usize,
    /// Number of pixel columns
    pub width: usize,
}

impl CellSize {
    /// Create a cell size from height and width
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Shape of a grid as a cell size
    pub fn of(grid: &Grid) -> Self {
        let (height, width) = grid.dim();
        Self { height, width }
    }

    /// True when either dimension is zero
    pub const fn is_degenerate(&self) -> bool {
        self.height == 0 || self.width == 0
    }
}

/// Build a grid filled with a single colour
pub fn uniform_grid(height: usize, width: usize, pixel: Pixel) -> Grid {
    Array2::from_elem((height, width), pixel)
}

/// View of the rows and columns of `grid` within the given ranges
///
/// Ranges must lie within the grid.
pub fn region(grid: &Grid, rows: Range<usize>, cols: Range<usize>) -> ArrayView2<'_, Pixel> {
    grid.view()
        .slice_axis_move(Axis(0), Slice::from(rows))
        .slice_axis_move(Axis(1), Slice::from(cols))
}

/// Mutable view of the rows and columns of `grid` within the given ranges
pub fn region_mut(
    grid: &mut Grid,
    rows: Range<usize>,
    cols: Range<usize>,
) -> ArrayViewMut2<'_, Pixel> {
    grid.view_mut()
        .slice_axis_move(Axis(0), Slice::from(rows))
        .slice_axis_move(Axis(1), Slice::from(cols))
}

/// Copy the region starting at `origin` of at most `size` out of `source`
///
/// The region is clipped to the bounds of `source`, so pieces at the right
/// and bottom edges may be smaller than requested. An origin outside the
/// grid yields an empty piece rather than reading past the source.
pub fn extract_piece(source: &Grid, origin: Coordinate, size: CellSize) -> Grid {
    let (rows, cols) = source.dim();

    let row_start = origin.row.min(rows);
    let col_start = origin.col.min(cols);
    let row_end = origin.row.saturating_add(size.height).min(rows);
    let col_end = origin.col.saturating_add(size.width).min(cols);

    region(source, row_start..row_end, col_start..col_end).to_owned()
}

/// Write `piece` into `target` with its upper-left corner at `origin`
///
/// Pixels that would land outside `target` are dropped. This is the only
/// operation that mutates a grid.
pub fn insert_piece(target: &mut Grid, origin: Coordinate, piece: &Grid) {
    let (rows, cols) = target.dim();

    let row_start = origin.row.min(rows);
    let col_start = origin.col.min(cols);
    let height = piece.nrows().min(rows - row_start);
    let width = piece.ncols().min(cols - col_start);

    region_mut(
        target,
        row_start..row_start + height,
        col_start..col_start + width,
    )
    .assign(&region(piece, 0..height, 0..width));
}

/// Upper-left corners of the non-overlapping cells covering a grid shape
///
/// Cells are visited row-major from `(0, 0)`, advancing by the cell width
/// along a row band and by the cell height between bands. The last band and
/// column may overhang the grid; [`extract_piece`] clips them. A degenerate
/// cell size yields no origins.
pub fn cell_origins(
    (rows, cols): (usize, usize),
    cell: CellSize,
) -> impl Iterator<Item = Coordinate> {
    let (row_step, col_step, rows) = if cell.is_degenerate() {
        (1, 1, 0)
    } else {
        (cell.height, cell.width, rows)
    };

    (0..rows).step_by(row_step).flat_map(move |row| {
        (0..cols)
            .step_by(col_step)
            .map(move |col| Coordinate::new(row, col))
    })
}

/// Number of cells [`cell_origins`] yields for a grid shape
pub const fn cell_count((rows, cols): (usize, usize), cell: CellSize) -> usize {
    if cell.is_degenerate() {
        return 0;
    }
    rows.div_ceil(cell.height) * cols.div_ceil(cell.width)
}
