//! Channel-wise Manhattan distances between pixels and pixel grids

use num_traits::Signed;

use crate::spatial::grid::{Grid, region};

/// Sum of per-channel absolute differences between two colour triples
///
/// Generic over the channel type so the same metric scores integer pixels
/// during fine matching and real-valued average colours during coarse
/// candidate filtering. Deliberately avoids multiplication and square roots
/// since it runs inside the innermost comparison loops.
pub fn pixel_distance<T>(a: &[T; 3], b: &[T; 3]) -> T
where
    T: Signed + Copy,
{
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y).abs())
}

/// Sum of [`pixel_distance`] over the overlapping rectangle of two grids
///
/// Only the top-left `min(rows) × min(cols)` region is compared; grids of
/// different shapes never produce an error. For equally sized grids this is
/// a full pixel-by-pixel comparison.
pub fn grid_distance(a: &Grid, b: &Grid) -> i64 {
    let rows = a.nrows().min(b.nrows());
    let cols = a.ncols().min(b.ncols());
    region(a, 0..rows, 0..cols)
        .iter()
        .zip(region(b, 0..rows, 0..cols).iter())
        .map(|(pa, pb)| pixel_distance(pa, pb))
        .sum()
}
