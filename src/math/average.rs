//! Average colour of a pixel grid

use crate::spatial::grid::{AverageColor, Grid};

/// Mean of each channel over every pixel of the grid
///
/// Channel sums are accumulated exactly before the single division, so the
/// result for a uniform grid is exactly that grid's colour. The grid must
/// contain at least one pixel; an empty grid yields `NaN` channels.
pub fn average_color(grid: &Grid) -> AverageColor {
    let count = grid.len() as f64;

    let sums = grid.iter().fold([0_i64; 3], |mut sums, pixel| {
        for (sum, &channel) in sums.iter_mut().zip(pixel) {
            *sum += channel;
        }
        sums
    });

    sums.map(|sum| sum as f64 / count)
}
