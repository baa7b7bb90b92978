//! Coarse candidate filtering by average-colour distance

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::math::{average_color, pixel_distance};
use crate::spatial::grid::{AverageColor, Grid};

#[derive(Clone, Copy, Debug)]
struct RankedTile {
    distance: f64,
    index: usize,
}

// Orders by distance, then by library position so equal distances keep the
// earliest tile ahead of later ones.
impl Ord for RankedTile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for RankedTile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedTile {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedTile {}

/// Indices of the `k` tiles whose average colour is closest to the piece's
///
/// Distances are [`pixel_distance`] between average colours. The result is
/// ordered by ascending distance with ties resolved toward the lower index,
/// and holds `min(k, averages.len())` entries.
pub fn rank_candidates(piece: &Grid, averages: &[AverageColor], k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }

    let target = average_color(piece);

    // Max-heap holding the best k seen so far; the worst of them sits on top
    let mut heap = BinaryHeap::with_capacity(k + 1);

    for (index, average) in averages.iter().enumerate() {
        let ranked = RankedTile {
            distance: pixel_distance(average, &target),
            index,
        };

        if heap.len() < k {
            heap.push(ranked);
        } else if heap.peek().is_some_and(|worst| ranked < *worst) {
            heap.pop();
            heap.push(ranked);
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|ranked| ranked.index)
        .collect()
}

/// The `k` tiles closest to the piece by average colour, best first
///
/// `averages` must be the index built from `tiles`. When `k` exceeds the
/// number of tiles every tile is returned.
pub fn select_candidates<'a>(
    piece: &Grid,
    tiles: &'a [Grid],
    averages: &[AverageColor],
    k: usize,
) -> Vec<&'a Grid> {
    rank_candidates(piece, averages, k)
        .into_iter()
        .filter_map(|index| tiles.get(index))
        .collect()
}
