//! Fine tile selection by full pixel comparison

use crate::math::grid_distance;
use crate::spatial::grid::Grid;

/// Position within `candidates` of the tile closest to `piece`
///
/// Scores every candidate with [`grid_distance`]; the first candidate with
/// the minimum score wins. Returns `None` for an empty candidate list.
pub fn best_candidate(piece: &Grid, candidates: &[&Grid]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| grid_distance(candidate, piece))
        .map(|(position, _)| position)
}

/// The candidate closest to `piece` pixel by pixel
pub fn select_best<'a>(piece: &Grid, candidates: &[&'a Grid]) -> Option<&'a Grid> {
    best_candidate(piece, candidates).and_then(|position| candidates.get(position).copied())
}
