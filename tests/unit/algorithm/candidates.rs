//! Tests for coarse candidate ranking by average colour

#[cfg(test)]
mod tests {
    use photomosaic::algorithm::candidates::{rank_candidates, select_candidates};
    use photomosaic::math::{average_color, pixel_distance};
    use photomosaic::spatial::grid::{AverageColor, Grid, uniform_grid};
    use photomosaic::spatial::tiles::TileIndex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn library(colors: &[[i64; 3]]) -> Vec<Grid> {
        colors
            .iter()
            .map(|&color| uniform_grid(2, 2, color))
            .collect()
    }

    // Repeated first-minimum extraction with an unreachable sentinel
    fn reference_ranking(piece: &Grid, averages: &[AverageColor], k: usize) -> Vec<usize> {
        let target = average_color(piece);
        let mut distances: Vec<f64> = averages
            .iter()
            .map(|average| pixel_distance(average, &target))
            .collect();

        let mut ranked = Vec::new();
        while ranked.len() < k.min(averages.len()) {
            let mut best = 0;
            for (index, &distance) in distances.iter().enumerate() {
                if distance < distances[best] {
                    best = index;
                }
            }
            ranked.push(best);
            distances[best] = f64::INFINITY;
        }
        ranked
    }

    // Tests all tiles are ranked by ascending distance when k covers the library
    #[test]
    fn test_rank_all_tiles_ascending() {
        let tiles = library(&[[200, 0, 0], [12, 10, 10], [0, 0, 0], [10, 10, 10]]);
        let index = TileIndex::build(&tiles);
        let piece = uniform_grid(2, 2, [10, 10, 10]);

        assert_eq!(rank_candidates(&piece, index.averages(), 4), vec![3, 1, 2, 0]);
    }

    // Tests k larger than the library degrades to ranking every tile
    #[test]
    fn test_k_exceeding_library_returns_all() {
        let tiles = library(&[[0, 0, 0], [255, 255, 255]]);
        let index = TileIndex::build(&tiles);
        let piece = uniform_grid(2, 2, [250, 250, 250]);

        let ranked = rank_candidates(&piece, index.averages(), 10);
        assert_eq!(ranked, vec![1, 0]);
        assert_eq!(select_candidates(&piece, &tiles, index.averages(), 10).len(), 2);
    }

    // Tests equal distances keep the earliest tile first
    #[test]
    fn test_ties_prefer_earliest_index() {
        let tiles = library(&[[20, 0, 0], [0, 20, 0], [0, 0, 20], [0, 0, 0]]);
        let index = TileIndex::build(&tiles);
        let piece = uniform_grid(2, 2, [0, 0, 0]);

        assert_eq!(rank_candidates(&piece, index.averages(), 1), vec![3]);
        assert_eq!(rank_candidates(&piece, index.averages(), 2), vec![3, 0]);
        assert_eq!(rank_candidates(&piece, index.averages(), 4), vec![3, 0, 1, 2]);
    }

    // Tests zero candidates yields an empty shortlist
    #[test]
    fn test_zero_candidates() {
        let tiles = library(&[[1, 1, 1]]);
        let index = TileIndex::build(&tiles);
        let piece = uniform_grid(2, 2, [1, 1, 1]);

        assert!(rank_candidates(&piece, index.averages(), 0).is_empty());
    }

    // Tests selected candidates are the tiles at the ranked indices
    #[test]
    fn test_select_candidates_returns_ranked_tiles() {
        let tiles = library(&[[90, 90, 90], [0, 0, 0], [50, 50, 50]]);
        let index = TileIndex::build(&tiles);
        let piece = uniform_grid(2, 2, [45, 45, 45]);

        let selected = select_candidates(&piece, &tiles, index.averages(), 2);
        assert_eq!(selected, vec![&tiles[2], &tiles[0]]);
    }

    // Tests the bounded heap matches sentinel-based extraction on random libraries
    #[test]
    fn test_matches_reference_ranking() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let count = rng.random_range(1..40);
            let colors: Vec<[i64; 3]> = (0..count)
                .map(|_| {
                    [
                        rng.random_range(0..8) * 32,
                        rng.random_range(0..8) * 32,
                        rng.random_range(0..8) * 32,
                    ]
                })
                .collect();
            let tiles = library(&colors);
            let index = TileIndex::build(&tiles);
            let piece = uniform_grid(
                2,
                2,
                [
                    rng.random_range(0..256),
                    rng.random_range(0..256),
                    rng.random_range(0..256),
                ],
            );
            let k = rng.random_range(1..50);

            assert_eq!(
                rank_candidates(&piece, index.averages(), k),
                reference_ranking(&piece, index.averages(), k)
            );
        }
    }
}
