//! Tests for mosaic assembly over the cell grid

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::algorithm::assembler::{CellPlacement, MosaicAssembler, build_mosaic};
    use photomosaic::spatial::grid::{CellSize, Coordinate, uniform_grid};
    use photomosaic::spatial::tiles::TileLibrary;

    fn two_tone_library() -> TileLibrary {
        TileLibrary::new(vec![
            uniform_grid(2, 2, [10, 10, 10]),
            uniform_grid(2, 2, [200, 0, 0]),
        ])
    }

    // Tests an empty library is rejected
    #[test]
    fn test_rejects_empty_library() {
        let library = TileLibrary::default();
        let result = MosaicAssembler::new(&library, 1);
        assert!(matches!(result, Err(MosaicError::InvalidSourceData { .. })));
    }

    // Tests a degenerate first tile is rejected
    #[test]
    fn test_rejects_degenerate_tile() {
        let library = TileLibrary::new(vec![uniform_grid(0, 3, [0, 0, 0])]);
        let result = MosaicAssembler::new(&library, 1);
        assert!(matches!(result, Err(MosaicError::InvalidSourceData { .. })));
    }

    // Tests zero candidates is rejected
    #[test]
    fn test_rejects_zero_candidates() {
        let library = two_tone_library();
        let result = MosaicAssembler::new(&library, 0);
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "candidates",
                ..
            })
        ));
    }

    // Tests the assembler exposes the first tile's size and the index
    #[test]
    fn test_assembler_configuration() {
        let library = two_tone_library();
        let assembler = MosaicAssembler::new(&library, 3).expect("valid library");

        assert_eq!(assembler.cell_size(), CellSize::new(2, 2));
        assert_eq!(assembler.candidates(), 3);
        assert_eq!(assembler.index().len(), 2);
        assert_eq!(assembler.cell_count(&uniform_grid(5, 4, [0, 0, 0])), 6);
    }

    // Tests filling one cell writes the chosen tile and reports its index
    #[test]
    fn test_fill_cell() {
        let library = two_tone_library();
        let assembler = MosaicAssembler::new(&library, 2).expect("valid library");
        let mut output = uniform_grid(4, 4, [190, 5, 5]);

        let tile = assembler.fill_cell(&mut output, Coordinate::new(2, 2));

        assert_eq!(tile, Some(1));
        assert_eq!(output.get((2, 2)), Some(&[200, 0, 0]));
        assert_eq!(output.get((3, 3)), Some(&[200, 0, 0]));
        assert_eq!(output.get((1, 1)), Some(&[190, 5, 5]));
    }

    // Tests assembly leaves the caller's image untouched
    #[test]
    fn test_input_is_not_mutated() {
        let library = two_tone_library();
        let image = uniform_grid(4, 4, [180, 20, 20]);
        let original = image.clone();

        let mosaic = build_mosaic(&image, &library, 1).expect("valid library");

        assert_eq!(image, original);
        assert!(mosaic.iter().all(|pixel| *pixel == [200, 0, 0]));
    }

    // Tests every cell is reported once in row-major order
    #[test]
    fn test_progress_reports_each_cell() {
        let library = two_tone_library();
        let assembler = MosaicAssembler::new(&library, 2).expect("valid library");
        let image = uniform_grid(3, 5, [10, 10, 10]);

        let mut placements = Vec::new();
        let mosaic = assembler.assemble_with_progress(&image, |placement| {
            placements.push(placement);
        });

        assert_eq!(mosaic.dim(), image.dim());
        assert_eq!(placements.len(), assembler.cell_count(&image));
        assert_eq!(
            placements.first(),
            Some(&CellPlacement {
                origin: Coordinate::new(0, 0),
                tile: 0,
            })
        );
        assert_eq!(
            placements.last().map(|placement| placement.origin),
            Some(Coordinate::new(2, 4))
        );
    }

    // Tests an image smaller than one tile still receives a clipped tile
    #[test]
    fn test_image_smaller_than_tile() {
        let library = TileLibrary::new(vec![
            uniform_grid(4, 4, [0, 0, 0]),
            uniform_grid(4, 4, [255, 255, 255]),
        ]);
        let image = uniform_grid(1, 3, [240, 240, 240]);

        let mosaic = build_mosaic(&image, &library, 2).expect("valid library");

        assert_eq!(mosaic.dim(), (1, 3));
        assert!(mosaic.iter().all(|pixel| *pixel == [255, 255, 255]));
    }
}
