//! Tests for the pairwise edge similarity scan

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array3;
    use tileseam::ReassemblyError;
    use tileseam::analysis::similarity::{ScanConfig, SimilarityScanner, SimilarityTable};
    use tileseam::spatial::grid::GridShape;
    use tileseam::spatial::side::Side;
    use tileseam::spatial::synthetic::seam_tiles;
    use tileseam::spatial::tile::TileSet;

    fn uniform_set(count: usize) -> TileSet {
        let images = vec![RgbImage::from_pixel(8, 8, Rgb([90, 140, 30])); count];
        TileSet::from_rgb_images(&images).unwrap()
    }

    #[test]
    fn test_table_requires_n_4_n_shape() {
        assert!(SimilarityTable::from_array(Array3::zeros((3, 4, 3))).is_ok());
        assert!(SimilarityTable::from_array(Array3::zeros((3, 3, 3))).is_err());
        assert!(SimilarityTable::from_array(Array3::zeros((3, 4, 2))).is_err());
    }

    #[test]
    fn test_table_lookup() {
        let scores = Array3::from_shape_fn((2, 4, 2), |(t, s, o)| (t * 100 + s * 10 + o) as f64);
        let table = SimilarityTable::from_array(scores).unwrap();

        assert_eq!(table.tile_count(), 2);
        assert_eq!(table.score(1, Side::Left, 0), Some(120.0));
        assert_eq!(table.scores(0, Side::Bottom).unwrap().to_vec(), vec![10.0, 11.0]);
        assert!(table.scores(2, Side::Top).is_none());
        assert!(table.score(0, Side::Top, 5).is_none());
    }

    // Identical tiles score 100 against every tile, themselves included
    #[test]
    fn test_uniform_tiles_score_100() {
        let tiles = uniform_set(3);
        let scanner = SimilarityScanner::new(&tiles, ScanConfig::default()).unwrap();
        let table = scanner.scan().unwrap();

        for tile in 0..3 {
            for side in Side::ALL {
                let scores = table.scores(tile, side).unwrap();
                assert_eq!(scores.len(), 3);
                assert!(scores.iter().all(|&score| score == 100.0));
            }
        }
    }

    // The own entry stays in place so lists remain aligned with input order
    #[test]
    fn test_exclude_self_masks_own_entry() {
        let tiles = uniform_set(3);
        let config = ScanConfig {
            exclude_self: true,
            ..ScanConfig::default()
        };
        let scanner = SimilarityScanner::new(&tiles, config).unwrap();

        let scores = scanner.scores_for(1, Side::Right).unwrap();
        assert_eq!(scores, vec![100.0, f64::NEG_INFINITY, 100.0]);
        assert!(scanner.config().exclude_self);
    }

    #[test]
    fn test_scanner_rejects_bad_thickness() {
        let tiles = uniform_set(2);
        let zero = ScanConfig {
            border_thickness: 0,
            exclude_self: false,
        };
        let too_wide = ScanConfig {
            border_thickness: 9,
            exclude_self: false,
        };

        assert!(SimilarityScanner::new(&tiles, zero).is_err());
        assert!(SimilarityScanner::new(&tiles, too_wide).is_err());
    }

    #[test]
    fn test_scores_for_out_of_range() {
        let tiles = uniform_set(2);
        let scanner = SimilarityScanner::new(&tiles, ScanConfig::default()).unwrap();
        assert!(matches!(
            scanner.scores_for(2, Side::Top),
            Err(ReassemblyError::InvalidTileIndex {
                index: 2,
                tile_count: 2
            })
        ));
    }

    #[test]
    fn test_progress_reports_each_tile_in_order() {
        let tiles = uniform_set(4);
        let scanner = SimilarityScanner::new(&tiles, ScanConfig::default()).unwrap();

        let mut seen = Vec::new();
        scanner.scan_with_progress(|tile| seen.push(tile)).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    // Scores compare a side with the opposite side of the other tile
    #[test]
    fn test_scan_compares_opposite_sides() {
        let images = seam_tiles(GridShape::new(1, 2).unwrap(), 16).unwrap();
        let tiles = TileSet::from_rgb_images(&images).unwrap();
        let table = SimilarityScanner::new(&tiles, ScanConfig::default())
            .unwrap()
            .scan()
            .unwrap();

        assert_eq!(table.score(0, Side::Right, 1), Some(100.0));
        assert_eq!(table.score(1, Side::Left, 0), Some(100.0));
        assert!(table.score(1, Side::Right, 0).unwrap() < 97.0);
    }
}
