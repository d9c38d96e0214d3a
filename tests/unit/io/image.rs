//! Tests for tile slicing, assembly and PNG round trips on disk

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;
    use tileseam::ReassemblyError;
    use tileseam::io::image::{
        assemble, export_png, load_image, load_tiles, save_tiles, slice_image, tile_file_name,
    };
    use tileseam::spatial::grid::GridShape;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]))
    }

    fn solid(value: u8) -> RgbImage {
        RgbImage::from_pixel(4, 4, Rgb([value, value, value]))
    }

    #[test]
    fn test_slice_row_major() {
        let image = gradient(30, 20);
        let tiles = slice_image(&image, GridShape::new(2, 3).unwrap()).unwrap();

        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|tile| tile.dimensions() == (10, 10)));
        assert_eq!(*tiles[1].get_pixel(0, 0), *image.get_pixel(10, 0));
        assert_eq!(*tiles[3].get_pixel(2, 3), *image.get_pixel(2, 13));
    }

    // Remainder pixels on the right and bottom are dropped
    #[test]
    fn test_slice_drops_remainder() {
        let tiles = slice_image(&gradient(31, 22), GridShape::new(2, 3).unwrap()).unwrap();
        assert!(tiles.iter().all(|tile| tile.dimensions() == (10, 11)));
    }

    #[test]
    fn test_slice_rejects_tiny_image() {
        assert!(slice_image(&gradient(3, 3), GridShape::new(4, 4).unwrap()).is_err());
    }

    // Empty shapes are rejected instead of dividing by zero
    #[test]
    fn test_slice_rejects_empty_shape() {
        let image = gradient(8, 8);
        assert!(slice_image(&image, GridShape::square_for(0)).is_err());
        assert!(slice_image(&image, GridShape { rows: 2, cols: 0 }).is_err());
        assert!(slice_image(&image, GridShape { rows: 0, cols: 2 }).is_err());
    }

    #[test]
    fn test_assemble_inverts_slice() {
        let image = gradient(24, 16);
        let shape = GridShape::new(2, 3).unwrap();
        let tiles = slice_image(&image, shape).unwrap();

        let rebuilt = assemble(&tiles, &[0, 1, 2, 3, 4, 5], shape).unwrap();
        assert_eq!(rebuilt, image);
    }

    // Slot i receives tile order[i]; unfilled slots stay black
    #[test]
    fn test_assemble_places_tiles_by_order() {
        let tiles = vec![solid(10), solid(20), solid(30)];
        let shape = GridShape::new(2, 2).unwrap();
        let canvas = assemble(&tiles, &[2, 0, 1], shape).unwrap();

        assert_eq!(canvas.dimensions(), (8, 8));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([30, 30, 30]));
        assert_eq!(*canvas.get_pixel(4, 0), Rgb([10, 10, 10]));
        assert_eq!(*canvas.get_pixel(0, 4), Rgb([20, 20, 20]));
        assert_eq!(*canvas.get_pixel(7, 7), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_assemble_errors() {
        let tiles = vec![solid(1), solid(2)];
        let shape = GridShape::new(1, 2).unwrap();

        assert!(matches!(
            assemble(&tiles, &[0, 5], shape),
            Err(ReassemblyError::InvalidTileIndex { index: 5, .. })
        ));
        assert!(assemble(&tiles, &[0, 1, 0], shape).is_err());
        assert!(assemble(&[], &[], shape).is_err());
    }

    #[test]
    fn test_tile_file_names_are_one_based() {
        assert_eq!(tile_file_name(0), "image_1.png");
        assert_eq!(tile_file_name(11), "image_12.png");
    }

    // Numeric ordering keeps image_10 after image_9
    #[test]
    fn test_save_and_load_keep_order() {
        let temp = TempDir::new().unwrap();
        let tiles: Vec<RgbImage> = (0..12).map(|i| solid(i * 20)).collect();

        let paths = save_tiles(&tiles, temp.path()).unwrap();
        assert_eq!(paths.len(), 12);
        assert_eq!(paths[9], temp.path().join("image_10.png"));

        let loaded = load_tiles(temp.path()).unwrap();
        assert_eq!(loaded, tiles);
    }

    #[test]
    fn test_load_tiles_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        save_tiles(&[solid(5)], temp.path()).unwrap();
        std::fs::write(temp.path().join("readme.txt"), "tiles").unwrap();

        assert_eq!(load_tiles(temp.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_load_tiles_errors() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            load_tiles(temp.path()),
            Err(ReassemblyError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            load_tiles(&temp.path().join("missing")),
            Err(ReassemblyError::FileSystem { .. })
        ));
    }

    #[test]
    fn test_export_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.png");
        let image = gradient(6, 5);

        export_png(&image, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), image);
    }

    #[test]
    fn test_load_image_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, "not a png").unwrap();

        match load_image(&path) {
            Err(ReassemblyError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected image load error, got {other:?}"),
        }
    }
}
