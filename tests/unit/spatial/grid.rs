//! Tests for grid shapes

#[cfg(test)]
mod tests {
    use tileseam::spatial::grid::GridShape;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(GridShape::new(0, 3).is_err());
        assert!(GridShape::new(3, 0).is_err());

        let shape = GridShape::new(2, 5).unwrap();
        assert_eq!((shape.rows, shape.cols), (2, 5));
        assert_eq!(shape.slot_count(), 10);
    }

    // Non-square counts round up to the next square
    #[test]
    fn test_square_for_uses_ceiling_root() {
        let cases = [(1, 1), (4, 2), (9, 3), (10, 4), (16, 4), (17, 5), (0, 0)];
        for (count, side) in cases {
            let shape = GridShape::square_for(count);
            assert_eq!((shape.rows, shape.cols), (side, side), "count {count}");
        }
    }

    #[test]
    fn test_validate_for_requires_exact_fit() {
        let shape = GridShape::new(2, 3).unwrap();
        assert!(shape.validate_for(6).is_ok());
        assert!(shape.validate_for(5).is_err());
        assert!(shape.validate_for(7).is_err());
    }

    #[test]
    fn test_slot_is_row_major() {
        let shape = GridShape::new(3, 4).unwrap();
        assert_eq!(shape.slot(0, 0), 0);
        assert_eq!(shape.slot(0, 3), 3);
        assert_eq!(shape.slot(1, 0), 4);
        assert_eq!(shape.slot(2, 3), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridShape::new(3, 4).unwrap().to_string(), "3x4");
    }
}
