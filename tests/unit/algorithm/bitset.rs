//! Tests for `OccupancyMask` region queries and updates

#[cfg(test)]
mod tests {
    use brickplan::algorithm::bitset::OccupancyMask;

    // Verifies a new mask has every cell free
    // Verified by initializing the mask with all bits set
    #[test]
    fn test_new_mask() {
        let mask = OccupancyMask::new(4, 3);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.count(), 0);
        assert!(!mask.is_full());
        assert!(!mask.is_occupied(3, 2));
    }

    // Tests out-of-bounds cells read as occupied
    // Verified by returning false for missing indices
    #[test]
    fn test_out_of_bounds_is_occupied() {
        let mask = OccupancyMask::new(2, 2);
        assert!(mask.is_occupied(2, 0));
        assert!(mask.is_occupied(0, 2));
    }

    // Tests occupying a rectangle marks exactly its cells
    // Verified by filling one extra column per row
    #[test]
    fn test_occupy_region() {
        let mut mask = OccupancyMask::new(5, 4);
        mask.occupy(1, 1, 3, 2);

        assert_eq!(mask.count(), 6);
        assert!(mask.is_occupied(1, 1));
        assert!(mask.is_occupied(3, 2));
        assert!(!mask.is_occupied(4, 1));
        assert!(!mask.is_occupied(1, 3));
        assert!(!mask.is_occupied(0, 1));
    }

    // Tests region checks reject overlap and out-of-bounds rectangles
    // Verified by skipping the bounds check
    #[test]
    fn test_is_region_free() {
        let mut mask = OccupancyMask::new(4, 4);
        mask.occupy(2, 2, 1, 1);

        assert!(mask.is_region_free(0, 0, 2, 2));
        assert!(mask.is_region_free(0, 0, 4, 2));
        assert!(!mask.is_region_free(1, 1, 2, 2));
        assert!(!mask.is_region_free(3, 0, 2, 1));
        assert!(!mask.is_region_free(0, 3, 1, 2));
        assert!(mask.is_region_free(3, 3, 1, 1));
    }

    // Tests occupy clips rectangles that leave the mask
    // Verified by removing the clipping
    #[test]
    fn test_occupy_clipped() {
        let mut mask = OccupancyMask::new(3, 3);
        mask.occupy(2, 2, 5, 5);
        assert_eq!(mask.count(), 1);

        mask.occupy(7, 0, 1, 1);
        assert_eq!(mask.count(), 1);
    }

    // Tests the full flag after covering every cell
    // Verified by checking any instead of all
    #[test]
    fn test_is_full() {
        let mut mask = OccupancyMask::new(2, 3);
        mask.occupy(0, 0, 2, 2);
        assert!(!mask.is_full());
        mask.occupy(0, 2, 2, 1);
        assert!(mask.is_full());
        assert_eq!(mask.to_string(), "OccupancyMask(2x3, 6 of 6 covered)");
    }
}
