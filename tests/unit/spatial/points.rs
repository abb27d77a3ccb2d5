//! Tests for assembly-region point sets

#[cfg(test)]
mod tests {
    use ghosttile::spatial::PointSet;
    use ghosttile::spatial::topology::Coord;

    // Tests an odd rectangle centers exactly on the origin
    // Verified by shifting the range bounds by one
    #[test]
    fn test_odd_rectangle_centered() {
        let points = PointSet::rectangle(3, 3);
        assert_eq!(points.len(), 9);
        assert!(points.contains([0, 0]));
        assert!(points.contains([-1, -1]));
        assert!(points.contains([1, 1]));
        assert!(!points.contains([2, 0]));
        assert!(!points.contains([0, -2]));
    }

    // Tests even dimensions extend further on the negative side
    // Verified by flipping the asymmetry to the positive side
    #[test]
    fn test_even_rectangle_bias() {
        let points = PointSet::rectangle(4, 4);
        assert_eq!(points.len(), 16);
        assert!(points.contains([0, 0]));
        assert!(points.contains([-2, -2]));
        assert!(points.contains([1, 1]));
        assert!(!points.contains([2, 2]));
    }

    // Tests the empty set reports no members
    // Verified by inserting a point before checking
    #[test]
    fn test_empty_set() {
        let points = PointSet::new();
        assert!(points.is_empty());
        assert_eq!(points.len(), 0);
        assert!(!points.contains([0, 0]));
    }

    // Tests construction from arbitrary coordinates
    // Verified by dropping one coordinate from the source
    #[test]
    fn test_from_iterator() {
        let coords: Vec<Coord> = vec![[0, 0], [5, -3], [0, 0]];
        let points: PointSet = coords.into_iter().collect();
        assert_eq!(points.len(), 2);
        assert!(points.contains([5, -3]));
    }

    // Tests iteration yields every member exactly once
    // Verified by comparing counts against len
    #[test]
    fn test_iter_covers_all_points() {
        let points = PointSet::rectangle(2, 3);
        assert_eq!(points.iter().count(), points.len());
        assert!(points.iter().all(|coord| points.contains(coord)));
    }
}
