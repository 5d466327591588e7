//! Tests for grid storage, indexing, and neighbour lookup

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::CandidateSet;
    use tilecollapse::spatial::{CellStatus, Direction, Grid};

    // Tests dimensions are reported as width by height
    // Verified by swapping the shape passed to from_shape_fn
    #[test]
    fn test_dimensions() {
        let grid = Grid::new(3, 2, 4);

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
        assert!(grid.contains([2, 1]));
        assert!(!grid.contains([1, 2]));
    }

    // Tests linear indices are row-major and round-trip
    // Verified by computing x * height + y
    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(3, 2, 1);

        assert_eq!(grid.index_of([2, 0]), Some(2));
        assert_eq!(grid.index_of([0, 1]), Some(3));
        assert_eq!(grid.index_of([3, 0]), None);
        assert_eq!(grid.position_of(5), Some([2, 1]));
        assert_eq!(grid.position_of(6), None);
        for index in 0..grid.len() {
            let position = grid.position_of(index).expect("index inside grid");
            assert_eq!(grid.index_of(position), Some(index));
            let cell = grid.cell_at(index).expect("cell for index");
            assert_eq!(cell.position(), position);
        }
    }

    // Tests neighbours stop at the border without wrapping
    // Verified by wrapping x modulo width in neighbor
    #[test]
    fn test_neighbors_do_not_wrap() {
        let grid = Grid::new(3, 2, 1);

        assert_eq!(grid.neighbor([0, 0], Direction::Left), None);
        assert_eq!(grid.neighbor([0, 0], Direction::Down), None);
        assert_eq!(grid.neighbor([0, 0], Direction::Up), Some([0, 1]));
        assert_eq!(grid.neighbor([0, 0], Direction::Right), Some([1, 0]));
        assert_eq!(grid.neighbor([2, 1], Direction::Up), None);
        assert_eq!(grid.neighbor([2, 1], Direction::Right), None);
        assert_eq!(grid.neighbor([2, 1], Direction::Down), Some([2, 0]));
    }

    // Tests every cell starts with the full catalog
    // Verified by creating cells with an empty candidate set
    #[test]
    fn test_cells_start_full() {
        let grid = Grid::new(4, 4, 5);

        assert!(grid.cells().all(|cell| cell.entropy() == 5));
        assert!(grid.cells().all(|cell| cell.status() == CellStatus::Unresolved));
    }

    // Tests an empty catalog leaves every cell contradictory
    // Verified by treating zero candidates as unresolved
    #[test]
    fn test_empty_catalog_cells_are_contradictions() {
        let grid = Grid::new(2, 2, 0);

        assert!(grid.cells().all(|cell| cell.status() == CellStatus::Contradiction));
    }

    #[test]
    fn test_with_candidates_copies_the_set() {
        let mut candidates = CandidateSet::empty(4);
        candidates.insert(3);
        let grid = Grid::with_candidates(2, 1, &candidates);

        assert!(grid.cells().all(|cell| cell.solution() == Some(3)));
    }
}
