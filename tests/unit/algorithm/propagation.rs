//! Tests for stack-based constraint propagation

#[cfg(test)]
mod tests {
    use tilecollapse::AlgorithmError;
    use tilecollapse::algorithm::bitset::CandidateSet;
    use tilecollapse::algorithm::propagation::{PUSH_ORDER, PropagationSummary, Propagator};
    use tilecollapse::algorithm::selection::CellLedger;
    use tilecollapse::spatial::tiles::{Edges, TileCatalog, TileDefinition};
    use tilecollapse::spatial::{Cell, CellStatus, Direction, Grid};

    // Only the right side of the first tile matches the left side of the second
    fn chain_catalog() -> TileCatalog<()> {
        TileCatalog::build(&[
            TileDefinition::new("head", Edges::new([1u32, 5, 2, 3]), ()),
            TileDefinition::new("tail", Edges::new([4u32, 6, 8, 5]), ()),
        ])
    }

    // Indices: 0 = all ones, 1 = all twos, 2 = twos sideways, 3 = left 2 and right 1
    fn mixed_catalog() -> TileCatalog<()> {
        TileCatalog::build(&[
            TileDefinition::new("a", Edges::new([1u32, 1, 1, 1]), ()),
            TileDefinition::new("b", Edges::new([2u32, 2, 2, 2]), ()),
            TileDefinition::new("c", Edges::new([1u32, 2, 1, 2]), ()),
            TileDefinition::new("e", Edges::new([1u32, 1, 2, 2]), ()),
        ])
    }

    /// Row of `width` cells with the given cells pinned to one variant
    fn row(width: usize, variant_count: usize, pinned: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, 1, variant_count);
        for &(x, variant) in pinned {
            let mut only = CandidateSet::empty(variant_count);
            only.insert(variant);
            let cell = grid.cell_mut([x, 0]).expect("pinned cell inside grid");
            *cell = Cell::init([x, 0], only);
        }
        grid
    }

    // Tests the stack pushes Up last so it is visited first
    // Verified by reordering the constant
    #[test]
    fn test_push_order() {
        assert_eq!(
            PUSH_ORDER,
            [Direction::Left, Direction::Right, Direction::Down, Direction::Up]
        );
    }

    // Tests a solved cell forces its only compatible neighbour
    // Verified by comparing the same side of both tiles
    #[test]
    fn test_forced_neighbor_is_solved() {
        let catalog = chain_catalog();
        let mut grid = row(2, catalog.len(), &[(0, 0)]);
        let mut ledger = CellLedger::from_grid(&grid);
        let mut propagator = Propagator::new();

        let summary = propagator
            .run([0, 0], &mut grid, &catalog, &mut ledger)
            .expect("origin is solved");

        assert_eq!(grid.cell([1, 0]).map(Cell::status), Some(CellStatus::Solved(1)));
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.visited, 1);
        assert!(ledger.is_exhausted());
        assert_eq!(propagator.pending(), 0);
    }

    // Tests newly solved cells keep propagating until a contradiction
    // Verified by not pushing neighbours of cells solved during propagation
    #[test]
    fn test_chain_ends_in_contradiction() {
        let catalog = chain_catalog();
        let mut grid = row(3, catalog.len(), &[(0, 0)]);
        let mut ledger = CellLedger::from_grid(&grid);

        let summary = Propagator::new()
            .run([0, 0], &mut grid, &catalog, &mut ledger)
            .expect("origin is solved");

        assert_eq!(
            summary,
            PropagationSummary {
                visited: 2,
                narrowed: 0,
                solved: 1,
                contradictions: 1,
            }
        );
        assert_eq!(
            grid.cell([2, 0]).map(Cell::status),
            Some(CellStatus::Contradiction)
        );
        assert_eq!(ledger.completed().len(), 3);
    }

    // Tests a contradiction is a dead end for propagation
    // Verified by pushing neighbours of contradictory cells
    #[test]
    fn test_contradiction_does_not_spread() {
        let catalog = chain_catalog();
        let mut grid = row(3, catalog.len(), &[(0, 1)]);
        let mut ledger = CellLedger::from_grid(&grid);

        let summary = Propagator::new()
            .run([0, 0], &mut grid, &catalog, &mut ledger)
            .expect("origin is solved");

        assert_eq!(summary.contradictions, 1);
        assert_eq!(grid.cell([2, 0]).map(Cell::entropy), Some(2));
        assert!(ledger.sleeping().contains(&2));
    }

    // Tests partial narrowing moves the cell into the in-progress set
    // Verified by marking narrowed cells completed
    #[test]
    fn test_narrowed_cell_is_in_progress() {
        let catalog = mixed_catalog();
        let mut grid = row(2, catalog.len(), &[(0, 2)]);
        let mut ledger = CellLedger::from_grid(&grid);

        let summary = Propagator::new()
            .run([0, 0], &mut grid, &catalog, &mut ledger)
            .expect("origin is solved");

        assert_eq!(summary.narrowed, 1);
        assert_eq!(
            grid.cell([1, 0]).map(|cell| cell.candidates().to_vec()),
            Some(vec![1, 2, 3])
        );
        assert!(ledger.in_progress().contains(&1));
        assert!(!ledger.sleeping().contains(&1));
    }

    // Tests a target is checked against every solved neighbour, not just the source
    // Verified by narrowing against the source only
    #[test]
    fn test_target_respects_all_solved_neighbors() {
        let catalog = mixed_catalog();
        let mut grid = row(3, catalog.len(), &[(0, 2), (2, 0)]);
        let mut ledger = CellLedger::from_grid(&grid);

        Propagator::new()
            .run([0, 0], &mut grid, &catalog, &mut ledger)
            .expect("origin is solved");

        // Left 2 from the source, right 1 from the far cell
        assert_eq!(grid.cell([1, 0]).map(Cell::status), Some(CellStatus::Solved(3)));
    }

    // Tests propagation refuses an unsolved or missing origin
    // Verified by removing the origin status check
    #[test]
    fn test_origin_must_be_solved() {
        let catalog = chain_catalog();
        let mut grid = Grid::new(2, 1, catalog.len());
        let mut ledger = CellLedger::from_grid(&grid);
        let mut propagator = Propagator::new();

        assert_eq!(
            propagator.run([0, 0], &mut grid, &catalog, &mut ledger),
            Err(AlgorithmError::UnsolvedNeighbor {
                origin: [0, 0],
                target: [0, 0]
            })
        );
        assert_eq!(
            propagator.run([5, 0], &mut grid, &catalog, &mut ledger),
            Err(AlgorithmError::OutOfBounds {
                position: [5, 0],
                grid_dimensions: (2, 1)
            })
        );
    }
}
