//! Tests for error message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilecollapse::AlgorithmError;
    use tilecollapse::io::error::invalid_parameter;

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be at least 1");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'width' = '0': must be at least 1"
        );
        assert!(error.source().is_none());
    }

    // Tests positions are printed as (x, y) with the grid size
    // Verified by printing the position as [y, x]
    #[test]
    fn test_out_of_bounds_error() {
        let error = AlgorithmError::OutOfBounds {
            position: [7, 2],
            grid_dimensions: (5, 3),
        };

        assert_eq!(error.to_string(), "Position (7, 2) is outside the 5x3 grid");
    }

    // Tests collapse and propagation precondition messages
    // Verified by swapping origin and target in the message
    #[test]
    fn test_precondition_errors() {
        let resolved = AlgorithmError::CellAlreadyResolved { position: [1, 4] };
        let unsolved = AlgorithmError::UnsolvedNeighbor {
            origin: [0, 1],
            target: [1, 1],
        };

        assert_eq!(resolved.to_string(), "Cell (1, 4) is already resolved");
        assert_eq!(
            unsolved.to_string(),
            "Cannot propagate from unsolved cell (0, 1) to (1, 1)"
        );
    }

    // Tests lifecycle and bookkeeping messages
    // Verified by omitting the cap from the message
    #[test]
    fn test_lifecycle_errors() {
        let not_ready = AlgorithmError::SolverNotReady {
            operation: "observe",
        };
        let cap = AlgorithmError::IterationCapExceeded {
            cap: 12,
            grid_dimensions: (4, 3),
        };
        let tile = AlgorithmError::InvalidTileIndex {
            index: 9,
            max_tiles: 4,
        };

        assert_eq!(not_ready.to_string(), "Solver must be reset before observe");
        assert!(cap.to_string().contains("within 12 iterations"));
        assert!(cap.to_string().contains("4x3"));
        assert!(tile.to_string().contains("max: 4"));
    }
}
