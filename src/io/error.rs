//! Error types for solver operations
//!
//! A contradiction is a normal cell status, not an error. Everything here is
//! either rejected configuration or a broken precondition in the caller or in
//! the solver's own bookkeeping.

use std::fmt;

use crate::spatial::grid::Position;

/// Main error type for all solver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Solver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinates outside the grid
    OutOfBounds {
        /// Requested position `[x, y]`
        position: Position,
        /// Grid dimensions (width, height)
        grid_dimensions: (usize, usize),
    },

    /// Collapse requested on a solved or contradictory cell
    CellAlreadyResolved {
        /// Position of the terminal cell
        position: Position,
    },

    /// Propagation requested from a cell that is not solved
    UnsolvedNeighbor {
        /// Cell constraints were propagated from
        origin: Position,
        /// Cell that would have been narrowed
        target: Position,
    },

    /// Tile index exceeds the variant catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of variants in the catalog
        max_tiles: usize,
    },

    /// Command issued before the first reset
    SolverNotReady {
        /// Command that was rejected
        operation: &'static str,
    },

    /// Solve loop ran past the number of cells without completing
    ///
    /// Every iteration resolves at least one cell, so reaching the cap means
    /// the bookkeeping sets no longer reflect the grid.
    IterationCapExceeded {
        /// Number of iterations allowed
        cap: usize,
        /// Grid dimensions (width, height)
        grid_dimensions: (usize, usize),
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                position,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::CellAlreadyResolved { position } => {
                write!(
                    f,
                    "Cell ({}, {}) is already resolved",
                    position[0], position[1]
                )
            }
            Self::UnsolvedNeighbor { origin, target } => {
                write!(
                    f,
                    "Cannot propagate from unsolved cell ({}, {}) to ({}, {})",
                    origin[0], origin[1], target[0], target[1]
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (max: {max_tiles})")
            }
            Self::SolverNotReady { operation } => {
                write!(f, "Solver must be reset before {operation}")
            }
            Self::IterationCapExceeded {
                cap,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Solver did not complete within {cap} iterations (grid size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
