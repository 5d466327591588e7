//! Spatial data structures for the solver
//!
//! This module contains spatial-related functionality including:
//! - Directions and edge adjacency
//! - Tile definitions and the oriented variant catalog
//! - Per-position cell state and the grid that stores it

/// Per-position superposition state machine
pub mod cell;
/// Cardinal directions
pub mod direction;
/// Fixed-size grid storage and neighbour lookup
pub mod grid;
/// Tile definitions, orientation transforms, and the variant catalog
pub mod tiles;

pub use cell::{Cell, CellObservation, CellStatus};
pub use direction::Direction;
pub use grid::{Grid, Position};
