//! Edge-matching wave function collapse over rotated and reflected tile sets
//!
//! Tile definitions are expanded into a catalog of oriented variants. Every
//! grid cell starts as a superposition of the whole catalog; the solver
//! repeatedly collapses the cell with the fewest candidates and propagates
//! edge-compatibility constraints to its neighbours until every cell is
//! solved or contradictory.

#![forbid(unsafe_code)]

/// Candidate sets, propagation, cell selection, and the solver loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Directions, tiles, cells, and grid storage
pub mod spatial;

pub use algorithm::executor::{Solver, SolverConfig, SolverState};
pub use io::error::{AlgorithmError, Result};
