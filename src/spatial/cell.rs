//! Per-position superposition over the variant catalog
//!
//! A cell's candidate set only ever shrinks. Its status is derived from the
//! candidate count: none left is a contradiction, exactly one is solved, and
//! anything more is unresolved. Solved and contradiction are terminal.

use crate::algorithm::bitset::CandidateSet;
use crate::algorithm::selection::RandomSelector;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::direction::Direction;
use crate::spatial::grid::Position;
use crate::spatial::tiles::{TileCatalog, TileVariant};

/// Resolution state of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStatus {
    /// More than one candidate remains
    Unresolved,
    /// Exactly one candidate remains, holding its catalog index
    Solved(usize),
    /// No candidate satisfies the neighbouring constraints
    Contradiction,
}

impl CellStatus {
    /// Whether the status can no longer change
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Observable state of a cell handed to rendering collaborators
#[derive(Debug)]
pub enum CellObservation<'a, P> {
    /// Still in superposition
    Unresolved {
        /// Remaining candidate count
        candidate_count: usize,
    },
    /// Resolved to a single oriented variant
    Solved {
        /// The chosen variant with its payload and transform
        variant: &'a TileVariant<P>,
    },
    /// Terminal failure, no variant fits
    Contradiction,
}

/// Grid position holding a shrinking set of candidate variants
#[derive(Clone, Debug)]
pub struct Cell {
    position: Position,
    candidates: CandidateSet,
    status: CellStatus,
}

impl Cell {
    /// Create a cell with its initial candidates and derived status
    pub fn init(position: Position, candidates: CandidateSet) -> Self {
        let mut cell = Self {
            position,
            candidates,
            status: CellStatus::Unresolved,
        };
        cell.update_status();
        cell
    }

    /// Grid position `[x, y]`
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Number of remaining candidates
    pub fn entropy(&self) -> usize {
        self.candidates.count()
    }

    /// Current status
    pub const fn status(&self) -> CellStatus {
        self.status
    }

    /// Whether the cell is solved or contradictory
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Catalog index of the sole candidate once solved
    pub const fn solution(&self) -> Option<usize> {
        match self.status {
            CellStatus::Solved(index) => Some(index),
            CellStatus::Unresolved | CellStatus::Contradiction => None,
        }
    }

    /// Remaining candidates
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Collapse to one uniformly chosen candidate
    ///
    /// Returns the catalog index of the chosen variant.
    ///
    /// # Errors
    ///
    /// Returns `CellAlreadyResolved` if the cell is already terminal
    pub fn force_solution(&mut self, selector: &mut RandomSelector) -> Result<usize> {
        if self.is_terminal() {
            return Err(AlgorithmError::CellAlreadyResolved {
                position: self.position,
            });
        }

        let pick = selector.pick_index(self.entropy());
        let chosen = self
            .candidates
            .nth(pick)
            .ok_or(AlgorithmError::CellAlreadyResolved {
                position: self.position,
            })?;

        self.candidates.keep_only(chosen);
        self.update_status();
        Ok(chosen)
    }

    /// Narrow candidates against a solved neighbour lying in `toward_neighbor`
    ///
    /// Keeps only candidates whose edge facing the neighbour equals the
    /// neighbour's edge facing back. Returns true iff this call moved the cell
    /// into a terminal status. Terminal cells are left untouched.
    pub fn propagate<P>(
        &mut self,
        catalog: &TileCatalog<P>,
        neighbor: &TileVariant<P>,
        toward_neighbor: Direction,
    ) -> bool {
        self.constrain(catalog, &[(neighbor, toward_neighbor)])
    }

    /// Narrow candidates against several solved neighbours in one pass
    ///
    /// Each entry pairs a neighbour's variant with the direction it lies in.
    /// A candidate survives only if it connects to all of them. Returns true
    /// iff this call moved the cell into a terminal status.
    pub fn constrain<P>(
        &mut self,
        catalog: &TileCatalog<P>,
        neighbors: &[(&TileVariant<P>, Direction)],
    ) -> bool {
        if self.is_terminal() {
            return false;
        }

        let removed = self.candidates.retain(|index| {
            catalog.get(index).is_some_and(|candidate| {
                neighbors
                    .iter()
                    .all(|&(neighbor, toward)| candidate.connects(neighbor, toward))
            })
        });

        if removed == 0 {
            return false;
        }

        self.update_status();
        self.is_terminal()
    }

    /// Observable shape of this cell
    pub fn observe<'a, P>(&self, catalog: &'a TileCatalog<P>) -> CellObservation<'a, P> {
        match self.status {
            CellStatus::Unresolved => CellObservation::Unresolved {
                candidate_count: self.entropy(),
            },
            CellStatus::Solved(index) => catalog.get(index).map_or(
                CellObservation::Contradiction,
                |variant| CellObservation::Solved { variant },
            ),
            CellStatus::Contradiction => CellObservation::Contradiction,
        }
    }

    fn update_status(&mut self) {
        self.status = match self.candidates.count() {
            0 => CellStatus::Contradiction,
            1 => self
                .candidates
                .single()
                .map_or(CellStatus::Contradiction, CellStatus::Solved),
            _ => CellStatus::Unresolved,
        };
    }
}
