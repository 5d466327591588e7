//! Fixed-size cell storage with four-directional adjacency
//!
//! Cells live in an `ndarray` matrix indexed `[y, x]`. Positions handed to
//! callers are `[x, y]`, and each cell also has a linear index
//! `y * width + x` used by the solver's bookkeeping. There is no wraparound:
//! neighbours past the border do not exist.

use ndarray::Array2;

use crate::algorithm::bitset::CandidateSet;
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;

/// Grid coordinates `[x, y]`
pub type Position = [usize; 2];

/// Width by height matrix of cells
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocate a grid whose cells all start with the full catalog
    pub fn new(width: usize, height: usize, variant_count: usize) -> Self {
        Self::with_candidates(width, height, &CandidateSet::full(variant_count))
    }

    /// Allocate a grid whose cells all start with `candidates`
    pub fn with_candidates(width: usize, height: usize, candidates: &CandidateSet) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(y, x)| {
            Cell::init([x, y], candidates.clone())
        });
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.width() && position[1] < self.height()
    }

    /// Linear index of a position, if inside the grid
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position[1] * self.width() + position[0])
    }

    /// Position of a linear index, if inside the grid
    pub fn position_of(&self, index: usize) -> Option<Position> {
        let width = self.width();
        (index < self.len()).then(|| [index % width, index / width])
    }

    /// Cell at a position
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get([position[1], position[0]])
    }

    /// Mutable cell at a position
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut([position[1], position[0]])
    }

    /// Cell at a linear index
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.position_of(index).and_then(|position| self.cell(position))
    }

    /// Mutable cell at a linear index
    pub fn cell_at_mut(&mut self, index: usize) -> Option<&mut Cell> {
        let position = self.position_of(index)?;
        self.cell_mut(position)
    }

    /// Position adjacent to `position` in `direction`, if inside the grid
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let [dx, dy] = direction.offset();
        let x = position[0].checked_add_signed(dx)?;
        let y = position[1].checked_add_signed(dy)?;
        let neighbor = [x, y];
        self.contains(neighbor).then_some(neighbor)
    }

    /// All cells in row-major order of linear index
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }
}
