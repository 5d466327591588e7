use crate::spatial::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Seeded random selector backing every draw of a solve run
///
/// One instance serves both tie-breaking between equal-entropy cells and the
/// candidate draw in `Cell::force_solution`, so a fixed seed reproduces the
/// whole run.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`
    ///
    /// Returns 0 without drawing when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Partition of grid cells by how far the solver has got with them
///
/// Every cell index is in exactly one set:
/// - `sleeping`: never narrowed, entropy equals the catalog size
/// - `in_progress`: narrowed at least once but still unresolved
/// - `completed`: solved or contradictory
#[derive(Clone, Debug, Default)]
pub struct CellLedger {
    sleeping: BTreeSet<usize>,
    in_progress: BTreeSet<usize>,
    completed: BTreeSet<usize>,
}

impl CellLedger {
    /// Sort every cell of a freshly built grid into sleeping or completed
    pub fn from_grid(grid: &Grid) -> Self {
        let mut ledger = Self::default();
        for (index, cell) in grid.cells().enumerate() {
            if cell.is_terminal() {
                ledger.completed.insert(index);
            } else {
                ledger.sleeping.insert(index);
            }
        }
        ledger
    }

    /// Record that a cell lost candidates without resolving
    pub fn mark_narrowed(&mut self, index: usize) {
        if self.sleeping.remove(&index) {
            self.in_progress.insert(index);
        }
    }

    /// Record that a cell reached a terminal status
    pub fn mark_completed(&mut self, index: usize) {
        self.sleeping.remove(&index);
        self.in_progress.remove(&index);
        self.completed.insert(index);
    }

    /// Cells never narrowed
    pub const fn sleeping(&self) -> &BTreeSet<usize> {
        &self.sleeping
    }

    /// Cells narrowed but unresolved
    pub const fn in_progress(&self) -> &BTreeSet<usize> {
        &self.in_progress
    }

    /// Cells in a terminal status
    pub const fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Whether no unresolved cell remains
    pub fn is_exhausted(&self) -> bool {
        self.sleeping.is_empty() && self.in_progress.is_empty()
    }
}

/// Pick the unresolved cell with the fewest candidates
///
/// Sleeping cells all hold the full catalog, so whenever any cell is in
/// progress the minimum lies there; ties are broken uniformly at random.
/// Otherwise the first sleeping cell is returned without drawing.
pub fn select_lowest_entropy_cell(
    ledger: &CellLedger,
    grid: &Grid,
    selector: &mut RandomSelector,
) -> Option<usize> {
    if ledger.in_progress.is_empty() {
        return ledger.sleeping.first().copied();
    }

    let mut lowest = usize::MAX;
    let mut ties = Vec::new();
    for &index in &ledger.in_progress {
        let Some(cell) = grid.cell_at(index) else {
            continue;
        };
        match cell.entropy().cmp(&lowest) {
            Ordering::Less => {
                lowest = cell.entropy();
                ties.clear();
                ties.push(index);
            }
            Ordering::Equal => ties.push(index),
            Ordering::Greater => {}
        }
    }

    let pick = selector.pick_index(ties.len());
    ties.get(pick).copied()
}
