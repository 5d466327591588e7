use crate::{
    algorithm::selection::CellLedger,
    io::error::{AlgorithmError, Result},
    spatial::{
        Cell, CellStatus, Direction, Grid, Position,
        tiles::{TileCatalog, TileVariant},
    },
};

/// Order in which a cell's neighbours are pushed onto the work stack
///
/// The stack is LIFO, so the last entry is visited first. Changing this order
/// changes the output produced for a given seed.
pub const PUSH_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// Pending constraint from a solved cell onto one neighbour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkItem {
    /// Linear index of the solved cell
    pub source: usize,
    /// Linear index of the cell to narrow
    pub target: usize,
    /// Direction from source to target
    pub direction: Direction,
}

/// Counts gathered over one propagation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationSummary {
    /// Work items applied to a non-terminal target
    pub visited: usize,
    /// Targets that lost candidates but stayed unresolved
    pub narrowed: usize,
    /// Targets that became solved
    pub solved: usize,
    /// Targets that became contradictory
    pub contradictions: usize,
}

/// Depth-first constraint propagation from a freshly solved cell
///
/// The work stack is reused across runs.
#[derive(Clone, Debug, Default)]
pub struct Propagator {
    stack: Vec<WorkItem>,
}

impl Propagator {
    /// Create a propagator with an empty stack
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Propagate constraints outward from `origin`
    ///
    /// Each newly solved cell pushes its own unresolved neighbours; a
    /// contradiction is a dead end. A target is narrowed against its source
    /// and against every other neighbour already solved at that point, since
    /// the source's own work item may still be waiting further down the
    /// stack. Ledger sets are updated as cells narrow or terminate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `origin` lies outside the grid
    /// - `origin`, or any cell propagated from, is not solved
    /// - A solved cell refers to a variant missing from the catalog
    pub fn run<P>(
        &mut self,
        origin: Position,
        grid: &mut Grid,
        catalog: &TileCatalog<P>,
        ledger: &mut CellLedger,
    ) -> Result<PropagationSummary> {
        let origin_index = grid
            .index_of(origin)
            .ok_or(AlgorithmError::OutOfBounds {
                position: origin,
                grid_dimensions: grid.dimensions(),
            })?;
        if grid.cell_at(origin_index).and_then(Cell::solution).is_none() {
            return Err(AlgorithmError::UnsolvedNeighbor {
                origin,
                target: origin,
            });
        }

        self.stack.clear();
        self.push_neighbors(grid, origin_index);

        let mut summary = PropagationSummary::default();
        while let Some(item) = self.stack.pop() {
            let source_variant = grid
                .cell_at(item.source)
                .and_then(Cell::solution)
                .ok_or_else(|| unsolved_neighbor(grid, item))?;
            let variant = catalog.variant(source_variant)?;

            // Reached earlier along another path
            if grid.cell_at(item.target).is_none_or(Cell::is_terminal) {
                continue;
            }

            let mut constraints = vec![(variant, item.direction.opposite())];
            solved_neighbors(grid, catalog, item, &mut constraints)?;

            let Some(target) = grid.cell_at_mut(item.target) else {
                continue;
            };
            summary.visited += 1;
            let before = target.entropy();
            let finished = target.constrain(catalog, &constraints);
            let status = target.status();
            let narrowed = target.entropy() < before;

            if finished {
                ledger.mark_completed(item.target);
                if let CellStatus::Solved(_) = status {
                    summary.solved += 1;
                    self.push_neighbors(grid, item.target);
                } else {
                    summary.contradictions += 1;
                }
            } else if narrowed {
                ledger.mark_narrowed(item.target);
                summary.narrowed += 1;
            }
        }

        Ok(summary)
    }

    /// Number of items left on the stack, zero after a completed run
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    fn push_neighbors(&mut self, grid: &Grid, source: usize) {
        let Some(position) = grid.position_of(source) else {
            return;
        };
        for direction in PUSH_ORDER {
            let target = grid
                .neighbor(position, direction)
                .and_then(|neighbor| grid.index_of(neighbor));
            let Some(target) = target else {
                continue;
            };
            if grid.cell_at(target).is_some_and(|cell| !cell.is_terminal()) {
                self.stack.push(WorkItem {
                    source,
                    target,
                    direction,
                });
            }
        }
    }
}

/// Append every solved neighbour of the target other than the item's source
fn solved_neighbors<'a, P>(
    grid: &Grid,
    catalog: &'a TileCatalog<P>,
    item: WorkItem,
    constraints: &mut Vec<(&'a TileVariant<P>, Direction)>,
) -> Result<()> {
    let Some(position) = grid.position_of(item.target) else {
        return Ok(());
    };
    for direction in PUSH_ORDER {
        let Some(neighbor) = grid.neighbor(position, direction) else {
            continue;
        };
        if grid.index_of(neighbor) == Some(item.source) {
            continue;
        }
        if let Some(variant) = grid.cell(neighbor).and_then(Cell::solution) {
            constraints.push((catalog.variant(variant)?, direction));
        }
    }
    Ok(())
}

fn unsolved_neighbor(grid: &Grid, item: WorkItem) -> AlgorithmError {
    AlgorithmError::UnsolvedNeighbor {
        origin: grid.position_of(item.source).unwrap_or_default(),
        target: grid.position_of(item.target).unwrap_or_default(),
    }
}
