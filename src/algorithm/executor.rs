use crate::{
    algorithm::propagation::{PropagationSummary, Propagator},
    algorithm::selection::{CellLedger, RandomSelector, select_lowest_entropy_cell},
    io::configuration::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_DIMENSION},
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::tiles::{TileCatalog, TileDefinition},
    spatial::{CellObservation, CellStatus, Grid, Position},
};
use rand::Rng;

/// Grid dimensions for a solve run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl SolverConfig {
    /// Configuration for a `width` by `height` grid
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check both dimensions are within `1..=MAX_GRID_DIMENSION`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first dimension out of range
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

/// Lifecycle stage of a solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// No run has been set up yet
    Uninitialized,
    /// A run is set up with cells left to resolve
    Ready,
    /// Every cell is solved or contradictory
    Completed,
}

/// One forced selection, in the order it happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseRecord {
    /// Solver iteration that performed the collapse
    pub iteration: usize,
    /// Collapsed cell `[x, y]`
    pub position: Position,
    /// Catalog index of the chosen variant
    pub variant: usize,
}

/// Cell counts by status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridTally {
    /// Cells resolved to one variant
    pub solved: usize,
    /// Cells left with no variant
    pub contradictions: usize,
    /// Cells still in superposition
    pub unresolved: usize,
}

/// Everything owned by one seeded run, rebuilt on every reset
#[derive(Debug)]
struct SolveRun<P> {
    seed: u64,
    catalog: TileCatalog<P>,
    grid: Grid,
    ledger: CellLedger,
    selector: RandomSelector,
    propagator: Propagator,
    history: Vec<CollapseRecord>,
    last_propagation: PropagationSummary,
    iteration: usize,
    completed: bool,
}

impl<P> SolveRun<P> {
    fn new(definitions: &[TileDefinition<P>], config: SolverConfig, seed: u64) -> Self {
        let catalog = TileCatalog::build(definitions);
        let grid = Grid::new(config.width, config.height, catalog.len());
        let ledger = CellLedger::from_grid(&grid);

        Self {
            seed,
            catalog,
            grid,
            ledger,
            selector: RandomSelector::new(seed),
            propagator: Propagator::new(),
            history: Vec::new(),
            last_propagation: PropagationSummary::default(),
            iteration: 0,
            completed: false,
        }
    }

    /// Force a cell, record it, and propagate from it
    fn collapse(&mut self, position: Position) -> Result<usize> {
        let out_of_bounds = AlgorithmError::OutOfBounds {
            position,
            grid_dimensions: self.grid.dimensions(),
        };
        let index = self
            .grid
            .index_of(position)
            .ok_or_else(|| out_of_bounds.clone())?;
        let cell = self.grid.cell_mut(position).ok_or(out_of_bounds)?;

        let variant = cell.force_solution(&mut self.selector)?;
        self.ledger.mark_completed(index);
        self.history.push(CollapseRecord {
            iteration: self.iteration,
            position,
            variant,
        });

        self.last_propagation = self.propagator.run(
            position,
            &mut self.grid,
            &self.catalog,
            &mut self.ledger,
        )?;

        if self.ledger.is_exhausted() {
            self.completed = true;
        }
        Ok(variant)
    }
}

/// Edge-matching wave function collapse solver
///
/// Drives a `Uninitialized -> Ready -> Completed` lifecycle. `reset` builds
/// the variant catalog and grid from the tile definitions and seeds the one
/// random generator used for every draw, so identical definitions, grid size
/// and seed reproduce identical runs. Each `iterate_once` collapses the
/// lowest-entropy cell and propagates its constraints; contradictions are
/// accepted as terminal cells and never retried.
#[derive(Debug)]
pub struct Solver<P> {
    definitions: Vec<TileDefinition<P>>,
    config: SolverConfig,
    run: Option<SolveRun<P>>,
}

impl<P> Solver<P> {
    /// Create an uninitialized solver
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid dimensions are out of range
    pub fn new(definitions: Vec<TileDefinition<P>>, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            definitions,
            config,
            run: None,
        })
    }

    /// Create a solver and reset it with `seed`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid dimensions are out of range
    pub fn with_seed(
        definitions: Vec<TileDefinition<P>>,
        config: SolverConfig,
        seed: u64,
    ) -> Result<Self> {
        let mut solver = Self::new(definitions, config)?;
        solver.reset(seed);
        Ok(solver)
    }

    /// Discard any previous run and start over with `seed`
    pub fn reset(&mut self, seed: u64) {
        self.run = Some(SolveRun::new(&self.definitions, self.config, seed));
    }

    /// Reset with a seed drawn from the thread generator, returning it
    pub fn reset_with_fresh_seed(&mut self) -> u64 {
        let seed = rand::rng().random::<u64>();
        self.reset(seed);
        seed
    }

    /// Drop the current run and return to `Uninitialized`
    pub fn teardown(&mut self) {
        self.run = None;
    }

    /// Current lifecycle stage
    pub const fn state(&self) -> SolverState {
        match &self.run {
            None => SolverState::Uninitialized,
            Some(run) if run.completed => SolverState::Completed,
            Some(_) => SolverState::Ready,
        }
    }

    /// Whether every cell has reached a terminal status
    pub const fn is_completed(&self) -> bool {
        matches!(self.state(), SolverState::Completed)
    }

    /// Collapse the lowest-entropy cell and propagate from it
    ///
    /// Returns true if a cell was collapsed. Once completed this is a no-op
    /// returning false.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The solver has not been reset
    /// - Propagation finds its own bookkeeping inconsistent
    pub fn iterate_once(&mut self) -> Result<bool> {
        let run = self.run_mut("iterate_once")?;
        if run.completed {
            return Ok(false);
        }

        run.iteration += 1;
        let selected = select_lowest_entropy_cell(&run.ledger, &run.grid, &mut run.selector)
            .and_then(|index| run.grid.position_of(index));
        let Some(position) = selected else {
            run.completed = true;
            return Ok(false);
        };

        run.collapse(position)?;
        Ok(true)
    }

    /// Iterate until completed
    ///
    /// Returns the number of `iterate_once` calls made.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The solver has not been reset
    /// - Any iteration fails
    /// - The run is not completed after one call per cell
    pub fn solve_all(&mut self) -> Result<usize> {
        self.solve_until(|_| false)
    }

    /// Iterate until completed or until `stop` returns true
    ///
    /// `stop` is checked between calls, so stopping leaves a valid partial
    /// grid. Returns the number of `iterate_once` calls made.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The solver has not been reset
    /// - Any iteration fails
    /// - The run is not completed after one call per cell
    pub fn solve_until(&mut self, mut stop: impl FnMut(&Self) -> bool) -> Result<usize> {
        let (cap, grid_dimensions) = {
            let run = self.run_ref("solve_all")?;
            (run.grid.len().max(1), run.grid.dimensions())
        };

        let mut calls = 0;
        while !self.is_completed() {
            if stop(self) {
                return Ok(calls);
            }
            if calls == cap {
                return Err(AlgorithmError::IterationCapExceeded {
                    cap,
                    grid_dimensions,
                });
            }
            self.iterate_once()?;
            calls += 1;
        }
        Ok(calls)
    }

    /// Collapse the cell at `(x, y)` and propagate from it
    ///
    /// Returns the catalog index of the chosen variant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The solver has not been reset
    /// - `(x, y)` is outside the grid
    /// - The cell is already solved or contradictory
    pub fn force_cell_at(&mut self, x: usize, y: usize) -> Result<usize> {
        let run = self.run_mut("force_cell_at")?;
        let position = [x, y];
        if !run.grid.contains(position) {
            return Err(AlgorithmError::OutOfBounds {
                position,
                grid_dimensions: run.grid.dimensions(),
            });
        }

        run.iteration += 1;
        run.collapse(position)
    }

    /// Position of the next cell `iterate_once` would collapse
    ///
    /// Breaking a tie consumes a random draw, so calling this between
    /// iterations changes the rest of the run.
    ///
    /// # Errors
    ///
    /// Returns `SolverNotReady` if the solver has not been reset
    pub fn select_lowest_entropy_cell(&mut self) -> Result<Option<Position>> {
        let run = self.run_mut("select_lowest_entropy_cell")?;
        Ok(
            select_lowest_entropy_cell(&run.ledger, &run.grid, &mut run.selector)
                .and_then(|index| run.grid.position_of(index)),
        )
    }

    /// Observable state of the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The solver has not been reset
    /// - `(x, y)` is outside the grid
    pub fn observe(&self, x: usize, y: usize) -> Result<CellObservation<'_, P>> {
        let run = self.run_ref("observe")?;
        run.grid
            .cell([x, y])
            .map(|cell| cell.observe(&run.catalog))
            .ok_or(AlgorithmError::OutOfBounds {
                position: [x, y],
                grid_dimensions: run.grid.dimensions(),
            })
    }

    /// Count cells by status, all zero before the first reset
    pub fn tally(&self) -> GridTally {
        let mut tally = GridTally::default();
        let Some(run) = &self.run else {
            return tally;
        };
        for cell in run.grid.cells() {
            match cell.status() {
                CellStatus::Solved(_) => tally.solved += 1,
                CellStatus::Contradiction => tally.contradictions += 1,
                CellStatus::Unresolved => tally.unresolved += 1,
            }
        }
        tally
    }

    /// Forced selections of the current run, oldest first
    pub fn history(&self) -> &[CollapseRecord] {
        match &self.run {
            Some(run) => &run.history,
            None => &[],
        }
    }

    /// Counts from the most recent propagation run
    pub fn last_propagation(&self) -> Option<PropagationSummary> {
        self.run.as_ref().map(|run| run.last_propagation)
    }

    /// Iterations performed in the current run
    pub fn iteration(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.iteration)
    }

    /// Seed of the current run
    pub fn seed(&self) -> Option<u64> {
        self.run.as_ref().map(|run| run.seed)
    }

    /// Grid of the current run
    pub fn grid(&self) -> Option<&Grid> {
        self.run.as_ref().map(|run| &run.grid)
    }

    /// Variant catalog of the current run
    pub fn catalog(&self) -> Option<&TileCatalog<P>> {
        self.run.as_ref().map(|run| &run.catalog)
    }

    /// Bookkeeping sets of the current run
    pub fn ledger(&self) -> Option<&CellLedger> {
        self.run.as_ref().map(|run| &run.ledger)
    }

    /// Grid dimensions
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Tile definitions the catalog is built from
    pub fn definitions(&self) -> &[TileDefinition<P>] {
        &self.definitions
    }

    fn run_ref(&self, operation: &'static str) -> Result<&SolveRun<P>> {
        self.run
            .as_ref()
            .ok_or(AlgorithmError::SolverNotReady { operation })
    }

    fn run_mut(&mut self, operation: &'static str) -> Result<&mut SolveRun<P>> {
        self.run
            .as_mut()
            .ok_or(AlgorithmError::SolverNotReady { operation })
    }
}
