//! Command-line driver pacing the solver over a built-in tile set

use crate::algorithm::executor::{GridTally, Solver, SolverConfig};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, PROGRESS_REFRESH_INTERVAL,
};
use crate::io::error::Result;
use crate::io::presets::Preset;
use crate::io::progress::SolveProgress;
use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Fill a grid with edge-matching tiles by wave function collapse"
)]
/// Command-line arguments for the solver driver
pub struct Cli {
    /// Built-in tile set to solve with
    #[arg(short, long, value_enum, default_value_t = Preset::Pipes)]
    pub preset: Preset,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Ignore --seed and draw a fresh one
    #[arg(short, long)]
    pub fresh_seed: bool,

    /// Stop after this many iterations, leaving the grid partially solved
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Print every forced selection
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid dimensions requested on the command line
    pub const fn config(&self) -> SolverConfig {
        SolverConfig::new(self.width, self.height)
    }
}

/// Outcome of one driven solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveReport {
    /// Seed the run used
    pub seed: u64,
    /// Iterations performed
    pub iterations: usize,
    /// Final cell counts
    pub tally: GridTally,
    /// Whether every cell reached a terminal status
    pub completed: bool,
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {} | {} iterations | solved {} | contradictions {} | unresolved {}{}",
            self.seed,
            self.iterations,
            self.tally.solved,
            self.tally.contradictions,
            self.tally.unresolved,
            if self.completed { "" } else { " | stopped early" }
        )
    }
}

/// Runs the solver according to CLI arguments
pub struct SolveDriver {
    cli: Cli,
}

impl SolveDriver {
    /// Create a driver for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the solver and reset it with the requested seed
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn build_solver(&self) -> Result<Solver<char>> {
        let mut solver = Solver::new(self.cli.preset.definitions(), self.cli.config())?;
        if self.cli.fresh_seed {
            solver.reset_with_fresh_seed();
        } else {
            solver.reset(self.cli.seed);
        }
        Ok(solver)
    }

    /// Solve without printing anything but the progress bar
    ///
    /// # Errors
    ///
    /// Returns an error if the solver cannot be built or an iteration fails
    pub fn solve(&self) -> Result<(Solver<char>, SolveReport)> {
        let mut solver = self.build_solver()?;
        let total_cells = self.cli.config().cell_count();
        let progress = if self.cli.should_show_progress() {
            SolveProgress::new(total_cells)
        } else {
            SolveProgress::hidden(total_cells)
        };
        let limit = self.cli.iterations;

        solver.solve_until(|current| {
            let iteration = current.iteration();
            if iteration % PROGRESS_REFRESH_INTERVAL == 0 {
                let resolved = current.ledger().map_or(0, |ledger| ledger.completed().len());
                progress.update(resolved, iteration, current.tally().contradictions);
            }
            limit.is_some_and(|max| iteration >= max)
        })?;

        let report = SolveReport {
            seed: solver.seed().unwrap_or_default(),
            iterations: solver.iteration(),
            tally: solver.tally(),
            completed: solver.is_completed(),
        };
        progress.finish(&report.tally, report.iterations);

        Ok((solver, report))
    }

    /// Solve and print the report, plus the collapse trace if requested
    ///
    /// # Errors
    ///
    /// Returns an error if the solver cannot be built or an iteration fails
    // Allow print for user-facing status and results
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    pub fn run(&self) -> Result<SolveReport> {
        if !self.cli.quiet {
            eprintln!(
                "Solving {}x{} grid with the {} tile set",
                self.cli.width, self.cli.height, self.cli.preset
            );
        }

        let (solver, report) = self.solve()?;

        if self.cli.trace {
            if let Some(catalog) = solver.catalog() {
                for record in solver.history() {
                    let label = catalog.get(record.variant).map_or_else(
                        || format!("#{}", record.variant),
                        |variant| format!("{} {}", variant.id(), variant.transform()),
                    );
                    println!(
                        "{:>6}  ({}, {})  {label}",
                        record.iteration, record.position[0], record.position[1]
                    );
                }
            }
        }

        println!("{report}");
        Ok(report)
    }
}
