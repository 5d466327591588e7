//! Solver limits and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 16;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 16;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Number of iterations between progress bar redraws
pub const PROGRESS_REFRESH_INTERVAL: usize = 8;
