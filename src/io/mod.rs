//! Input/output operations, configuration, and error handling

/// Command-line interface and solve driver
pub mod cli;
/// Solver limits and runtime configuration defaults
pub mod configuration;
/// Error types for solver operations
pub mod error;
/// Built-in tile sets for the driver
pub mod presets;
/// Terminal progress display
pub mod progress;
