//! Tests for solver limits and driver defaults

#[cfg(test)]
mod tests {
    use tilecollapse::SolverConfig;
    use tilecollapse::io::configuration::{
        DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, MAX_GRID_DIMENSION,
        PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL,
    };

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert!(SolverConfig::new(MAX_GRID_DIMENSION, 1).validate().is_ok());
        assert!(SolverConfig::new(MAX_GRID_DIMENSION + 1, 1).validate().is_err());
    }

    // Tests default grid matches the default config
    // Verified by changing the default width
    #[test]
    fn test_default_grid() {
        assert_eq!(
            SolverConfig::default(),
            SolverConfig::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
        );
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests progress display settings
    // Verified by changing width value
    #[test]
    fn test_progress_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert_eq!(PROGRESS_REFRESH_INTERVAL, 8);
    }
}
