//! Tests for the built-in tile sets

#[cfg(test)]
mod tests {
    use tilecollapse::io::presets::Preset;
    use tilecollapse::spatial::Direction;
    use tilecollapse::spatial::tiles::TileCatalog;
    use tilecollapse::{Solver, SolverConfig};

    // Tests catalog sizes after orientation expansion
    // Verified by dropping the straight tile's rotation
    #[test]
    fn test_catalog_sizes() {
        assert_eq!(TileCatalog::build(&Preset::Pipes.definitions()).len(), 16);
        assert_eq!(TileCatalog::build(&Preset::Coast.definitions()).len(), 7);
    }

    // Tests every side of every variant has some variant it can face
    // Verified by giving the shore tile a mismatched segment order
    #[test]
    fn test_every_side_can_connect() {
        for preset in [Preset::Pipes, Preset::Coast] {
            let catalog = TileCatalog::build(&preset.definitions());
            for variant in catalog.variants() {
                for direction in Direction::ALL {
                    let connects = catalog
                        .variants()
                        .iter()
                        .any(|other| variant.connects(other, direction));
                    assert!(connects, "{preset} {} {direction}", variant.id());
                }
            }
        }
    }

    // Tests both presets solve to completion
    // Verified by removing the blank tile from the pipe set
    #[test]
    fn test_presets_solve() {
        for preset in [Preset::Pipes, Preset::Coast] {
            let mut solver = Solver::with_seed(preset.definitions(), SolverConfig::new(6, 6), 21)
                .expect("valid grid size");

            solver.solve_all().expect("solve completes");
            assert!(solver.is_completed(), "{preset}");
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Preset::Pipes.to_string(), "pipes");
        assert_eq!(Preset::Coast.to_string(), "coast");
    }
}
