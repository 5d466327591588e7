/// Bitset of candidate variants per cell
pub mod bitset;
/// Solver lifecycle and iteration loop
pub mod executor;
/// Stack-based constraint propagation
pub mod propagation;
/// Seeded random draws, cell bookkeeping, and lowest-entropy selection
pub mod selection;
