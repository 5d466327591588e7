use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of catalog indices still possible for a cell
///
/// Uses 0-based catalog indices. Iteration always yields indices in
/// ascending order, which keeps random draws over the set reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no candidates
    pub fn empty(variant_count: usize) -> Self {
        Self {
            bits: bitvec![0; variant_count],
        }
    }

    /// Create a set containing every catalog index
    pub fn full(variant_count: usize) -> Self {
        Self {
            bits: bitvec![1; variant_count],
        }
    }

    /// Capacity of the set, the catalog size it was built for
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a catalog index, ignoring indices past the capacity
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of candidates
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no candidates remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// The `n`-th remaining candidate in ascending order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// The remaining candidate when exactly one is left
    pub fn single(&self) -> Option<usize> {
        let mut ones = self.bits.iter_ones();
        match (ones.next(), ones.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Drop every candidate except `index`
    pub fn keep_only(&mut self, index: usize) {
        let keep = self.contains(index);
        self.bits.fill(false);
        if keep {
            self.bits.set(index, true);
        }
    }

    /// Remove candidates rejected by `keep`, returning how many were removed
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) -> usize {
        let rejected: Vec<usize> = self.bits.iter_ones().filter(|&i| !keep(i)).collect();
        for &index in &rejected {
            self.bits.set(index, false);
        }
        rejected.len()
    }

    /// Candidate indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all candidate indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} of {}: {:?})",
            self.count(),
            self.capacity(),
            self.to_vec()
        )
    }
}
