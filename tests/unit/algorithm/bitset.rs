//! Tests for candidate set bookkeeping

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::CandidateSet;

    // Tests full and empty construction report matching counts
    // Verified by filling the empty constructor with ones
    #[test]
    fn test_full_and_empty_counts() {
        let full = CandidateSet::full(5);
        let empty = CandidateSet::empty(5);

        assert_eq!(full.count(), 5);
        assert_eq!(full.capacity(), 5);
        assert_eq!(full.to_vec(), vec![0, 1, 2, 3, 4]);
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 5);
    }

    // Tests out-of-range inserts and lookups are ignored
    // Verified by removing the bounds check in insert
    #[test]
    fn test_out_of_range_is_ignored() {
        let mut set = CandidateSet::empty(3);
        set.insert(1);
        set.insert(7);

        assert!(set.contains(1));
        assert!(!set.contains(7));
        assert_eq!(set.count(), 1);
    }

    // Tests nth walks remaining candidates in ascending order
    // Verified by counting from the highest set bit
    #[test]
    fn test_nth_skips_removed_candidates() {
        let mut set = CandidateSet::full(6);
        let removed = set.retain(|index| index % 2 == 1);

        assert_eq!(removed, 3);
        assert_eq!(set.nth(0), Some(1));
        assert_eq!(set.nth(2), Some(5));
        assert_eq!(set.nth(3), None);
    }

    // Tests single only reports a lone survivor
    // Verified by returning the first set bit regardless of count
    #[test]
    fn test_single_requires_exactly_one() {
        let mut set = CandidateSet::full(4);
        assert_eq!(set.single(), None);

        set.keep_only(2);
        assert_eq!(set.single(), Some(2));
        assert_eq!(set.count(), 1);

        set.keep_only(0);
        assert_eq!(set.single(), None);
        assert!(set.is_empty());
    }

    // Tests retain reports zero when nothing is rejected
    // Verified by returning the surviving count instead
    #[test]
    fn test_retain_without_removal() {
        let mut set = CandidateSet::full(4);

        assert_eq!(set.retain(|_| true), 0);
        assert_eq!(set.count(), 4);
    }

    #[test]
    fn test_display_lists_candidates() {
        let mut set = CandidateSet::empty(4);
        set.insert(0);
        set.insert(3);

        assert_eq!(set.to_string(), "CandidateSet(2 of 4: [0, 3])");
    }
}
