//! Property-based tests for the step generators

use proptest::prelude::*;

use algoviz::algorithms::{binary_search, merge_sort, sieve, two_pointer};
use algoviz::algorithms::binary_search::Probe;

fn trial_division_primes(limit: u64) -> Vec<u64> {
    (2..=limit)
        .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
        .collect()
}

proptest! {
    #[test]
    fn test_binary_search_finds_present_targets(
        mut array in prop::collection::vec(-1000i64..1000, 1..64),
        index in any::<prop::sample::Index>(),
    ) {
        array.sort_unstable();
        let target = array[index.index(array.len())];

        let steps = binary_search::generate(&array, target);
        prop_assert!(!steps.is_empty());

        // Property: a present target is always found, on the last step
        let last = &steps.last().unwrap().snapshot;
        prop_assert_eq!(last.outcome, Probe::Found);
        prop_assert_eq!(last.array[last.mid], target);

        // Property: no more probes than log2(n) + 1
        let bound = 64 - (array.len() as u64).leading_zeros() as usize + 1;
        prop_assert!(steps.len() <= bound);
    }

    #[test]
    fn test_binary_search_absent_targets_never_claim_found(
        mut array in prop::collection::vec(-1000i64..1000, 1..64),
        target in -1000i64..1000,
    ) {
        array.sort_unstable();
        prop_assume!(!array.contains(&target));

        let steps = binary_search::generate(&array, target);
        for step in &steps {
            prop_assert_ne!(step.snapshot.outcome, Probe::Found);
        }
    }

    #[test]
    fn test_merge_sort_sorts_any_input(
        values in prop::collection::vec(-1000i64..1000, 1..32),
    ) {
        let steps = merge_sort::generate(&values);

        let mut expected = values.clone();
        expected.sort_unstable();

        // Property: the final snapshot is the sorted multiset of the input
        prop_assert_eq!(steps.last().unwrap().snapshot.values(), expected);

        // Property: the first snapshot still shows the unsorted input
        prop_assert_eq!(steps[0].snapshot.values(), values);
    }

    #[test]
    fn test_reversal_output_and_swap_count(input in "\\PC{1,40}") {
        let steps = two_pointer::generate(&input);
        prop_assert!(!steps.is_empty());

        let expected: String = input.chars().rev().collect();
        let last = &steps.last().unwrap().snapshot;
        prop_assert!(last.done);
        prop_assert_eq!(last.text(), expected);
        prop_assert_eq!(last.swaps, input.chars().count() / 2);
    }

    #[test]
    fn test_sieve_matches_trial_division(limit in 2u64..=100) {
        let steps = sieve::generate(limit);
        let finals = steps.last().unwrap().snapshot.primes();
        prop_assert_eq!(finals, trial_division_primes(limit));
    }

    #[test]
    fn test_sieve_never_marks_primes_composite(limit in 2u64..=100) {
        let primes = trial_division_primes(limit);
        for step in sieve::generate(limit) {
            for m in &step.snapshot.marking {
                prop_assert!(!primes.contains(m), "marked prime {} composite", m);
            }
        }
    }
}
