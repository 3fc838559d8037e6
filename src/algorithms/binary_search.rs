//! Binary search step generator
//!
//! Emits one step per `(left, right, mid)` triple evaluated over a sorted
//! array, terminating when the midpoint holds the target or the window
//! becomes empty.

use rand::Rng;

use crate::player::Step;

/// Outcome of probing the midpoint against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `array[mid]` equals the target
    Found,
    /// `array[mid]` is below the target; continue in the right half
    TooLow,
    /// `array[mid]` is above the target; continue in the left half
    TooHigh,
}

/// Snapshot of one midpoint evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// The array under search (sorted ascending)
    pub array: Vec<i64>,
    /// Value being searched for
    pub target: i64,
    /// Left edge of the active window
    pub left: usize,
    /// Right edge of the active window (inclusive)
    pub right: usize,
    /// Midpoint index, floor of `(left + right) / 2`
    pub mid: usize,
    /// Result of comparing `array[mid]` with the target
    pub outcome: Probe,
}

/// Run binary search over `array` for `target`, recording every midpoint
/// evaluation. `array` must be sorted ascending; an empty array yields an
/// empty sequence.
pub fn generate(array: &[i64], target: i64) -> Vec<Step<SearchSnapshot>> {
    let mut steps = Vec::new();
    if array.is_empty() {
        return steps;
    }

    // Signed bounds so the `left > right` exit needs no underflow care;
    // snapshots only ever hold in-window (non-negative) indices.
    let mut left: i64 = 0;
    let mut right: i64 = array.len() as i64 - 1;

    while left <= right {
        let mid = (left + right) / 2;
        let value = array[mid as usize];

        let outcome = if value == target {
            Probe::Found
        } else if value < target {
            Probe::TooLow
        } else {
            Probe::TooHigh
        };

        let narration = match outcome {
            Probe::Found => format!("array[{}] = {} equals the target. Found!", mid, value),
            Probe::TooLow => format!(
                "array[{}] = {} is less than {}. Searching the right half.",
                mid, value, target
            ),
            Probe::TooHigh => format!(
                "array[{}] = {} is greater than {}. Searching the left half.",
                mid, value, target
            ),
        };

        steps.push(Step::new(
            SearchSnapshot {
                array: array.to_vec(),
                target,
                left: left as usize,
                right: right as usize,
                mid: mid as usize,
                outcome,
            },
            narration,
        ));

        match outcome {
            Probe::Found => break,
            Probe::TooLow => left = mid + 1,
            Probe::TooHigh => right = mid - 1,
        }
    }

    steps
}

/// Generate a sorted random array for the input form
pub fn random_sorted_array(rng: &mut impl Rng, min: i64, max: i64, size: usize) -> Vec<i64> {
    let mut array: Vec<i64> = (0..size).map(|_| rng.random_range(min..=max)).collect();
    array.sort_unstable();
    array
}
