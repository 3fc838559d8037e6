//! Merge sort step generator
//!
//! Emits a step at each subdivision (announcing the midpoint), a step
//! showing the subarrays about to merge, a step per pairwise comparison,
//! a step per placement into the output position, and a final step with
//! all highlight flags cleared.

use crate::player::Step;

/// One array element plus its render highlight flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCell {
    pub value: i64,
    /// Output position currently being compared into
    pub comparing: bool,
    /// Value just merged into place
    pub merging: bool,
    /// Member of the left subarray of the active merge
    pub in_left: bool,
    /// Member of the right subarray of the active merge
    pub in_right: bool,
    /// Midpoint of the active subdivision
    pub midpoint: bool,
}

impl SortCell {
    fn new(value: i64) -> Self {
        Self {
            value,
            comparing: false,
            merging: false,
            in_left: false,
            in_right: false,
            midpoint: false,
        }
    }

    fn clear_flags(&mut self) {
        self.comparing = false;
        self.merging = false;
        self.in_left = false;
        self.in_right = false;
        self.midpoint = false;
    }
}

/// Snapshot of the working array during the sort
#[derive(Debug, Clone, PartialEq)]
pub struct SortSnapshot {
    pub cells: Vec<SortCell>,
    /// Midpoint of the subdivision this step belongs to, if any
    pub mid: Option<usize>,
}

impl SortSnapshot {
    /// Plain values without flags
    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|c| c.value).collect()
    }
}

/// Run merge sort over a copy of `values`, recording every observable
/// event. Always ends with a completion step holding the sorted array.
pub fn generate(values: &[i64]) -> Vec<Step<SortSnapshot>> {
    let mut steps = Vec::new();
    let mut cells: Vec<SortCell> = values.iter().map(|&v| SortCell::new(v)).collect();

    if cells.len() > 1 {
        let end = cells.len() - 1;
        sort(&mut cells, 0, end, &mut steps);
    }

    for cell in &mut cells {
        cell.clear_flags();
    }
    steps.push(Step::new(
        SortSnapshot {
            cells,
            mid: None,
        },
        "Sorting complete! The array is now sorted.",
    ));

    steps
}

fn sort(cells: &mut Vec<SortCell>, start: usize, end: usize, steps: &mut Vec<Step<SortSnapshot>>) {
    if start >= end {
        return;
    }

    let mid = (start + end) / 2;

    let mut divide_view = cells.clone();
    divide_view[mid].midpoint = true;
    steps.push(Step::new(
        SortSnapshot {
            cells: divide_view,
            mid: Some(mid),
        },
        format!(
            "Dividing array from index {} to {}. Midpoint at index {} (value {}).",
            start, end, mid, cells[mid].value
        ),
    ));

    sort(cells, start, mid, steps);
    sort(cells, mid + 1, end, steps);
    merge(cells, start, mid, end, steps);
}

fn merge(
    cells: &mut Vec<SortCell>,
    start: usize,
    mid: usize,
    end: usize,
    steps: &mut Vec<Step<SortSnapshot>>,
) {
    let left: Vec<SortCell> = cells[start..=mid].to_vec();
    let right: Vec<SortCell> = cells[mid + 1..=end].to_vec();

    // Announce the two subarrays about to merge
    let mut subarray_view = cells.clone();
    for cell in &mut subarray_view[start..=mid] {
        cell.in_left = true;
    }
    for cell in &mut subarray_view[mid + 1..=end] {
        cell.in_right = true;
    }
    steps.push(Step::new(
        SortSnapshot {
            cells: subarray_view,
            mid: Some(mid),
        },
        format!(
            "Merging subarrays [{}] and [{}].",
            join_values(&left),
            join_values(&right)
        ),
    ));

    let mut i = 0;
    let mut j = 0;
    let mut k = start;

    while i < left.len() && j < right.len() {
        let mut compare_view = cells.clone();
        compare_view[k].comparing = true;
        steps.push(Step::new(
            SortSnapshot {
                cells: compare_view,
                mid: Some(mid),
            },
            format!("Comparing {} and {}.", left[i].value, right[j].value),
        ));

        if left[i].value <= right[j].value {
            cells[k] = left[i];
            cells[k].in_left = true;
            i += 1;
        } else {
            cells[k] = right[j];
            cells[k].in_right = true;
            j += 1;
        }
        cells[k].merging = true;

        steps.push(Step::new(
            SortSnapshot {
                cells: cells.clone(),
                mid: Some(mid),
            },
            format!("Merging {} into position {}.", cells[k].value, k),
        ));

        cells[k].clear_flags();
        k += 1;
    }

    while i < left.len() {
        cells[k] = left[i];
        cells[k].merging = true;
        steps.push(Step::new(
            SortSnapshot {
                cells: cells.clone(),
                mid: Some(mid),
            },
            format!("Adding remaining element {}.", cells[k].value),
        ));
        cells[k].clear_flags();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        cells[k] = right[j];
        cells[k].merging = true;
        steps.push(Step::new(
            SortSnapshot {
                cells: cells.clone(),
                mid: Some(mid),
            },
            format!("Adding remaining element {}.", cells[k].value),
        ));
        cells[k].clear_flags();
        j += 1;
        k += 1;
    }
}

fn join_values(cells: &[SortCell]) -> String {
    cells
        .iter()
        .map(|c| c.value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_multiset(values: &[i64]) -> Vec<i64> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_final_snapshot_is_sorted() {
        let input = [5, 2, 8, 1, 9, 3];
        let steps = generate(&input);

        let last = steps.last().unwrap();
        assert_eq!(last.snapshot.values(), sorted_multiset(&input));
        assert!(last.snapshot.cells.iter().all(|c| {
            !c.comparing && !c.merging && !c.in_left && !c.in_right && !c.midpoint
        }));
    }

    #[test]
    fn test_preserves_multiset_with_duplicates() {
        let input = [3, 3, 1, 2, 1];
        let steps = generate(&input);
        assert_eq!(
            steps.last().unwrap().snapshot.values(),
            sorted_multiset(&input)
        );
    }

    #[test]
    fn test_first_step_announces_midpoint() {
        let steps = generate(&[4, 1, 3, 2]);
        let first = &steps[0].snapshot;
        assert_eq!(first.mid, Some(1));
        assert!(first.cells[1].midpoint);
        assert!(steps[0].narration.contains("Midpoint at index 1"));
    }

    #[test]
    fn test_comparison_and_placement_steps_alternate() {
        let steps = generate(&[2, 1]);
        // divide, subarrays, compare, place, remaining, completion
        let comparing: Vec<_> = steps
            .iter()
            .filter(|s| s.snapshot.cells.iter().any(|c| c.comparing))
            .collect();
        assert_eq!(comparing.len(), 1);
        assert!(comparing[0].narration.contains("Comparing 2 and 1"));

        assert_eq!(steps.last().unwrap().snapshot.values(), vec![1, 2]);
    }

    #[test]
    fn test_snapshots_are_point_in_time_copies() {
        // Earlier snapshots must not reflect later mutation
        let steps = generate(&[3, 1, 2]);
        assert_eq!(steps[0].snapshot.values(), vec![3, 1, 2]);
        assert_eq!(steps.last().unwrap().snapshot.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_element_input() {
        let steps = generate(&[42]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].snapshot.values(), vec![42]);
    }

    #[test]
    fn test_already_sorted_input() {
        let input = [1, 2, 3, 4, 5];
        let steps = generate(&input);
        assert_eq!(steps.last().unwrap().snapshot.values(), input.to_vec());
    }
}
