//! Sieve of Eratosthenes step generator
//!
//! Emits a step when a candidate is confirmed prime and a step when its
//! multiples are marked composite, for every candidate `p` with
//! `p * p <= limit`. A closing step promotes all still-unmarked numbers
//! to prime.

use crate::player::Step;

/// Smallest supported sieve limit
pub const MIN_LIMIT: u64 = 2;

/// Largest supported sieve limit (keeps the grid readable)
pub const MAX_LIMIT: u64 = 100;

/// Marking state of one grid number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    /// Not yet classified
    #[default]
    Unmarked,
    /// Confirmed prime
    Prime,
    /// Marked as a multiple of an earlier prime
    Composite,
}

/// One number in the sieve grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveCell {
    pub value: u64,
    pub status: CellStatus,
    /// The candidate currently being processed
    pub active: bool,
}

/// Snapshot of the grid covering `2..=limit`
#[derive(Debug, Clone, PartialEq)]
pub struct SieveSnapshot {
    pub cells: Vec<SieveCell>,
    /// Candidate being processed, if any
    pub current: Option<u64>,
    /// Multiples marked composite by this step
    pub marking: Vec<u64>,
}

impl SieveSnapshot {
    /// Numbers confirmed prime so far
    pub fn primes(&self) -> Vec<u64> {
        self.cells
            .iter()
            .filter(|c| c.status == CellStatus::Prime)
            .map(|c| c.value)
            .collect()
    }
}

/// Run the sieve up to `limit` (inclusive), recording every marking
/// event. Returns an empty sequence for `limit < 2`.
pub fn generate(limit: u64) -> Vec<Step<SieveSnapshot>> {
    let mut steps = Vec::new();
    if limit < MIN_LIMIT {
        return steps;
    }

    let mut cells: Vec<SieveCell> = (2..=limit)
        .map(|value| SieveCell {
            value,
            status: CellStatus::Unmarked,
            active: false,
        })
        .collect();
    let idx = |value: u64| (value - 2) as usize;

    let mut p = 2;
    while p * p <= limit {
        if cells[idx(p)].status == CellStatus::Unmarked {
            for cell in &mut cells {
                cell.active = false;
            }
            cells[idx(p)].status = CellStatus::Prime;
            cells[idx(p)].active = true;
            steps.push(Step::new(
                SieveSnapshot {
                    cells: cells.clone(),
                    current: Some(p),
                    marking: Vec::new(),
                },
                format!("{} is unmarked, so it is prime.", p),
            ));

            let multiples: Vec<u64> = (2..).map(|m| m * p).take_while(|&m| m <= limit).collect();
            for &m in &multiples {
                cells[idx(m)].status = CellStatus::Composite;
            }
            steps.push(Step::new(
                SieveSnapshot {
                    cells: cells.clone(),
                    current: Some(p),
                    marking: multiples.clone(),
                },
                format!(
                    "Marking multiples of {} as composite: {}.",
                    p,
                    multiples
                        .iter()
                        .map(|m| m.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
        p += 1;
    }

    // Everything that survived the marking passes is prime
    for cell in &mut cells {
        cell.active = false;
        if cell.status == CellStatus::Unmarked {
            cell.status = CellStatus::Prime;
        }
    }
    steps.push(Step::new(
        SieveSnapshot {
            cells,
            current: None,
            marking: Vec::new(),
        },
        "All remaining unmarked numbers are prime.",
    ));

    steps
}
