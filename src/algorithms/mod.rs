//! Algorithm step generators
//!
//! Each generator is a pure function from validated input to an ordered
//! `Vec<Step<S>>` with an algorithm-specific snapshot type. Generators run
//! to completion synchronously, copy caller input, and push deep
//! point-in-time clones of their working state into every step, so later
//! mutation can never corrupt earlier steps.
//!
//! Input validation happens in the owning pane before a generator is
//! invoked; within their documented domains the generators are total.

pub mod binary_search;
pub mod merge_sort;
pub mod sieve;
pub mod two_pointer;
