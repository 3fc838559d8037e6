//! Individual pane implementations
//!
//! Each pane owns its input form, its step player (where applicable), and
//! its visualization. Panes expose a `render` function plus a `Pane`
//! trait impl used by the workspace.

pub mod binary_search;
pub mod block_graph;
pub mod merge_sort;
pub mod sieve;
pub mod two_pointer;

pub use binary_search::BinarySearchPaneState;
pub use block_graph::BlockGraphPaneState;
pub use merge_sort::MergeSortPaneState;
pub use sieve::SievePaneState;
pub use two_pointer::TwoPointerPaneState;
