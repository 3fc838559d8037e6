//! Pane registry, data-driven pane registration.
//!
//! The registry is the single source of truth for all pane kinds:
//! display names, singleton flags, and factory functions.
//! The View menu and workspace pane creation are driven from this data.

use crate::frontend::pane_trait::Pane;
use crate::frontend::panes::{
    BinarySearchPaneState, BlockGraphPaneState, MergeSortPaneState, SievePaneState,
    TwoPointerPaneState,
};
use crate::frontend::workspace::PaneKind;

/// Metadata for a pane kind, including its factory function.
pub struct PaneKindInfo {
    pub kind: PaneKind,
    pub display_name: &'static str,
    pub is_singleton: bool,
    pub factory: fn() -> Box<dyn Pane>,
}

/// Build the pane registry with all known pane kinds.
pub fn build_registry() -> Vec<PaneKindInfo> {
    vec![
        // Step-driven visualizers (multiple instances allowed)
        PaneKindInfo {
            kind: PaneKind::BinarySearch,
            display_name: "Binary Search",
            is_singleton: false,
            factory: || Box::new(BinarySearchPaneState::default()),
        },
        PaneKindInfo {
            kind: PaneKind::MergeSort,
            display_name: "Merge Sort",
            is_singleton: false,
            factory: || Box::new(MergeSortPaneState::default()),
        },
        PaneKindInfo {
            kind: PaneKind::TwoPointer,
            display_name: "Reverse String",
            is_singleton: false,
            factory: || Box::new(TwoPointerPaneState::default()),
        },
        PaneKindInfo {
            kind: PaneKind::Sieve,
            display_name: "Prime Sieve",
            is_singleton: false,
            factory: || Box::new(SievePaneState::default()),
        },
        // Freeform toy (singleton)
        PaneKindInfo {
            kind: PaneKind::BlockGraph,
            display_name: "Block Graph",
            is_singleton: true,
            factory: || Box::new(BlockGraphPaneState::default()),
        },
    ]
}
