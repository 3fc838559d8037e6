//! Default workspace layout
//!
//! Builds the initial dock layout with the four algorithm visualizers as
//! tabs in the main surface. The block graph toy starts closed and is
//! opened from the View menu.

use egui_dock::DockState;

use super::{PaneKind, Workspace};

/// Build the default dock layout and return the DockState.
pub fn build_default_layout(workspace: &mut Workspace) -> DockState<super::PaneId> {
    let tabs: Vec<super::PaneId> = [
        PaneKind::BinarySearch,
        PaneKind::MergeSort,
        PaneKind::TwoPointer,
        PaneKind::Sieve,
    ]
    .into_iter()
    .filter_map(|kind| {
        let name = workspace.display_name(kind);
        workspace.register_pane(kind, format!("{} 1", name))
    })
    .collect();

    DockState::new(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_opens_four_visualizers() {
        let mut ws = Workspace::new();
        let dock = build_default_layout(&mut ws);
        assert_eq!(ws.pane_entries.len(), 4);
        assert_eq!(dock.iter_all_tabs().count(), 4);
        assert!(ws.find_singleton(PaneKind::BlockGraph).is_none());
    }
}
