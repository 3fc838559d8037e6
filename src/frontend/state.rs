//! Shared state types for the frontend
//!
//! This module defines the shared state container and action types used by
//! the workspace-based architecture. Panes receive `SharedState` via borrowing
//! and return `AppAction`s instead of mutating state directly.

use crate::config::AppState;

use super::workspace::{PaneId, PaneKind};

/// Shared state accessible by all panes (borrowed, not owned).
pub struct SharedState<'a> {
    /// Persistent preferences (read-write by panes)
    pub app_state: &'a mut AppState,
}

/// Actions that any pane can emit
///
/// Panes return `Vec<AppAction>` instead of mutating app state directly.
/// This enables:
/// - Testable pane logic
/// - Clear separation between UI and workspace management
/// - Centralized action handling
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Open/focus a singleton pane, or create if not exists
    OpenPane(PaneKind),
    /// Create a new visualizer instance
    NewVisualizer(PaneKind),
    /// Close a pane (remove from dock and clean up state)
    ClosePane(PaneId),
}
