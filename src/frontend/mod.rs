//! Frontend module for egui UI
//!
//! This module provides the main UI using eframe/egui.
//!
//! # Architecture
//!
//! The frontend uses an egui_dock workspace where every visualizer is a
//! pane: binary search, merge sort, string reversal, prime sieve, and the
//! block graph toy. Panes can be rearranged via drag-and-drop docking,
//! and the step-driven ones each own a [`StepPlayer`](crate::player::StepPlayer).
//!
//! # Main Types
//!
//! - [`AlgoVizApp`] - Main application state implementing [`eframe::App`]
//! - [`Workspace`] - Dock state and pane management
//!
//! # Submodules
//!
//! - `workspace` - Dock workspace, tab viewer, default layout
//! - `panes` - Individual pane implementations
//! - `widgets` - Shared UI widgets (transport controls, value cells)

pub mod pane_registry;
pub mod pane_trait;
pub mod panes;
pub mod state;
pub mod widgets;
pub mod workspace;

pub use state::{AppAction, SharedState};

use workspace::tab_viewer::WorkspaceTabViewer;
use workspace::Workspace;

use crate::config::AppState;

/// Main application state for the algorithm visualizer
pub struct AlgoVizApp {
    app_state: AppState,
    workspace: Workspace,
}

impl AlgoVizApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        // Configure fonts and styles
        let fonts = egui::FontDefinitions::default();
        cc.egui_ctx.set_fonts(fonts);

        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= app_state.ui_preferences.font_scale;
        });
        cc.egui_ctx.set_style(style);

        // Build workspace with default layout
        let mut workspace = Workspace::new();
        let dock_state = workspace::default_layout::build_default_layout(&mut workspace);
        workspace.dock_state = dock_state;

        Self {
            app_state,
            workspace,
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::OpenPane(kind) => {
                if let Some(id) = self.workspace.find_singleton(kind) {
                    // Focus existing singleton
                    if let Some(tab_location) = self.workspace.dock_state.find_tab(&id) {
                        self.workspace.dock_state.set_active_tab(tab_location);
                    }
                } else {
                    let name = self.workspace.display_name(kind);
                    if let Some(id) = self.workspace.register_pane(kind, name) {
                        self.workspace.dock_state.push_to_first_leaf(id);
                    }
                }
            }
            AppAction::NewVisualizer(kind) => {
                let count = self.workspace.count_panes(kind);
                let display = self.workspace.display_name(kind);
                let title = format!("{} {}", display, count + 1);
                if let Some(id) = self.workspace.register_pane(kind, title) {
                    self.workspace.dock_state.push_to_first_leaf(id);
                }
            }
            AppAction::ClosePane(id) => {
                self.workspace.remove_pane(id);
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        if self.app_state.ui_preferences.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }
}

impl eframe::App for AlgoVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    // Multi-instance visualizers, auto-generated from registry
                    let mut multi: Vec<_> = self
                        .workspace
                        .registry_multi()
                        .map(|info| (info.kind, info.display_name))
                        .collect();
                    multi.sort_by_key(|(_, name)| *name);
                    for (kind, name) in multi {
                        if ui.button(format!("New {}", name)).clicked() {
                            self.handle_action(AppAction::NewVisualizer(kind));
                            ui.close();
                        }
                    }

                    ui.separator();

                    // Singleton panes (open/focus)
                    let singletons: Vec<_> = self
                        .workspace
                        .registry_singletons()
                        .map(|info| (info.kind, info.display_name))
                        .collect();
                    for (kind, name) in singletons {
                        if ui.button(name).clicked() {
                            self.handle_action(AppAction::OpenPane(kind));
                            ui.close();
                        }
                    }

                    ui.separator();

                    if ui
                        .checkbox(&mut self.app_state.ui_preferences.dark_mode, "Dark mode")
                        .changed()
                    {
                        self.apply_theme(ctx);
                    }
                });

                // Right-aligned: pane count
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} panes", self.workspace.pane_entries.len()));
                });
            });
        });

        // Dock workspace
        {
            let mut viewer = WorkspaceTabViewer {
                app_state: &mut self.app_state,
                pane_states: &mut self.workspace.pane_states,
                pane_entries: &self.workspace.pane_entries,
                actions: Vec::new(),
            };

            egui_dock::DockArea::new(&mut self.workspace.dock_state)
                .style(egui_dock::Style::from_egui(ctx.style().as_ref()))
                .show(ctx, &mut viewer);

            let actions = viewer.actions;
            for action in actions {
                self.handle_action(action);
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
