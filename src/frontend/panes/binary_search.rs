//! Binary search pane
//!
//! Random sorted array with configurable bounds and size, a target input,
//! and a cell-row visualization of the shrinking search window.

use std::time::Duration;

use egui::{Color32, Ui};

use crate::algorithms::binary_search::{self, Probe, SearchSnapshot};
use crate::error::{AlgoVizError, Result};
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets;
use crate::frontend::workspace::PaneKind;
use crate::player::StepPlayer;

/// State for a binary search pane
pub struct BinarySearchPaneState {
    pub min_input: String,
    pub max_input: String,
    pub size_input: String,
    pub target_input: String,
    array: Vec<i64>,
    player: StepPlayer<SearchSnapshot>,
    error: Option<String>,
    interval_seeded: bool,
    /// Distinguishes grid ids across pane instances
    grid_salt: u64,
}

impl Default for BinarySearchPaneState {
    fn default() -> Self {
        let mut state = Self {
            min_input: "0".to_string(),
            max_input: "100".to_string(),
            size_input: "12".to_string(),
            target_input: "42".to_string(),
            array: Vec::new(),
            player: StepPlayer::new(),
            error: None,
            interval_seeded: false,
            grid_salt: rand::random(),
        };
        state.regenerate_array();
        state
    }
}

impl BinarySearchPaneState {
    fn parse_bounds(&self) -> Result<(i64, i64, usize)> {
        let min: i64 = self
            .min_input
            .trim()
            .parse()
            .map_err(|_| AlgoVizError::invalid_input("Min must be an integer"))?;
        let max: i64 = self
            .max_input
            .trim()
            .parse()
            .map_err(|_| AlgoVizError::invalid_input("Max must be an integer"))?;
        let size: usize = self
            .size_input
            .trim()
            .parse()
            .map_err(|_| AlgoVizError::invalid_input("Size must be a positive integer"))?;

        if min >= max {
            return Err(AlgoVizError::invalid_input("Min must be less than max"));
        }
        if size < 1 {
            return Err(AlgoVizError::invalid_input("Size must be at least 1"));
        }
        Ok((min, max, size))
    }

    fn parse_target(&self) -> Result<i64> {
        self.target_input
            .trim()
            .parse()
            .map_err(|_| AlgoVizError::invalid_input("Target must be an integer"))
    }

    /// Draw a fresh random array and rebuild the step sequence.
    fn regenerate_array(&mut self) {
        match self.parse_bounds() {
            Ok((min, max, size)) => {
                self.array = binary_search::random_sorted_array(&mut rand::rng(), min, max, size);
                self.error = None;
                self.rebuild_steps();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Re-run the search over the current array.
    fn rebuild_steps(&mut self) {
        match self.parse_target() {
            Ok(target) => {
                self.player.load(binary_search::generate(&self.array, target));
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Render the binary search pane
pub fn render(
    state: &mut BinarySearchPaneState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    if !state.interval_seeded {
        state.player.set_interval(Duration::from_millis(
            shared.app_state.ui_preferences.default_interval_ms,
        ));
        state.interval_seeded = true;
    }
    widgets::drive_playback(ui.ctx(), &mut state.player);

    ui.heading("Binary Search");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Min:");
        ui.add(egui::TextEdit::singleline(&mut state.min_input).desired_width(50.0));
        ui.label("Max:");
        ui.add(egui::TextEdit::singleline(&mut state.max_input).desired_width(50.0));
        ui.label("Size:");
        ui.add(egui::TextEdit::singleline(&mut state.size_input).desired_width(40.0));
        if ui.button("New Array").clicked() {
            state.regenerate_array();
        }
    });
    ui.horizontal(|ui| {
        ui.label("Target:");
        ui.add(egui::TextEdit::singleline(&mut state.target_input).desired_width(50.0));
        if ui.button("Search").clicked() {
            state.rebuild_steps();
        }
    });

    if let Some(err) = &state.error {
        ui.colored_label(Color32::RED, err);
    }
    ui.separator();

    if widgets::playback_controls(ui, &mut state.player) {
        state.rebuild_steps();
    }
    ui.separator();

    let snap = state.player.current_step().map(|s| s.snapshot.clone());
    ui.horizontal_wrapped(|ui| {
        for (i, &v) in state.array.iter().enumerate() {
            let fill = match &snap {
                Some(s) if i == s.mid => {
                    if s.outcome == Probe::Found {
                        Color32::from_rgb(46, 160, 67)
                    } else {
                        Color32::from_rgb(210, 153, 34)
                    }
                }
                Some(s) if i >= s.left && i <= s.right => Color32::from_rgb(54, 104, 160),
                _ => ui.visuals().widgets.inactive.bg_fill,
            };
            widgets::value_cell(ui, &v.to_string(), fill);
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        widgets::legend_entry(ui, Color32::from_rgb(54, 104, 160), "Window");
        widgets::legend_entry(ui, Color32::from_rgb(210, 153, 34), "Midpoint");
        widgets::legend_entry(ui, Color32::from_rgb(46, 160, 67), "Found");
    });

    if let Some(s) = &snap {
        ui.add_space(4.0);
        egui::Grid::new(("binary_search_readout", state.grid_salt))
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                ui.strong("Target");
                ui.label(s.target.to_string());
                ui.end_row();
                ui.strong("Left");
                ui.label(s.left.to_string());
                ui.end_row();
                ui.strong("Right");
                ui.label(s.right.to_string());
                ui.end_row();
                ui.strong("Mid");
                ui.label(format!("{} (value {})", s.mid, s.array[s.mid]));
                ui.end_row();
            });
    }

    ui.add_space(4.0);
    widgets::narration_label(ui, &state.player);

    Vec::new()
}

impl Pane for BinarySearchPaneState {
    fn kind(&self) -> PaneKind {
        PaneKind::BinarySearch
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_get_distinct_grid_ids() {
        // Two panes can be docked side by side; their readout grids must
        // not share an egui id
        let a = BinarySearchPaneState::default();
        let b = BinarySearchPaneState::default();
        assert_ne!(a.grid_salt, b.grid_salt);
    }

    #[test]
    fn test_default_state_has_steps_loaded() {
        let state = BinarySearchPaneState::default();
        assert!(state.error.is_none());
        assert!(!state.player.is_empty());
        assert_eq!(state.array.len(), 12);
    }
}
