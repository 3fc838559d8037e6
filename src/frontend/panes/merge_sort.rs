//! Merge sort pane
//!
//! Bar chart visualization of the working array, with per-step highlight
//! colors for comparisons, placements, and the active subarrays.

use std::time::Duration;

use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::algorithms::merge_sort::{self, SortCell, SortSnapshot};
use crate::error::{AlgoVizError, Result};
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets;
use crate::frontend::workspace::PaneKind;
use crate::player::StepPlayer;

/// Fewest values accepted by the input form
const MIN_VALUES: usize = 2;
/// Most values accepted by the input form (keeps the chart readable)
const MAX_VALUES: usize = 20;

const COLOR_BASE: Color32 = Color32::from_rgb(54, 104, 160);
const COLOR_COMPARING: Color32 = Color32::from_rgb(210, 153, 34);
const COLOR_MERGING: Color32 = Color32::from_rgb(46, 160, 67);
const COLOR_LEFT: Color32 = Color32::from_rgb(130, 80, 180);
const COLOR_RIGHT: Color32 = Color32::from_rgb(190, 75, 120);
const COLOR_MIDPOINT: Color32 = Color32::from_rgb(200, 90, 40);

/// State for a merge sort pane
pub struct MergeSortPaneState {
    pub values_input: String,
    values: Vec<i64>,
    player: StepPlayer<SortSnapshot>,
    error: Option<String>,
    interval_seeded: bool,
    /// Distinguishes plot ids across pane instances
    plot_salt: u64,
}

impl Default for MergeSortPaneState {
    fn default() -> Self {
        let values = random_values();
        let mut state = Self {
            values_input: join(&values),
            values,
            player: StepPlayer::new(),
            error: None,
            interval_seeded: false,
            plot_salt: rand::random(),
        };
        state.rebuild_steps();
        state
    }
}

fn random_values() -> Vec<i64> {
    use rand::Rng;
    let mut rng = rand::rng();
    let len = rng.random_range(6..=10);
    (0..len).map(|_| rng.random_range(1..=100)).collect()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl MergeSortPaneState {
    fn parse_values(&self) -> Result<Vec<i64>> {
        let values: Vec<i64> = self
            .values_input
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| {
                AlgoVizError::invalid_input("Values must be comma-separated integers")
            })?;

        if values.len() < MIN_VALUES || values.len() > MAX_VALUES {
            return Err(AlgoVizError::invalid_input(format!(
                "Enter between {} and {} values",
                MIN_VALUES, MAX_VALUES
            )));
        }
        Ok(values)
    }

    fn apply_input(&mut self) {
        match self.parse_values() {
            Ok(values) => {
                self.values = values;
                self.error = None;
                self.rebuild_steps();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn randomize(&mut self) {
        self.values = random_values();
        self.values_input = join(&self.values);
        self.error = None;
        self.rebuild_steps();
    }

    fn rebuild_steps(&mut self) {
        self.player.load(merge_sort::generate(&self.values));
    }
}

fn bar_color(cell: &SortCell) -> Color32 {
    if cell.comparing {
        COLOR_COMPARING
    } else if cell.merging {
        COLOR_MERGING
    } else if cell.midpoint {
        COLOR_MIDPOINT
    } else if cell.in_left {
        COLOR_LEFT
    } else if cell.in_right {
        COLOR_RIGHT
    } else {
        COLOR_BASE
    }
}

/// Render the merge sort pane
pub fn render(
    state: &mut MergeSortPaneState,
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

    ui.heading("Merge Sort");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Values:");
        ui.add(egui::TextEdit::singleline(&mut state.values_input).desired_width(260.0));
        if ui.button("Sort").clicked() {
            state.apply_input();
        }
        if ui.button("Random").clicked() {
            state.randomize();
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

    if let Some(step) = state.player.current_step() {
        let bars: Vec<Bar> = step
            .snapshot
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                Bar::new(i as f64, cell.value as f64)
                    .fill(bar_color(cell))
                    .name(cell.value.to_string())
            })
            .collect();

        Plot::new(("merge_sort_plot", state.plot_salt))
            .height(220.0)
            .show_axes([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("values", bars));
            });
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        widgets::legend_entry(ui, COLOR_COMPARING, "Comparing");
        widgets::legend_entry(ui, COLOR_MERGING, "Merged");
        widgets::legend_entry(ui, COLOR_LEFT, "Left subarray");
        widgets::legend_entry(ui, COLOR_RIGHT, "Right subarray");
        widgets::legend_entry(ui, COLOR_MIDPOINT, "Midpoint");
    });

    ui.add_space(4.0);
    widgets::narration_label(ui, &state.player);

    Vec::new()
}

impl Pane for MergeSortPaneState {
    fn kind(&self) -> PaneKind {
        PaneKind::MergeSort
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
