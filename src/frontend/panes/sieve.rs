//! Sieve of Eratosthenes pane
//!
//! Number grid from 2 to the configured limit, colored by marking state,
//! with the active candidate and freshly marked multiples highlighted.

use std::time::Duration;

use egui::{Color32, Ui};

use crate::algorithms::sieve::{self, CellStatus, SieveSnapshot, MAX_LIMIT, MIN_LIMIT};
use crate::error::{AlgoVizError, Result};
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets;
use crate::frontend::workspace::PaneKind;
use crate::player::StepPlayer;

const COLOR_PRIME: Color32 = Color32::from_rgb(46, 160, 67);
const COLOR_COMPOSITE: Color32 = Color32::from_rgb(90, 90, 90);
const COLOR_ACTIVE: Color32 = Color32::from_rgb(210, 153, 34);
const COLOR_MARKING: Color32 = Color32::from_rgb(190, 60, 60);

/// State for a prime sieve pane
pub struct SievePaneState {
    pub limit_input: String,
    limit: u64,
    player: StepPlayer<SieveSnapshot>,
    error: Option<String>,
    interval_seeded: bool,
}

impl Default for SievePaneState {
    fn default() -> Self {
        let mut state = Self {
            limit_input: "30".to_string(),
            limit: 30,
            player: StepPlayer::new(),
            error: None,
            interval_seeded: false,
        };
        state.rebuild_steps();
        state
    }
}

impl SievePaneState {
    fn parse_limit(&self) -> Result<u64> {
        let limit: u64 = self
            .limit_input
            .trim()
            .parse()
            .map_err(|_| AlgoVizError::invalid_input("Limit must be a positive integer"))?;

        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(AlgoVizError::invalid_input(format!(
                "Limit must be between {} and {}",
                MIN_LIMIT, MAX_LIMIT
            )));
        }
        Ok(limit)
    }

    fn apply_input(&mut self) {
        match self.parse_limit() {
            Ok(limit) => {
                self.limit = limit;
                self.error = None;
                self.rebuild_steps();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn rebuild_steps(&mut self) {
        self.player.load(sieve::generate(self.limit));
    }
}

/// Render the prime sieve pane
pub fn render(
    state: &mut SievePaneState,
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

    ui.heading("Prime Sieve");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Limit:");
        ui.add(egui::TextEdit::singleline(&mut state.limit_input).desired_width(50.0));
        if ui.button("Run Sieve").clicked() {
            state.apply_input();
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
        let snap = &step.snapshot;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(300.0)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for cell in &snap.cells {
                        let fill = if cell.active {
                            COLOR_ACTIVE
                        } else if snap.marking.contains(&cell.value) {
                            COLOR_MARKING
                        } else {
                            match cell.status {
                                CellStatus::Prime => COLOR_PRIME,
                                CellStatus::Composite => COLOR_COMPOSITE,
                                CellStatus::Unmarked => ui.visuals().widgets.inactive.bg_fill,
                            }
                        };
                        widgets::value_cell(ui, &cell.value.to_string(), fill);
                    }
                });
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            widgets::legend_entry(ui, COLOR_PRIME, "Prime");
            widgets::legend_entry(ui, COLOR_COMPOSITE, "Composite");
            widgets::legend_entry(ui, COLOR_ACTIVE, "Candidate");
            widgets::legend_entry(ui, COLOR_MARKING, "Marking");
        });

        ui.add_space(4.0);
        let primes = snap.primes();
        ui.label(format!(
            "Primes found ({}): {}",
            primes.len(),
            primes
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    ui.add_space(4.0);
    widgets::narration_label(ui, &state.player);

    Vec::new()
}

impl Pane for SievePaneState {
    fn kind(&self) -> PaneKind {
        PaneKind::Sieve
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
