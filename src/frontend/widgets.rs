//! Custom UI widgets shared across panes
//!
//! Playback transport controls, the value-cell grid element used by the
//! array/grid visualizers, and small legend helpers.

use std::time::{Duration, Instant};

use egui::{Color32, Ui};

use crate::player::{PlaybackState, StepPlayer};

/// Slider range for the auto-play interval (ms)
const INTERVAL_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=2000;

/// Drive frame-based auto-play and keep repainting while it runs.
///
/// Call once at the top of a pane's render function.
pub fn drive_playback<S>(ctx: &egui::Context, player: &mut StepPlayer<S>) {
    player.tick(Instant::now());
    if player.is_playing() {
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Render the shared playback transport: step buttons, play/pause,
/// reset, interval slider, and a status row.
///
/// Returns true when the reset button was clicked; the caller is
/// expected to regenerate its step sequence.
pub fn playback_controls<S>(ui: &mut Ui, player: &mut StepPlayer<S>) -> bool {
    let mut reset_clicked = false;

    ui.horizontal(|ui| {
        // Manual stepping is rejected while auto-play owns the cursor
        let manual_ok = !player.is_playing() && !player.is_empty();
        if ui
            .add_enabled(manual_ok, egui::Button::new("⏮ Prev"))
            .clicked()
        {
            player.previous();
        }
        if ui
            .add_enabled(manual_ok, egui::Button::new("Next ⏭"))
            .clicked()
        {
            player.next();
        }

        ui.separator();

        if player.is_playing() {
            if ui.button("⏸ Pause").clicked() {
                player.pause();
            }
        } else {
            let can_play = !player.is_empty() && !player.state().is_completed();
            let label = if player.state().is_paused() {
                "▶ Resume"
            } else {
                "▶ Play"
            };
            if ui.add_enabled(can_play, egui::Button::new(label)).clicked() {
                player.resume();
            }
        }

        if ui.button("⟲ Reset").clicked() {
            reset_clicked = true;
        }

        ui.separator();

        let mut ms = player.interval().as_millis() as u64;
        if ui
            .add(
                egui::Slider::new(&mut ms, INTERVAL_RANGE_MS)
                    .suffix(" ms")
                    .text("Interval"),
            )
            .changed()
        {
            player.set_interval(Duration::from_millis(ms));
        }
    });

    ui.horizontal(|ui| {
        let (color, text) = state_badge(player.state());
        ui.colored_label(color, text);
        if !player.is_empty() {
            ui.label(format!(
                "Step {} / {}",
                player.current_index() + 1,
                player.len()
            ));
        }
        ui.add(egui::ProgressBar::new(player.progress()).desired_width(120.0));
    });

    reset_clicked
}

/// Render the narration for the current step, if any.
pub fn narration_label<S>(ui: &mut Ui, player: &StepPlayer<S>) {
    if let Some(step) = player.current_step() {
        ui.label(egui::RichText::new(&step.narration).italics());
    }
}

fn state_badge(state: PlaybackState) -> (Color32, &'static str) {
    let color = match state {
        PlaybackState::Idle => Color32::GRAY,
        PlaybackState::Stopped => Color32::LIGHT_BLUE,
        PlaybackState::Playing => Color32::GREEN,
        PlaybackState::Paused => Color32::YELLOW,
        PlaybackState::Completed => Color32::LIGHT_GREEN,
    };
    (color, state.display_name())
}

/// One square cell in an array/grid visualizer.
pub fn value_cell(ui: &mut Ui, label: &str, fill: Color32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 4.0, fill);
        ui.painter().rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.fg_stroke.color),
            egui::StrokeKind::Outside,
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::TextStyle::Body.resolve(ui.style()),
            ui.visuals().strong_text_color(),
        );
    }

    response
}

/// Color swatch plus caption, for per-pane legends.
pub fn legend_entry(ui: &mut Ui, color: Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(label);
}
