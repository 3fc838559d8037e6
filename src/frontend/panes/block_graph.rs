//! Block graph pane
//!
//! Freeform canvas of draggable blocks. Each block can spawn a child at a
//! random position or remove itself (taking its direct children with it);
//! dashed connector lines run between parents and children.

use egui::{Align2, Color32, Pos2, Rect, Sense, Shape, Stroke, Ui};

use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;
use crate::graph::{BlockGraph, BlockId, BLOCK_SIZE};

/// Height of the +/- button strip at the bottom of each block
const BUTTON_STRIP: f32 = 24.0;

const COLOR_BLOCK: Color32 = Color32::from_rgb(54, 104, 160);
const COLOR_BLOCK_HOVER: Color32 = Color32::from_rgb(74, 128, 188);
const COLOR_EDGE: Color32 = Color32::from_gray(140);

/// State for the block graph pane
///
/// Block positions are local to the canvas, so the graph survives dock
/// rearrangement. The graph is seeded lazily on the first frame, once the
/// canvas size is known.
#[derive(Default)]
pub struct BlockGraphPaneState {
    graph: Option<BlockGraph>,
}

/// Render the block graph pane
pub fn render(
    state: &mut BlockGraphPaneState,
    _shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    ui.horizontal(|ui| {
        ui.heading("Block Graph");
        ui.separator();
        ui.label("Drag blocks; + spawns a child, \u{2212} removes the block and its children");
        if ui.button("⟲ Reset").clicked() {
            state.graph = None;
        }
    });
    ui.separator();

    let canvas_size = ui.available_size();
    let (response, painter) = ui.allocate_painter(canvas_size, Sense::hover());
    let canvas_rect = response.rect;
    painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(30));

    let bounds = Rect::from_min_size(Pos2::ZERO, canvas_rect.size());
    let graph = state
        .graph
        .get_or_insert_with(|| BlockGraph::new(bounds, &mut rand::rng()));

    // Edges first, blocks on top
    for (parent, child) in graph.edges() {
        let (Some(p), Some(c)) = (graph.get(parent), graph.get(child)) else {
            continue;
        };
        let a = canvas_rect.min + p.pos.to_vec2() + egui::vec2(BLOCK_SIZE / 2.0, BLOCK_SIZE / 2.0);
        let b = canvas_rect.min + c.pos.to_vec2() + egui::vec2(BLOCK_SIZE / 2.0, BLOCK_SIZE / 2.0);
        painter.extend(Shape::dashed_line(
            &[a, b],
            Stroke::new(1.5, COLOR_EDGE),
            6.0,
            4.0,
        ));
    }

    let blocks: Vec<(BlockId, Pos2)> = graph.blocks().iter().map(|b| (b.id, b.pos)).collect();
    let mut spawn_from: Option<BlockId> = None;
    let mut remove: Option<BlockId> = None;

    for (id, pos) in blocks {
        let rect = Rect::from_min_size(
            canvas_rect.min + pos.to_vec2(),
            egui::vec2(BLOCK_SIZE, BLOCK_SIZE),
        );
        let body_rect =
            Rect::from_min_max(rect.min, Pos2::new(rect.max.x, rect.max.y - BUTTON_STRIP));

        let drag = ui.interact(body_rect, ui.id().with(("block", id.0)), Sense::drag());
        if drag.dragged() {
            let moved = pos + drag.drag_delta();
            let clamped = Pos2::new(
                moved.x.clamp(0.0, (bounds.width() - BLOCK_SIZE).max(0.0)),
                moved.y.clamp(0.0, (bounds.height() - BLOCK_SIZE).max(0.0)),
            );
            graph.drag_to(id, clamped);
        }

        let fill = if drag.hovered() || drag.dragged() {
            COLOR_BLOCK_HOVER
        } else {
            COLOR_BLOCK
        };
        painter.rect_filled(rect, 6.0, fill);
        painter.rect_stroke(
            rect,
            6.0,
            Stroke::new(1.0, Color32::from_gray(200)),
            egui::StrokeKind::Outside,
        );
        painter.text(
            body_rect.center(),
            Align2::CENTER_CENTER,
            format!("#{}", id.0),
            egui::TextStyle::Body.resolve(ui.style()),
            Color32::WHITE,
        );

        // +/- button strip
        let strip = Rect::from_min_max(body_rect.left_bottom(), rect.max);
        let plus_rect = Rect::from_min_max(strip.min, Pos2::new(strip.center().x, strip.max.y));
        let minus_rect = Rect::from_min_max(Pos2::new(strip.center().x, strip.min.y), strip.max);

        let plus = ui.interact(plus_rect, ui.id().with(("block_add", id.0)), Sense::click());
        if plus.clicked() {
            spawn_from = Some(id);
        }
        let minus = ui.interact(minus_rect, ui.id().with(("block_del", id.0)), Sense::click());
        if minus.clicked() {
            remove = Some(id);
        }

        for (button_rect, resp, label) in [(plus_rect, &plus, "+"), (minus_rect, &minus, "\u{2212}")]
        {
            if resp.hovered() {
                painter.rect_filled(button_rect, 3.0, Color32::from_gray(70));
            }
            painter.text(
                button_rect.center(),
                Align2::CENTER_CENTER,
                label,
                egui::TextStyle::Button.resolve(ui.style()),
                Color32::WHITE,
            );
        }
    }

    if let Some(parent) = spawn_from {
        graph.spawn_child(parent, bounds, &mut rand::rng());
    }
    if let Some(id) = remove {
        graph.remove(id);
        // Removing the last block leaves an empty canvas; reseed on reset
    }

    Vec::new()
}

impl Pane for BlockGraphPaneState {
    fn kind(&self) -> PaneKind {
        PaneKind::BlockGraph
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
