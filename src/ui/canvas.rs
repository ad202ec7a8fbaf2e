//! Central canvas UI: the 3D viewport.
//!
//! Owns per-frame input handling for the orbit controls and issues the
//! scene draw. Repaints are requested while the damped orbit is still
//! settling or a load is in flight, so the view animates without input.

use crate::render::render_scene;
use crate::scene::SceneContext;
use crate::state::AppState;
use crate::viewport::ViewportController;
use eframe::egui::{self, Color32, PointerButton, Sense};

pub fn render_canvas(
    ctx: &egui::Context,
    state: &AppState,
    scene: &SceneContext,
    viewport: &mut ViewportController,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        viewport.on_resize(rect.width(), rect.height());

        if response.dragged_by(PointerButton::Primary) {
            let delta = response.drag_delta();
            viewport.rotate(delta.x, delta.y);
        }
        if response.dragged_by(PointerButton::Secondary) {
            let delta = response.drag_delta();
            viewport.pan(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                viewport.zoom(scroll / 120.0);
            }
        }

        let dt = ui.input(|i| i.stable_dt);
        let animating = viewport.tick(dt);

        render_scene(&painter, rect, &scene.registry, &viewport.camera);

        // Orbit distance readout, bottom-left.
        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("distance: {:.0}", viewport.orbit.distance()),
            egui::FontId::monospace(11.0),
            Color32::from_gray(140),
        );

        if animating || state.terrain_loading || state.points_loading {
            ctx.request_repaint();
        }
    });
}
