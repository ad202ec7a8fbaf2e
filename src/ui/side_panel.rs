//! Side panel UI: layer visibility and loaded-content summary.

use crate::scene::{LayerId, SceneContext};
use crate::state::AppState;
use eframe::egui::{self, RichText};

pub fn render_side_panel(ctx: &egui::Context, state: &AppState, scene: &mut SceneContext) {
    egui::SidePanel::left("side_panel")
        .resizable(true)
        .default_width(200.0)
        .min_width(160.0)
        .max_width(320.0)
        .show(ctx, |ui| {
            ui.heading(format!("{} Layers", egui_phosphor::regular::STACK));
            ui.separator();

            let terrain_layer = scene.terrain_layer;
            let points_layer = scene.points_layer;
            layer_checkbox(ui, scene, terrain_layer, "Terrain");
            layer_checkbox(ui, scene, points_layer, "Points of interest");

            ui.add_space(10.0);
            ui.separator();

            render_load_status(ui, state, scene);

            ui.add_space(10.0);
            let origin = scene.projection.origin();
            ui.label(
                RichText::new(format!(
                    "Origin: {:.4}, {:.4}",
                    origin.latitude, origin.longitude
                ))
                .small()
                .weak(),
            );
        });
}

fn layer_checkbox(ui: &mut egui::Ui, scene: &mut SceneContext, id: LayerId, label: &str) {
    let count = scene.registry.layer(id).map(|l| l.len()).unwrap_or(0);
    let mut visible = scene.registry.is_visible(id);

    if ui
        .checkbox(&mut visible, format!("{} ({})", label, count))
        .changed()
    {
        scene.registry.set_visible(id, visible);
    }
}

fn render_load_status(ui: &mut egui::Ui, state: &AppState, scene: &SceneContext) {
    ui.label(RichText::new("Content").small());

    load_row(
        ui,
        "Terrain mesh",
        state.terrain_loading,
        !scene
            .registry
            .layer(scene.terrain_layer)
            .map(|l| l.is_empty())
            .unwrap_or(true),
    );
    load_row(
        ui,
        "POI markers",
        state.points_loading,
        !scene
            .registry
            .layer(scene.points_layer)
            .map(|l| l.is_empty())
            .unwrap_or(true),
    );
}

fn load_row(ui: &mut egui::Ui, label: &str, loading: bool, loaded: bool) {
    ui.horizontal(|ui| {
        if loading {
            ui.spinner();
        } else if loaded {
            ui.label(
                RichText::new(egui_phosphor::regular::CHECK)
                    .color(egui::Color32::from_rgb(100, 200, 100)),
            );
        } else {
            ui.label(
                RichText::new(egui_phosphor::regular::X)
                    .color(egui::Color32::from_rgb(200, 100, 100)),
            );
        }
        ui.label(label);
    });
}
