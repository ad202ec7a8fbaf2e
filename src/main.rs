#![warn(clippy::all)]

//! Terrain Viewer - a web-based 3D terrain and point-of-interest viewer.
//!
//! Loads a static terrain mesh (Wavefront OBJ) and a GeoJSON set of
//! point-of-interest markers, places the markers through a local geographic
//! projection, and lets the user orbit the scene and toggle layer
//! visibility. Both loads run concurrently and independently; rendering
//! never waits on either.

mod config;
mod geo;
mod loader;
mod mesh;
mod render;
mod scene;
mod state;
mod ui;
mod viewport;

use config::ViewerConfig;
use eframe::egui;
use geo::LocalTangentProjection;
use loader::{apply_points_result, apply_terrain_result, PointsLoadChannel, TerrainLoadChannel};
use scene::SceneContext;
use state::AppState;
use viewport::ViewportController;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Terrain Viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct ViewerApp {
    /// UI-facing state: status, load flags, notifications
    state: AppState,

    /// Startup configuration (data URLs, projection, marker styling)
    config: ViewerConfig,

    /// Scene content: layer registry and geographic projection
    scene: SceneContext,

    /// Camera and orbit interaction
    viewport: ViewportController,

    /// Channel for the async terrain mesh load
    terrain_channel: TerrainLoadChannel,

    /// Channel for the async points load
    points_channel: PointsLoadChannel,
}

impl ViewerApp {
    /// Creates the app and kicks off both content loads.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let config = ViewerConfig::load();
        log::info!(
            "Starting viewer: terrain={}, points={}",
            config.terrain_url,
            config.points_url
        );

        let projection = LocalTangentProjection::new(
            config.origin(),
            config.scale(),
            config.marker_elevation,
        );
        let scene = SceneContext::new(projection);
        let viewport = ViewportController::new(&config);

        let terrain_channel = TerrainLoadChannel::new();
        let points_channel = PointsLoadChannel::new();

        let mut state = AppState::new();
        state.terrain_loading = true;
        state.points_loading = true;
        state.status_message = "Loading content...".to_string();

        terrain_channel.load(cc.egui_ctx.clone(), config.terrain_url.clone());
        points_channel.load(cc.egui_ctx.clone(), config.points_url.clone());

        Self {
            state,
            config,
            scene,
            viewport,
            terrain_channel,
            points_channel,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain completed load messages before drawing this frame.
        while let Some(result) = self.terrain_channel.try_recv() {
            apply_terrain_result(
                result,
                &mut self.scene,
                &mut self.viewport,
                &mut self.state,
            );
        }
        while let Some(result) = self.points_channel.try_recv() {
            apply_points_result(result, &mut self.scene, &self.config, &mut self.state);
        }

        ui::render_top_bar(ctx, &self.state);
        ui::render_side_panel(ctx, &self.state, &mut self.scene);
        ui::render_canvas(ctx, &self.state, &self.scene, &mut self.viewport);
        ui::render_notifications(ctx, &mut self.state);
    }
}
