//! Application of load results to the scene.
//!
//! Kept separate from the update loop so outcome handling can be exercised
//! without a live UI context.

use crate::config::ViewerConfig;
use crate::loader::{PointsLoadResult, TerrainLoadResult};
use crate::scene::{Marker, SceneContext, SceneObject};
use crate::state::AppState;
use crate::viewport::ViewportController;

/// Applies one terrain load message: content on success, a notification on
/// failure, a status update on progress.
pub fn apply_terrain_result(
    result: TerrainLoadResult,
    scene: &mut SceneContext,
    viewport: &mut ViewportController,
    state: &mut AppState,
) {
    match result {
        TerrainLoadResult::Success {
            mesh,
            fetch_ms,
            parse_ms,
        } => {
            let bounds = mesh.bounds;
            let triangles = mesh.triangle_count();

            scene
                .registry
                .add_object(scene.terrain_layer, SceneObject::Terrain(mesh));
            viewport.frame_content(bounds.center(), bounds.size());

            state.terrain_loading = false;
            state.status_message = format!("Terrain loaded: {} triangles", triangles);
            log::info!(
                "Terrain loaded: {} triangles ({:.0} ms fetch, {:.0} ms parse)",
                triangles,
                fetch_ms,
                parse_ms
            );
        }
        TerrainLoadResult::Progress { loaded, total } => {
            state.status_message = match total {
                Some(total) if total > 0 => {
                    format!(
                        "Loading terrain: {:.0}%",
                        loaded as f64 / total as f64 * 100.0
                    )
                }
                _ => format!("Loading terrain: {} bytes", loaded),
            };
        }
        TerrainLoadResult::Error(msg) => {
            state.terrain_loading = false;
            state.notify(format!("Terrain load failed: {}", msg));
            log::error!("Terrain load failed: {}", msg);
        }
    }
}

/// Applies a points load outcome, projecting each feature into the scene.
pub fn apply_points_result(
    result: PointsLoadResult,
    scene: &mut SceneContext,
    config: &ViewerConfig,
    state: &mut AppState,
) {
    match result {
        PointsLoadResult::Success(features) => {
            let count = features.len();
            for feature in features {
                let position = scene.projection.project(feature.coord);
                scene.registry.add_object(
                    scene.points_layer,
                    SceneObject::Marker(Marker {
                        position,
                        radius: config.marker_radius,
                        color: config.marker_color(),
                        name: feature.name,
                    }),
                );
            }

            state.points_loading = false;
            state.status_message = format!("Loaded {} point(s) of interest", count);
            log::info!("Loaded {} point(s) of interest", count);
        }
        PointsLoadResult::Error(msg) => {
            state.points_loading = false;
            state.notify(format!("Points load failed: {}", msg));
            log::error!("Points load failed: {}", msg);
        }
    }
}
