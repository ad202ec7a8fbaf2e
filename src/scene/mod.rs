//! Scene content model: layers, renderables, and the scene context.

mod layer;
mod object;

pub use layer::{LayerError, LayerId, SceneLayer, SceneLayerRegistry};
pub use object::{Marker, SceneObject};

use crate::geo::LocalTangentProjection;

/// Scene content shared between the loaders, the UI, and the renderer.
///
/// Constructed once at startup and passed by reference, so each component
/// can be exercised in isolation without ambient globals.
pub struct SceneContext {
    pub registry: SceneLayerRegistry,
    pub terrain_layer: LayerId,
    pub points_layer: LayerId,
    pub projection: LocalTangentProjection,
}

impl SceneContext {
    pub fn new(projection: LocalTangentProjection) -> Self {
        let mut registry = SceneLayerRegistry::new();
        let terrain_layer = registry
            .create_layer("terrain")
            .expect("registry starts empty");
        let points_layer = registry
            .create_layer("points")
            .expect("layer names are distinct");

        log::debug!(
            "Scene layers registered: {}",
            registry
                .iter()
                .map(|l| l.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            registry,
            terrain_layer,
            points_layer,
            projection,
        }
    }
}
