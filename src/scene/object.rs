//! Renderable scene objects.

use crate::mesh::TerrainMesh;
use eframe::egui::Color32;
use glam::Vec3;

/// A point-of-interest marker, drawn as a perspective-scaled disc and
/// tagged with its feature name for identification.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Projected scene-space position.
    pub position: Vec3,
    /// Visual radius in scene units.
    pub radius: f32,
    pub color: Color32,
    pub name: String,
}

/// Content owned by a scene layer.
pub enum SceneObject {
    Terrain(TerrainMesh),
    Marker(Marker),
}
