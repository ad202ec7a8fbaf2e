//! Scene layer registry.
//!
//! Layers are named, ordered groups of renderable content with a visibility
//! flag. They are created once at startup and never removed; objects are
//! appended in insertion order and stay in the layer they were added to.

use super::object::SceneObject;
use std::fmt;

/// Handle to a registered scene layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

/// Errors raised by the layer registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// A layer with this name is already registered.
    DuplicateName(String),
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::DuplicateName(name) => {
                write!(f, "layer \"{}\" is already registered", name)
            }
        }
    }
}

impl std::error::Error for LayerError {}

/// A named collection of renderables with a visibility flag.
pub struct SceneLayer {
    name: String,
    objects: Vec<SceneObject>,
    visible: bool,
}

impl SceneLayer {
    fn new(name: String) -> Self {
        Self {
            name,
            objects: Vec::new(),
            visible: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Owns all scene layers and their visibility state.
#[derive(Default)]
pub struct SceneLayerRegistry {
    layers: Vec<SceneLayer>,
}

impl SceneLayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new empty, initially-visible layer.
    pub fn create_layer(&mut self, name: &str) -> Result<LayerId, LayerError> {
        if self.layers.iter().any(|l| l.name == name) {
            return Err(LayerError::DuplicateName(name.to_string()));
        }

        self.layers.push(SceneLayer::new(name.to_string()));
        Ok(LayerId(self.layers.len() - 1))
    }

    /// Appends a renderable to a layer. Insertion order is preserved.
    pub fn add_object(&mut self, id: LayerId, object: SceneObject) {
        self.layers[id.0].objects.push(object);
    }

    /// Sets a layer's visibility flag. Idempotent; never touches contents.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        self.layers[id.0].visible = visible;
    }

    pub fn is_visible(&self, id: LayerId) -> bool {
        self.layers[id.0].visible
    }

    pub fn layer(&self, id: LayerId) -> Option<&SceneLayer> {
        self.layers.get(id.0)
    }

    /// Iterates layers in registration order (the render order).
    pub fn iter(&self) -> impl Iterator<Item = &SceneLayer> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Marker;
    use eframe::egui::Color32;
    use glam::Vec3;

    fn marker(name: &str) -> SceneObject {
        SceneObject::Marker(Marker {
            position: Vec3::ZERO,
            radius: 2.0,
            color: Color32::RED,
            name: name.to_string(),
        })
    }

    fn marker_name(object: &SceneObject) -> &str {
        match object {
            SceneObject::Marker(m) => &m.name,
            SceneObject::Terrain(_) => panic!("expected a marker"),
        }
    }

    #[test]
    fn test_duplicate_layer_name_is_rejected() {
        let mut registry = SceneLayerRegistry::new();
        registry.create_layer("terrain").unwrap();

        assert_eq!(
            registry.create_layer("terrain"),
            Err(LayerError::DuplicateName("terrain".to_string()))
        );
    }

    #[test]
    fn test_layers_start_visible_and_toggling_is_idempotent() {
        let mut registry = SceneLayerRegistry::new();
        let id = registry.create_layer("points").unwrap();
        registry.add_object(id, marker("a"));

        assert!(registry.is_visible(id));

        registry.set_visible(id, true);
        registry.set_visible(id, true);
        assert!(registry.is_visible(id));

        registry.set_visible(id, false);
        registry.set_visible(id, false);
        assert!(!registry.is_visible(id));

        // Toggling never alters layer contents.
        assert_eq!(registry.layer(id).unwrap().len(), 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut registry = SceneLayerRegistry::new();
        let id = registry.create_layer("points").unwrap();

        for name in ["first", "second", "third"] {
            registry.add_object(id, marker(name));
        }

        let names: Vec<&str> = registry
            .layer(id)
            .unwrap()
            .objects()
            .iter()
            .map(marker_name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_layer_membership_is_permanent() {
        let mut registry = SceneLayerRegistry::new();
        let a = registry.create_layer("a").unwrap();
        let b = registry.create_layer("b").unwrap();

        registry.add_object(a, marker("only-in-a"));
        registry.set_visible(a, false);
        registry.set_visible(b, true);

        assert_eq!(registry.layer(a).unwrap().len(), 1);
        assert!(registry.layer(b).unwrap().is_empty());
    }
}
