//! Viewer configuration.
//!
//! Defaults describe the reference dataset: a DEM tile around Nagoya
//! Station with a small set of nearby points of interest. On the web build
//! the whole configuration can be overridden through the
//! `terrain_viewer_config` localStorage key, so a deployment can point at
//! its own data without rebuilding.

use crate::geo::{ProjectionScale, SceneOrigin};
use eframe::egui::Color32;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// URL of the terrain OBJ mesh. Relative URLs resolve against the page
    /// on the web and against the working directory natively.
    pub terrain_url: String,
    /// URL of the point-of-interest GeoJSON document.
    pub points_url: String,

    /// Geographic origin mapped to scene (0, 0).
    pub origin_longitude: f64,
    pub origin_latitude: f64,
    /// Meters-to-scene-units conversion factors, per axis.
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,

    /// Marker visual radius in scene units.
    pub marker_radius: f32,
    /// Marker fill color, RGB.
    pub marker_color: [u8; 3],
    /// Fixed height markers float above the terrain, scene units.
    pub marker_elevation: f64,

    /// Camera vertical field of view in degrees.
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    /// Camera position before terrain framing takes over.
    pub camera_position: [f32; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            terrain_url: "./assets/terrain.obj".to_string(),
            points_url: "./assets/pois.geojson".to_string(),
            // Nagoya Station
            origin_longitude: 136.8816,
            origin_latitude: 35.1709,
            scale_x: 0.01,
            scale_y: 0.01,
            scale_z: 0.01,
            marker_radius: 2.0,
            marker_color: [255, 0, 0],
            marker_elevation: 10.0,
            camera_fov_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 2000.0,
            camera_position: [0.0, 200.0, 300.0],
        }
    }
}

impl ViewerConfig {
    /// localStorage key holding a JSON override of this configuration.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "terrain_viewer_config";

    /// Loads the configuration, applying any localStorage override.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        let json = match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("Loaded viewer config override from localStorage");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse viewer config override: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> SceneOrigin {
        SceneOrigin {
            longitude: self.origin_longitude,
            latitude: self.origin_latitude,
        }
    }

    pub fn scale(&self) -> ProjectionScale {
        ProjectionScale {
            x: self.scale_x,
            y: self.scale_y,
            z: self.scale_z,
        }
    }

    pub fn marker_color(&self) -> Color32 {
        let [r, g, b] = self.marker_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn initial_camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_reference_dataset() {
        let config = ViewerConfig::default();

        assert_eq!(config.origin().longitude, 136.8816);
        assert_eq!(config.origin().latitude, 35.1709);
        assert_eq!(config.scale(), ProjectionScale::uniform(0.01));
        assert_eq!(config.marker_color(), Color32::RED);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{"marker_radius": 5.0}"#).unwrap();

        assert_eq!(config.marker_radius, 5.0);
        assert_eq!(config.camera_fov_degrees, 75.0);
    }
}
