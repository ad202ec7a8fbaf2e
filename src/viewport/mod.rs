//! Viewport ownership: camera, orbit interaction, framing, per-frame tick.

mod camera;
mod orbit;

pub use camera::Camera;
pub use orbit::OrbitController;

use crate::config::ViewerConfig;
use glam::Vec3;

/// Owns the camera and its orbit state, and keeps the two in sync.
pub struct ViewportController {
    pub camera: Camera,
    pub orbit: OrbitController,
}

impl ViewportController {
    pub fn new(config: &ViewerConfig) -> Self {
        let camera = Camera {
            position: config.initial_camera_position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_rad: config.camera_fov_degrees.to_radians(),
            aspect: 16.0 / 9.0,
            near: config.camera_near,
            far: config.camera_far,
        };
        let orbit = OrbitController::from_pose(
            camera.position,
            camera.target,
            camera.near,
            camera.far,
        );

        Self { camera, orbit }
    }

    /// Repositions the camera to frame loaded content bounds, with the
    /// orbit target on the bounds center.
    pub fn frame_content(&mut self, center: Vec3, size: Vec3) {
        let max_dim = size.x.max(size.y).max(size.z);
        let half_fov = self.camera.fov_y_rad / 2.0;
        let camera_distance = (max_dim / 2.0 / half_fov.tan()).abs() * 1.5;

        self.orbit.frame(center, camera_distance);
        self.sync_camera();
    }

    /// Recomputes the projection aspect from the current canvas size.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width / height);
    }

    /// Advances damped-orbit interpolation one frame; returns whether the
    /// view is still settling.
    pub fn tick(&mut self, dt: f32) -> bool {
        let moving = self.orbit.update(dt);
        self.sync_camera();
        moving
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.orbit.rotate(dx, dy);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.orbit.pan(dx, dy);
        self.sync_camera();
    }

    pub fn zoom(&mut self, notches: f32) {
        self.orbit.zoom(notches);
        self.sync_camera();
    }

    fn sync_camera(&mut self) {
        self.camera.position = self.orbit.camera_position();
        self.camera.target = self.orbit.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_uses_the_fov_distance_formula() {
        let config = ViewerConfig::default();
        let mut viewport = ViewportController::new(&config);

        let center = Vec3::new(5.0, 0.0, -2.0);
        let size = Vec3::new(100.0, 20.0, 60.0);
        viewport.frame_content(center, size);

        let expected =
            (100.0 / 2.0) / (config.camera_fov_degrees.to_radians() / 2.0).tan() * 1.5;

        assert_eq!(viewport.camera.target, center);
        assert!(
            (viewport.orbit.distance() - expected * 1.25_f32.sqrt()).abs() < 1e-2
        );
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut viewport = ViewportController::new(&ViewerConfig::default());

        viewport.on_resize(800.0, 400.0);
        assert_eq!(viewport.camera.aspect, 2.0);

        // Degenerate sizes leave the previous aspect in place.
        viewport.on_resize(800.0, 0.0);
        assert_eq!(viewport.camera.aspect, 2.0);
    }

    #[test]
    fn test_tick_keeps_camera_on_orbit() {
        let mut viewport = ViewportController::new(&ViewerConfig::default());
        viewport.rotate(80.0, 20.0);

        while viewport.tick(1.0 / 60.0) {}

        let expected = viewport.orbit.camera_position();
        assert!((viewport.camera.position - expected).length() < 1e-5);
    }
}
