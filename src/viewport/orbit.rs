//! Damped orbit interaction around a target point.
//!
//! Pointer input accumulates pending rotation which drains a fraction per
//! frame, giving the characteristic eased-out orbit feel. Zoom and pan
//! apply immediately; zoom distance is clamped against the clip planes.

use glam::Vec3;

/// Fraction of the pending rotation applied per 60 Hz frame.
const DAMPING_FACTOR: f32 = 0.05;
/// Radians of orbit per dragged pixel.
const ROTATE_SPEED: f32 = 0.01;
/// Multiplicative zoom step per scroll notch.
const ZOOM_STEP: f32 = 1.20;
/// Pan distance per pixel, as a fraction of the orbit distance.
const PAN_SPEED: f32 = 0.002;
/// Pending rotation below this is considered settled.
const REST_EPSILON: f32 = 1e-4;

/// Keeps the pitch off the poles so the view never flips over.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

pub struct OrbitController {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Derives orbit state from an initial camera pose.
    pub fn from_pose(position: Vec3, target: Vec3, near: f32, far: f32) -> Self {
        let offset = position - target;
        let distance = offset.length().max(1e-3);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        Self {
            target,
            yaw,
            pitch,
            distance,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            min_distance: (near * 2.0).max(0.1),
            max_distance: (far * 0.9).max(near * 2.0),
        }
    }

    /// Camera position implied by the current orbit state.
    pub fn camera_position(&self) -> Vec3 {
        self.target + self.offset_direction() * self.distance
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Queues a rotation from a pointer drag, in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= dx * ROTATE_SPEED;
        self.pending_pitch += dy * ROTATE_SPEED;
    }

    /// Translates the orbit target along the view plane, in pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * PAN_SPEED;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let up = Vec3::new(-sin_yaw * sin_pitch, cos_pitch, -cos_yaw * sin_pitch);

        self.target += (-right * dx + up * dy) * scale;
    }

    /// Zooms by scroll notches; positive zooms in. Applied immediately
    /// with the distance clamped between the clip-plane-derived limits.
    pub fn zoom(&mut self, notches: f32) {
        let scaled = self.distance * ZOOM_STEP.powf(-notches);
        self.distance = scaled.clamp(self.min_distance, self.max_distance);
    }

    /// Recenters the orbit on framed content at the given distance, looking
    /// from above and behind (matching the content-framing convention).
    pub fn frame(&mut self, center: Vec3, camera_distance: f32) {
        self.target = center;
        self.yaw = 0.0;
        // Offset (0, d/2, d): the camera sits half the framing distance up.
        self.pitch = 0.5_f32.atan();
        self.distance = (camera_distance * (1.25_f32).sqrt())
            .clamp(self.min_distance, self.max_distance);
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    /// Advances the damped interpolation one frame. Returns whether motion
    /// is still in progress (callers keep repainting while it is).
    pub fn update(&mut self, dt: f32) -> bool {
        if self.pending_yaw.abs() < REST_EPSILON && self.pending_pitch.abs() < REST_EPSILON {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            return false;
        }

        // Normalize the per-frame fraction to the actual frame duration.
        let frames = (dt * 60.0).clamp(0.0, 4.0);
        let applied = 1.0 - (1.0 - DAMPING_FACTOR).powf(frames);

        self.yaw += self.pending_yaw * applied;
        self.pitch = (self.pitch + self.pending_pitch * applied).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.pending_yaw *= 1.0 - applied;
        self.pending_pitch *= 1.0 - applied;

        true
    }

    fn offset_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> OrbitController {
        OrbitController::from_pose(Vec3::new(0.0, 200.0, 300.0), Vec3::ZERO, 0.1, 2000.0)
    }

    #[test]
    fn test_pose_round_trips_through_orbit_state() {
        let orbit = controller();
        let position = orbit.camera_position();

        assert!((position - Vec3::new(0.0, 200.0, 300.0)).length() < 1e-2);
    }

    #[test]
    fn test_rotation_damps_to_rest() {
        let mut orbit = controller();
        orbit.rotate(120.0, 0.0);

        let mut frames = 0;
        while orbit.update(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000, "damping never settled");
        }

        // The full queued rotation has been applied by the time it rests.
        assert!((orbit.yaw - (-120.0 * ROTATE_SPEED)).abs() < 0.01);
        assert!(!orbit.update(1.0 / 60.0));
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let mut orbit = controller();
        let before = orbit.distance();

        orbit.rotate(50.0, 30.0);
        for _ in 0..100 {
            orbit.update(1.0 / 60.0);
        }

        assert!((orbit.distance() - before).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut orbit = controller();

        for _ in 0..200 {
            orbit.zoom(1.0);
        }
        assert!((orbit.distance() - 0.2).abs() < 1e-4);

        for _ in 0..200 {
            orbit.zoom(-1.0);
        }
        assert!((orbit.distance() - 1800.0).abs() < 1e-2);
    }

    #[test]
    fn test_pitch_never_reaches_the_pole() {
        let mut orbit = controller();
        orbit.rotate(0.0, 100_000.0);
        for _ in 0..2000 {
            orbit.update(1.0 / 60.0);
        }

        assert!(orbit.pitch <= PITCH_LIMIT + 1e-6);
        let position = orbit.camera_position();
        assert!(position.is_finite());
    }

    #[test]
    fn test_framing_centers_the_target() {
        let mut orbit = controller();
        orbit.frame(Vec3::new(10.0, 5.0, -3.0), 100.0);

        assert_eq!(orbit.target, Vec3::new(10.0, 5.0, -3.0));
        // |offset| for (0, d/2, d) is d * sqrt(1.25).
        assert!((orbit.distance() - 100.0 * 1.25_f32.sqrt()).abs() < 1e-3);

        let offset = orbit.camera_position() - orbit.target;
        assert!(offset.x.abs() < 1e-3);
        assert!((offset.y / offset.z - 0.5).abs() < 1e-3);
    }
}
