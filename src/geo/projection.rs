//! Geographic-to-scene coordinate projection.
//!
//! Converts longitude/latitude pairs into local scene coordinates relative
//! to a configured origin, using a flat local-tangent-plane approximation.

use geo_types::Coord;
use glam::Vec3;
use std::f64::consts::PI;

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// The geographic point mapped to scene coordinate (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOrigin {
    pub longitude: f64,
    pub latitude: f64,
}

/// Per-axis conversion factors from meters to scene units.
///
/// Invariant: strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionScale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ProjectionScale {
    /// Creates a uniform scale applying the same factor on every axis.
    #[allow(dead_code)] // Convenience constructor for uniform scales
    pub fn uniform(factor: f64) -> Self {
        debug_assert!(factor > 0.0, "scale factors must be strictly positive");
        Self {
            x: factor,
            y: factor,
            z: factor,
        }
    }
}

/// Local-tangent-plane projection centered on a scene origin.
///
/// Treats the Earth as locally flat: meters-per-degree factors are computed
/// at the point's latitude and applied linearly to the degree offsets from
/// the origin. Adequate only for small areas near the origin; error grows
/// with distance and no fallback projection is provided.
///
/// Scene axes follow the renderer's convention: +X east, +Y up, -Z north.
#[derive(Debug, Clone, Copy)]
pub struct LocalTangentProjection {
    origin: SceneOrigin,
    scale: ProjectionScale,
    /// Fixed Y offset so projected markers float above the terrain surface.
    elevation: f64,
}

impl LocalTangentProjection {
    pub fn new(origin: SceneOrigin, scale: ProjectionScale, elevation: f64) -> Self {
        Self {
            origin,
            scale,
            elevation,
        }
    }

    /// Projects a geographic coordinate (`x` = longitude, `y` = latitude)
    /// into scene space.
    ///
    /// Pure function of the input and the projection parameters. Non-finite
    /// input propagates into the result unvalidated.
    pub fn project(&self, coord: Coord<f64>) -> Vec3 {
        let meters_per_degree_lon = EARTH_RADIUS_METERS * coord.y.to_radians().cos() * PI / 180.0;
        let meters_per_degree_lat = EARTH_RADIUS_METERS * PI / 180.0;

        let x = (coord.x - self.origin.longitude) * meters_per_degree_lon * self.scale.x;
        let z = (coord.y - self.origin.latitude) * meters_per_degree_lat * self.scale.z;

        // Negated Z aligns geographic north with the scene's forward axis.
        Vec3::new(x as f32, self.elevation as f32, -z as f32)
    }

    pub fn origin(&self) -> SceneOrigin {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nagoya() -> LocalTangentProjection {
        LocalTangentProjection::new(
            SceneOrigin {
                longitude: 136.8816,
                latitude: 35.1709,
            },
            ProjectionScale::uniform(0.01),
            10.0,
        )
    }

    #[test]
    fn test_origin_projects_to_scene_center() {
        let projection = nagoya();
        let scene = projection.project(Coord {
            x: 136.8816,
            y: 35.1709,
        });

        assert_eq!(scene.x, 0.0);
        assert_eq!(scene.z, 0.0);
        assert_eq!(scene.y, 10.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let projection = nagoya();
        let coord = Coord {
            x: 136.9062,
            y: 35.1815,
        };

        assert_eq!(projection.project(coord), projection.project(coord));
    }

    #[test]
    fn test_east_of_origin_is_positive_x() {
        let projection = nagoya();
        let scene = projection.project(Coord {
            x: 136.9,
            y: 35.1709,
        });

        assert!(scene.x > 0.0);
        assert!(scene.z.abs() < 1e-4);
    }

    #[test]
    fn test_north_of_origin_is_negative_z() {
        let projection = nagoya();
        let scene = projection.project(Coord {
            x: 136.8816,
            y: 35.2,
        });

        assert!(scene.z < 0.0);
        assert!(scene.x.abs() < 1e-4);
    }

    #[test]
    fn test_longitude_meters_shrink_toward_poles() {
        let equator = LocalTangentProjection::new(
            SceneOrigin {
                longitude: 0.0,
                latitude: 0.0,
            },
            ProjectionScale::uniform(1.0),
            0.0,
        );
        let subarctic = LocalTangentProjection::new(
            SceneOrigin {
                longitude: 0.0,
                latitude: 60.0,
            },
            ProjectionScale::uniform(1.0),
            0.0,
        );

        let at_equator = equator.project(Coord { x: 1.0, y: 0.0 }).x;
        let at_60_north = subarctic.project(Coord { x: 1.0, y: 60.0 }).x;

        // cos(60°) = 0.5: one degree of longitude covers half the distance.
        assert!(at_60_north < at_equator);
        assert!((at_60_north / at_equator - 0.5).abs() < 1e-3);
    }
}
