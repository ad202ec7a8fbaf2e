//! Geographic projection and feature extraction.
//!
//! This module converts geographic data — longitude/latitude coordinates
//! and GeoJSON point features — into scene-space content.

mod features;
mod projection;

pub use features::{parse_point_features, PointFeature};
pub use projection::{LocalTangentProjection, ProjectionScale, SceneOrigin};
