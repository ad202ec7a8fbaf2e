//! Triangle-mesh types for terrain content.

mod obj;

pub use obj::parse_obj;

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Computes the bounding box of a point set. `None` when empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut bounds = Aabb {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// An indexed triangle mesh with precomputed bounds.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    pub positions: Vec<Vec3>,
    /// Triangle list; each entry indexes into `positions`.
    pub triangles: Vec<[u32; 3]>,
    pub bounds: Aabb,
}

impl TerrainMesh {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center_and_size() {
        let bounds = Aabb::from_points([
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, 4.0, -2.0),
            Vec3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, -2.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 4.0, 2.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(bounds.size(), Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_aabb_of_empty_set_is_none() {
        assert_eq!(Aabb::from_points(std::iter::empty()), None);
    }
}
