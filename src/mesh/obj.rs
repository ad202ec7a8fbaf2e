//! Minimal Wavefront OBJ reader for terrain meshes.
//!
//! Reads `v` and `f` records; normals, texture coordinates, groups, and
//! material statements are ignored. Faces with more than three corners are
//! fan-triangulated. Face indices may be 1-based positive or negative
//! (relative to the vertices seen so far), and the `v/vt/vn` corner forms
//! are accepted with only the vertex index used.

use super::{Aabb, TerrainMesh};
use glam::Vec3;
use std::io::{BufRead, BufReader, Read};

pub fn parse_obj<R: Read>(r: R) -> Result<TerrainMesh, String> {
    let mut rd = BufReader::new(r);
    let mut line = String::with_capacity(256);
    let mut positions = Vec::<Vec3>::new();
    let mut triangles = Vec::<[u32; 3]>::new();

    loop {
        line.clear();
        let n = rd
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read OBJ data: {}", e))?;
        if n == 0 {
            break;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                // Malformed vertex records are skipped rather than fatal.
                let x = tokens.next().and_then(|s| s.parse::<f32>().ok());
                let y = tokens.next().and_then(|s| s.parse::<f32>().ok());
                let z = tokens.next().and_then(|s| s.parse::<f32>().ok());
                if let (Some(x), Some(y), Some(z)) = (x, y, z) {
                    positions.push(Vec3::new(x, y, z));
                }
            }
            Some("f") => {
                let mut corners = Vec::with_capacity(4);
                for token in tokens {
                    corners.push(parse_face_index(token, positions.len())?);
                }
                if corners.len() < 3 {
                    continue;
                }
                for i in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            _ => {}
        }
    }

    let bounds = Aabb::from_points(positions.iter().copied())
        .ok_or_else(|| "OBJ contains no vertices".to_string())?;

    Ok(TerrainMesh {
        positions,
        triangles,
        bounds,
    })
}

/// Resolves one face-corner token to a zero-based vertex index.
fn parse_face_index(token: &str, vertex_count: usize) -> Result<u32, String> {
    let vertex_part = token.split('/').next().unwrap_or(token);
    let index: i64 = vertex_part
        .parse()
        .map_err(|_| format!("Bad face index \"{}\"", token))?;

    // Positive indices are 1-based; negative count back from the end.
    let resolved = if index < 0 {
        vertex_count as i64 + index
    } else {
        index - 1
    };

    if resolved < 0 || resolved >= vertex_count as i64 {
        return Err(format!("Face index \"{}\" out of range", token));
    }
    Ok(resolved as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
# flat unit quad
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 0.0 1.0
v 0.0 0.0 1.0
f 1 2 3 4
";

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = parse_obj(QUAD.as_bytes()).unwrap();

        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_bounds_cover_all_vertices() {
        let mesh = parse_obj(QUAD.as_bytes()).unwrap();

        assert_eq!(mesh.bounds.min, Vec3::ZERO);
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(mesh.bounds.center(), Vec3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_slash_forms_and_negative_indices() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vn 0 0 1
f 1/1/1 2/1/1 -1/1/1
";
        let mesh = parse_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let obj = "v 0 0 0\nf 1 2 3\n";
        assert!(parse_obj(obj.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(parse_obj("# nothing here\n".as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_records_are_ignored() {
        let obj = "\
mtllib terrain.mtl
o tile
v 0 0 0
v 1 0 0
v 0 1 0
s off
f 1 2 3
";
        let mesh = parse_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }
}
