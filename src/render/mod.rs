//! Software-projected scene rendering onto the egui canvas.
//!
//! Visible layers are drawn in registration order. Terrain triangles and
//! markers are transformed through the camera, depth-sorted back to front,
//! and painted with the egui tessellator.

use crate::mesh::TerrainMesh;
use crate::scene::{Marker, SceneLayerRegistry, SceneObject};
use crate::viewport::Camera;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use glam::{Mat4, Vec3};

/// Scene background, matching the viewer's dark chrome.
const BACKGROUND: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Unshaded terrain base color.
const TERRAIN_BASE: Color32 = Color32::from_rgb(150, 150, 150);

/// Directional light direction (normalized (1, 1, 1)).
const LIGHT_DIR: Vec3 = Vec3::new(0.577_350_3, 0.577_350_3, 0.577_350_3);
const AMBIENT_INTENSITY: f32 = 0.25;
const DIRECTIONAL_INTENSITY: f32 = 0.8;

/// A depth-keyed primitive awaiting painting.
enum Primitive {
    Triangle {
        points: [Pos2; 3],
        color: Color32,
    },
    Disc {
        center: Pos2,
        radius: f32,
        color: Color32,
        label: String,
    },
}

/// Renders all visible layers to the canvas.
pub fn render_scene(painter: &Painter, rect: Rect, registry: &SceneLayerRegistry, camera: &Camera) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let view_proj = camera.view_projection();
    let mut primitives: Vec<(f32, Primitive)> = Vec::new();

    for layer in registry.iter() {
        if !layer.is_visible() {
            continue;
        }
        for object in layer.objects() {
            match object {
                SceneObject::Terrain(mesh) => {
                    collect_terrain(&mut primitives, mesh, &view_proj, camera, rect);
                }
                SceneObject::Marker(marker) => {
                    collect_marker(&mut primitives, marker, &view_proj, camera, rect);
                }
            }
        }
    }

    // Painter's algorithm: farthest primitives first.
    primitives.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    for (_, primitive) in primitives {
        match primitive {
            Primitive::Triangle { points, color } => {
                painter.add(Shape::convex_polygon(
                    points.to_vec(),
                    color,
                    Stroke::NONE,
                ));
            }
            Primitive::Disc {
                center,
                radius,
                color,
                label,
            } => {
                painter.circle_filled(center, radius, color);
                if !label.is_empty() {
                    painter.text(
                        Pos2::new(center.x + radius + 3.0, center.y - radius - 3.0),
                        Align2::LEFT_BOTTOM,
                        label,
                        FontId::proportional(10.0),
                        Color32::from_rgb(230, 230, 230),
                    );
                }
            }
        }
    }
}

/// Projects a world point into the canvas rect. Returns the screen position
/// and the perspective depth, or `None` for points behind the camera.
pub fn project_to_screen(world: Vec3, view_proj: &Mat4, rect: Rect) -> Option<(Pos2, f32)> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    let x = rect.left() + (ndc.x * 0.5 + 0.5) * rect.width();
    let y = rect.top() + (0.5 - ndc.y * 0.5) * rect.height();

    Some((Pos2::new(x, y), clip.w))
}

fn collect_terrain(
    primitives: &mut Vec<(f32, Primitive)>,
    mesh: &TerrainMesh,
    view_proj: &Mat4,
    camera: &Camera,
    rect: Rect,
) {
    for triangle in &mesh.triangles {
        let a = mesh.positions[triangle[0] as usize];
        let b = mesh.positions[triangle[1] as usize];
        let c = mesh.positions[triangle[2] as usize];

        let (Some((pa, da)), Some((pb, db)), Some((pc, dc))) = (
            project_to_screen(a, view_proj, rect),
            project_to_screen(b, view_proj, rect),
            project_to_screen(c, view_proj, rect),
        ) else {
            continue;
        };

        if offscreen(&[pa, pb, pc], rect) {
            continue;
        }

        let color = shade_triangle(a, b, c, camera.position);
        let depth = (da + db + dc) / 3.0;
        primitives.push((
            depth,
            Primitive::Triangle {
                points: [pa, pb, pc],
                color,
            },
        ));
    }
}

fn collect_marker(
    primitives: &mut Vec<(f32, Primitive)>,
    marker: &Marker,
    view_proj: &Mat4,
    camera: &Camera,
    rect: Rect,
) {
    let Some((center, depth)) = project_to_screen(marker.position, view_proj, rect) else {
        return;
    };
    if !rect.expand(50.0).contains(center) {
        return;
    }

    // World radius to pixels at this depth.
    let pixels_per_unit = rect.height() / (2.0 * (camera.fov_y_rad / 2.0).tan() * depth);
    let radius = (marker.radius * pixels_per_unit).max(1.5);

    primitives.push((
        depth,
        Primitive::Disc {
            center,
            radius,
            color: marker.color,
            label: marker.name.clone(),
        },
    ));
}

/// Two-sided ambient + directional shading of a face.
fn shade_triangle(a: Vec3, b: Vec3, c: Vec3, eye: Vec3) -> Color32 {
    let mut normal = (b - a).cross(c - a).normalize_or_zero();
    // Flip toward the viewer so winding order does not matter.
    if normal.dot(eye - a) < 0.0 {
        normal = -normal;
    }

    let diffuse = normal.dot(LIGHT_DIR).max(0.0) * DIRECTIONAL_INTENSITY;
    let intensity = (AMBIENT_INTENSITY + diffuse).min(1.0);

    let scale = |channel: u8| (channel as f32 * intensity) as u8;
    Color32::from_rgb(
        scale(TERRAIN_BASE.r()),
        scale(TERRAIN_BASE.g()),
        scale(TERRAIN_BASE.b()),
    )
}

fn offscreen(points: &[Pos2; 3], rect: Rect) -> bool {
    points.iter().all(|p| p.x < rect.left())
        || points.iter().all(|p| p.x > rect.right())
        || points.iter().all(|p| p.y < rect.top())
        || points.iter().all(|p| p.y > rect.bottom())
}
