use glam::{Vec2, Vec3};
use log::debug;

use super::{require_finite_vec3, require_positive, Mesh, PlacedMesh, Winding};
use crate::error::GeometryError;

/// Two triangles per face, sharing the face diagonal
const BOX_TRIANGLES: [[u32; 3]; 12] = [
    // front
    [0, 1, 5],
    [0, 5, 4],
    // right
    [1, 2, 6],
    [1, 6, 5],
    // back
    [2, 3, 7],
    [2, 7, 6],
    // left
    [3, 0, 4],
    [3, 4, 7],
    // top
    [4, 5, 6],
    [4, 6, 7],
    // bottom
    [0, 2, 1],
    [0, 3, 2],
];

/// Axis-aligned box standing on y = 0, centered on the local y axis,
/// translated to `position`
///
/// Vertices 0..4 are the footprint corners, 4..8 the roof corners in the
/// same order. UVs are all (0, 0); buildings are not textured yet.
pub fn create_building(
    width: f32,
    depth: f32,
    height: f32,
    position: Vec3,
) -> Result<PlacedMesh, GeometryError> {
    let half_w = require_positive("width", width)? * 0.5;
    let half_d = require_positive("depth", depth)? * 0.5;
    let height = require_positive("height", height)?;
    require_finite_vec3("position", position)?;

    let footprint = [
        Vec3::new(-half_w, 0.0, -half_d),
        Vec3::new(half_w, 0.0, -half_d),
        Vec3::new(half_w, 0.0, half_d),
        Vec3::new(-half_w, 0.0, half_d),
    ];
    let roof = footprint.map(|corner| corner + Vec3::Y * height);
    let positions: Vec<Vec3> = footprint.into_iter().chain(roof).collect();

    let uvs = vec![Vec2::ZERO; positions.len()];
    let mesh = Mesh::new(positions, BOX_TRIANGLES.to_vec(), uvs, Winding::Clockwise)?;

    debug!(
        "building {}x{}x{} at {:?}: {} vertices, {} triangles",
        width,
        depth,
        height,
        position,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    PlacedMesh::new(mesh, position)
}
