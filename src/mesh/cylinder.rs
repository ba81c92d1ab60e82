use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use log::debug;

use super::{
    grid_vertex_count, require_finite_vec3, require_positive, require_segments, Mesh, PlacedMesh,
    Winding,
};
use crate::error::GeometryError;

/// Open tube (no caps) standing on y = 0, translated to `base`
///
/// Vertices alternate bottom/top per column: even indices lie on y = 0,
/// odd indices on y = height. The seam column is duplicated at u = 1.
pub fn create_cylinder(
    radius: f32,
    height: f32,
    slices: u32,
    base: Vec3,
) -> Result<PlacedMesh, GeometryError> {
    let radius = require_positive("radius", radius)?;
    let height = require_positive("height", height)?;
    let slices = require_segments("slices", slices, 3)?;
    require_finite_vec3("base", base)?;
    let vertex_count = grid_vertex_count(1, slices)? as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for slice in 0..=slices {
        let u = slice as f32 / slices as f32;
        let (sin_theta, cos_theta) = (u * TAU).sin_cos();
        let rim = Vec3::new(radius * cos_theta, 0.0, radius * sin_theta);

        positions.push(rim);
        uvs.push(Vec2::new(u, 0.0));
        positions.push(rim + Vec3::Y * height);
        uvs.push(Vec2::new(u, 1.0));
    }

    let triangles = (0..slices)
        .flat_map(|slice| {
            let i0 = 2 * slice;
            let (i1, i2, i3) = (i0 + 1, i0 + 2, i0 + 3);
            [[i0, i2, i1], [i1, i2, i3]]
        })
        .collect();

    let mesh = Mesh::new(positions, triangles, uvs, Winding::Clockwise)?;
    debug!(
        "cylinder r={} h={} slices={}: {} vertices, {} triangles",
        radius,
        height,
        slices,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    PlacedMesh::new(mesh, base)
}
