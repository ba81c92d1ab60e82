use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use log::debug;

use super::{
    grid_vertex_count, require_finite_vec3, require_positive, require_segments, Mesh, PlacedMesh,
    Winding,
};
use crate::error::GeometryError;

/// UV sphere on a latitude/longitude grid, translated to `center`
///
/// Rows run from the +y pole (stack 0) to the -y pole (stack `stacks`),
/// each row holding `slices + 1` vertices so the seam column is
/// duplicated. The pole rows are degenerate rings of coincident points.
/// UV per vertex is (slice / slices, stack / stacks).
pub fn create_sphere(
    radius: f32,
    slices: u32,
    stacks: u32,
    center: Vec3,
) -> Result<PlacedMesh, GeometryError> {
    let radius = require_positive("radius", radius)?;
    let slices = require_segments("slices", slices, 3)?;
    let stacks = require_segments("stacks", stacks, 1)?;
    require_finite_vec3("center", center)?;
    let vertex_count = grid_vertex_count(stacks, slices)? as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = (v * PI).sin_cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = (u * TAU).sin_cos();

            positions.push(radius * Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta));
            uvs.push(Vec2::new(u, v));
        }
    }

    let stride = slices + 1;
    let mut triangles = Vec::with_capacity(2 * slices as usize * stacks as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * stride + slice;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            triangles.push([i0, i2, i1]);
            triangles.push([i1, i2, i3]);
        }
    }

    let mesh = Mesh::new(positions, triangles, uvs, Winding::Clockwise)?;
    debug!(
        "sphere r={} {}x{}: {} vertices, {} triangles",
        radius,
        slices,
        stacks,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    PlacedMesh::new(mesh, center)
}
