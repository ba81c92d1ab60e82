use glam::{Vec2, Vec3};

use super::{require_finite, require_positive, Mesh, Winding};
use crate::error::GeometryError;

/// Texture repeats along the slant
const SLANT_TILING: f32 = 5.0;

/// Single tilted quad rising `height` over `length` toward -z
///
/// The near edge lies on z = 0 at y = 0, the far edge on z = -length at
/// y = height. The caller places the result.
pub fn create_ground_plane(width: f32, length: f32, height: f32) -> Result<Mesh, GeometryError> {
    let half_w = require_positive("width", width)? * 0.5;
    let length = require_positive("length", length)?;
    let height = require_finite("height", height)?;

    let positions = vec![
        Vec3::new(-half_w, 0.0, 0.0),
        Vec3::new(half_w, 0.0, 0.0),
        Vec3::new(-half_w, height, -length),
        Vec3::new(half_w, height, -length),
    ];
    let uvs = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, SLANT_TILING),
        Vec2::new(1.0, SLANT_TILING),
    ];
    let triangles = vec![[0, 1, 2], [1, 3, 2]];

    Mesh::new(positions, triangles, uvs, Winding::CounterClockwise)
}
