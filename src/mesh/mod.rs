//! Procedural mesh generation
//!
//! Every generator is a pure function of its numeric inputs. Invalid
//! parameters are rejected with a [`GeometryError`] before any vertex is
//! produced, so a [`Mesh`] that exists is always well formed.

mod building;
mod cylinder;
mod ground;
mod sphere;

pub use building::create_building;
pub use cylinder::create_cylinder;
pub use ground::create_ground_plane;
pub use sphere::create_sphere;

use glam::{Mat4, Vec2, Vec3};

use crate::error::GeometryError;
use crate::math::{self, AABB};
use crate::types::GpuVertex;

/// Front-face convention of a mesh, seen from its visible side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Vertex positions, triangle indices and per-vertex UVs of one solid
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    uvs: Vec<Vec2>,
    winding: Winding,
}

impl Mesh {
    /// Build a mesh, rejecting empty lists, mismatched UVs, non-finite
    /// positions and indices outside the vertex list
    pub fn new(
        positions: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
        uvs: Vec<Vec2>,
        winding: Winding,
    ) -> Result<Self, GeometryError> {
        if positions.is_empty() {
            return Err(GeometryError::Empty("vertices"));
        }
        if triangles.is_empty() {
            return Err(GeometryError::Empty("triangles"));
        }
        if uvs.len() != positions.len() {
            return Err(GeometryError::UvCountMismatch {
                vertices: positions.len(),
                uvs: uvs.len(),
            });
        }
        if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFiniteVertex(i));
        }

        let vertex_count = positions.len();
        for (t, triangle) in triangles.iter().enumerate() {
            if let Some(&index) = triangle.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(GeometryError::IndexOutOfRange {
                    triangle: t,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            positions,
            triangles,
            uvs,
            winding,
        })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corner positions of triangle `t`
    pub fn triangle_positions(&self, t: usize) -> [Vec3; 3] {
        self.triangles[t].map(|i| self.positions[i as usize])
    }

    /// Right-handed normal `(b - a) x (c - a)`, not normalized
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let [a, b, c] = self.triangle_positions(t);
        (b - a).cross(c - a)
    }

    /// Face normal pointing toward the front side under this mesh's winding
    pub fn outward_normal(&self, t: usize) -> Vec3 {
        match self.winding {
            Winding::CounterClockwise => self.face_normal(t),
            Winding::Clockwise => -self.face_normal(t),
        }
    }

    pub fn triangle_area(&self, t: usize) -> f32 {
        self.face_normal(t).length() * 0.5
    }

    pub fn surface_area(&self) -> f32 {
        (0..self.triangle_count()).map(|t| self.triangle_area(t)).sum()
    }

    /// Mean of all vertex positions, pole and seam duplicates included
    pub fn centroid(&self) -> Vec3 {
        self.positions.iter().copied().sum::<Vec3>() / self.positions.len() as f32
    }

    pub fn bounds(&self) -> AABB {
        // Construction guarantees at least one vertex
        AABB::from_points(self.positions.iter().copied())
            .unwrap_or_else(|| AABB::new(Vec3::ZERO, Vec3::ZERO))
    }

    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(&p, &uv)| GpuVertex::new(p, uv))
            .collect()
    }

    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// A mesh together with the translation that places it in world space
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMesh {
    mesh: Mesh,
    transform: Mat4,
}

impl PlacedMesh {
    pub fn new(mesh: Mesh, translation: Vec3) -> Result<Self, GeometryError> {
        require_finite_vec3("translation", translation)?;
        Ok(Self {
            mesh,
            transform: math::translation(translation),
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub fn translation(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.mesh
            .positions()
            .iter()
            .map(move |&p| self.transform.transform_point3(p))
    }

    pub fn world_bounds(&self) -> AABB {
        self.mesh.bounds().translated(self.translation())
    }
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { name, value })
    }
}

pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { name, value })
    }
}

pub(crate) fn require_finite_vec3(name: &'static str, value: Vec3) -> Result<Vec3, GeometryError> {
    for component in value.to_array() {
        require_finite(name, component)?;
    }
    Ok(value)
}

pub(crate) fn require_segments(name: &'static str, value: u32, min: u32) -> Result<u32, GeometryError> {
    if value >= min {
        Ok(value)
    } else {
        Err(GeometryError::TooFewSegments { name, value, min })
    }
}

/// Vertex count of a `(rows + 1) x (columns + 1)` grid, if it fits in u32
pub(crate) fn grid_vertex_count(rows: u32, columns: u32) -> Result<u32, GeometryError> {
    rows.checked_add(1)
        .zip(columns.checked_add(1))
        .and_then(|(r, c)| r.checked_mul(c))
        .ok_or(GeometryError::TooManyVertices)
}
