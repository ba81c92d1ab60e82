use anyhow::{ensure, Context, Result};
use glam::{Mat4, Vec2, Vec3};
use log::{debug, info, warn};
use std::path::Path;

use crate::mesh::{Mesh, Winding};

/// Loads every triangle primitive of a glTF file as a separate mesh
///
/// Node transforms are baked into the positions. Primitives without UVs
/// get (0, 0) per vertex; primitives without indices are read as plain
/// triangle lists.
pub fn load_gltf_meshes(path: impl AsRef<Path>) -> Result<Vec<Mesh>> {
    let path = path.as_ref();
    let (gltf, buffers, _images) =
        gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    debug!(
        "glTF {:?}: {} scenes, {} nodes, {} meshes",
        path,
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut meshes = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut meshes)?;
        }
    }

    if meshes.is_empty() {
        warn!("No triangle geometry found in {:?}", path);
    }
    info!("Loaded {} meshes from {:?}", meshes.len(), path);
    Ok(meshes)
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    meshes: &mut Vec<Mesh>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, meshes)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, meshes)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    meshes: &mut Vec<Mesh>,
) -> Result<()> {
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            debug!("Skipping {:?} primitive in mesh {:?}", primitive.mode(), mesh.name());
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        let uvs: Vec<Vec2> = match reader.read_tex_coords(0) {
            Some(uv_reader) => uv_reader.into_f32().map(Vec2::from_array).collect(),
            None => vec![Vec2::ZERO; positions.len()],
        };

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        ensure!(
            indices.len() % 3 == 0,
            "Mesh {:?} has {} indices, not a whole number of triangles",
            mesh.name(),
            indices.len()
        );
        let triangles: Vec<[u32; 3]> = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        // glTF front faces are counter-clockwise
        let geometry = Mesh::new(positions, triangles, uvs, Winding::CounterClockwise)
            .with_context(|| format!("Invalid primitive in mesh {:?}", mesh.name()))?;
        meshes.push(geometry);
    }

    Ok(())
}
