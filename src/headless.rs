use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use log::{debug, trace};

use crate::assets::{AssetLibrary, ShaderHandle};
use crate::frame::FrameInfo;
use crate::mesh::Winding;
use crate::scene::{ObjectId, Scene, SceneObject};
use crate::traits::Viewer;
use crate::types::{EffectState, ObjectUniform};

/// Geometry the viewer keeps per uploaded object
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMesh {
    pub name: String,
    pub shader: ShaderHandle,
    /// Front-face convention the rasterizer must cull with
    pub winding: Winding,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
    pub index_count: usize,
}

/// In-process viewer: no window, no device, just bookkeeping
///
/// Uploads pack the mesh into its GPU byte layout, draws read every
/// object's uniform block. Used by the binary and by tests.
#[derive(Debug, Clone)]
pub struct HeadlessViewer {
    resolution: (u32, u32),
    shader_names: Vec<String>,
    texture_count: usize,
    uploads: HashMap<ObjectId, UploadedMesh>,
    frames_drawn: u64,
    triangles_drawn: u64,
    uniform_bytes: u64,
    last_uniforms: Vec<ObjectUniform>,
    last_effect: Option<EffectState>,
}

impl HeadlessViewer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: (width, height),
            shader_names: Vec::new(),
            texture_count: 0,
            uploads: HashMap::new(),
            frames_drawn: 0,
            triangles_drawn: 0,
            uniform_bytes: 0,
            last_uniforms: Vec::new(),
            last_effect: None,
        }
    }

    pub fn uploaded(&self, id: ObjectId) -> Option<&UploadedMesh> {
        self.uploads.get(&id)
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.len()
    }

    pub fn uploaded_bytes(&self) -> usize {
        self.uploads
            .values()
            .map(|u| u.vertex_bytes + u.index_bytes)
            .sum()
    }

    pub fn shader_names(&self) -> &[String] {
        &self.shader_names
    }

    pub fn texture_count(&self) -> usize {
        self.texture_count
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn triangles_drawn(&self) -> u64 {
        self.triangles_drawn
    }

    /// Total uniform bytes written across all frames
    pub fn uniform_bytes(&self) -> u64 {
        self.uniform_bytes
    }

    /// Uniform blocks read during the most recent draw, in object order
    pub fn last_uniforms(&self) -> &[ObjectUniform] {
        &self.last_uniforms
    }

    pub fn last_effect(&self) -> Option<EffectState> {
        self.last_effect
    }
}

impl Viewer for HeadlessViewer {
    fn prepare_assets(&mut self, assets: &AssetLibrary) -> Result<()> {
        self.shader_names = assets
            .shaders
            .iter()
            .map(|(_, program)| program.name.clone())
            .collect();
        self.texture_count = assets.textures.len();
        debug!(
            "headless viewer: {} shaders, {} textures",
            self.shader_names.len(),
            self.texture_count
        );
        Ok(())
    }

    fn upload(&mut self, id: ObjectId, object: &SceneObject) -> Result<()> {
        let shader = object.material().shader;
        if shader.index() >= self.shader_names.len() {
            bail!("object `{}` uses unprepared shader {:?}", object.name(), shader);
        }

        let mesh = object.mesh().mesh();
        let vertices = mesh.gpu_vertices();
        let indices = mesh.index_buffer();
        let uploaded = UploadedMesh {
            name: object.name().to_string(),
            shader,
            winding: mesh.winding(),
            vertex_bytes: bytemuck::cast_slice::<_, u8>(&vertices).len(),
            index_bytes: bytemuck::cast_slice::<_, u8>(&indices).len(),
            index_count: indices.len(),
        };
        trace!("upload {:?}: {:?}", id, uploaded);
        self.uploads.insert(id, uploaded);
        Ok(())
    }

    fn draw(&mut self, scene: &Scene, frame: &FrameInfo) -> Result<()> {
        self.last_uniforms.clear();
        let mut triangles = 0u64;

        for (id, object) in scene.objects() {
            let uploaded = self
                .uploads
                .get(&id)
                .with_context(|| format!("object `{}` drawn before upload", object.name()))?;
            let uniform = object.uniform();
            self.uniform_bytes += bytemuck::bytes_of(&uniform).len() as u64;
            self.last_uniforms.push(uniform);
            triangles += (uploaded.index_count / 3) as u64;
        }

        self.last_effect = scene.background_effect().map(|effect| effect.state());
        self.frames_drawn += 1;
        self.triangles_drawn += triangles;
        trace!("frame {} at {:.3}s: {} triangles", frame.number, frame.time, triangles);
        Ok(())
    }

    fn resolution(&self) -> (u32, u32) {
        self.resolution
    }
}
