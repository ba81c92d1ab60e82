use glam::Vec3;

use crate::assets::{ShaderHandle, TextureHandle};
use crate::error::MaterialError;

/// Phong coefficients plus the shader (and optional texture) that draws them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ka: Vec3,
    pub kd: Vec3,
    pub ks: Vec3,
    pub shininess: f32,
    pub shader: ShaderHandle,
    pub texture: Option<TextureHandle>,
}

impl Material {
    pub fn new(
        ka: Vec3,
        kd: Vec3,
        ks: Vec3,
        shininess: f32,
        shader: ShaderHandle,
    ) -> Result<Self, MaterialError> {
        if !(shininess.is_finite() && shininess >= 0.0) {
            return Err(MaterialError::InvalidShininess(shininess));
        }
        Ok(Self {
            ka,
            kd,
            ks,
            shininess,
            shader,
            texture: None,
        })
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    #[default]
    Fill,
    Wireframe,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShadingMode {
    None,
    Lighting,
    #[default]
    TexAlpha,
}

/// How the viewer rasterizes and shades an object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderMode {
    pub polygon: PolygonMode,
    pub shading: ShadingMode,
}
