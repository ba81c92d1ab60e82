use glam::{Mat4, Vec2, Vec3};

/// Interleaved vertex record handed to the viewer for upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Per-object uniform block: placement, lighting coefficients and time
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub ka: [f32; 3],
    pub shininess: f32,
    pub kd: [f32; 3],
    pub time: f32, // Seconds since scene start
    pub ks: [f32; 3],
    pub _pad: f32,
}

impl ObjectUniform {
    pub fn new(model: Mat4, ka: Vec3, kd: Vec3, ks: Vec3, shininess: f32, time: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            ka: ka.to_array(),
            shininess,
            kd: kd.to_array(),
            time,
            ks: ks.to_array(),
            _pad: 0.0,
        }
    }
}

/// Uniform state of a full-screen background effect
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EffectState {
    pub resolution: [f32; 2],
    pub time: f32,
    pub frame: u32,
}
