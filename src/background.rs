use glam::Vec4;

use crate::assets::ShaderHandle;
use crate::types::EffectState;

/// Static vertical color gradient behind the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBackground {
    pub bottom: Vec4,
    pub top: Vec4,
}

impl GradientBackground {
    pub fn new(bottom: Vec4, top: Vec4) -> Self {
        Self { bottom, top }
    }

    /// Linear blend at `t` in [0, 1], 0 = bottom
    pub fn color_at(&self, t: f32) -> Vec4 {
        self.bottom.lerp(self.top, t.clamp(0.0, 1.0))
    }
}

impl Default for GradientBackground {
    fn default() -> Self {
        Self::new(
            Vec4::new(0.01, 0.01, 0.05, 1.0),
            Vec4::new(0.05, 0.05, 0.15, 1.0),
        )
    }
}

/// Animated full-screen effect driven once per frame
pub trait BackgroundEffect {
    fn set_resolution(&mut self, width: f32, height: f32);

    fn set_time(&mut self, time: f32);

    fn set_frame(&mut self, frame: u32);

    /// Current uniform values
    fn state(&self) -> EffectState;
}

/// Background effect rendered by a named fragment shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderEffect {
    shader: ShaderHandle,
    state: EffectState,
}

impl ShaderEffect {
    pub fn new(shader: ShaderHandle) -> Self {
        Self {
            shader,
            state: EffectState::default(),
        }
    }

    pub fn shader(&self) -> ShaderHandle {
        self.shader
    }
}

impl BackgroundEffect for ShaderEffect {
    fn set_resolution(&mut self, width: f32, height: f32) {
        self.state.resolution = [width, height];
    }

    fn set_time(&mut self, time: f32) {
        self.state.time = time;
    }

    fn set_frame(&mut self, frame: u32) {
        self.state.frame = frame;
    }

    fn state(&self) -> EffectState {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skybox {
    shader: ShaderHandle,
    time: f32,
}

impl Skybox {
    pub fn new(shader: ShaderHandle) -> Self {
        Self { shader, time: 0.0 }
    }

    pub fn shader(&self) -> ShaderHandle {
        self.shader
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}
