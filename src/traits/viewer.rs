use anyhow::Result;

use crate::assets::AssetLibrary;
use crate::frame::FrameInfo;
use crate::scene::{ObjectId, Scene, SceneObject};

/// Rendering framework seam: owns device resources, never scene state
pub trait Viewer {
    /// Compile/load every registered shader and texture
    fn prepare_assets(&mut self, assets: &AssetLibrary) -> Result<()>;

    /// Take a copy of an object's geometry for drawing
    fn upload(&mut self, id: ObjectId, object: &SceneObject) -> Result<()>;

    /// Draw one frame of `scene`
    fn draw(&mut self, scene: &Scene, frame: &FrameInfo) -> Result<()>;

    /// Drawable size in pixels
    fn resolution(&self) -> (u32, u32);
}
