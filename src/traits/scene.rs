use anyhow::Result;

use crate::assets::AssetLibrary;
use crate::frame::FrameInfo;
use crate::scene::Scene;

/// Scene construction and per-frame update contract, invoked by the run loop
pub trait SceneProvider {
    /// Register the shaders and textures this scene refers to by name
    fn initialize(&mut self, assets: &mut AssetLibrary) -> Result<()>;

    /// Generate every mesh and bind its material
    fn populate(&mut self, assets: &AssetLibrary) -> Result<Scene>;

    /// Called once per rendered frame before drawing
    fn update_time(&mut self, scene: &mut Scene, frame: &FrameInfo, resolution: (u32, u32)) {
        scene.broadcast_time(frame.time, resolution);
    }

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
