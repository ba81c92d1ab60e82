use anyhow::{ensure, Context, Result};
use log::info;

use crate::assets::AssetLibrary;
use crate::frame::FrameInfo;
use crate::scene::Scene;
use crate::traits::{FrameSource, SceneProvider, Viewer};

/// Totals reported after a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub objects: usize,
    pub triangles: usize,
    /// Time value broadcast on the last frame
    pub last_time: f32,
}

/// Driver combines a scene provider with the viewer that shows it
pub struct Driver<P: SceneProvider, V: Viewer> {
    provider: P,
    viewer: V,
    assets: AssetLibrary,
    scene: Option<Scene>,
}

impl<P: SceneProvider, V: Viewer> Driver<P, V> {
    pub fn new(provider: P, viewer: V) -> Self {
        Self {
            provider,
            viewer,
            assets: AssetLibrary::new(),
            scene: None,
        }
    }

    /// Register assets, generate the scene and upload every object
    ///
    /// The scene is only kept once every upload succeeded.
    pub fn initialize(&mut self) -> Result<()> {
        let name = self.provider.name().to_string();
        self.provider
            .initialize(&mut self.assets)
            .with_context(|| format!("Failed to initialize scene `{name}`"))?;
        self.viewer.prepare_assets(&self.assets)?;

        let scene = self
            .provider
            .populate(&self.assets)
            .with_context(|| format!("Failed to populate scene `{name}`"))?;
        for (id, object) in scene.objects() {
            self.viewer.upload(id, object)?;
        }

        info!(
            "Scene `{}` ready: {} objects, {} triangles",
            name,
            scene.len(),
            scene.total_triangles()
        );
        self.scene = Some(scene);
        Ok(())
    }

    /// Forward the frame time to the scene, then draw it
    pub fn next_frame(&mut self, frame: &FrameInfo) -> Result<()> {
        let scene = self
            .scene
            .as_mut()
            .context("Driver::next_frame called before initialize")?;
        let resolution = self.viewer.resolution();
        self.provider.update_time(scene, frame, resolution);
        self.viewer.draw(scene, frame)
    }

    /// Drive frames until the source runs dry
    pub fn run<F: FrameSource>(&mut self, mut frames: F) -> Result<RunSummary> {
        ensure!(self.scene.is_some(), "Driver::run called before initialize");

        let mut last_time = 0.0;
        for frame in frames.by_ref() {
            self.next_frame(&frame)
                .with_context(|| format!("Frame {} failed", frame.number))?;
            last_time = frame.time;
        }

        let scene = self.scene.as_ref().context("Driver::run called before initialize")?;
        let summary = RunSummary {
            frames: frames.frame_count(),
            objects: scene.len(),
            triangles: scene.total_triangles(),
            last_time,
        };
        info!(
            "Ran {} frames over {:.2}s ({} objects)",
            summary.frames, summary.last_time, summary.objects
        );
        Ok(summary)
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    /// Access viewer
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Access provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
