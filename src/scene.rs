use log::debug;

use crate::background::{BackgroundEffect, GradientBackground, Skybox};
use crate::material::{Material, RenderMode};
use crate::mesh::PlacedMesh;
use crate::types::ObjectUniform;

/// Index of an object in its scene; stable for the scene's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One renderable mesh with its fixed material and per-frame time uniform
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    mesh: PlacedMesh,
    material: Material,
    render_mode: RenderMode,
    time: f32,
}

impl SceneObject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> &PlacedMesh {
        &self.mesh
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn uniform(&self) -> ObjectUniform {
        let m = &self.material;
        ObjectUniform::new(self.mesh.transform(), m.ka, m.kd, m.ks, m.shininess, self.time)
    }
}

/// Owns every mesh of the running demo
///
/// Objects are added once while populating and never removed; the only
/// state that changes afterwards is time.
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    background: Option<GradientBackground>,
    effect: Option<Box<dyn BackgroundEffect>>,
    skybox: Option<Skybox>,
    effect_frame: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, mesh: PlacedMesh, material: Material) -> ObjectId {
        self.add_with_mode(name, mesh, material, RenderMode::default())
    }

    pub fn add_with_mode(
        &mut self,
        name: impl Into<String>,
        mesh: PlacedMesh,
        material: Material,
        render_mode: RenderMode,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len());
        let object = SceneObject {
            name: name.into(),
            mesh,
            material,
            render_mode,
            time: 0.0,
        };
        debug!(
            "object {} `{}`: {} vertices, {} triangles",
            id.0,
            object.name,
            object.mesh.mesh().vertex_count(),
            object.mesh.mesh().triangle_count()
        );
        self.objects.push(object);
        id
    }

    pub fn set_background(&mut self, background: GradientBackground) {
        self.background = Some(background);
    }

    pub fn set_background_effect(&mut self, effect: Box<dyn BackgroundEffect>) {
        self.effect = Some(effect);
    }

    pub fn set_skybox(&mut self, skybox: Skybox) {
        self.skybox = Some(skybox);
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn objects(&self) -> impl ExactSizeIterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn background(&self) -> Option<&GradientBackground> {
        self.background.as_ref()
    }

    pub fn background_effect(&self) -> Option<&dyn BackgroundEffect> {
        self.effect.as_deref()
    }

    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    pub fn total_triangles(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.mesh().triangle_count()).sum()
    }

    /// Forward elapsed seconds to every object and to the optional effects
    ///
    /// Constant work per object. The effect frame counter only advances
    /// while an effect is attached.
    pub fn broadcast_time(&mut self, time: f32, resolution: (u32, u32)) {
        for object in &mut self.objects {
            object.time = time;
        }

        if let Some(effect) = self.effect.as_mut() {
            effect.set_resolution(resolution.0 as f32, resolution.1 as f32);
            effect.set_time(time);
            effect.set_frame(self.effect_frame);
            self.effect_frame = self.effect_frame.wrapping_add(1);
        }

        if let Some(skybox) = self.skybox.as_mut() {
            skybox.set_time(time);
        }
    }
}
