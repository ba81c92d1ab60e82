use anyhow::{Context, Result};
use glam::Vec3;
use log::info;

use crate::assets::AssetLibrary;
use crate::background::{ShaderEffect, Skybox};
use crate::config::{MaterialConfig, SceneConfig};
use crate::loaders::load_gltf_meshes;
use crate::material::Material;
use crate::mesh::{create_building, create_cylinder, create_ground_plane, create_sphere, PlacedMesh};
use crate::scene::Scene;
use crate::traits::SceneProvider;

/// Night skyline: a slanted street, two rows of buildings and a ball on a pole
pub struct CityScene {
    config: SceneConfig,
}

impl CityScene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl Default for CityScene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

fn resolve_material(config: &MaterialConfig, assets: &AssetLibrary, object: &str) -> Result<Material> {
    config
        .resolve(assets)
        .with_context(|| format!("{object}: invalid material"))
}

impl SceneProvider for CityScene {
    fn initialize(&mut self, assets: &mut AssetLibrary) -> Result<()> {
        for shader in &self.config.shaders {
            assets
                .shaders
                .add(&shader.vertex, &shader.fragment, &shader.name)?;
        }
        for texture in &self.config.textures {
            assets.textures.add(&texture.path, &texture.name)?;
        }
        info!(
            "{}: {} shaders, {} textures registered",
            self.name(),
            assets.shaders.len(),
            assets.textures.len()
        );
        Ok(())
    }

    fn populate(&mut self, assets: &AssetLibrary) -> Result<Scene> {
        let config = &self.config;
        let mut scene = Scene::new();

        if let Some(background) = &config.background {
            scene.set_background(background.gradient());
        }
        if let Some(name) = &config.effect_shader {
            let shader = assets.shaders.get(name).context("background effect")?;
            scene.set_background_effect(Box::new(ShaderEffect::new(shader)));
        }
        if let Some(name) = &config.skybox_shader {
            let shader = assets.shaders.get(name).context("skybox")?;
            scene.set_skybox(Skybox::new(shader));
        }

        let ground = &config.ground;
        let plane = create_ground_plane(ground.width, ground.length, ground.height)
            .context("ground")?;
        scene.add(
            "ground",
            PlacedMesh::new(plane, Vec3::from_array(ground.position)).context("ground")?,
            resolve_material(&ground.material, assets, "ground")?,
        );

        for building in &config.buildings {
            let mesh = create_building(
                building.width,
                building.depth,
                building.height,
                Vec3::from_array(building.position),
            )
            .with_context(|| format!("building `{}`", building.name))?;
            let material = resolve_material(&building.material, assets, &building.name)?;
            scene.add(building.name.clone(), mesh, material);
        }

        if let Some(pole) = &config.pole {
            let mesh = create_cylinder(pole.radius, pole.height, pole.slices, Vec3::from_array(pole.base))
                .context("pole")?;
            scene.add("pole", mesh, resolve_material(&pole.material, assets, "pole")?);
        }

        if let Some(ball) = &config.ball {
            let mesh = create_sphere(ball.radius, ball.slices, ball.stacks, Vec3::from_array(ball.center))
                .context("ball")?;
            scene.add("ball", mesh, resolve_material(&ball.material, assets, "ball")?);
        }

        for model in &config.models {
            let material = resolve_material(&model.material, assets, "model")?;
            for (i, mesh) in load_gltf_meshes(&model.path)?.into_iter().enumerate() {
                let placed = PlacedMesh::new(mesh, Vec3::from_array(model.position))
                    .with_context(|| format!("model {:?}", model.path))?;
                scene.add(format!("{}#{}", model.path.display(), i), placed, material);
            }
        }

        info!(
            "{}: {} objects, {} triangles",
            self.name(),
            scene.len(),
            scene.total_triangles()
        );
        Ok(scene)
    }

    fn name(&self) -> &str {
        "city"
    }
}
