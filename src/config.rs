//! JSON scene description
//!
//! Every struct defaults field by field, so a file only needs to spell
//! out what differs from the built-in city layout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::assets::AssetLibrary;
use crate::background::GradientBackground;
use crate::material::Material;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shaders: Vec<ShaderConfig>,
    pub textures: Vec<TextureConfig>,
    pub background: Option<BackgroundConfig>,
    /// Shader name of an animated full-screen effect
    pub effect_shader: Option<String>,
    pub skybox_shader: Option<String>,
    pub ground: GroundConfig,
    pub buildings: Vec<BuildingConfig>,
    pub pole: Option<PoleConfig>,
    pub ball: Option<BallConfig>,
    pub models: Vec<ModelConfig>,
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse scene file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shaders: vec![
                ShaderConfig::from_stem("basic"),
                ShaderConfig::from_stem("building"),
                ShaderConfig::from_stem("ball"),
            ],
            textures: vec![TextureConfig {
                name: "star_color".into(),
                path: "tex/star.png".into(),
            }],
            background: Some(BackgroundConfig::default()),
            effect_shader: None,
            skybox_shader: None,
            ground: GroundConfig::default(),
            buildings: default_buildings(),
            pole: Some(PoleConfig::default()),
            ball: Some(BallConfig::default()),
            models: Vec::new(),
        }
    }
}

/// Left/right pairs, front to back, each pair taller and narrower
fn default_buildings() -> Vec<BuildingConfig> {
    let building = |name: &str, size: [f32; 3], position: [f32; 3], kd: [f32; 3]| BuildingConfig {
        name: name.into(),
        width: size[0],
        depth: size[1],
        height: size[2],
        position,
        material: MaterialConfig {
            kd,
            ..MaterialConfig::building()
        },
    };

    vec![
        building("left front", [2.0, 3.0, 8.0], [-4.0, -3.0, 0.0], [0.3, 0.35, 0.35]),
        building("right front", [2.0, 3.0, 8.5], [4.0, -3.0, 0.0], [0.3, 0.3, 0.35]),
        building("left mid", [1.5, 2.5, 9.5], [-3.5, -2.0, -5.0], [0.25, 0.25, 0.3]),
        building("right mid", [1.5, 2.5, 10.0], [3.5, -2.0, -5.0], [0.25, 0.3, 0.3]),
        building("left back", [1.0, 2.0, 11.0], [-3.0, -1.0, -10.0], [0.2, 0.2, 0.25]),
        building("right back", [1.0, 2.0, 12.0], [3.0, -1.0, -10.0], [0.2, 0.25, 0.25]),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderConfig {
    pub name: String,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderConfig {
    /// `shaders/<stem>.vert` + `shaders/<stem>.frag`, named `<stem>`
    pub fn from_stem(stem: &str) -> Self {
        Self {
            name: stem.into(),
            vertex: PathBuf::from(format!("shaders/{stem}.vert")),
            fragment: PathBuf::from(format!("shaders/{stem}.frag")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureConfig {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub bottom: [f32; 4],
    pub top: [f32; 4],
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let gradient = GradientBackground::default();
        Self {
            bottom: gradient.bottom.to_array(),
            top: gradient.top.to_array(),
        }
    }
}

impl BackgroundConfig {
    pub fn gradient(&self) -> GradientBackground {
        GradientBackground::new(Vec4::from_array(self.bottom), Vec4::from_array(self.top))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub ka: [f32; 3],
    pub kd: [f32; 3],
    pub ks: [f32; 3],
    pub shininess: f32,
    pub shader: String,
    pub texture: Option<String>,
}

impl MaterialConfig {
    pub fn building() -> Self {
        Self {
            ka: [0.1, 0.1, 0.1],
            kd: [0.3, 0.3, 0.35],
            ks: [0.2, 0.2, 0.2],
            shininess: 32.0,
            shader: "building".into(),
            texture: None,
        }
    }

    /// Look up the shader and texture names
    pub fn resolve(&self, assets: &AssetLibrary) -> Result<Material> {
        let shader = assets.shaders.get(&self.shader)?;
        let material = Material::new(
            Vec3::from_array(self.ka),
            Vec3::from_array(self.kd),
            Vec3::from_array(self.ks),
            self.shininess,
            shader,
        )?;
        match &self.texture {
            Some(name) => Ok(material.with_texture(assets.textures.get(name)?)),
            None => Ok(material),
        }
    }
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ka: [0.1, 0.1, 0.1],
            kd: [0.3, 0.3, 0.3],
            ks: [0.2, 0.2, 0.2],
            shininess: 32.0,
            shader: "basic".into(),
            texture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub width: f32,
    pub length: f32,
    /// Rise from the near edge to the far edge
    pub height: f32,
    pub position: [f32; 3],
    pub material: MaterialConfig,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 15.0,
            length: 60.0,
            height: 4.0,
            position: [0.0, -5.0, 10.0],
            material: MaterialConfig {
                ka: [0.05, 0.05, 0.05],
                kd: [0.25, 0.25, 0.25],
                ks: [0.05, 0.05, 0.05],
                shininess: 8.0,
                shader: "basic".into(),
                texture: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    pub name: String,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub position: [f32; 3],
    pub material: MaterialConfig,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            name: "building".into(),
            width: 2.0,
            depth: 3.0,
            height: 8.0,
            position: [0.0, 0.0, 0.0],
            material: MaterialConfig::building(),
        }
    }
}

/// Cylinder standing on the ground between the building rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoleConfig {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
    pub base: [f32; 3],
    pub material: MaterialConfig,
}

impl Default for PoleConfig {
    fn default() -> Self {
        Self {
            radius: 0.08,
            height: 10.0,
            slices: 16,
            base: [0.0, -3.4, -15.0],
            material: MaterialConfig {
                ka: [0.1, 0.1, 0.1],
                kd: [0.4, 0.4, 0.42],
                ks: [0.6, 0.6, 0.6],
                shininess: 64.0,
                shader: "basic".into(),
                texture: None,
            },
        }
    }
}

/// Sphere sitting on top of the pole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    pub center: [f32; 3],
    pub material: MaterialConfig,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.7,
            slices: 32,
            stacks: 16,
            center: [0.0, 6.6, -15.0],
            material: MaterialConfig {
                ka: [0.2, 0.2, 0.25],
                kd: [0.8, 0.8, 0.9],
                ks: [0.9, 0.9, 0.9],
                shininess: 96.0,
                shader: "ball".into(),
                texture: Some("star_color".into()),
            },
        }
    }
}

/// Extra geometry imported from a glTF file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub material: MaterialConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_city() {
        let config = SceneConfig::default();

        assert_eq!(config.buildings.len(), 6);
        assert_eq!(config.buildings[0].position, [-4.0, -3.0, 0.0]);
        assert_eq!(config.buildings[5].height, 12.0);
        assert_eq!(config.ground.position, [0.0, -5.0, 10.0]);
        assert!(config.buildings.iter().all(|b| b.material.shader == "building"));
    }

    #[test]
    fn pole_top_carries_ball() {
        let config = SceneConfig::default();
        let pole = config.pole.unwrap();
        let ball = config.ball.unwrap();

        assert!((pole.base[1] + pole.height - ball.center[1]).abs() < 1e-5);
        assert_eq!([pole.base[0], pole.base[2]], [ball.center[0], ball.center[2]]);
    }
}
