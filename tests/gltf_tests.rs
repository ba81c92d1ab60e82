use std::path::PathBuf;

use glam::{Vec2, Vec3};
use serde_json::json;
use skyline_scene::config::{MaterialConfig, ModelConfig, SceneConfig};
use skyline_scene::loaders::load_gltf_meshes;
use skyline_scene::mesh::Winding;
use skyline_scene::{CityScene, Driver, HeadlessViewer};

/// Three positions: (0,0,0), (1,0,0), (0,1,0)
const POSITIONS: &str = "AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA";
/// Same positions followed by u16 indices 0, 1, 2, 0
const POSITIONS_AND_FOUR_INDICES: &str = "AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIAAAA=";

/// One-triangle glTF under a node translated by (5, 0, 0), no UVs
fn write_triangle(name: &str, with_indices: bool) -> PathBuf {
    let mut primitive = json!({ "attributes": { "POSITION": 0 } });
    let mut buffer_views = vec![json!({ "buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962 })];
    let mut accessors = vec![json!({
        "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
        "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
    })];
    let (data, byte_length) = if with_indices {
        primitive["indices"] = json!(1);
        buffer_views.push(json!({ "buffer": 0, "byteOffset": 36, "byteLength": 8, "target": 34963 }));
        accessors.push(json!({ "bufferView": 1, "componentType": 5123, "count": 4, "type": "SCALAR" }));
        (POSITIONS_AND_FOUR_INDICES, 44)
    } else {
        (POSITIONS, 36)
    };

    let document = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0, "translation": [5.0, 0.0, 0.0] }],
        "meshes": [{ "name": "sign", "primitives": [primitive] }],
        "buffers": [{
            "byteLength": byte_length,
            "uri": format!("data:application/octet-stream;base64,{data}")
        }],
        "bufferViews": buffer_views,
        "accessors": accessors
    });

    let path = std::env::temp_dir().join(format!("skyline_scene_{}_{name}.gltf", std::process::id()));
    std::fs::write(&path, document.to_string()).unwrap();
    path
}

#[cfg(test)]
mod gltf_tests {
    use super::*;

    #[test]
    fn test_node_translation_is_baked_in() {
        let path = write_triangle("baked", false);
        let meshes = load_gltf_meshes(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(meshes.len(), 1);
        let mesh = &meshes[0];
        assert_eq!(
            mesh.positions(),
            &[Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0), Vec3::new(5.0, 1.0, 0.0)]
        );
        assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
        assert_eq!(mesh.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_missing_uvs_default_to_zero() {
        let path = write_triangle("no_uvs", false);
        let meshes = load_gltf_meshes(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(meshes[0].uvs(), &[Vec2::ZERO; 3]);
    }

    #[test]
    fn test_partial_triangle_is_rejected() {
        let path = write_triangle("four_indices", true);
        let result = load_gltf_meshes(&path);
        std::fs::remove_file(&path).ok();

        let err = result.err().unwrap();
        assert!(format!("{err:#}").contains("4 indices"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_gltf_meshes("does/not/exist.gltf").is_err());
    }

    #[test]
    fn test_city_adds_model_objects() {
        let path = write_triangle("city_model", false);
        let config = SceneConfig {
            models: vec![ModelConfig {
                path: path.clone(),
                position: [0.0, 0.0, -20.0],
                material: MaterialConfig::default(),
            }],
            ..SceneConfig::default()
        };
        let mut driver = Driver::new(CityScene::new(config), HeadlessViewer::new(64, 64));

        let result = driver.initialize();
        std::fs::remove_file(&path).ok();
        result.unwrap();

        let scene = driver.scene().unwrap();
        assert_eq!(scene.len(), 10);
        let (id, model) = scene.objects().last().unwrap();
        assert!(model.name().ends_with("#0"));
        assert_eq!(model.mesh().translation(), Vec3::new(0.0, 0.0, -20.0));
        assert_eq!(model.mesh().world_bounds().min, Vec3::new(5.0, 0.0, -20.0));

        let uploaded = driver.viewer().uploaded(id).unwrap();
        assert_eq!(uploaded.index_count, 3);
        assert_eq!(uploaded.winding, Winding::CounterClockwise);
    }
}
