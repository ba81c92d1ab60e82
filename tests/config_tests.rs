use skyline_scene::config::SceneConfig;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(
            r#"{
                "ground": { "width": 20.0 },
                "ball": null,
                "effect_shader": "ball"
            }"#,
        )
        .unwrap();

        assert_eq!(config.ground.width, 20.0);
        assert_eq!(config.ground.length, 60.0);
        assert!(config.ball.is_none());
        assert!(config.pole.is_some());
        assert_eq!(config.buildings.len(), 6);
        assert_eq!(config.effect_shader.as_deref(), Some("ball"));
    }

    #[test]
    fn test_buildings_replace_default_rows() {
        let config = SceneConfig::from_json(
            r#"{ "buildings": [ { "name": "tower", "height": 30.0, "position": [0.0, 0.0, -20.0] } ] }"#,
        )
        .unwrap();

        assert_eq!(config.buildings.len(), 1);
        let tower = &config.buildings[0];
        assert_eq!(tower.name, "tower");
        assert_eq!(tower.height, 30.0);
        assert_eq!(tower.width, 2.0);
        assert_eq!(tower.material.shader, "building");
    }

    #[test]
    fn test_default_config_survives_json() {
        let config = SceneConfig::default();

        let text = config.to_json_pretty().unwrap();
        assert_eq!(SceneConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SceneConfig::from_json("{ \"ground\": 3 }").is_err());
        assert!(SceneConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = SceneConfig::load("does/not/exist.json").err().unwrap();

        assert!(format!("{err:#}").contains("exist.json"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("skyline_scene_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "models": [ { "path": "city.glb" } ] }"#).unwrap();

        let config = SceneConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.models.len(), 1);
        assert_eq!(config.models[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(config.models[0].material.shader, "basic");
    }
}
