use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use skyline_scene::error::GeometryError;
use skyline_scene::mesh::{create_building, Winding};

#[cfg(test)]
mod building_tests {
    use super::*;

    #[test]
    fn test_building_has_eight_corners_and_twelve_triangles() {
        let building = create_building(2.0, 3.0, 8.0, Vec3::ZERO).unwrap();
        let mesh = building.mesh();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.triangles().iter().flatten().all(|&i| i < 8));
        assert_eq!(mesh.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_building_corner_layout() {
        let building = create_building(2.0, 3.0, 8.0, Vec3::ZERO).unwrap();
        let mesh = building.mesh();

        assert_eq!(mesh.positions()[0], Vec3::new(-1.0, 0.0, -1.5));
        assert_eq!(mesh.positions()[2], Vec3::new(1.0, 0.0, 1.5));
        assert_eq!(mesh.positions()[4], Vec3::new(-1.0, 8.0, -1.5));
        assert_eq!(mesh.positions()[6], Vec3::new(1.0, 8.0, 1.5));
        assert_eq!(mesh.triangles()[0], [0, 1, 5]);
        assert_eq!(mesh.triangles()[11], [0, 3, 2]);
    }

    #[test]
    fn test_building_normals_point_away_from_center() {
        let building = create_building(1.5, 2.5, 9.5, Vec3::ZERO).unwrap();
        let mesh = building.mesh();
        let center = mesh.centroid();

        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(t);
            let face_center = (a + b + c) / 3.0;
            let normal = mesh.outward_normal(t);
            assert!(
                normal.dot(face_center - center) > 0.0,
                "Triangle {} faces inward",
                t
            );
        }
    }

    #[test]
    fn test_building_surface_area() {
        let building = create_building(2.0, 3.0, 8.0, Vec3::ZERO).unwrap();

        // 2 * (wd + wh + dh)
        assert_relative_eq!(building.mesh().surface_area(), 2.0 * (6.0 + 16.0 + 24.0), epsilon = 1e-4);
    }

    #[test]
    fn test_building_uvs_are_zero() {
        let building = create_building(2.0, 3.0, 8.0, Vec3::ZERO).unwrap();

        assert!(building.mesh().uvs().iter().all(|&uv| uv == Vec2::ZERO));
    }

    #[test]
    fn test_building_placement_is_translation_only() {
        let position = Vec3::new(-4.0, -3.0, 0.0);
        let building = create_building(2.0, 3.0, 8.0, position).unwrap();

        assert_eq!(building.translation(), position);
        let bounds = building.world_bounds();
        assert_eq!(bounds.min, Vec3::new(-5.0, -3.0, -1.5));
        assert_eq!(bounds.max, Vec3::new(-3.0, 5.0, 1.5));
        // Local geometry is untouched
        assert_eq!(building.mesh().positions()[0], Vec3::new(-1.0, 0.0, -1.5));
    }

    #[test]
    fn test_building_rejects_bad_dimensions() {
        assert!(matches!(
            create_building(0.0, 3.0, 8.0, Vec3::ZERO),
            Err(GeometryError::NonPositive { name: "width", .. })
        ));
        assert!(matches!(
            create_building(2.0, -1.0, 8.0, Vec3::ZERO),
            Err(GeometryError::NonPositive { name: "depth", .. })
        ));
        assert!(create_building(2.0, 3.0, f32::NAN, Vec3::ZERO).is_err());
        assert!(create_building(2.0, 3.0, 8.0, Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }
}
