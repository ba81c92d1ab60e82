use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use skyline_scene::mesh::{create_ground_plane, Winding};

#[cfg(test)]
mod ground_tests {
    use super::*;

    #[test]
    fn test_ground_is_one_quad() {
        let ground = create_ground_plane(15.0, 60.0, 4.0).unwrap();

        assert_eq!(ground.vertex_count(), 4);
        assert_eq!(ground.triangles(), &[[0, 1, 2], [1, 3, 2]]);
        assert_eq!(ground.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_ground_slopes_up_toward_far_edge() {
        let ground = create_ground_plane(15.0, 60.0, 4.0).unwrap();
        let p = ground.positions();

        assert_eq!(p[0], Vec3::new(-7.5, 0.0, 0.0));
        assert_eq!(p[1], Vec3::new(7.5, 0.0, 0.0));
        assert_eq!(p[2], Vec3::new(-7.5, 4.0, -60.0));
        assert_eq!(p[3], Vec3::new(7.5, 4.0, -60.0));
    }

    #[test]
    fn test_ground_area_follows_slant() {
        let ground = create_ground_plane(15.0, 60.0, 4.0).unwrap();
        let slant = (60.0f32 * 60.0 + 4.0 * 4.0).sqrt();

        assert_relative_eq!(ground.surface_area(), 15.0 * slant, max_relative = 1e-5);
    }

    #[test]
    fn test_ground_normals_face_up() {
        let ground = create_ground_plane(10.0, 20.0, -2.0).unwrap();

        for t in 0..ground.triangle_count() {
            assert!(ground.outward_normal(t).y > 0.0, "Triangle {} faces down", t);
        }
    }

    #[test]
    fn test_ground_texture_repeats_along_length() {
        let ground = create_ground_plane(15.0, 60.0, 4.0).unwrap();

        assert_eq!(
            ground.uvs(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 5.0),
                Vec2::new(1.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_ground_flat_when_height_is_zero() {
        let ground = create_ground_plane(4.0, 4.0, 0.0).unwrap();

        assert!(ground.positions().iter().all(|p| p.y == 0.0));
        assert_relative_eq!(ground.surface_area(), 16.0);
    }

    #[test]
    fn test_ground_rejects_bad_input() {
        assert!(create_ground_plane(0.0, 60.0, 4.0).is_err());
        assert!(create_ground_plane(15.0, -1.0, 4.0).is_err());
        assert!(create_ground_plane(15.0, 60.0, f32::NAN).is_err());
    }
}
