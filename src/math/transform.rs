use glam::{Mat4, Vec3};

/// Pure translation matrix; rotation and scale stay identity
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// True if the upper 3x3 block is identity and the bottom row is (0, 0, 0, 1)
pub fn is_pure_translation(matrix: &Mat4) -> bool {
    let linear = Mat4::from_cols(
        matrix.x_axis,
        matrix.y_axis,
        matrix.z_axis,
        glam::Vec4::W,
    );
    linear == Mat4::IDENTITY && matrix.w_axis.w == 1.0
}
