//! Perspective projection
//!
//! Points further away (larger depth) land closer to the origin, so each
//! coordinate is simply divided by its depth plus the camera's depth offset.

/// Divide every coordinate by its depth shifted by `camera_z`.
///
/// The division is unguarded: a zero denominator produces an infinite or NaN
/// coordinate, which rasterization later discards.
pub fn project<const N: usize>(coord: &[f32; N], depth: &[f32; N], camera_z: f32) -> [f32; N] {
    std::array::from_fn(|i| coord[i] / (depth[i] + camera_z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_depth_is_identity() {
        let coord = [1.0, -2.0, 0.25, 7.5];
        assert_eq!(project(&coord, &[1.0; 4], 0.0), coord);
    }

    #[test]
    fn test_camera_offset_shifts_depth() {
        let projected = project(&[1.0, -1.0], &[3.0, 4.0], 1.0);
        assert!((projected[0] - 0.25).abs() < 1e-6);
        assert!((projected[1] + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_depth_is_not_finite() {
        let projected = project(&[1.0, 0.0], &[3.0, 3.0], -3.0);
        assert_eq!(projected[0], f32::INFINITY);
        assert!(projected[1].is_nan());
    }
}
