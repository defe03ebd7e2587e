use core::ops::Mul;

use super::Vec3;

/// 4x4 transform stored column-major, ready for `uniformMatrix4fv`.
///
/// Every constructor returns a fresh value and `multiply` never mutates its
/// operands. No function here validates its input: degenerate parameters
/// propagate as NaN/Inf.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Right-handed perspective projection mapping depth to `[-1, 1]`.
    ///
    /// Expects `near > 0`, `far > near` and `aspect > 0`.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self([
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, (far + near) * nf, -1.0, //
            0.0, 0.0, 2.0 * far * near * nf, 0.0,
        ])
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Produces NaN when `up` is parallel to the view direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);

        Self([
            x.x, y.x, z.x, 0.0, //
            x.y, y.y, z.y, 0.0, //
            x.z, y.z, z.z, 0.0, //
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
        ])
    }

    pub fn rotate_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns `self · rhs`: `rhs` is applied first.
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[row + 4] * b[col * 4 + 1]
                    + a[row + 8] * b[col * 4 + 2]
                    + a[row + 12] * b[col * 4 + 3];
            }
        }

        Mat4(out)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Element at (`row`, `col`).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_mat_eq(a: &Mat4, b: &Mat4, eps: f32) {
        for i in 0..16 {
            assert_relative_eq!(a.0[i], b.0[i], epsilon = eps);
        }
    }

    fn sample() -> Mat4 {
        Mat4::rotate_y(0.7) * Mat4::rotate_x(-1.3) * Mat4::perspective(1.0, 1.5, 0.5, 20.0)
    }

    // ── identity law ──────────────────────────────────────────────────────

    #[test]
    fn identity_is_left_neutral() {
        let m = sample();
        assert_mat_eq(&Mat4::identity().multiply(&m), &m, 1e-6);
    }

    #[test]
    fn identity_is_right_neutral() {
        let m = sample();
        assert_mat_eq(&m.multiply(&Mat4::identity()), &m, 1e-6);
    }

    // ── rotations ─────────────────────────────────────────────────────────

    #[test]
    fn rotate_y_zero_is_identity() {
        assert_eq!(Mat4::rotate_y(0.0), Mat4::identity());
        assert_eq!(Mat4::rotate_x(0.0), Mat4::identity());
    }

    #[test]
    fn rotation_and_inverse_cancel() {
        for step in -8..=8 {
            let theta = step as f32 * 0.45;
            assert_mat_eq(&(Mat4::rotate_y(theta) * Mat4::rotate_y(-theta)), &Mat4::IDENTITY, 1e-6);
            assert_mat_eq(&(Mat4::rotate_x(theta) * Mat4::rotate_x(-theta)), &Mat4::IDENTITY, 1e-6);
        }
    }

    #[test]
    fn full_turn_returns_to_identity() {
        assert_mat_eq(&Mat4::rotate_y(2.0 * PI), &Mat4::IDENTITY, 1e-6);
    }

    #[test]
    fn quarter_turn_about_y_layout() {
        let m = Mat4::rotate_y(FRAC_PI_2);
        // Column 0 is (c, 0, s).
        assert_relative_eq!(m.at(0, 0), 0.0, epsilon = 1e-6);
        assert_relative_eq!(m.at(2, 0), 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.at(0, 2), -1.0, epsilon = 1e-6);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn multiply_does_not_commute_in_general() {
        let a = Mat4::rotate_x(0.4);
        let b = Mat4::rotate_y(0.9);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn multiply_leaves_operands_untouched() {
        let a = Mat4::rotate_x(0.4);
        let b = Mat4::rotate_y(0.9);
        let (a0, b0) = (a, b);
        let _ = a.multiply(&b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    // ── projection / view ─────────────────────────────────────────────────

    #[test]
    fn perspective_matches_closed_form() {
        let m = Mat4::perspective(FRAC_PI_4, 2.0, 0.1, 100.0);
        let f = 1.0 / (FRAC_PI_4 / 2.0).tan();
        assert_relative_eq!(m.at(0, 0), f / 2.0, epsilon = 1e-5);
        assert_relative_eq!(m.at(1, 1), f, epsilon = 1e-5);
        assert_relative_eq!(m.at(2, 2), (100.1) / (0.1 - 100.0), epsilon = 1e-5);
        assert_eq!(m.at(3, 2), -1.0);
        assert_eq!(m.at(3, 3), 0.0);
    }

    #[test]
    fn look_at_down_negative_z_is_translation() {
        let m = Mat4::look_at(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::UNIT_Y);
        let mut expected = Mat4::IDENTITY;
        expected.0[14] = -4.0;
        assert_mat_eq(&m, &expected, 1e-6);
    }

    #[test]
    fn look_at_with_parallel_up_degenerates_to_nan() {
        let m = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::UNIT_Y);
        assert!(m.0.iter().any(|v| v.is_nan()));
    }
}
