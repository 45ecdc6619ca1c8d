use core::ops::Mul;

use super::Vec3;

/// 4x4 matrix stored as 16 floats in column-major order.
///
/// Element `(row, col)` lives at index `col * 4 + row`, which is the layout
/// GPU uniform blocks expect, so the array is uploaded as-is.
///
/// Matrices are values: every operation returns a new matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.0
    }

    /// Returns element `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Builds the orthonormal basis
    /// `z = normalize(eye - target)`, `x = normalize(up × z)`, `y = z × x`
    /// and returns the world-to-camera transform (transposed rotation followed
    /// by a translation of `-axis · eye` per axis).
    ///
    /// Precondition: `up` must not be parallel to `eye - target`, and `eye`
    /// must differ from `target`. Violations produce NaN entries; nothing is
    /// checked at runtime.
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

    /// Off-center perspective projection (OpenGL `glFrustum` convention).
    ///
    /// Maps the right-handed view-space frustum bounded by the six planes into
    /// clip space with `z_ndc = -1` on the near plane and `+1` on the far plane.
    ///
    /// Preconditions (unchecked): `near > 0`, `far > near`, `left < right`,
    /// `bottom < top`. Violations give a singular or mirrored projection.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut m = [0.0f32; 16];
        m[0] = (2.0 * near) / (right - left);
        m[5] = (2.0 * near) / (top - bottom);
        m[8] = (right + left) / (right - left);
        m[9] = (top + bottom) / (top - bottom);
        m[10] = -(far + near) / (far - near);
        m[11] = -1.0;
        m[14] = -(2.0 * far * near) / (far - near);
        m[15] = 0.0;
        Self(m)
    }

    /// Multiplies a homogeneous column vector.
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.0;
        let mut out = [0.0f32; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = m[row] * v[0] + m[4 + row] * v[1] + m[8 + row] * v[2] + m[12 + row] * v[3];
        }
        out
    }

    /// Transforms a point (`w = 1`) and applies the perspective divide.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x / w, y / w, z / w)
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row * 4 + col] = self.0[col * 4 + row];
            }
        }
        Self(out)
    }

    /// General inverse via cofactor expansion.
    ///
    /// Returns `None` when the matrix is singular (or the determinant is not finite).
    pub fn inverse(&self) -> Option<Self> {
        let m = &self.0;
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;
        for v in inv.iter_mut() {
            *v *= inv_det;
        }
        Some(Self(inv))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }
        Mat4(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
    }

    fn approx_mat(a: Mat4, b: Mat4) -> bool {
        a.0.iter().zip(b.0.iter()).all(|(x, y)| approx(*x, *y))
    }

    // ── frustum ───────────────────────────────────────────────────────────

    #[test]
    fn frustum_symmetric_entries() {
        let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0);
        assert!(approx(m.at(0, 0), 0.1));
        assert!(approx(m.at(1, 1), 0.1));
        assert_eq!(m.at(3, 2), -1.0);
        assert_eq!(m.0[11], -1.0);
        assert_eq!(m.at(3, 3), 0.0);
        // Symmetric bounds: no off-center skew.
        assert_eq!(m.0[8], 0.0);
        assert_eq!(m.0[9], 0.0);
    }

    #[test]
    fn frustum_maps_near_and_far_planes_to_ndc_bounds() {
        let (n, f) = (0.1, 100.0);
        let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, n, f);

        let near = m.transform_point(Vec3::new(0.0, 0.0, -n));
        let far = m.transform_point(Vec3::new(0.0, 0.0, -f));
        assert!(approx(near.z, -1.0));
        assert!((far.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn frustum_maps_near_corner_to_ndc_corner() {
        let m = Mat4::frustum(-2.0, 1.0, -0.5, 1.5, 0.5, 10.0);
        let p = m.transform_point(Vec3::new(1.0, 1.5, -0.5));
        assert!(approx(p.x, 1.0));
        assert!(approx(p.y, 1.0));

        let q = m.transform_point(Vec3::new(-2.0, -0.5, -0.5));
        assert!(approx(q.x, -1.0));
        assert!(approx(q.y, -1.0));
    }

    // ── look_at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_axis_aligned_is_pure_translation() {
        let m = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!(approx(m.at(row, col), expected), "({row}, {col}) = {}", m.at(row, col));
            }
        }
        assert!(approx(m.0[12], 0.0));
        assert!(approx(m.0[13], 0.0));
        assert!(approx(m.0[14], -5.0));
        assert_eq!(m.0[15], 1.0);
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(3.0, 2.0, -4.0);
        let target = Vec3::new(0.0, 1.0, 0.0);
        let m = Mat4::look_at(eye, target, Vec3::Y);

        let t = m.transform_point(target);
        let dist = (eye - target).length();
        assert!(approx(t.x, 0.0));
        assert!(approx(t.y, 0.0));
        assert!(approx(t.z, -dist));
    }

    #[test]
    fn inverse_look_at_maps_origin_back_to_eye() {
        let eye = Vec3::new(3.0, 2.0, -4.0);
        let view = Mat4::look_at(eye, Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let camera_to_world = view.inverse().expect("view matrix is invertible");

        assert!(approx_vec(camera_to_world.transform_point(Vec3::ZERO), eye));
    }

    #[test]
    fn look_at_parallel_up_is_degenerate() {
        let m = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(m.0.iter().any(|v| v.is_nan()));
    }

    // ── algebra ───────────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::frustum(-1.0, 2.0, -1.0, 1.0, 0.5, 20.0);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let view = Mat4::look_at(Vec3::new(1.0, 4.0, 2.0), Vec3::new(-1.0, 0.0, 0.5), Vec3::Y);
        let inv = view.inverse().expect("invertible");
        assert!(approx_mat(view * inv, Mat4::IDENTITY));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Mat4([0.0; 16]).inverse().is_none());
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Mat4::frustum(-1.0, 3.0, -2.0, 1.0, 0.1, 10.0);
        let t = m.transpose();
        assert_eq!(t.at(2, 3), m.at(3, 2));
        assert_eq!(t.transpose(), m);
    }
}
