use std::ops::Mul;

use super::{Mat4, Vec3};

/// 3x3 `f32` matrix stored as three columns. Used for normal transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    cols: [[f32; 3]; 3],
}

impl Mat3 {
    /// The identity.
    pub const IDENTITY: Self = Self {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Build from column arrays.
    #[must_use]
    pub const fn from_cols_array_2d(cols: [[f32; 3]; 3]) -> Self {
        Self { cols }
    }

    /// Upper-left 3x3 block of a [`Mat4`].
    #[must_use]
    pub fn from_mat4(m: &Mat4) -> Self {
        let c = m.to_cols_array_2d();
        Self::from_cols_array_2d([
            [c[0][0], c[0][1], c[0][2]],
            [c[1][0], c[1][1], c[1][2]],
            [c[2][0], c[2][1], c[2][2]],
        ])
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let m = &self.cols;
        Self::from_cols_array_2d([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let [a, b, c] = self.cols.map(Vec3::from);
        a.dot(b.cross(c))
    }

    /// Inverse, or `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let [a, b, c] = self.cols.map(Vec3::from);
        // Rows of the inverse are the cross products of column pairs.
        let r0 = b.cross(c) * (1.0 / det);
        let r1 = c.cross(a) * (1.0 / det);
        let r2 = a.cross(b) * (1.0 / det);
        Some(
            Self::from_cols_array_2d([
                r0.to_array(),
                r1.to_array(),
                r2.to_array(),
            ])
            .transpose(),
        )
    }

    /// Inverse-transpose of the upper 3x3 of `model_view`, falling back to
    /// the plain upper 3x3 when it is singular.
    #[must_use]
    pub fn normal_matrix(model_view: &Mat4) -> Self {
        let m = Self::from_mat4(model_view);
        m.inverse().map_or(m, |inv| inv.transpose())
    }

    /// Columns padded to 16 bytes, the layout WGSL uses for `mat3x3<f32>`
    /// inside a uniform buffer.
    #[must_use]
    pub fn to_padded_cols(&self) -> [[f32; 4]; 3] {
        self.cols.map(|[x, y, z]| [x, y, z, 0.0])
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (c, out_col) in out.iter_mut().enumerate() {
            for (r, v) in out_col.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Self::from_cols_array_2d(out)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let [a, b, c] = self.cols.map(Vec3::from);
        a * v.x + b * v.y + c * v.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_close(a: Mat3, b: Mat3) {
        for c in 0..3 {
            for r in 0..3 {
                assert!((a.cols[c][r] - b.cols[c][r]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn inverse_round_trips() {
        let m = Mat3::from_cols_array_2d([
            [2.0, 0.5, 0.0],
            [0.0, 1.0, -1.0],
            [1.0, 0.0, 3.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_mat_close(m * inv, Mat3::IDENTITY);
        assert_mat_close(inv * m, Mat3::IDENTITY);
    }

    #[test]
    fn inverse_matches_glam() {
        let m = Mat4::rotation_y(30.0) * Mat4::rotation_x(75.0);
        let ours = Mat3::from_mat4(&m).inverse().unwrap();
        let theirs = glam::Mat3::from_mat4(glam::Mat4::from_cols_array_2d(
            &m.to_cols_array_2d(),
        ))
        .inverse();
        let t = theirs.to_cols_array_2d();
        for c in 0..3 {
            for r in 0..3 {
                assert!((ours.cols[c][r] - t[c][r]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Mat3::from_cols_array_2d([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let mv = Mat4::rotation_y(50.0) * Mat4::rotation_x(-20.0);
        assert_mat_close(Mat3::normal_matrix(&mv), Mat3::from_mat4(&mv));
    }

    #[test]
    fn padded_columns_have_zero_w() {
        let p = Mat3::IDENTITY.to_padded_cols();
        assert_eq!(p[1], [0.0, 1.0, 0.0, 0.0]);
    }
}
