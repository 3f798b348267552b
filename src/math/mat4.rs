use std::ops::Mul;

use super::{Vec3, Vec4};

/// 4x4 `f32` matrix stored as four columns.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build from column arrays.
    #[must_use]
    pub const fn from_cols_array_2d(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Column arrays, ready for a uniform buffer.
    #[must_use]
    pub const fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.cols
    }

    /// Column `index` (0..4).
    #[must_use]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::from(self.cols[index])
    }

    /// Rotation about +X by `degrees`.
    #[must_use]
    pub fn rotation_x(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_cols_array_2d([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about +Y by `degrees`.
    #[must_use]
    pub fn rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_cols_array_2d([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pure translation.
    #[must_use]
    pub fn translation(offset: Vec3) -> Self {
        Self::IDENTITY.with_translation(offset)
    }

    /// Copy of `self` with the translation column overwritten.
    ///
    /// The upper 3x3 block is left untouched, so this is not the same as
    /// post-multiplying by a translation.
    #[must_use]
    pub fn with_translation(mut self, offset: Vec3) -> Self {
        self.cols[3] = [offset.x, offset.y, offset.z, 1.0];
        self
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize_or_zero();
        let s = f.cross(up).normalize_or_zero();
        let u = s.cross(f);
        Self::from_cols_array_2d([
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        ])
    }

    /// Right-handed perspective projection with a `[0, 1]` depth range.
    ///
    /// `fovy_degrees` is the vertical field of view.
    #[must_use]
    pub fn perspective(
        fovy_degrees: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let h = 1.0 / (0.5 * fovy_degrees.to_radians()).tan();
        let w = h / aspect;
        let r = zfar / (znear - zfar);
        Self::from_cols_array_2d([
            [w, 0.0, 0.0, 0.0],
            [0.0, h, 0.0, 0.0],
            [0.0, 0.0, r, -1.0],
            [0.0, 0.0, r * znear, 0.0],
        ])
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let m = &self.cols;
        let mut out = [[0.0; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, v) in col.iter_mut().enumerate() {
                *v = m[r][c];
            }
        }
        Self::from_cols_array_2d(out)
    }

    /// Element at `row`, `col`.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (c, out_col) in out.iter_mut().enumerate() {
            for (r, v) in out_col.iter_mut().enumerate() {
                *v = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Self::from_cols_array_2d(out)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        let v = rhs.to_array();
        let mut out = [0.0; 4];
        for (r, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|k| self.cols[k][r] * v[k]).sum();
        }
        Vec4::from(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(ours: Mat4, theirs: glam::Mat4) {
        let a = ours.to_cols_array_2d();
        let b = theirs.to_cols_array_2d();
        for c in 0..4 {
            for r in 0..4 {
                assert!(
                    (a[c][r] - b[c][r]).abs() < 1e-5,
                    "mismatch at col {c} row {r}: {} vs {}",
                    a[c][r],
                    b[c][r]
                );
            }
        }
    }

    fn g(v: Vec3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }

    #[test]
    fn rotations_match_glam() {
        for deg in [-270.0_f32, -30.0, 0.0, 12.5, 90.0, 725.0] {
            assert_close(
                Mat4::rotation_x(deg),
                glam::Mat4::from_rotation_x(deg.to_radians()),
            );
            assert_close(
                Mat4::rotation_y(deg),
                glam::Mat4::from_rotation_y(deg.to_radians()),
            );
        }
    }

    #[test]
    fn product_matches_glam() {
        let ours = Mat4::rotation_y(33.0) * Mat4::rotation_x(-71.0);
        let theirs = glam::Mat4::from_rotation_y(33.0_f32.to_radians())
            * glam::Mat4::from_rotation_x((-71.0_f32).to_radians());
        assert_close(ours, theirs);
    }

    #[test]
    fn look_at_matches_glam() {
        let eye = Vec3::new(0.0, 1.0, 4.0);
        let target = Vec3::ZERO;
        assert_close(
            Mat4::look_at(eye, target, Vec3::Y),
            glam::Mat4::look_at_rh(g(eye), g(target), glam::Vec3::Y),
        );
    }

    #[test]
    fn perspective_matches_glam() {
        assert_close(
            Mat4::perspective(45.0, 1024.0 / 720.0, 0.05, 350.0),
            glam::Mat4::perspective_rh(
                45.0_f32.to_radians(),
                1024.0 / 720.0,
                0.05,
                350.0,
            ),
        );
    }

    #[test]
    fn with_translation_keeps_rotation_block() {
        let rot = Mat4::rotation_y(40.0);
        let m = rot.with_translation(Vec3::new(1.0, 2.0, 3.0));
        for c in 0..3 {
            assert_eq!(m.col(c), rot.col(c));
        }
        assert_eq!(m.col(3), Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn transforms_points_like_glam() {
        let m = Mat4::rotation_x(20.0).with_translation(Vec3::new(0.5, 0.0, -2.0));
        let p = m * Vec4::new(1.0, 2.0, 3.0, 1.0);
        let gm = glam::Mat4::from_cols_array_2d(&m.to_cols_array_2d());
        let gp = gm * glam::Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert!((p.x - gp.x).abs() < 1e-5);
        assert!((p.y - gp.y).abs() < 1e-5);
        assert!((p.z - gp.z).abs() < 1e-5);
        assert!((p.w - gp.w).abs() < 1e-5);
    }

    #[test]
    fn transpose_twice_is_identity_op() {
        let m = Mat4::rotation_y(17.0) * Mat4::rotation_x(3.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.get(0, 2), m.transpose().get(2, 0));
    }
}
