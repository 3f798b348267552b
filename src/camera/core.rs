use crate::math::{Mat3, Mat4, Vec3};
use crate::options::CameraOptions;

/// Fixed look-at camera with a perspective projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at the origin, +Y up, projection from
    /// `options`.
    #[must_use]
    pub fn new(eye: Vec3, aspect: f32, options: &CameraOptions) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio after a resize. Zero heights are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-eye transform.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// Eye-to-clip transform, `[0, 1]` depth.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Per-draw uniform block for `model`.
    #[must_use]
    pub fn transforms(&self, model: &Mat4, colour: [f32; 4]) -> TransformUniform {
        let mv = self.view() * *model;
        let mvp = self.projection() * mv;
        TransformUniform {
            mvp: mvp.to_cols_array_2d(),
            mv: mv.to_cols_array_2d(),
            m: model.to_cols_array_2d(),
            normal_matrix: Mat3::normal_matrix(&mv).to_padded_cols(),
            colour,
        }
    }
}

/// GPU uniform block matching the WGSL `Transforms` struct.
///
/// 256 bytes, so one block fills a dynamic-offset slot exactly.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    /// Projection * view * model.
    pub mvp: [[f32; 4]; 4],
    /// View * model.
    pub mv: [[f32; 4]; 4],
    /// Model.
    pub m: [[f32; 4]; 4],
    /// Inverse-transpose of the upper 3x3 of `mv`, columns padded to vec4.
    pub normal_matrix: [[f32; 4]; 3],
    /// Flat colour for the colour shader.
    pub colour: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn uniform_is_one_slot() {
        assert_eq!(size_of::<TransformUniform>(), 256);
    }

    #[test]
    fn eye_maps_to_origin_in_view_space() {
        let cam = Camera::new(Vec3::new(0.0, 1.0, 4.0), 1.0, &CameraOptions::default());
        let p = cam.view() * Vec4::new(0.0, 1.0, 4.0, 1.0);
        assert!(p.truncate().length() < 1e-5);
    }

    #[test]
    fn target_is_in_front_of_camera() {
        let cam = Camera::new(Vec3::new(0.0, 1.0, 4.0), 1.0, &CameraOptions::default());
        let p = cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.z < 0.0);
        let clip = cam.projection() * p;
        let ndc_z = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&ndc_z));
    }

    #[test]
    fn viewport_ignores_zero_height() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 2.0), 2.0, &CameraOptions::default());
        cam.set_viewport(100, 0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(1024, 720);
        assert!((cam.aspect - 1024.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn transforms_compose_in_order() {
        let cam = Camera::new(Vec3::new(0.0, 1.0, -4.0), 1.5, &CameraOptions::default());
        let model = Mat4::rotation_y(30.0).with_translation(Vec3::new(0.2, 0.0, 0.1));
        let u = cam.transforms(&model, [1.0; 4]);
        let mv = cam.view() * model;
        assert_eq!(u.mv, mv.to_cols_array_2d());
        assert_eq!(u.mvp, (cam.projection() * mv).to_cols_array_2d());
        assert_eq!(u.m, model.to_cols_array_2d());
    }
}
