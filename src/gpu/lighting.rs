use crate::math::{Mat4, Vec4};
use crate::options::LightingOptions;

/// GPU uniform matching the WGSL `Lighting` struct (128 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Light position (or direction when w = 0) in eye space.
    pub light_position: [f32; 4],
    /// Light ambient term.
    pub light_ambient: [f32; 4],
    /// Light diffuse term.
    pub light_diffuse: [f32; 4],
    /// Light specular term.
    pub light_specular: [f32; 4],
    /// Material ambient reflectance.
    pub material_ambient: [f32; 4],
    /// Material diffuse reflectance.
    pub material_diffuse: [f32; 4],
    /// Material specular reflectance.
    pub material_specular: [f32; 4],
    /// Phong exponent.
    pub shininess: f32,
    pub(crate) _pad: [f32; 3],
}

impl LightingUniform {
    /// Uniform for `options`, with the light moved into the eye space of
    /// `view`.
    #[must_use]
    pub fn new(options: &LightingOptions, view: &Mat4) -> Self {
        let light = *view * Vec4::from(options.light_position);
        Self {
            light_position: light.to_array(),
            light_ambient: options.light_ambient,
            light_diffuse: options.light_diffuse,
            light_specular: options.light_specular,
            material_ambient: options.material_ambient,
            material_diffuse: options.material_diffuse,
            material_specular: options.material_specular,
            shininess: options.shininess,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn matches_wgsl_size() {
        assert_eq!(size_of::<LightingUniform>(), 128);
    }

    #[test]
    fn directional_light_ignores_view_translation() {
        let opts = LightingOptions::default();
        let view = Mat4::translation(Vec3::new(10.0, -3.0, 7.0));
        let u = LightingUniform::new(&opts, &view);
        assert_eq!(u.light_position, [-2.0, 5.0, 2.0, 0.0]);
        assert_eq!(u.shininess, 51.2);
    }
}
