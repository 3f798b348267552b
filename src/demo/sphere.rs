use super::{Demo, SingleMesh};
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::sphere;
use crate::renderer::{DrawCall, SceneRenderer, ShaderKind};

/// Unit sphere strip under the checker shader.
#[derive(Debug)]
pub struct Sphere {
    radius: f32,
    precision: u32,
    mesh: SingleMesh,
}

impl Sphere {
    /// Sphere of `radius` with `precision` segments around the equator.
    #[must_use]
    pub fn new(radius: f32, precision: u32) -> Self {
        Self {
            radius,
            precision,
            mesh: SingleMesh::default(),
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0, 100)
    }
}

impl Demo for Sphere {
    fn title(&self) -> String {
        "Sphere".into()
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, 3.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        let data = sphere::mesh(self.radius, self.precision);
        self.mesh
            .build(renderer, context, &data, ShaderKind::Checker)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.draw_calls()
    }
}
