use super::{Demo, SingleMesh};
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::boid;
use crate::renderer::{DrawCall, SceneRenderer, ShaderKind};

/// The boid in flat white.
#[derive(Debug, Default)]
pub struct Boid {
    mesh: SingleMesh,
}

impl Demo for Boid {
    fn title(&self) -> String {
        "Boid".into()
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, 4.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        self.mesh
            .build(renderer, context, &boid::mesh(), ShaderKind::Colour)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.draw_calls()
    }
}

/// The boid with face normals, Phong lit. Viewed from behind.
#[derive(Debug, Default)]
pub struct ShadedBoid {
    mesh: SingleMesh,
}

impl Demo for ShadedBoid {
    fn title(&self) -> String {
        "Boid Shaded".into()
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, -4.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        self.mesh
            .build(renderer, context, &boid::shaded_mesh(), ShaderKind::Phong)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.draw_calls()
    }
}
