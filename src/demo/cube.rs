use super::{Demo, SingleMesh};
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::cube;
use crate::renderer::{DrawCall, SceneRenderer, ShaderKind};

/// Indexed cube with a colour per corner.
#[derive(Debug, Default)]
pub struct Cube {
    mesh: SingleMesh,
}

impl Demo for Cube {
    fn title(&self) -> String {
        "Cube".into()
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
            .build(renderer, context, &cube::mesh(), ShaderKind::VertexColour)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.draw_calls()
    }
}
