use super::{Demo, SingleMesh};
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::icosahedron;
use crate::renderer::{DrawCall, SceneRenderer, ShaderKind};

/// Indexed icosahedron, position and colour interleaved.
#[derive(Debug, Default)]
pub struct Icosahedron {
    mesh: SingleMesh,
}

impl Demo for Icosahedron {
    fn title(&self) -> String {
        "Icosahedron".into()
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, 2.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        self.mesh.build(
            renderer,
            context,
            &icosahedron::mesh(),
            ShaderKind::VertexColour,
        )
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.draw_calls()
    }
}
