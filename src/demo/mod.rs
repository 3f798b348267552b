//! The demos and the trait the viewer drives them through.
//!
//! A demo uploads its meshes in [`Demo::build`], then describes each frame
//! as a list of [`DrawCall`]s. Everything with GPU lifetime (the context,
//! the renderer, the camera controller) lives in the viewer and is lent to
//! the demo when it needs it.
//!
//! ```no_run
//! # #[cfg(feature = "viewer")]
//! # fn main() -> Result<(), vao_demos::DemoError> {
//! use vao_demos::demo::Icosahedron;
//! use vao_demos::Viewer;
//!
//! Viewer::builder().build().run(Icosahedron::default())
//! # }
//! # #[cfg(not(feature = "viewer"))]
//! # fn main() {}
//! ```

mod boid;
mod cube;
mod icosahedron;
mod multi_buffer;
mod point_cloud;
mod sphere;

use std::time::Duration;

pub use boid::{Boid, ShadedBoid};
pub use cube::Cube;
pub use icosahedron::Icosahedron;
pub use multi_buffer::MultiBuffer;
pub use point_cloud::PointCloud;
pub use sphere::Sphere;

use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::MeshData;
use crate::renderer::{DrawCall, MeshId, SceneRenderer, ShaderKind};

/// One runnable demo.
pub trait Demo {
    /// Window title.
    fn title(&self) -> String;

    /// Camera position. The camera looks at the origin with +Y up.
    fn eye(&self) -> Vec3;

    /// Upload meshes and pick shaders. Called once, after the GPU is up.
    ///
    /// # Errors
    ///
    /// Whatever [`SceneRenderer::add_mesh`] reports.
    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError>;

    /// Advance one step. Returns whether a redraw is needed.
    fn tick(&mut self, _renderer: &mut SceneRenderer, _context: &RenderContext) -> bool {
        false
    }

    /// How often [`tick`](Self::tick) wants to run. `None` never ticks,
    /// `Some(Duration::ZERO)` ticks on every loop iteration.
    fn tick_interval(&self) -> Option<Duration> {
        None
    }

    /// What to draw this frame. Empty before [`build`](Self::build).
    fn draw_calls(&self) -> Vec<DrawCall>;

    /// Demo-specific key handling; runs before the shared bindings.
    /// Returns `true` if the key was consumed.
    fn handle_key(&mut self, _key: &str) -> bool {
        false
    }
}

impl<D: Demo + ?Sized> Demo for Box<D> {
    fn title(&self) -> String {
        (**self).title()
    }

    fn eye(&self) -> Vec3 {
        (**self).eye()
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        (**self).build(renderer, context)
    }

    fn tick(&mut self, renderer: &mut SceneRenderer, context: &RenderContext) -> bool {
        (**self).tick(renderer, context)
    }

    fn tick_interval(&self) -> Option<Duration> {
        (**self).tick_interval()
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        (**self).draw_calls()
    }

    fn handle_key(&mut self, key: &str) -> bool {
        (**self).handle_key(key)
    }
}

/// A single mesh drawn once at the origin: the shape of most demos.
#[derive(Debug, Default)]
struct SingleMesh {
    id: Option<MeshId>,
}

impl SingleMesh {
    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
        data: &MeshData,
        shader: ShaderKind,
    ) -> Result<(), DemoError> {
        log::debug!("{}: {} elements", data.label, data.element_count());
        self.id = Some(renderer.add_mesh(context, data, shader)?);
        Ok(())
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.id.map(DrawCall::new).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuilt_mesh_draws_nothing() {
        assert!(SingleMesh::default().draw_calls().is_empty());
    }

    #[test]
    fn built_mesh_draws_once_at_origin() {
        let single = SingleMesh {
            id: Some(MeshId(3)),
        };
        let draws = single.draw_calls();
        assert_eq!(draws, vec![DrawCall::new(MeshId(3))]);
        assert_eq!(draws[0].offset, Vec3::ZERO);
    }

    #[test]
    fn boxed_demo_forwards() {
        let demo: Box<dyn Demo> = Box::new(Cube::default());
        assert_eq!(demo.eye(), Cube::default().eye());
        assert!(demo.tick_interval().is_none());
        assert!(demo.draw_calls().is_empty());
    }
}
