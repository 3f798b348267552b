use std::time::Duration;

use super::Demo;
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::icosahedron;
use crate::renderer::{DrawCall, FillMode, MeshId, SceneRenderer, ShaderKind};

/// Indices per triangle.
const STEP: u32 = 3;
/// The cursor goes back to zero once it reaches this.
const WRAP_AT: u32 = 22;
const TIMER: Duration = Duration::from_millis(100);
const SPACING: f32 = 1.2;

/// The icosahedron from split position and colour buffers, drawn three
/// times: a growing prefix on the left, the whole thing in the middle, and
/// one highlighted triangle under a wireframe on the right.
#[derive(Debug)]
pub struct MultiBuffer {
    index: u32,
    animate: bool,
    mesh: Option<MeshId>,
}

impl MultiBuffer {
    /// Triangle cursor, starting at 0.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the timer is stepping the cursor.
    #[must_use]
    pub fn animating(&self) -> bool {
        self.animate
    }

    fn step(&mut self) {
        self.index = self.index.saturating_add(STEP);
        if self.index >= WRAP_AT {
            self.index = 0;
        }
    }

    fn draws_for(&self, mesh: MeshId) -> Vec<DrawCall> {
        let left = Vec3::new(-SPACING, 0.0, 0.0);
        let right = Vec3::new(SPACING, 0.0, 0.0);
        vec![
            DrawCall::new(mesh)
                .at(left)
                .range(0..self.index.saturating_mul(STEP)),
            DrawCall::new(mesh).fill(FillMode::Solid),
            DrawCall::new(mesh)
                .at(right)
                .range(self.index..self.index.saturating_add(STEP))
                .fill(FillMode::Solid),
            DrawCall::new(mesh).at(right).fill(FillMode::Wireframe),
        ]
    }
}

impl Default for MultiBuffer {
    fn default() -> Self {
        Self {
            index: 0,
            animate: true,
            mesh: None,
        }
    }
}

impl Demo for MultiBuffer {
    fn title(&self) -> String {
        "Multi-Buffer Icosahedron".into()
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, 2.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        let data = icosahedron::multi_buffer_mesh();
        log::debug!("{}: {} buffers", data.label, data.buffers.len());
        self.mesh = Some(renderer.add_mesh(context, &data, ShaderKind::VertexColour)?);
        Ok(())
    }

    fn tick(&mut self, _renderer: &mut SceneRenderer, _context: &RenderContext) -> bool {
        if !self.animate {
            return false;
        }
        self.step();
        true
    }

    fn tick_interval(&self) -> Option<Duration> {
        self.animate.then_some(TIMER)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.map(|m| self.draws_for(m)).unwrap_or_default()
    }

    fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.index = self.index.saturating_sub(STEP),
            "ArrowRight" => self.index = self.index.saturating_add(STEP),
            "Space" => {
                self.animate = !self.animate;
                log::debug!("multi-buffer animation {}", self.animate);
            }
            _ => return false,
        }
        true
    }
}
