use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Demo;
use crate::error::DemoError;
use crate::gpu::render_context::RenderContext;
use crate::math::Vec3;
use crate::mesh::{point_cloud, MeshData};
use crate::renderer::{DrawCall, MeshId, SceneRenderer, ShaderKind};

/// Random line segments, replaced wholesale on every tick.
#[derive(Debug)]
pub struct PointCloud {
    rng: StdRng,
    points: Vec<Vec3>,
    mesh: Option<MeshId>,
}

impl PointCloud {
    /// Cloud seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Reproducible cloud.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let points = point_cloud::generate(&mut rng);
        Self {
            rng,
            points,
            mesh: None,
        }
    }

    /// Current point count (two per segment).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: a cloud has at least `BASE_SEGMENTS` segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn regenerate(&mut self) -> MeshData {
        self.points = point_cloud::generate(&mut self.rng);
        point_cloud::mesh(&self.points)
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for PointCloud {
    fn title(&self) -> String {
        format!("Data Size {}", self.points.len())
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, 22.0)
    }

    fn build(
        &mut self,
        renderer: &mut SceneRenderer,
        context: &RenderContext,
    ) -> Result<(), DemoError> {
        let data = point_cloud::mesh(&self.points);
        log::debug!("point cloud: {} points", self.points.len());
        self.mesh = Some(renderer.add_mesh(context, &data, ShaderKind::Colour)?);
        Ok(())
    }

    fn tick(&mut self, renderer: &mut SceneRenderer, context: &RenderContext) -> bool {
        let Some(id) = self.mesh else {
            return false;
        };
        let data = self.regenerate();
        renderer.update_mesh(context, id, &data);
        true
    }

    fn tick_interval(&self) -> Option<Duration> {
        Some(Duration::ZERO)
    }

    fn draw_calls(&self) -> Vec<DrawCall> {
        self.mesh.map(DrawCall::new).into_iter().collect()
    }
}
