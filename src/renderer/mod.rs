//! Scene rendering: uploaded meshes, per-draw uniforms, and the frame
//! render pass.
//!
//! The [`SceneRenderer`] owns every GPU resource a demo draws with. Demos
//! add meshes once, optionally replace their contents on tick, and hand a
//! list of [`DrawCall`]s back each frame.

pub(crate) mod mesh_pass;
pub(crate) mod pipeline_util;

use std::collections::HashMap;
use std::ops::Range;

use mesh_pass::MeshPass;
use wgpu::util::DeviceExt;

use crate::camera::{Camera, TransformUniform};
use crate::error::DemoError;
use crate::gpu::lighting::LightingUniform;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::math::{Mat4, Vec3};
use crate::mesh::MeshData;
use crate::options::Options;

/// Rasterizer fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Filled triangles.
    #[default]
    Solid,
    /// Triangle outlines.
    Wireframe,
}

/// Which WGSL program a mesh is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Flat colour from [`DrawCall::colour`]. Reads position only.
    Colour,
    /// Per-vertex colour at location 1.
    VertexColour,
    /// Phong lighting with the material from the options. Normal at
    /// location 1.
    Phong,
    /// Lit UV checker. Normal at location 1, UV at location 2.
    Checker,
}

impl ShaderKind {
    /// WGSL source and its file path for composition.
    #[must_use]
    pub fn source(self) -> (&'static str, &'static str) {
        match self {
            Self::Colour => (
                include_str!("../../assets/shaders/raster/colour.wgsl"),
                "raster/colour.wgsl",
            ),
            Self::VertexColour => (
                include_str!("../../assets/shaders/raster/vertex_colour.wgsl"),
                "raster/vertex_colour.wgsl",
            ),
            Self::Phong => (
                include_str!("../../assets/shaders/raster/phong.wgsl"),
                "raster/phong.wgsl",
            ),
            Self::Checker => (
                include_str!("../../assets/shaders/raster/checker.wgsl"),
                "raster/checker.wgsl",
            ),
        }
    }
}

/// Handle to a mesh added to a [`SceneRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub(crate) usize);

/// One draw of one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Mesh to draw.
    pub mesh: MeshId,
    /// World-space offset applied after the mouse transform.
    pub offset: Vec3,
    /// Sub-range of indices (or vertices); `None` draws everything.
    pub range: Option<Range<u32>>,
    /// Fill mode override; `None` uses the renderer's current mode.
    pub fill: Option<FillMode>,
    /// Colour for the flat colour shader.
    pub colour: [f32; 4],
}

impl DrawCall {
    /// Full draw of `mesh` at the origin in white.
    #[must_use]
    pub fn new(mesh: MeshId) -> Self {
        Self {
            mesh,
            offset: Vec3::ZERO,
            range: None,
            fill: None,
            colour: [1.0; 4],
        }
    }

    /// Translate by `offset` in world space.
    #[must_use]
    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Only draw `range`.
    #[must_use]
    pub fn range(mut self, range: Range<u32>) -> Self {
        self.range = Some(range);
        self
    }

    /// Force a fill mode for this draw.
    #[must_use]
    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Model matrix for this draw given the mouse transform.
    #[must_use]
    pub fn model(&self, mouse: &Mat4) -> Mat4 {
        Mat4::translation(self.offset) * *mouse
    }
}

const TRANSFORM_SLOT: u64 = size_of::<TransformUniform>() as u64;
const INITIAL_SLOTS: u64 = 8;

/// Owns the bind group, uniforms, shaders, and meshes for one window.
pub struct SceneRenderer {
    composer: ShaderComposer,
    shaders: HashMap<ShaderKind, wgpu::ShaderModule>,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    transform_buffer: wgpu::Buffer,
    transform_slots: u64,
    lighting_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    meshes: Vec<MeshPass>,
    fill_mode: FillMode,
    clear_color: wgpu::Color,
    options: Options,
}

impl SceneRenderer {
    /// Create the shared GPU state.
    ///
    /// # Errors
    ///
    /// [`DemoError::Shader`] if the shared WGSL modules fail to parse.
    pub fn new(context: &RenderContext, options: &Options) -> Result<Self, DemoError> {
        let composer = ShaderComposer::new()?;
        let device = &context.device;

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: wgpu::BufferSize::new(TRANSFORM_SLOT),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let transform_buffer = create_transform_buffer(device, INITIAL_SLOTS);
        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[LightingUniform::new(
                &options.lighting,
                &Mat4::IDENTITY,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group =
            create_bind_group(device, &bind_group_layout, &transform_buffer, &lighting_buffer);

        let [r, g, b, a] = options.window.clear_color;
        Ok(Self {
            composer,
            shaders: HashMap::new(),
            bind_group_layout,
            pipeline_layout,
            transform_buffer,
            transform_slots: INITIAL_SLOTS,
            lighting_buffer,
            bind_group,
            meshes: Vec::new(),
            fill_mode: FillMode::Solid,
            clear_color: wgpu::Color { r, g, b, a },
            options: options.clone(),
        })
    }

    /// Upload `data` to be drawn with `shader`.
    ///
    /// # Errors
    ///
    /// [`DemoError::Shader`] if the shader fails to compose.
    pub fn add_mesh(
        &mut self,
        context: &RenderContext,
        data: &MeshData,
        shader: ShaderKind,
    ) -> Result<MeshId, DemoError> {
        if !self.shaders.contains_key(&shader) {
            let (source, file_path) = shader.source();
            let module =
                self.composer
                    .compose(&context.device, &format!("{shader:?}"), source, file_path)?;
            let _ = self.shaders.insert(shader, module);
        }
        let module = self
            .shaders
            .get(&shader)
            .ok_or_else(|| DemoError::Shader(format!("{shader:?} missing after compose")))?;

        self.meshes
            .push(MeshPass::new(context, data, module, &self.pipeline_layout));
        Ok(MeshId(self.meshes.len() - 1))
    }

    /// Replace the contents of a mesh. The vertex layout must not change.
    pub fn update_mesh(&mut self, context: &RenderContext, id: MeshId, data: &MeshData) {
        match self.meshes.get_mut(id.0) {
            Some(mesh) => {
                log::trace!("updating {}: {} elements", mesh.label(), data.element_count());
                mesh.update(context, data);
            }
            None => log::warn!("update for unknown mesh {id:?}"),
        }
    }

    /// Full element count of a mesh, or 0 for an unknown id.
    #[must_use]
    pub fn element_count(&self, id: MeshId) -> u32 {
        self.meshes.get(id.0).map_or(0, MeshPass::element_count)
    }

    /// Current fill mode.
    #[must_use]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Switch fill mode for draws without an override.
    pub fn set_fill_mode(&mut self, mode: FillMode) {
        log::debug!("fill mode {mode:?}");
        self.fill_mode = mode;
    }

    /// Options the renderer was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render one frame: every draw in `draws`, each with `mouse` applied.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] from acquiring the frame.
    pub fn render(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
        mouse: &Mat4,
        draws: &[DrawCall],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms: Vec<TransformUniform> = draws
            .iter()
            .map(|d| camera.transforms(&d.model(mouse), d.colour))
            .collect();
        self.ensure_transform_slots(context, uniforms.len() as u64);
        context
            .queue
            .write_buffer(&self.transform_buffer, 0, bytemuck::cast_slice(&uniforms));
        context.queue.write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::cast_slice(&[LightingUniform::new(&self.options.lighting, &camera.view())]),
        );

        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(context.color_attachment(&view, self.clear_color))],
                depth_stencil_attachment: Some(context.depth_attachment()),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (slot, draw) in draws.iter().enumerate() {
                let Some(mesh) = self.meshes.get(draw.mesh.0) else {
                    log::warn!("draw of unknown mesh {:?}", draw.mesh);
                    continue;
                };
                let offset = (slot as u64 * TRANSFORM_SLOT) as u32;
                pass.set_bind_group(0, &self.bind_group, &[offset]);
                let range = draw.range.clone().unwrap_or(0..mesh.element_count());
                mesh.draw(&mut pass, range, draw.fill.unwrap_or(self.fill_mode));
            }
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn ensure_transform_slots(&mut self, context: &RenderContext, needed: u64) {
        if needed <= self.transform_slots {
            return;
        }
        let slots = needed.next_power_of_two();
        log::debug!("growing transform slots {} -> {slots}", self.transform_slots);
        self.transform_buffer = create_transform_buffer(&context.device, slots);
        self.transform_slots = slots;
        self.bind_group = create_bind_group(
            &context.device,
            &self.bind_group_layout,
            &self.transform_buffer,
            &self.lighting_buffer,
        );
    }
}

fn create_transform_buffer(device: &wgpu::Device, slots: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Transform Buffer"),
        size: slots * TRANSFORM_SLOT,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    transforms: &wgpu::Buffer,
    lighting: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Scene Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: transforms,
                    offset: 0,
                    size: wgpu::BufferSize::new(TRANSFORM_SLOT),
                }),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: lighting.as_entire_binding(),
            },
        ],
    })
}
