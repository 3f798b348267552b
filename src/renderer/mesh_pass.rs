//! One uploaded mesh and the pipelines that draw it.
//!
//! `MeshPass` owns the vertex buffers, the optional index buffer, and a
//! filled pipeline plus (when the device allows it) a line-mode pipeline
//! for wireframe. Bind groups are set by the caller.

use std::ops::Range;

use super::{pipeline_util, FillMode};
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::mesh::{clamp_range, MeshData, VertexStream};

/// Create a mesh render pipeline for `streams` with the given polygon mode.
pub(crate) fn create_mesh_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    streams: &[VertexStream],
    topology: wgpu::PrimitiveTopology,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    let buffers: Vec<_> = streams.iter().map(VertexStream::layout).collect();

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::color_targets(context.format()),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                polygon_mode,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState {
                count: context.sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        })
}

/// A mesh on the GPU with its pipelines.
pub(crate) struct MeshPass {
    label: &'static str,
    fill: wgpu::RenderPipeline,
    line: Option<wgpu::RenderPipeline>,
    streams: Vec<VertexStream>,
    vertex_buffers: Vec<DynamicBuffer>,
    index_buffer: Option<DynamicBuffer>,
    element_count: u32,
}

impl MeshPass {
    /// Upload `data` and build its pipelines.
    pub fn new(
        context: &RenderContext,
        data: &MeshData,
        shader: &wgpu::ShaderModule,
        layout: &wgpu::PipelineLayout,
    ) -> Self {
        let fill = create_mesh_pipeline(
            context,
            data.label,
            shader,
            layout,
            &data.streams,
            data.topology,
            wgpu::PolygonMode::Fill,
        );
        let line = (context.supports_wireframe && pipeline_util::is_triangles(data.topology))
            .then(|| {
                create_mesh_pipeline(
                    context,
                    &format!("{} Wireframe", data.label),
                    shader,
                    layout,
                    &data.streams,
                    data.topology,
                    wgpu::PolygonMode::Line,
                )
            });

        let vertex_buffers = data
            .buffers
            .iter()
            .enumerate()
            .map(|(i, bytes)| {
                DynamicBuffer::new_with_bytes(
                    &context.device,
                    &format!("{} Vertices {i}", data.label),
                    bytes,
                    wgpu::BufferUsages::VERTEX,
                )
            })
            .collect();
        let index_buffer = data.indices.as_ref().map(|indices| {
            DynamicBuffer::new_with_bytes(
                &context.device,
                &format!("{} Indices", data.label),
                bytemuck::cast_slice(indices),
                wgpu::BufferUsages::INDEX,
            )
        });

        log::debug!(
            "uploaded {}: {} buffers, {} elements, {:?}",
            data.label,
            data.buffers.len(),
            data.element_count(),
            data.topology
        );

        Self {
            label: data.label,
            fill,
            line,
            streams: data.streams.clone(),
            vertex_buffers,
            index_buffer,
            element_count: data.element_count(),
        }
    }

    /// Replace the buffer contents. The layout (streams, topology, indexed
    /// or not) must match the data the pass was created with.
    pub fn update(&mut self, context: &RenderContext, data: &MeshData) {
        for (buffer, bytes) in self.vertex_buffers.iter_mut().zip(&data.buffers) {
            let _ = buffer.write_bytes(&context.device, &context.queue, bytes);
        }
        if let (Some(buffer), Some(indices)) = (self.index_buffer.as_mut(), data.indices.as_ref()) {
            let _ = buffer.write(&context.device, &context.queue, indices);
        }
        self.element_count = data.element_count();
    }

    /// Elements a full draw covers.
    pub fn element_count(&self) -> u32 {
        self.element_count
    }

    /// Draw `range` (indices for indexed meshes, vertices otherwise).
    ///
    /// Falls back to the filled pipeline when no wireframe pipeline exists.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, range: Range<u32>, fill: FillMode) {
        let range = clamp_range(range, self.element_count);
        if range.is_empty() {
            return;
        }

        let pipeline = match (fill, &self.line) {
            (FillMode::Wireframe, Some(line)) => line,
            _ => &self.fill,
        };
        pass.set_pipeline(pipeline);
        for (slot, stream) in self.streams.iter().enumerate() {
            let buffer = self.vertex_buffers[stream.buffer].buffer();
            pass.set_vertex_buffer(slot as u32, buffer.slice(stream.offset..));
        }
        match &self.index_buffer {
            Some(indices) => {
                pass.set_index_buffer(indices.buffer().slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(range, 0, 0..1);
            }
            None => pass.draw(range, 0..1),
        }
    }

    /// Label given at creation.
    pub fn label(&self) -> &'static str {
        self.label
    }
}
