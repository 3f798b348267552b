//! CPU-side mesh data: constant geometry tables and generators, with the
//! vertex layout each one is uploaded with.
//!
//! A [`MeshData`] is the CPU half of a vertex-array object: one or more raw
//! byte buffers, the attribute streams that read from them, and optional
//! `u16` indices. [`SceneRenderer::add_mesh`](crate::renderer::SceneRenderer::add_mesh)
//! turns it into GPU buffers.

/// The triangular "boid" shape, flat and with face normals.
pub mod boid;
/// Indexed cube with per-vertex colour.
pub mod cube;
/// Indexed icosahedron with per-vertex colour.
pub mod icosahedron;
/// Random line cloud.
pub mod point_cloud;
/// UV sphere as a single triangle strip.
pub mod sphere;

use std::ops::Range;

/// One vertex-buffer slot: where in which buffer its data starts, the
/// stride, and the shader locations it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStream {
    /// Index into [`MeshData::buffers`].
    pub buffer: usize,
    /// Byte offset of the first element.
    pub offset: u64,
    /// Bytes between consecutive elements.
    pub stride: u64,
    /// Attributes read per element; offsets are relative to the element.
    pub attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexStream {
    /// Stream reading the whole of `buffer` from byte 0.
    #[must_use]
    pub fn new(buffer: usize, stride: u64, attributes: &[wgpu::VertexAttribute]) -> Self {
        Self {
            buffer,
            offset: 0,
            stride,
            attributes: attributes.to_vec(),
        }
    }

    /// Same stream starting `offset` bytes into its buffer.
    #[must_use]
    pub fn at_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// The wgpu layout for pipeline creation.
    pub fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

/// Everything needed to build GPU buffers for one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Debug label for the GPU buffers.
    pub label: &'static str,
    /// Raw vertex buffers.
    pub buffers: Vec<Vec<u8>>,
    /// Attribute streams, one per vertex-buffer slot.
    pub streams: Vec<VertexStream>,
    /// Triangle/line indices, if the mesh is indexed.
    pub indices: Option<Vec<u16>>,
    /// Number of vertices each stream supplies.
    pub vertex_count: u32,
    /// How vertices are assembled.
    pub topology: wgpu::PrimitiveTopology,
}

impl MeshData {
    /// Indices drawn by a full draw: the index count for indexed meshes,
    /// the vertex count otherwise.
    #[must_use]
    pub fn element_count(&self) -> u32 {
        self.indices
            .as_ref()
            .map_or(self.vertex_count, |i| i.len() as u32)
    }
}

/// `range` clamped to `0..count`.
#[must_use]
pub fn clamp_range(range: Range<u32>, count: u32) -> Range<u32> {
    let end = range.end.min(count);
    range.start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_range_stays_inside_mesh() {
        assert_eq!(clamp_range(0..9, 60), 0..9);
        assert_eq!(clamp_range(57..63, 60), 57..60);
        assert_eq!(clamp_range(70..73, 60), 60..60);
    }

    #[test]
    fn element_count_prefers_indices() {
        assert_eq!(icosahedron::mesh().element_count(), 60);
        assert_eq!(boid::mesh().element_count(), 12);
    }
}
