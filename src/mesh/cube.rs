use super::{MeshData, VertexStream};

/// Corner position followed by colour, six floats per vertex.
#[rustfmt::skip]
pub const VERTICES: [f32; 48] = [
    -1.0,  1.0, -1.0,  1.0, 0.0, 0.0,
     1.0,  1.0, -1.0,  0.0, 1.0, 0.0,
     1.0,  1.0,  1.0,  0.0, 0.0, 1.0,
    -1.0,  1.0,  1.0,  1.0, 1.0, 1.0,
    -1.0, -1.0, -1.0,  0.0, 0.0, 1.0,
     1.0, -1.0, -1.0,  0.0, 1.0, 0.0,
     1.0, -1.0,  1.0,  1.0, 0.0, 0.0,
    -1.0, -1.0,  1.0,  1.0, 1.0, 1.0,
];

/// Byte-wide triangle indices, two per face.
#[rustfmt::skip]
pub const INDICES: [u8; 36] = [
    0, 1, 5, 0, 4, 5, // back
    3, 2, 6, 7, 6, 3, // front
    0, 1, 2, 3, 2, 0, // top
    4, 5, 6, 7, 6, 4, // bottom
    0, 3, 4, 4, 7, 3,
    1, 5, 2, 2, 6, 5,
];

/// Interleaved cube. wgpu has no 8-bit index format, so indices are
/// widened to `u16`.
#[must_use]
pub fn mesh() -> MeshData {
    MeshData {
        label: "Cube",
        buffers: vec![bytemuck::cast_slice(&VERTICES).to_vec()],
        streams: vec![VertexStream::new(
            0,
            24,
            &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        )],
        indices: Some(INDICES.iter().map(|&i| u16::from(i)).collect()),
        vertex_count: (VERTICES.len() / 6) as u32,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_vertices_thirty_six_indices() {
        let mesh = mesh();
        assert_eq!(mesh.vertex_count, 8);
        let indices = mesh.indices.unwrap();
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| i < 8));
    }

    #[test]
    fn corners_sit_on_the_unit_cube() {
        for v in VERTICES.chunks(6) {
            assert!(v[..3].iter().all(|c| c.abs() == 1.0));
        }
    }
}
