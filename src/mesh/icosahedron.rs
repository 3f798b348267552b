use super::{MeshData, VertexStream};
use crate::math::Vec3;

const A: f32 = 0.262_865;
const B: f32 = 0.425_325;

/// Twelve vertices on the three golden rectangles.
pub const POSITIONS: [Vec3; 12] = [
    Vec3::new(-A, 0.0, B),
    Vec3::new(A, 0.0, B),
    Vec3::new(-A, 0.0, -B),
    Vec3::new(A, 0.0, -B),
    Vec3::new(0.0, B, A),
    Vec3::new(0.0, B, -A),
    Vec3::new(0.0, -B, A),
    Vec3::new(0.0, -B, -A),
    Vec3::new(B, A, 0.0),
    Vec3::new(-B, A, 0.0),
    Vec3::new(B, -A, 0.0),
    Vec3::new(-B, -A, 0.0),
];

/// One colour per vertex.
pub const COLOURS: [Vec3; 12] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.55, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.29, 0.51, 0.0),
    Vec3::new(0.5, 0.0, 0.5),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.12, 0.56, 1.0),
    Vec3::new(0.86, 0.08, 0.24),
];

/// Twenty triangles.
pub const INDICES: [u16; 60] = [
    0, 6, 1, 0, 11, 6, 1, 4, 0, 1, 8, 4, 1, 10, 8, 2, 5, 3, 2, 9, 5, 2, 11, 9, 3, 7, 2, 3, 10,
    7, 4, 8, 5, 4, 9, 0, 5, 8, 3, 5, 9, 4, 6, 10, 1, 6, 11, 7, 7, 10, 6, 7, 11, 2, 8, 10, 3, 9,
    11, 0,
];

/// Position and colour interleaved in one buffer, 24-byte stride.
#[must_use]
pub fn mesh() -> MeshData {
    let interleaved: Vec<Vec3> = POSITIONS
        .iter()
        .zip(COLOURS.iter())
        .flat_map(|(p, c)| [*p, *c])
        .collect();

    MeshData {
        label: "Icosahedron",
        buffers: vec![bytemuck::cast_slice(&interleaved).to_vec()],
        streams: vec![VertexStream::new(
            0,
            24,
            &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        )],
        indices: Some(INDICES.to_vec()),
        vertex_count: POSITIONS.len() as u32,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Positions and colours in two separate buffers, one stream each.
#[must_use]
pub fn multi_buffer_mesh() -> MeshData {
    MeshData {
        label: "Multi-Buffer Icosahedron",
        buffers: vec![
            bytemuck::cast_slice(&POSITIONS).to_vec(),
            bytemuck::cast_slice(&COLOURS).to_vec(),
        ],
        streams: vec![
            VertexStream::new(0, 12, &wgpu::vertex_attr_array![0 => Float32x3]),
            VertexStream::new(1, 12, &wgpu::vertex_attr_array![1 => Float32x3]),
        ],
        indices: Some(INDICES.to_vec()),
        vertex_count: POSITIONS.len() as u32,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_reference_existing_vertices() {
        assert!(INDICES.iter().all(|&i| (i as usize) < POSITIONS.len()));
    }

    #[test]
    fn every_vertex_is_used_by_five_triangles() {
        for v in 0..POSITIONS.len() as u16 {
            assert_eq!(INDICES.iter().filter(|&&i| i == v).count(), 5, "vertex {v}");
        }
    }

    #[test]
    fn vertices_share_one_radius() {
        let r = POSITIONS[0].length();
        for p in POSITIONS {
            assert!((p.length() - r).abs() < 1e-5);
        }
    }

    #[test]
    fn both_layouts_carry_the_same_bytes() {
        let interleaved = mesh();
        let split = multi_buffer_mesh();
        assert_eq!(interleaved.buffers[0].len(), 12 * 24);
        assert_eq!(
            split.buffers.iter().map(Vec::len).sum::<usize>(),
            interleaved.buffers[0].len()
        );
        assert_eq!(split.indices, interleaved.indices);
    }
}
