use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: clip-space position then straight RGBA color.
///
/// Layout is fixed at 8 packed `f32`s (32 bytes): position at offset 0,
/// color at offset 16.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x4, // position
        1 => Float32x4  // color
    ];

    pub const STRIDE: u64 = std::mem::size_of::<Vertex>() as u64;

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Top red, bottom-left green, bottom-right blue.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex {
        position: [0.0, 0.6, 0.0, 1.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Vertex {
        position: [-0.5, -0.6, 0.0, 1.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.5, -0.6, 0.0, 1.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [f32; 24] = [
        0.0, 0.6, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, //
        -0.5, -0.6, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, //
        0.5, -0.6, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0,
    ];

    #[test]
    fn stride_is_eight_floats() {
        assert_eq!(Vertex::STRIDE, 32);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn attributes_follow_interleaved_layout() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let attrs: Vec<_> = layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset, a.format))
            .collect();
        assert_eq!(
            attrs,
            vec![
                (0, 0, wgpu::VertexFormat::Float32x4),
                (1, 16, wgpu::VertexFormat::Float32x4),
            ]
        );
    }

    #[test]
    fn vertices_flatten_to_fixed_float_array() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(floats, &EXPECTED[..]);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn vertex_bytes_are_packed_little_endian() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        let expected: Vec<u8> = EXPECTED.iter().flat_map(|f| f.to_le_bytes()).collect();
        assert_eq!(bytes.len(), 96);
        assert_eq!(bytes, expected.as_slice());
    }
}
