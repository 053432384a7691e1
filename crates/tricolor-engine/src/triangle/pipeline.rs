use super::{ShaderSource, Vertex};

/// Static description of the render pipeline.
///
/// Consumed once by the backend's pipeline creation. The pipeline layout is
/// always derived from the shader.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDesc {
    pub label: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
    pub target_format: wgpu::TextureFormat,
    /// `None` writes fragments unblended.
    pub blend: Option<wgpu::BlendState>,
    pub topology: wgpu::PrimitiveTopology,
}

impl PipelineDesc {
    /// Pipeline for [`TRIANGLE_VERTICES`](super::TRIANGLE_VERTICES) drawn with `shader`
    /// into a `target_format` surface.
    pub fn triangle(shader: &ShaderSource, target_format: wgpu::TextureFormat) -> Self {
        Self {
            label: "tricolor triangle pipeline",
            vertex_entry: shader.vertex_entry,
            fragment_entry: shader.fragment_entry,
            vertex_layout: Vertex::layout(),
            target_format,
            blend: None,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }
}
