use crate::device::{AdapterSummary, GraphicsBackend, RenderError};
use crate::triangle::{PipelineDesc, TRIANGLE_SHADER, TRIANGLE_VERTICES};

use super::PassDesc;

/// GPU objects created by [`render_once`].
///
/// Dropping the scene releases them. Hosts keep it for as long as the frame
/// should stay on screen.
pub struct Scene<B: GraphicsBackend> {
    pub adapter: AdapterSummary,
    pub surface_format: wgpu::TextureFormat,
    pub device: B::Device,
    pub shader: B::ShaderModule,
    pub vertex_buffer: B::Buffer,
    pub pipeline: B::Pipeline,
}

/// Renders the triangle once onto the backend's surface.
///
/// Fails fast with [`RenderError::Unsupported`] before any adapter request and
/// with [`RenderError::NoAdapter`] before any device request. Shader and
/// pipeline problems are reported by the backend's own validation.
pub async fn render_once<B: GraphicsBackend>(backend: &mut B) -> Result<Scene<B>, RenderError> {
    if !backend.probe_support().await {
        return Err(RenderError::Unsupported);
    }

    let adapter = backend
        .request_adapter()
        .await?
        .ok_or(RenderError::NoAdapter)?;

    let summary = backend.describe_adapter(&adapter);
    log::info!(
        "adapter: {} ({:?}, {:?} backend, vendor {:#06x}, device {:#06x}, driver {:?})",
        summary.name,
        summary.device_type,
        summary.backend,
        summary.vendor,
        summary.device,
        summary.driver,
    );

    let device = backend.request_device(&adapter).await?;
    let surface_format = backend.configure_surface(&adapter, &device)?;

    let shader = backend.create_shader_module(&device, &TRIANGLE_SHADER);
    let vertex_buffer =
        backend.create_vertex_buffer(&device, bytemuck::cast_slice(&TRIANGLE_VERTICES));
    let pipeline = backend.create_pipeline(
        &device,
        &shader,
        &PipelineDesc::triangle(&TRIANGLE_SHADER, surface_format),
    );

    let pass = PassDesc::triangle();
    let mut frame = backend.begin_frame(&device)?;
    backend.encode_pass(&mut frame, &pass, &pipeline, &vertex_buffer);
    backend.submit(&device, frame);

    log::debug!("triangle submitted ({} vertices, {surface_format:?})", pass.vertices.len());

    Ok(Scene {
        adapter: summary,
        surface_format,
        device,
        shader,
        vertex_buffer,
        pipeline,
    })
}
