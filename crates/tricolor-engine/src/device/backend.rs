use std::future::Future;

use super::RenderError;
use crate::render::PassDesc;
use crate::triangle::{PipelineDesc, ShaderSource};

/// Human-readable description of the selected adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterSummary {
    pub name: String,
    pub vendor: u32,
    pub device: u32,
    pub device_type: wgpu::DeviceType,
    pub backend: wgpu::Backend,
    pub driver: String,
}

impl AdapterSummary {
    pub fn from_info(info: &wgpu::AdapterInfo) -> Self {
        Self {
            name: info.name.clone(),
            vendor: info.vendor,
            device: info.device,
            device_type: info.device_type,
            backend: info.backend,
            driver: info.driver.clone(),
        }
    }
}

/// The graphics API as seen by the render sequence.
///
/// One method per step, in call order. Handles are opaque to the caller and
/// owned by whoever holds them; nothing is released explicitly.
pub trait GraphicsBackend {
    type Adapter;
    type Device;
    type ShaderModule;
    type Buffer;
    type Pipeline;
    type Frame;

    /// Resolves to `false` when the graphics API is unusable here.
    fn probe_support(&mut self) -> impl Future<Output = bool>;

    /// Resolves to `Ok(None)` when the runtime has no suitable adapter.
    fn request_adapter(
        &mut self,
    ) -> impl Future<Output = Result<Option<Self::Adapter>, RenderError>>;

    fn describe_adapter(&self, adapter: &Self::Adapter) -> AdapterSummary;

    fn request_device(
        &mut self,
        adapter: &Self::Adapter,
    ) -> impl Future<Output = Result<Self::Device, RenderError>>;

    /// Records the drawable size the surface is configured with.
    ///
    /// Takes effect at the next [`configure_surface`](Self::configure_surface).
    fn set_surface_size(&mut self, width: u32, height: u32);

    /// Binds the surface to `device`; returns the chosen texture format.
    fn configure_surface(
        &mut self,
        adapter: &Self::Adapter,
        device: &Self::Device,
    ) -> Result<wgpu::TextureFormat, RenderError>;

    fn create_shader_module(
        &mut self,
        device: &Self::Device,
        source: &ShaderSource,
    ) -> Self::ShaderModule;

    /// Allocates a vertex buffer sized to `contents` and uploads them.
    fn create_vertex_buffer(&mut self, device: &Self::Device, contents: &[u8]) -> Self::Buffer;

    fn create_pipeline(
        &mut self,
        device: &Self::Device,
        module: &Self::ShaderModule,
        desc: &PipelineDesc,
    ) -> Self::Pipeline;

    /// Acquires the surface texture and opens a command encoder.
    fn begin_frame(&mut self, device: &Self::Device) -> Result<Self::Frame, RenderError>;

    /// Records one render pass: clear, bind, draw `pass.vertices`.
    fn encode_pass(
        &mut self,
        frame: &mut Self::Frame,
        pass: &PassDesc,
        pipeline: &Self::Pipeline,
        vertex_buffer: &Self::Buffer,
    );

    /// Submits the recorded commands and presents the frame.
    fn submit(&mut self, device: &Self::Device, frame: Self::Frame);
}
