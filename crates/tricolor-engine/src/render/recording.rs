//! In-memory [`GraphicsBackend`] that records every call, for tests.

use crate::device::{AdapterSummary, GraphicsBackend, RenderError};
use crate::render::PassDesc;
use crate::triangle::{PipelineDesc, ShaderSource};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ProbeSupport,
    RequestAdapter,
    RequestDevice,
    ConfigureSurface { width: u32, height: u32 },
    CreateShaderModule(ShaderSource),
    CreateVertexBuffer(Vec<u8>),
    CreatePipeline(PipelineDesc),
    BeginFrame,
    EncodePass(PassDesc),
    Submit { passes: usize },
}

pub(crate) struct RecordingBackend {
    pub supported: bool,
    pub has_adapter: bool,
    /// Fails adapter acquisition with this message when set.
    pub adapter_error: Option<&'static str>,
    pub format: wgpu::TextureFormat,
    pub size: (u32, u32),
    pub calls: Vec<Call>,
}

impl RecordingBackend {
    pub fn working() -> Self {
        Self {
            supported: true,
            has_adapter: true,
            adapter_error: None,
            format: wgpu::TextureFormat::Bgra8Unorm,
            size: (640, 480),
            calls: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Size of every surface configuration, in order.
    pub fn configured_sizes(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::ConfigureSurface { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }
}

#[derive(Default)]
pub(crate) struct Frame {
    passes: usize,
}

impl GraphicsBackend for RecordingBackend {
    type Adapter = ();
    type Device = ();
    type ShaderModule = ();
    type Buffer = usize;
    type Pipeline = ();
    type Frame = Frame;

    async fn probe_support(&mut self) -> bool {
        self.calls.push(Call::ProbeSupport);
        self.supported
    }

    async fn request_adapter(&mut self) -> Result<Option<()>, RenderError> {
        if let Some(msg) = self.adapter_error {
            return Err(anyhow::anyhow!(msg).into());
        }
        self.calls.push(Call::RequestAdapter);
        Ok(self.has_adapter.then_some(()))
    }

    fn describe_adapter(&self, _adapter: &()) -> AdapterSummary {
        AdapterSummary {
            name: "recording adapter".to_string(),
            vendor: 0,
            device: 0,
            device_type: wgpu::DeviceType::Cpu,
            backend: wgpu::Backend::Noop,
            driver: String::new(),
        }
    }

    async fn request_device(&mut self, _adapter: &()) -> Result<(), RenderError> {
        self.calls.push(Call::RequestDevice);
        Ok(())
    }

    fn set_surface_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn configure_surface(
        &mut self,
        _adapter: &(),
        _device: &(),
    ) -> Result<wgpu::TextureFormat, RenderError> {
        let (width, height) = self.size;
        self.calls.push(Call::ConfigureSurface { width, height });
        Ok(self.format)
    }

    fn create_shader_module(&mut self, _device: &(), source: &ShaderSource) {
        self.calls.push(Call::CreateShaderModule(*source));
    }

    fn create_vertex_buffer(&mut self, _device: &(), contents: &[u8]) -> usize {
        self.calls.push(Call::CreateVertexBuffer(contents.to_vec()));
        contents.len()
    }

    fn create_pipeline(&mut self, _device: &(), _module: &(), desc: &PipelineDesc) {
        self.calls.push(Call::CreatePipeline(desc.clone()));
    }

    fn begin_frame(&mut self, _device: &()) -> Result<Frame, RenderError> {
        self.calls.push(Call::BeginFrame);
        Ok(Frame::default())
    }

    fn encode_pass(
        &mut self,
        frame: &mut Frame,
        pass: &PassDesc,
        _pipeline: &(),
        _vertex_buffer: &usize,
    ) {
        frame.passes += 1;
        self.calls.push(Call::EncodePass(pass.clone()));
    }

    fn submit(&mut self, _device: &(), frame: Frame) {
        self.calls.push(Call::Submit {
            passes: frame.passes,
        });
    }
}
