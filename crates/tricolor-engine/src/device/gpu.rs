use anyhow::{Context, anyhow};

use super::surface::{choose_alpha_mode, choose_surface_format, surface_config};
use super::{AdapterSummary, GpuSettings, GraphicsBackend, RenderError, WgpuFrame};
use crate::render::PassDesc;
use crate::triangle::{PipelineDesc, ShaderSource};

/// Logical device and its command queue.
pub struct WgpuDevice {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// [`GraphicsBackend`] on top of wgpu.
///
/// Owns the instance and the surface. The surface is created from the target
/// during adapter acquisition so the adapter can be checked against it.
pub struct WgpuBackend<'w> {
    /// wgpu instance used to create the adapter and surface.
    instance: wgpu::Instance,

    /// Display target not yet turned into a surface.
    target: Option<wgpu::SurfaceTarget<'w>>,

    /// Surface bound to the target.
    ///
    /// Surface lifetime is tied to the target; the window or canvas must
    /// outlive the backend.
    surface: Option<wgpu::Surface<'w>>,

    /// Drawable size in physical pixels.
    size: (u32, u32),

    settings: GpuSettings,
}

impl<'w> WgpuBackend<'w> {
    /// Creates a backend for `target` (a window or a canvas).
    ///
    /// No GPU work happens here; the instance is cheap to create.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        size: (u32, u32),
        settings: GpuSettings,
    ) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: settings.backends,
            ..Default::default()
        });

        Self {
            instance,
            target: Some(target.into()),
            surface: None,
            size,
            settings,
        }
    }

    fn surface(&self) -> anyhow::Result<&wgpu::Surface<'w>> {
        self.surface
            .as_ref()
            .context("surface used before adapter acquisition")
    }
}

impl<'w> GraphicsBackend for WgpuBackend<'w> {
    type Adapter = wgpu::Adapter;
    type Device = WgpuDevice;
    type ShaderModule = wgpu::ShaderModule;
    type Buffer = wgpu::Buffer;
    type Pipeline = wgpu::RenderPipeline;
    type Frame = WgpuFrame;

    async fn probe_support(&mut self) -> bool {
        let backends = self.settings.backends;

        #[cfg(target_arch = "wasm32")]
        if backends.contains(wgpu::Backends::BROWSER_WEBGPU) {
            return wgpu::util::is_browser_webgpu_supported().await;
        }

        let compiled = wgpu::Instance::enabled_backend_features();
        log::debug!("wgpu backends compiled in: {compiled:?}, requested: {backends:?}");
        compiled.intersects(backends)
    }

    async fn request_adapter(&mut self) -> Result<Option<wgpu::Adapter>, RenderError> {
        let target = self
            .target
            .take()
            .ok_or_else(|| anyhow!("surface target already consumed"))?;

        let surface = self
            .instance
            .create_surface(target)
            .context("failed to create wgpu surface")?;

        let adapter = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.settings.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await;

        self.surface = Some(surface);

        match adapter {
            Ok(adapter) => Ok(Some(adapter)),
            Err(e) => {
                log::debug!("adapter request failed: {e}");
                Ok(None)
            }
        }
    }

    fn describe_adapter(&self, adapter: &wgpu::Adapter) -> AdapterSummary {
        AdapterSummary::from_info(&adapter.get_info())
    }

    async fn request_device(
        &mut self,
        adapter: &wgpu::Adapter,
    ) -> Result<WgpuDevice, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tricolor device"),
                required_features: self.settings.required_features,
                required_limits: self.settings.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(WgpuDevice { device, queue })
    }

    fn set_surface_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn configure_surface(
        &mut self,
        adapter: &wgpu::Adapter,
        device: &WgpuDevice,
    ) -> Result<wgpu::TextureFormat, RenderError> {
        let surface = self.surface()?;
        let caps = surface.get_capabilities(adapter);

        let format = choose_surface_format(&caps.formats, self.settings.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes, self.settings.alpha_mode);

        let config = surface_config(&self.settings, format, alpha_mode, self.size);

        surface.configure(&device.device, &config);
        log::debug!(
            "surface configured: {format:?}, {alpha_mode:?}, {}x{}",
            config.width,
            config.height
        );

        Ok(format)
    }

    fn create_shader_module(
        &mut self,
        device: &WgpuDevice,
        source: &ShaderSource,
    ) -> wgpu::ShaderModule {
        device.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(source.label),
            source: wgpu::ShaderSource::Wgsl(source.wgsl.into()),
        })
    }

    fn create_vertex_buffer(&mut self, device: &WgpuDevice, contents: &[u8]) -> wgpu::Buffer {
        let buffer = device.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tricolor vertex buffer"),
            size: contents.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        device.queue.write_buffer(&buffer, 0, contents);
        buffer
    }

    fn create_pipeline(
        &mut self,
        device: &WgpuDevice,
        module: &wgpu::ShaderModule,
        desc: &PipelineDesc,
    ) -> wgpu::RenderPipeline {
        device.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            // Derived from the shader.
            layout: None,

            vertex: wgpu::VertexState {
                module,
                entry_point: Some(desc.vertex_entry),
                compilation_options: Default::default(),
                buffers: std::slice::from_ref(&desc.vertex_layout),
            },

            fragment: Some(wgpu::FragmentState {
                module,
                entry_point: Some(desc.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.target_format,
                    blend: desc.blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    fn begin_frame(&mut self, device: &WgpuDevice) -> Result<WgpuFrame, RenderError> {
        let surface_texture = self
            .surface()?
            .get_current_texture()
            .context("failed to acquire surface texture")?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = device
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tricolor frame encoder"),
            });

        Ok(WgpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    fn encode_pass(
        &mut self,
        frame: &mut WgpuFrame,
        pass: &PassDesc,
        pipeline: &wgpu::RenderPipeline,
        vertex_buffer: &wgpu::Buffer,
    ) {
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(pass.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(pass.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(pass.vertices.clone(), 0..1);
    }

    fn submit(&mut self, device: &WgpuDevice, frame: WgpuFrame) {
        let WgpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;

        device.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }
}
