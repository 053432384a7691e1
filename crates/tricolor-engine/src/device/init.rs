/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuSettings {
    /// Backends the instance may use.
    pub backends: wgpu::Backends,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: the platform's preferred (usually non-sRGB) format keeps
    /// the clear color and vertex colors unconverted.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuSettings {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::PreMultiplied),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuSettings {
    /// Defaults for a browser canvas: WebGPU only, downlevel limits.
    pub fn web() -> Self {
        Self {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            required_limits: wgpu::Limits::downlevel_defaults(),
            ..Self::default()
        }
    }

    /// Applies wgpu's `WGPU_BACKEND` and `WGPU_POWER_PREF` overrides.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Returns `self` with any environment overrides applied on top.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(backends) = wgpu::Backends::from_env() {
            log::debug!("WGPU_BACKEND override: {backends:?}");
            self.backends = backends;
        }
        if let Some(power_preference) = wgpu::PowerPreference::from_env() {
            log::debug!("WGPU_POWER_PREF override: {power_preference:?}");
            self.power_preference = power_preference;
        }
        self
    }
}
