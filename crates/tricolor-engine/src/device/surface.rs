use super::GpuSettings;

/// Picks the surface texture format.
///
/// With `prefer_srgb`, the first supported sRGB candidate wins. Otherwise the
/// first reported format is used; backends list their preferred format first.
pub fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

/// Picks the composite alpha mode: the requested one if supported, else the
/// first supported, else `Auto`.
pub fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Builds the surface configuration for a drawable of `size` physical pixels.
///
/// wgpu rejects a 0x0 surface; each dimension is clamped to at least 1.
pub(crate) fn surface_config(
    settings: &GpuSettings,
    format: wgpu::TextureFormat,
    alpha_mode: wgpu::CompositeAlphaMode,
    size: (u32, u32),
) -> wgpu::SurfaceConfiguration {
    let (width, height) = size;
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: settings.present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: settings.desired_maximum_frame_latency,
    }
}
