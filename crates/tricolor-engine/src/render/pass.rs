use std::ops::Range;

/// Background the pass clears to.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.5,
    b: 1.0,
    a: 1.0,
};

/// The single render pass: clear, then draw a vertex range.
#[derive(Debug, Clone, PartialEq)]
pub struct PassDesc {
    pub label: &'static str,
    pub clear_color: wgpu::Color,
    pub vertices: Range<u32>,
}

impl PassDesc {
    pub fn triangle() -> Self {
        Self {
            label: "tricolor triangle pass",
            clear_color: CLEAR_COLOR,
            vertices: 0..3,
        }
    }
}
