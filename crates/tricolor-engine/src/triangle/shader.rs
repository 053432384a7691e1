/// WGSL source plus the entry points the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    pub label: &'static str,
    pub wgsl: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
}

/// Unlit pass-through shading: position goes straight to clip space, the
/// vertex color is interpolated and written out.
pub const TRIANGLE_SHADER: ShaderSource = ShaderSource {
    label: "tricolor triangle shader",
    wgsl: include_str!("shaders/triangle.wgsl"),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
};
