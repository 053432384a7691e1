//! The fixed triangle: vertex data, shader pair and pipeline description.
//!
//! Everything here is inert data. Nothing touches the GPU; backends turn
//! these descriptions into wgpu objects.

mod pipeline;
mod shader;
mod vertex;

pub use pipeline::PipelineDesc;
pub use shader::{ShaderSource, TRIANGLE_SHADER};
pub use vertex::{TRIANGLE_VERTICES, Vertex};
