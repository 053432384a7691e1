//! Tricolor engine crate.
//!
//! Renders one colored triangle through wgpu: capability probe, adapter,
//! device, surface, shader module, vertex buffer, pipeline, one draw, one
//! submit. The GPU calls sit behind [`device::GraphicsBackend`] so the
//! sequence can be driven against a recording backend in tests.

pub mod device;
pub mod logging;
pub mod render;
pub mod triangle;

#[cfg(not(target_arch = "wasm32"))]
pub mod window;

#[cfg(target_arch = "wasm32")]
pub mod web;
