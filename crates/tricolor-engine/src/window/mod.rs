//! Native host.
//!
//! Owns the `winit` EventLoop and the single Window, binds a wgpu backend to
//! it and renders the triangle once.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
