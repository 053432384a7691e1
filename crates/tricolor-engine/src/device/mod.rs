//! GPU device + surface management.
//!
//! This module is responsible for:
//! - the backend seam the render sequence is written against
//! - the wgpu implementation of that seam (Instance/Adapter/Device/Queue/Surface)
//! - surface format and alpha-mode selection
//! - the error kinds surfaced by initialization

mod backend;
mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use backend::{AdapterSummary, GraphicsBackend};
pub use error::RenderError;
pub use frame::WgpuFrame;
pub use gpu::{WgpuBackend, WgpuDevice};
pub use init::GpuSettings;
pub use surface::{choose_alpha_mode, choose_surface_format};
