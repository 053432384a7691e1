//! The render-once sequence.
//!
//! [`render_once`] walks the backend through capability probe, adapter,
//! device, surface, shader, buffer, pipeline and a single submitted pass.
//! Nothing is retried and nothing is redrawn.

mod once;
mod pass;
#[cfg(test)]
pub(crate) mod recording;

pub use once::{Scene, render_once};
pub use pass::{CLEAR_COLOR, PassDesc};
