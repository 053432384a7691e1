//! Browser host.
//!
//! Renders into the page's `<canvas id="gpuCanvas">` through WebGPU as soon as
//! the module starts.

use std::cell::RefCell;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::device::{GpuSettings, RenderError, WgpuBackend};
use crate::logging::{LoggingConfig, init_logging};
use crate::render::{Scene, render_once};

/// Element id of the canvas the triangle is drawn into.
pub const CANVAS_ID: &str = "gpuCanvas";

thread_local! {
    /// GPU objects stay alive for the lifetime of the page.
    static LIVE: RefCell<Option<(WgpuBackend<'static>, Scene<WgpuBackend<'static>>)>> =
        const { RefCell::new(None) };
}

/// Main entry point for web - called automatically by wasm-bindgen.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging(LoggingConfig::default());
    log::info!("hello world");

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("{:#}", anyhow::Error::from(e));
        }
    });
}

async fn run() -> Result<(), RenderError> {
    let canvas = locate_canvas(CANVAS_ID)?;
    let size = (canvas.width(), canvas.height());
    log::debug!("canvas #{CANVAS_ID}: {}x{}", size.0, size.1);

    let target = wgpu::SurfaceTarget::Canvas(canvas);
    let mut backend = WgpuBackend::new(target, size, GpuSettings::web());
    let scene = render_once(&mut backend).await?;

    LIVE.with(|live| *live.borrow_mut() = Some((backend, scene)));
    Ok(())
}

fn locate_canvas(id: &str) -> anyhow::Result<web_sys::HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document exists")?;

    document
        .get_element_by_id(id)
        .with_context(|| format!("no element with id `{id}`"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| anyhow!("element `{id}` is not a canvas"))
}
