use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{GpuSettings, GraphicsBackend, WgpuBackend};
use crate::render::{Scene, render_once};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tricolor".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, renders once on the first redraw and waits for close.
    ///
    /// A render failure closes the window and is returned here.
    pub fn run(config: RuntimeConfig, settings: GpuSettings) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, settings);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Backend bound to a window plus whatever the one render produced.
struct Presenter<B: GraphicsBackend> {
    backend: B,
    scene: Option<Scene<B>>,
}

impl<B: GraphicsBackend> Presenter<B> {
    fn new(backend: B) -> Self {
        Self {
            backend,
            scene: None,
        }
    }

    /// Tracks the drawable size until the frame is rendered.
    fn resize(&mut self, width: u32, height: u32) {
        if self.scene.is_none() {
            self.backend.set_surface_size(width, height);
        }
    }

    fn render(&mut self) -> Result<()> {
        if self.scene.is_some() {
            return Ok(());
        }

        let scene = pollster::block_on(render_once(&mut self.backend))
            .context("failed to render triangle")?;
        self.scene = Some(scene);
        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[not_covariant]
    presenter: Presenter<WgpuBackend<'this>>,
}

struct AppState {
    config: RuntimeConfig,
    settings: GpuSettings,

    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, settings: GpuSettings) -> Self {
        Self {
            config,
            settings,
            entry: None,
            failure: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let settings = self.settings.clone();

        let entry = WindowEntryBuilder {
            window,
            presenter_builder: |w| {
                let size = w.inner_size();
                Presenter::new(WgpuBackend::new(w, (size.width, size.height), settings))
            },
        }
        .build();

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.entry = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = entry.with_presenter_mut(|p| p.render()) {
                    self.fail(event_loop, e);
                }
            }

            // The frame is drawn once; later size changes are not re-rendered.
            WindowEvent::Resized(size) => {
                log::debug!("window resized to {}x{}", size.width, size.height);
                entry.with_presenter_mut(|p| p.resize(size.width, size.height));
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingBackend;

    #[test]
    fn resize_before_first_redraw_reaches_surface_configuration() {
        let mut presenter = Presenter::new(RecordingBackend::working());

        presenter.resize(1920, 1080);
        presenter.render().expect("render");

        assert_eq!(presenter.backend.configured_sizes(), vec![(1920, 1080)]);
    }

    #[test]
    fn resize_after_render_leaves_frame_alone() {
        let mut presenter = Presenter::new(RecordingBackend::working());
        presenter.render().expect("render");

        presenter.resize(800, 600);
        presenter.render().expect("second redraw");

        assert_eq!(presenter.backend.size, (640, 480));
        assert_eq!(presenter.backend.configured_sizes(), vec![(640, 480)]);
    }
}
