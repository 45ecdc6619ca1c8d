use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{ButtonState, InputEvent, InputFrame, InputState, Key};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Close the window when Escape is pressed.
    pub exit_on_escape: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "primitives".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            exit_on_escape: true,
        }
    }
}

impl RuntimeConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    ///
    /// Fails when the window or GPU context cannot be created, or when the
    /// surface is lost beyond recovery.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => {
                log::info!("runtime finished");
                Ok(())
            }
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    /// First unrecoverable error; reported by `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self { config, gpu_init, app, entry: None, exit_requested: false, fatal: None }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.exit(event_loop);
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        // Dropping the entry releases the surface before the window goes away.
        self.entry = None;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            input_state: InputState { focused: true, ..InputState::default() },
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    /// Runs one frame. Returns `Err` when the surface died.
    fn redraw(&mut self) -> Result<AppControl> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(AppControl::Continue);
        };
        let app = &mut self.app;

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let (control, surface_fatal) = {
                let mut ctx = FrameCtx::new(fields.window, fields.gpu, fields.input_state, fields.input_frame, time);
                let control = app.on_frame(&mut ctx);
                (control, ctx.surface_fatal)
            };
            fields.input_frame.clear();

            if surface_fatal {
                return Err(anyhow!("GPU surface lost beyond recovery"));
            }
            Ok(control)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                log::info!("window \"{}\" ready", self.config.title);
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Exercises animate every frame.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        let Some(entry) = self.entry.as_mut() else { return };

        let mut escape = false;
        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, fields.input_state, &event) {
                escape = matches!(ev, InputEvent::Key { key: Key::Escape, state: ButtonState::Pressed, .. });
                fields.input_state.apply_event(fields.input_frame, ev);
            }
        });

        if escape && self.config.exit_on_escape {
            log::info!("escape pressed, exiting");
            self.exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.exit(event_loop),

            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{}", new_size.width, new_size.height);
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.exit(event_loop),
                Err(err) => self.fail(event_loop, err),
            },

            _ => {}
        }
    }
}
