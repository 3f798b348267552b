//! Standalone demo window backed by winit.
//!
//! ```no_run
//! # use vao_demos::{demo::Boid, Viewer};
//! Viewer::builder()
//!     .with_title("Boid")
//!     .build()
//!     .run(Boid::default())
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    camera::{Camera, CameraController, KeyResponse},
    demo::Demo,
    error::DemoError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    renderer::SceneRenderer,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Fixed window title instead of the demo's own.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window running one [`Demo`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: Option<String>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run `demo` until the window closes or a quit
    /// key is pressed.
    ///
    /// # Errors
    ///
    /// [`DemoError::Viewer`] if the event loop can't start, or whatever
    /// went wrong bringing up the window, GPU, or demo meshes.
    pub fn run<D: Demo>(self, demo: D) -> Result<(), DemoError> {
        let event_loop = EventLoop::new().map_err(|e| DemoError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            controller: CameraController::from_options(&self.options.camera),
            input: InputProcessor::with_key_bindings(self.options.keybindings.clone()),
            demo,
            options: self.options,
            fixed_title: self.title,
            shown_title: String::new(),
            gpu: None,
            next_tick: None,
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DemoError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// What to do after a render attempt. Anything but `Presented` retries on
/// the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameRecovery {
    Presented,
    Reconfigure,
    Skip,
}

fn frame_recovery(result: &Result<(), wgpu::SurfaceError>) -> FrameRecovery {
    match result {
        Ok(()) => FrameRecovery::Presented,
        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => FrameRecovery::Reconfigure,
        Err(_) => FrameRecovery::Skip,
    }
}

/// Everything that only exists once the window is up.
struct Gpu {
    window: Arc<Window>,
    context: RenderContext,
    renderer: SceneRenderer,
    camera: Camera,
}

struct ViewerApp<D> {
    demo: D,
    options: Options,
    controller: CameraController,
    input: InputProcessor,
    fixed_title: Option<String>,
    shown_title: String,
    gpu: Option<Gpu>,
    next_tick: Option<Instant>,
    startup_error: Option<DemoError>,
}

impl<D: Demo> ViewerApp<D> {
    fn title(&self) -> String {
        self.fixed_title.clone().unwrap_or_else(|| self.demo.title())
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<Gpu, DemoError> {
        self.shown_title = self.title();
        let attrs = Window::default_attributes()
            .with_title(&self.shown_title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| DemoError::Viewer(e.to_string()))?,
        );

        let inner = window.inner_size();
        let (width, height) = (inner.width.max(1), inner.height.max(1));
        let context = pollster::block_on(RenderContext::new(
            window.clone(),
            (width, height),
            &self.options.window,
        ))?;
        let mut renderer = SceneRenderer::new(&context, &self.options)?;
        self.demo.build(&mut renderer, &context)?;

        let camera = Camera::new(
            self.demo.eye(),
            width as f32 / height as f32,
            &self.options.camera,
        );
        log::info!(
            "{}: {width}x{height}, {}x MSAA",
            self.shown_title,
            context.sample_count
        );

        Ok(Gpu {
            window,
            context,
            renderer,
            camera,
        })
    }

    fn redraw(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let mouse = self.controller.compute_transform();
        let draws = self.demo.draw_calls();
        let result = gpu.renderer.render(&gpu.context, &gpu.camera, &mouse, &draws);
        match frame_recovery(&result) {
            FrameRecovery::Presented => return,
            FrameRecovery::Reconfigure => gpu.context.reconfigure(),
            FrameRecovery::Skip => {
                if let Err(e) = result {
                    log::error!("render error: {e}");
                }
            }
        }
        // Wait-mode demos get no other wakeup to retry the frame.
        gpu.window.request_redraw();
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.context.resize(width, height);
            gpu.camera.set_viewport(width, height);
            gpu.window.request_redraw();
        }
    }

    fn pointer(&mut self, event: InputEvent) {
        if self.input.handle_event(event, &mut self.controller) {
            self.request_redraw();
        }
    }

    fn key(&mut self, event_loop: &ActiveEventLoop, key: &str) {
        if !self.demo.handle_key(key) {
            match self.input.handle_key_press(key, &mut self.controller) {
                Some(KeyResponse::Exit) => event_loop.exit(),
                Some(KeyResponse::SetFillMode(mode)) => {
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.renderer.set_fill_mode(mode);
                    }
                }
                Some(KeyResponse::SetFullscreen(on)) => {
                    if let Some(gpu) = &self.gpu {
                        gpu.window
                            .set_fullscreen(on.then_some(Fullscreen::Borderless(None)));
                    }
                }
                Some(KeyResponse::Redraw) | None => {}
            }
        }
        // Every key press repaints, bound or not.
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }

    fn schedule_tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let flow = match self.demo.tick_interval() {
            None => {
                self.next_tick = None;
                ControlFlow::Wait
            }
            Some(interval) if interval.is_zero() => {
                if self.demo.tick(&mut gpu.renderer, &gpu.context) {
                    gpu.window.request_redraw();
                }
                ControlFlow::Poll
            }
            Some(interval) => {
                let now = Instant::now();
                let due = *self.next_tick.get_or_insert(now + interval);
                if now >= due {
                    if self.demo.tick(&mut gpu.renderer, &gpu.context) {
                        gpu.window.request_redraw();
                    }
                    self.next_tick = Some(now + interval);
                }
                ControlFlow::WaitUntil(self.next_tick.unwrap_or(now + interval))
            }
        };
        event_loop.set_control_flow(flow);
    }

    fn refresh_title(&mut self) {
        let title = self.title();
        if title != self.shown_title {
            if let Some(gpu) = &self.gpu {
                gpu.window.set_title(&title);
            }
            self.shown_title = title;
        }
    }
}

impl<D: Demo> ApplicationHandler for ViewerApp<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(gpu) => {
                gpu.window.request_redraw();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                log::error!("failed to start: {e}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        if self.gpu.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(inner) = self.gpu.as_ref().map(|g| g.window.inner_size()) {
                    self.resize(inner.width, inner.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.pointer(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (horizontal, vertical) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                self.pointer(InputEvent::Scroll {
                    horizontal,
                    vertical,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.key(event_loop, &format!("{code:?}"));
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.schedule_tick(event_loop);
        self.refresh_title();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("closing {}", self.shown_title);
    }
}
