//! The application scaffold: window, input, clock, and a [`Game`] driver.

use std::sync::Arc;

use crate::{Clock, Error, EventPhase, Input, Renderer, RendererEvents, Wgpu};

/// A game's lifecycle hooks.  `update` runs at a fixed timestep; `render`
/// runs once per redraw and is responsible for the frame's
/// `clear`/`draw`/`present` sequence.
pub trait Game: Sized + 'static {
    fn new(app: &mut App) -> Self;
    fn update(&mut self, app: &mut App, dt: f32);
    fn render(&mut self, app: &mut App);
}

/// Owns the window, renderer, and input sampler, and drives a [`Game`].
pub struct App {
    pub renderer: Renderer,
    pub input: Input,
    window: Arc<winit::window::Window>,
    event_loop: Option<winit::event_loop::EventLoop<()>>,
}

impl App {
    const DT: f32 = 1.0 / 60.0;
    const DT_FUDGE: f32 = 0.0002;
    const MAX_STEPS_PER_TICK: usize = 5;

    /// Build the window and renderer (logging via `env_logger`), then run
    /// `G` until the window closes.
    pub fn run<G: Game>(builder: winit::window::WindowBuilder) -> Result<(), Error> {
        env_logger::init();
        let event_loop = winit::event_loop::EventLoop::new()?;
        let window = Arc::new(builder.build(&event_loop)?);
        let size = window.inner_size();
        let instance = Arc::new(wgpu::Instance::default());
        let surface = instance.create_surface(window.clone())?;
        let gpu = pollster::block_on(Wgpu::new(instance, Some(&surface)))?;
        let renderer = Renderer::with_gpu(size.width, size.height, gpu, surface);
        let app = Self {
            renderer,
            input: Input::default(),
            window,
            event_loop: Some(event_loop),
        };
        app.go::<G>()
    }

    fn go<G: Game>(mut self) -> Result<(), Error> {
        let mut clock = Clock::new(Self::DT, Self::DT_FUDGE, Self::MAX_STEPS_PER_TICK);
        let mut game = G::new(&mut self);
        let event_loop = self.event_loop.take().expect("event loop already taken");
        event_loop.run(move |event, target| {
            match self.renderer.handle_event(
                &mut clock,
                &self.window,
                &event,
                target,
                &mut self.input,
            ) {
                EventPhase::Run(steps) => {
                    for _ in 0..steps {
                        game.update(&mut self, Self::DT);
                        self.input.next_frame();
                    }
                    game.render(&mut self);
                }
                EventPhase::Quit => target.exit(),
                EventPhase::Wait => {}
            }
        })?;
        Ok(())
    }
}
