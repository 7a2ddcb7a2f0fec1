//! Maps winit's event loop stages onto a simulate/render lifecycle.

/// Phase in the game event loop.
pub enum EventPhase {
    /// Simulate time forward by the given number of steps, then render.
    Run(usize),
    /// Terminate as quickly as possible and close the window.
    Quit,
    /// Nothing in particular to do right now.
    Wait,
}

/// Extension trait to let the [`crate::Renderer`] figure out the right
/// response to the current winit event; see [`crate::Clock`] for how the
/// step count is computed.
pub trait RendererEvents<T> {
    fn handle_event(
        &mut self,
        clock: &mut crate::Clock,
        window: &winit::window::Window,
        evt: &winit::event::Event<T>,
        target: &winit::event_loop::EventLoopWindowTarget<T>,
        input: &mut crate::Input,
    ) -> EventPhase;
}

impl<T> RendererEvents<T> for crate::Renderer {
    fn handle_event(
        &mut self,
        clock: &mut crate::Clock,
        window: &winit::window::Window,
        evt: &winit::event::Event<T>,
        _target: &winit::event_loop::EventLoopWindowTarget<T>,
        input: &mut crate::Input,
    ) -> EventPhase {
        use winit::event::{Event, WindowEvent};
        match evt {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => EventPhase::Quit,
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                self.resize_surface(size.width, size.height);
                window.request_redraw();
                EventPhase::Wait
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = clock.tick();
                window.request_redraw();
                EventPhase::Run(steps)
            }
            event => {
                input.process_input_event(event);
                EventPhase::Wait
            }
        }
    }
}
