//! Per-frame sampled keyboard, mouse, and cursor state.

use std::collections::HashSet;

use glam::Vec2;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode as Key;

/// Keyboard/mouse state for the current and previous simulation frame.
///
/// Events are folded into the "now" sample as they arrive;
/// [`Input::next_frame`] rolls it into the "previous" sample so the
/// `*_pressed`/`*_released` queries can report edges.
#[derive(Debug, Default)]
pub struct Input {
    now_keys: HashSet<Key>,
    prev_keys: HashSet<Key>,
    now_mouse: HashSet<MouseButton>,
    prev_mouse: HashSet<MouseButton>,
    cursor: Vec2,
}

impl Input {
    pub fn is_key_down(&self, key: Key) -> bool {
        self.now_keys.contains(&key)
    }
    pub fn is_key_up(&self, key: Key) -> bool {
        !self.now_keys.contains(&key)
    }
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.now_keys.contains(&key) && !self.prev_keys.contains(&key)
    }
    pub fn is_key_released(&self, key: Key) -> bool {
        !self.now_keys.contains(&key) && self.prev_keys.contains(&key)
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.now_mouse.contains(&button)
    }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.now_mouse.contains(&button) && !self.prev_mouse.contains(&button)
    }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        !self.now_mouse.contains(&button) && self.prev_mouse.contains(&button)
    }

    /// The cursor position in window pixels, top-left origin.
    pub fn cursor_pos(&self) -> Vec2 {
        self.cursor
    }

    /// Roll the current sample into the previous one.  Call once per
    /// simulation step, after the game has looked at the input.
    pub fn next_frame(&mut self) {
        self.prev_keys.clone_from(&self.now_keys);
        self.prev_mouse.clone_from(&self.now_mouse);
    }

    fn key_changed(&mut self, key: Key, down: bool) {
        if down {
            self.now_keys.insert(key);
        } else {
            self.now_keys.remove(&key);
        }
    }

    fn mouse_changed(&mut self, button: MouseButton, down: bool) {
        if down {
            self.now_mouse.insert(button);
        } else {
            self.now_mouse.remove(&button);
        }
    }

    fn cursor_moved(&mut self, to: Vec2) {
        self.cursor = to;
    }

    /// Fold a winit event into the current sample.
    pub fn process_input_event<T>(&mut self, event: &winit::event::Event<T>) {
        use winit::event::{Event, WindowEvent};
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::KeyboardInput { event: key, .. } => {
                if let winit::keyboard::PhysicalKey::Code(code) = key.physical_key {
                    self.key_changed(code, key.state.is_pressed());
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_changed(*button, state.is_pressed());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_edges() {
        let mut input = Input::default();
        input.key_changed(Key::Space, true);
        assert!(input.is_key_down(Key::Space));
        assert!(input.is_key_pressed(Key::Space));

        input.next_frame();
        assert!(input.is_key_down(Key::Space));
        assert!(!input.is_key_pressed(Key::Space));

        input.key_changed(Key::Space, false);
        assert!(input.is_key_released(Key::Space));
        input.next_frame();
        assert!(!input.is_key_released(Key::Space));
    }

    #[test]
    fn mouse_edges_and_cursor() {
        let mut input = Input::default();
        input.cursor_moved(Vec2::new(12.0, 34.0));
        input.mouse_changed(MouseButton::Left, true);
        assert_eq!(input.cursor_pos(), Vec2::new(12.0, 34.0));
        assert!(input.is_mouse_pressed(MouseButton::Left));
        input.next_frame();
        assert!(input.is_mouse_down(MouseButton::Left));
        assert!(!input.is_mouse_pressed(MouseButton::Left));
    }
}
