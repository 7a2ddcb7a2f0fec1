//! Table widgets: static image labels and two-texture buttons.

use cardboard::glam::Vec2;
use cardboard::input::MouseButton;
use cardboard::{Drawable, Entity, Input, Rect, Renderer, Transform};

/// Visual state of a button, recomputed from the raw input sample every
/// frame rather than driven by events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hover,
    Pressed,
}

impl ButtonState {
    /// Derive the state from this frame's sample: is the cursor over the
    /// hitbox, and is the primary button held?
    pub fn from_sample(over: bool, held: bool) -> Self {
        match (over, held) {
            (true, true) => ButtonState::Pressed,
            (true, false) => ButtonState::Hover,
            (false, _) => ButtonState::Idle,
        }
    }
}

/// A static image placed by its transform.
pub struct Label {
    pub transform: Transform,
    quad: Drawable,
}

impl Label {
    pub fn new(renderer: &Renderer, path: &str) -> Self {
        Self {
            transform: Transform::default(),
            quad: crate::must_load(renderer, path),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.quad.size()
    }
}

impl Entity for Label {
    fn render(&mut self, renderer: &mut Renderer) {
        self.quad.set_transform(&self.transform);
        renderer.draw(&self.quad);
    }
}

/// A clickable image with idle and hover textures.  Hover and pressed both
/// show the hover texture; the hitbox follows the transform.
pub struct Button {
    pub transform: Transform,
    idle: Drawable,
    hover: Drawable,
    hitbox_size: Vec2,
    state: ButtonState,
    clicked: bool,
}

impl Button {
    pub fn new(renderer: &Renderer, idle_path: &str, hover_path: &str) -> Self {
        let idle = crate::must_load(renderer, idle_path);
        let hover = crate::must_load(renderer, hover_path);
        let hitbox_size = idle.size();
        Self {
            transform: Transform::default(),
            idle,
            hover,
            hitbox_size,
            state: ButtonState::Idle,
            clicked: false,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// True on the frame the primary button went down over this widget.
    pub fn clicked(&self) -> bool {
        self.clicked
    }
}

impl Entity for Button {
    fn update(&mut self, input: &Input, _dt: f32) {
        let hitbox = Rect::new(self.transform.pos.truncate(), self.hitbox_size);
        let over = hitbox.contains(input.cursor_pos());
        self.state = ButtonState::from_sample(over, input.is_mouse_down(MouseButton::Left));
        self.clicked = over && input.is_mouse_pressed(MouseButton::Left);
    }

    fn render(&mut self, renderer: &mut Renderer) {
        let quad = match self.state {
            ButtonState::Idle => &mut self.idle,
            ButtonState::Hover | ButtonState::Pressed => &mut self.hover,
        };
        quad.set_transform(&self.transform);
        renderer.draw(quad);
    }
}
