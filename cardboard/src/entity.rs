use crate::{Input, Renderer};

/// Capability interface for anything that lives on the table.
///
/// `update` reads the current input sample; `render` records draws into
/// the open frame.  Most static pieces only need `render`.
pub trait Entity {
    fn update(&mut self, _input: &Input, _dt: f32) {}
    fn render(&mut self, renderer: &mut Renderer);
}
