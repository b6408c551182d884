use crate::input::queue::InputEvent;
use crate::renderer::Surface;

/// The contract every continuously animated component fulfills.
///
/// A host runner feeds it input every frame and, while the page is visible,
/// calls `update` then `render` once per display refresh.
pub trait Animator {
    /// Apply a host event. Called on every frame, including hidden ones, so it
    /// must only record the event (pointer, surface size) and never advance
    /// the animation.
    fn handle_input(&mut self, event: &InputEvent);

    /// Advance the animation by exactly one frame.
    fn update(&mut self);

    /// Draw the current state onto the surface.
    fn render(&self, surface: &mut dyn Surface);
}
