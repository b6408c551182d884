use folio_engine::{Animator, FrameLoop, FrameOutcome, InputEvent, InputQueue, Surface};

/// Drives one animator from the browser's frame loop.
///
/// Listeners push input at any time; each display refresh calls [`frame`],
/// which applies the queued input and, only while the page is visible,
/// updates and renders the animator.
///
/// [`frame`]: FrameRunner::frame
pub struct FrameRunner<A: Animator> {
    animator: A,
    input: InputQueue,
    frames: FrameLoop,
}

impl<A: Animator> FrameRunner<A> {
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            input: InputQueue::new(),
            frames: FrameLoop::new(),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick.
    pub fn frame(&mut self, visible: bool, surface: &mut dyn Surface) -> FrameOutcome {
        // Input is recorded even while hidden so the first visible frame
        // sees the latest pointer and surface size.
        for event in self.input.drain() {
            self.animator.handle_input(&event);
        }

        let animator = &mut self.animator;
        self.frames.step(visible, || {
            animator.update();
            animator.render(surface);
        })
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn frames(&self) -> &FrameLoop {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{DrawList, FieldConfig, ParticleField};
    use glam::Vec2;

    fn runner() -> FrameRunner<ParticleField> {
        let field = ParticleField::new(FieldConfig::default(), Vec2::new(800.0, 600.0), 30, 9);
        FrameRunner::new(field)
    }

    fn positions(runner: &FrameRunner<ParticleField>) -> Vec<Vec2> {
        runner.animator().particles().iter().map(|p| p.pos).collect()
    }

    #[test]
    fn visible_frame_updates_and_draws() {
        let mut runner = runner();
        let before = positions(&runner);
        let mut list = DrawList::new();

        assert_eq!(runner.frame(true, &mut list), FrameOutcome::Ran);
        assert_ne!(before, positions(&runner));
        assert_eq!(list.circles().count(), 30);
    }

    #[test]
    fn hidden_frames_leave_particles_untouched() {
        let mut runner = runner();
        let before = positions(&runner);
        let mut list = DrawList::new();

        for _ in 0..10 {
            assert_eq!(runner.frame(false, &mut list), FrameOutcome::Skipped);
        }
        assert_eq!(before, positions(&runner));
        assert!(list.commands().is_empty());
        assert_eq!(runner.frames().frames_skipped(), 10);
    }

    #[test]
    fn input_applies_while_hidden() {
        let mut runner = runner();
        let mut list = DrawList::new();
        runner.push_input(InputEvent::PointerMove { x: 40.0, y: 50.0 });
        runner.push_input(InputEvent::PointerMove { x: 41.0, y: 51.0 });
        runner.frame(false, &mut list);
        assert_eq!(runner.animator().pointer(), Vec2::new(41.0, 51.0));

        runner.push_input(InputEvent::Resize { width: 1024.0, height: 768.0 });
        runner.frame(true, &mut list);
        assert_eq!(runner.animator().size(), Vec2::new(1024.0, 768.0));
        assert_eq!(runner.animator().len(), 30);
    }
}
