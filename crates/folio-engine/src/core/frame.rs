/// Result of one iteration of a frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The page was visible and the frame's work ran.
    Ran,
    /// The page was hidden; the loop stays scheduled but did nothing.
    Skipped,
}

/// Visibility gate for a continuous per-frame loop.
///
/// The host awaits one display-refresh callback per iteration and then calls
/// [`FrameLoop::step`]. While the page is hidden the step is a no-op, so the
/// loop keeps rescheduling itself and resumes without reinitialization.
#[derive(Debug, Default)]
pub struct FrameLoop {
    frames_run: u64,
    frames_skipped: u64,
    was_visible: Option<bool>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` if `visible`, otherwise skip it.
    pub fn step(&mut self, visible: bool, work: impl FnOnce()) -> FrameOutcome {
        if self.was_visible != Some(visible) {
            if visible {
                log::debug!("frame loop: running");
            } else {
                log::debug!("frame loop: paused while hidden");
            }
            self.was_visible = Some(visible);
        }

        if !visible {
            self.frames_skipped += 1;
            return FrameOutcome::Skipped;
        }

        work();
        self.frames_run += 1;
        FrameOutcome::Ran
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_frame_runs_work() {
        let mut frames = FrameLoop::new();
        let mut ran = false;
        assert_eq!(frames.step(true, || ran = true), FrameOutcome::Ran);
        assert!(ran);
        assert_eq!(frames.frames_run(), 1);
    }

    #[test]
    fn hidden_frame_skips_work() {
        let mut frames = FrameLoop::new();
        let mut ran = false;
        assert_eq!(frames.step(false, || ran = true), FrameOutcome::Skipped);
        assert!(!ran);
        assert_eq!(frames.frames_skipped(), 1);
        assert_eq!(frames.frames_run(), 0);
    }

    #[test]
    fn resumes_after_hidden_stretch() {
        let mut frames = FrameLoop::new();
        let mut count = 0;
        frames.step(true, || count += 1);
        for _ in 0..5 {
            frames.step(false, || count += 1);
        }
        frames.step(true, || count += 1);
        assert_eq!(count, 2);
        assert_eq!(frames.frames_skipped(), 5);
    }
}
