/// Hides the navigation bar while the page scrolls down past a threshold.
#[derive(Debug, Clone)]
pub struct NavAutoHide {
    last_y: f32,
    threshold: f32,
}

impl NavAutoHide {
    pub const DEFAULT_THRESHOLD: f32 = 100.0;

    pub fn new(initial_y: f32) -> Self {
        Self {
            last_y: initial_y,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Record a new scroll offset. Returns whether the nav should be hidden.
    pub fn on_scroll(&mut self, y: f32) -> bool {
        let hidden = y > self.last_y && y > self.threshold;
        self.last_y = y;
        hidden
    }
}

/// Fraction of the document scrolled, in [0, 1]. Zero when nothing scrolls.
pub fn scroll_progress(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}
