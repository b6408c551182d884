use crate::extensions::easing::{ease, Easing};

/// A number that counts up from zero to a target over a fixed duration.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub const DEFAULT_DURATION_MS: f64 = 1500.0;

    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::QuadOut,
            started_at: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Displayed value at timestamp `now_ms`, and whether the count is done.
    /// The first call fixes the start time.
    pub fn sample(&mut self, now_ms: f64) -> (u32, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return (self.target, true);
        }
        let value = ease(0.0, self.target as f32, progress as f32, self.easing);
        (value.round() as u32, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_on_target() {
        let mut counter = CounterAnimation::new(120);
        assert_eq!(counter.sample(1000.0), (0, false));
        assert_eq!(counter.sample(2500.0), (120, true));
        assert_eq!(counter.sample(9000.0), (120, true));
    }

    #[test]
    fn midpoint_follows_ease_out_quad() {
        let mut counter = CounterAnimation::new(100);
        counter.sample(0.0);
        // QuadOut(0.5) = 0.75
        assert_eq!(counter.sample(750.0), (75, false));
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = CounterAnimation::new(37).with_duration(500.0);
        let mut last = 0;
        for step in 0..=60 {
            let (value, _) = counter.sample(f64::from(step) * 10.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 37);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut counter = CounterAnimation::new(8).with_duration(0.0);
        assert_eq!(counter.sample(5.0), (8, true));
    }
}
