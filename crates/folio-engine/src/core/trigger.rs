/// One-shot visibility trigger.
///
/// Fires the first time the observed visible fraction reaches the threshold
/// and never again. The fired flag is monotonic: nothing resets it.
#[derive(Debug, Clone)]
pub struct OnceTrigger {
    threshold: f32,
    fired: bool,
}

impl OnceTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Fires on any intersection at all, however small the visible fraction.
    /// Use this for targets that may be taller than the viewport can show at
    /// a given ratio.
    pub fn on_intersect() -> Self {
        Self::new(0.0)
    }

    /// Offer an observed visible fraction. Returns true only on the call that fires.
    pub fn offer(&mut self, visible_fraction: f32) -> bool {
        if self.fired || visible_fraction < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = OnceTrigger::new(0.3);
        assert!(!trigger.offer(0.1));
        assert!(!trigger.has_fired());
        assert!(trigger.offer(0.3));
        assert!(trigger.has_fired());
        assert!(!trigger.offer(1.0));
    }

    #[test]
    fn below_threshold_never_fires() {
        let mut trigger = OnceTrigger::new(0.15);
        for _ in 0..10 {
            assert!(!trigger.offer(0.149));
        }
        assert!(!trigger.has_fired());
    }

    #[test]
    fn intersect_trigger_fires_for_oversized_targets() {
        // A target eight viewports tall is never more than 1/8 visible.
        let mut trigger = OnceTrigger::on_intersect();
        let max_ratio = 1.0 / 8.0;
        let fired = (0..=10)
            .map(|step| max_ratio * step as f32 / 10.0)
            .filter(|&ratio| trigger.offer(ratio))
            .count();
        assert_eq!(fired, 1);
        assert!(trigger.has_fired());
    }

    #[test]
    fn ratio_gate_never_fires_for_oversized_targets() {
        let mut trigger = OnceTrigger::new(0.3);
        for step in 0..=10 {
            assert!(!trigger.offer(0.125 * step as f32 / 10.0));
        }
    }
}
