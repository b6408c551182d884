use std::ops::Range;

/// Staggered entrance for a row of items: item `i` is due `i * step_ms`
/// after the first sample.
#[derive(Debug, Clone)]
pub struct StaggeredEntrance {
    count: usize,
    step_ms: f64,
    started_at: Option<f64>,
    revealed: usize,
}

impl StaggeredEntrance {
    pub const DEFAULT_STEP_MS: f64 = 80.0;

    pub fn new(count: usize) -> Self {
        Self {
            count,
            step_ms: Self::DEFAULT_STEP_MS,
            started_at: None,
            revealed: 0,
        }
    }

    pub fn with_step(mut self, step_ms: f64) -> Self {
        self.step_ms = step_ms.max(0.0);
        self
    }

    /// Items that became due at `now_ms` since the last sample. The first call
    /// fixes the start time, so item 0 is always due on it.
    pub fn sample(&mut self, now_ms: f64) -> Range<usize> {
        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        let due = if self.step_ms > 0.0 {
            (elapsed / self.step_ms).floor() as usize + 1
        } else {
            self.count
        };
        let from = self.revealed;
        self.revealed = due.min(self.count).max(from);
        from..self.revealed
    }

    /// Mark every remaining item due now.
    pub fn finish(&mut self) -> Range<usize> {
        let from = self.revealed;
        self.revealed = self.count;
        from..self.count
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_due_one_step_apart() {
        let mut entrance = StaggeredEntrance::new(4);
        assert_eq!(entrance.sample(1000.0), 0..1);
        assert_eq!(entrance.sample(1050.0), 1..1);
        assert_eq!(entrance.sample(1080.0), 1..2);
        assert!(!entrance.is_done());
        assert_eq!(entrance.sample(1500.0), 2..4);
        assert!(entrance.is_done());
        assert_eq!(entrance.sample(2000.0), 4..4);
    }

    #[test]
    fn every_item_is_revealed_exactly_once() {
        let mut entrance = StaggeredEntrance::new(7);
        let mut seen = Vec::new();
        let mut now = 0.0;
        while !entrance.is_done() {
            seen.extend(entrance.sample(now));
            now += 16.7;
        }
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn finish_releases_the_rest() {
        let mut entrance = StaggeredEntrance::new(5);
        assert_eq!(entrance.sample(0.0), 0..1);
        assert_eq!(entrance.finish(), 1..5);
        assert!(entrance.is_done());
        assert_eq!(entrance.sample(10_000.0), 5..5);
    }

    #[test]
    fn empty_row_is_done_immediately() {
        let mut entrance = StaggeredEntrance::new(0);
        assert!(entrance.is_done());
        assert_eq!(entrance.sample(5.0), 0..0);
    }

    #[test]
    fn zero_step_reveals_everything_at_once() {
        let mut entrance = StaggeredEntrance::new(3).with_step(0.0);
        assert_eq!(entrance.sample(0.0), 0..3);
    }
}
