use glam::Vec2;

use crate::extensions::easing::lerp_vec2;

/// Custom cursor: a dot pinned to the pointer and a ring that trails it.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    pointer: Vec2,
    ring: Vec2,
    /// Fraction of the remaining distance the ring covers each frame.
    follow: f32,
}

impl CursorFollower {
    pub const DEFAULT_FOLLOW: f32 = 0.15;
    /// Where dot and ring wait until the first pointer move.
    pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub fn new() -> Self {
        Self::with_follow(Self::DEFAULT_FOLLOW)
    }

    pub fn with_follow(follow: f32) -> Self {
        Self {
            pointer: Self::OFFSCREEN,
            ring: Self::OFFSCREEN,
            follow: follow.clamp(0.0, 1.0),
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Advance the ring one frame. Returns (dot, ring) positions.
    pub fn step(&mut self) -> (Vec2, Vec2) {
        self.ring = lerp_vec2(self.ring, self.pointer, self.follow);
        (self.pointer, self.ring)
    }

    pub fn dot(&self) -> Vec2 {
        self.pointer
    }

    pub fn ring(&self) -> Vec2 {
        self.ring
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_tracks_pointer_exactly() {
        let mut cursor = CursorFollower::new();
        cursor.set_pointer(Vec2::new(100.0, 50.0));
        let (dot, ring) = cursor.step();
        assert_eq!(dot, Vec2::new(100.0, 50.0));
        // -1000 + 0.15 * (100 + 1000), -1000 + 0.15 * (50 + 1000)
        assert!((ring - Vec2::new(-835.0, -842.5)).length() < 1e-3);
    }

    #[test]
    fn starts_offscreen_before_any_pointer_move() {
        let mut cursor = CursorFollower::new();
        assert_eq!(cursor.dot(), CursorFollower::OFFSCREEN);
        let (dot, ring) = cursor.step();
        assert_eq!(dot, CursorFollower::OFFSCREEN);
        assert_eq!(ring, CursorFollower::OFFSCREEN);
    }

    #[test]
    fn ring_converges_on_pointer() {
        let mut cursor = CursorFollower::new();
        cursor.set_pointer(Vec2::new(300.0, 200.0));
        let mut last = f32::MAX;
        for _ in 0..100 {
            cursor.step();
            let gap = cursor.ring().distance(cursor.dot());
            assert!(gap <= last);
            last = gap;
        }
        assert!(last < 0.01);
    }
}
