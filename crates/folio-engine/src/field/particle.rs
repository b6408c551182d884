use glam::Vec2;

use super::FieldConfig;
use crate::core::rng::Rng;

/// A single ambient particle.
///
/// Radius and opacity are fixed at creation; position and velocity change
/// every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    /// Spawn a particle uniformly across a surface of the given size.
    pub fn random(rng: &mut Rng, size: Vec2, config: &FieldConfig) -> Self {
        let pos = Vec2::new(rng.next_f32() * size.x, rng.next_f32() * size.y);
        let half = config.initial_speed / 2.0;
        let vel = Vec2::new(rng.range(-half, half), rng.range(-half, half));
        Self {
            pos: wrap_into(pos, size),
            vel,
            radius: rng.range(config.radius_range.0, config.radius_range.1),
            opacity: rng.range(config.opacity_range.0, config.opacity_range.1),
        }
    }

    /// Advance one frame: pointer repulsion, damping, Euler step, wraparound.
    pub fn tick(&mut self, pointer: Vec2, size: Vec2, config: &FieldConfig) {
        let away = self.pos - pointer;
        let dist = away.length();
        // Zero distance has no direction to push along.
        if dist < config.repel_radius && dist > 0.0 {
            let force = (config.repel_radius - dist) / config.repel_radius;
            self.vel += away / dist * force * config.repel_strength;
        }

        self.vel *= config.damping;
        self.pos += self.vel;
        self.pos = wrap_into(self.pos, size);
    }
}

/// Toroidal wraparound of a single coordinate into [0, bound).
///
/// Leaving past the far edge re-enters at 0; leaving below 0 re-enters at the
/// far edge, taken as the largest value still below `bound`. A degenerate
/// bound (zero, negative, NaN) or a NaN coordinate collapses to 0.
pub fn wrap(v: f32, bound: f32) -> f32 {
    if bound.is_nan() || bound <= 0.0 || v.is_nan() {
        return 0.0;
    }
    if v >= bound {
        0.0
    } else if v < 0.0 {
        far_edge(bound)
    } else {
        v
    }
}

fn far_edge(bound: f32) -> f32 {
    if bound.is_infinite() {
        return f32::MAX;
    }
    // Positive finite floats are ordered by bit pattern.
    f32::from_bits(bound.to_bits() - 1)
}

pub fn wrap_into(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap(pos.x, size.x), wrap(pos.y, size.y))
}
