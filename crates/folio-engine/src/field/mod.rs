//! Ambient particle field.
//!
//! A fixed-size set of slowly drifting particles that shy away from the
//! pointer, rendered as dots joined by faint lines when close together.

mod particle;

pub use particle::{wrap, wrap_into, Particle};

use glam::Vec2;

use crate::api::animator::Animator;
use crate::core::rng::Rng;
use crate::input::queue::InputEvent;
use crate::renderer::{Rgba, Surface};

/// Physics and rendering constants for a [`ParticleField`].
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Viewports narrower than this (strictly) use `mobile_count`.
    pub mobile_breakpoint: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    /// Distance within which the pointer pushes particles away.
    pub repel_radius: f32,
    /// Impulse scale at zero distance (linear falloff to the radius).
    pub repel_strength: f32,
    /// Per-frame velocity multiplier.
    pub damping: f32,
    /// Width of the symmetric initial velocity range per axis.
    pub initial_speed: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
    /// Pairs closer than this (strictly) are joined by a line.
    pub connection_distance: f32,
    /// Line alpha at zero distance.
    pub connection_alpha: f32,
    pub line_width: f32,
    pub color: Rgba,
    /// Pointer position before the first pointer event (off-surface).
    pub initial_pointer: Vec2,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_count: 30,
            desktop_count: 60,
            repel_radius: 100.0,
            repel_strength: 0.5,
            damping: 0.99,
            initial_speed: 0.4,
            radius_range: (1.0, 3.0),
            opacity_range: (0.1, 0.4),
            connection_distance: 120.0,
            connection_alpha: 0.15,
            line_width: 0.5,
            color: Rgba::rgb(249, 115, 22),
            initial_pointer: Vec2::new(-1000.0, -1000.0),
        }
    }
}

impl FieldConfig {
    /// Particle count for a viewport of the given width (device-class heuristic).
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if viewport_width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }
}

/// Owns the particles, the surface size and the last known pointer position.
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    size: Vec2,
    pointer: Vec2,
    rng: Rng,
}

impl ParticleField {
    /// Create a field of `count` particles spread over a `size` surface.
    pub fn new(config: FieldConfig, size: Vec2, count: usize, seed: u64) -> Self {
        let pointer = config.initial_pointer;
        let mut field = Self {
            config,
            particles: Vec::with_capacity(count),
            size,
            pointer,
            rng: Rng::new(seed),
        };
        field.reinitialize(count);
        field
    }

    /// Create a field sized for the viewport, choosing the count from its width.
    pub fn for_viewport(config: FieldConfig, size: Vec2, viewport_width: f32, seed: u64) -> Self {
        let count = config.particle_count(viewport_width);
        Self::new(config, size, count, seed)
    }

    /// Discard every particle and spawn `count` fresh ones.
    pub fn reinitialize(&mut self, count: usize) {
        self.particles.clear();
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.size, &self.config);
            self.particles.push(p);
        }
        log::debug!(
            "particle field: {} particles on {}x{}",
            count,
            self.size.x,
            self.size.y
        );
    }

    /// Change the coordinate space. Particles keep their state; positions
    /// outside the new bounds are wrapped back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        for p in &mut self.particles {
            p.pos = wrap_into(p.pos, self.size);
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (pointer, size) = (self.pointer, self.size);
        for p in &mut self.particles {
            p.tick(pointer, size, &self.config);
        }
    }

    /// Visit every unordered pair closer than the connection distance,
    /// with the alpha its connecting line is drawn at.
    pub fn for_each_connection(&self, mut f: impl FnMut(&Particle, &Particle, f32)) {
        let max = self.config.connection_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance(b.pos);
                if dist < max {
                    f(a, b, (1.0 - dist / max) * self.config.connection_alpha);
                }
            }
        }
    }

    /// Clear the surface, then draw particles and their connections.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.size.x, self.size.y);
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, self.config.color.with_alpha(p.opacity));
        }
        let (color, width) = (self.config.color, self.config.line_width);
        self.for_each_connection(|a, b, alpha| {
            surface.stroke_line(a.pos, b.pos, width, color.with_alpha(alpha));
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for hosts and tests that place particles directly.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

impl Animator for ParticleField {
    fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y } => self.set_pointer(Vec2::new(x, y)),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    fn update(&mut self) {
        self.step();
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};

    fn field(count: usize) -> ParticleField {
        ParticleField::new(FieldConfig::default(), Vec2::new(800.0, 600.0), count, 42)
    }

    fn place(field: &mut ParticleField, positions: &[Vec2]) {
        for (p, pos) in field.particles_mut().iter_mut().zip(positions) {
            p.pos = *pos;
            p.vel = Vec2::ZERO;
        }
    }

    #[test]
    fn count_follows_viewport_width() {
        let config = FieldConfig::default();
        let size = Vec2::new(600.0, 800.0);
        assert_eq!(ParticleField::for_viewport(config.clone(), size, 600.0, 1).len(), 30);
        assert_eq!(ParticleField::for_viewport(config.clone(), size, 1200.0, 1).len(), 60);
        assert_eq!(config.particle_count(767.9), 30);
        assert_eq!(config.particle_count(768.0), 60);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let mut field = field(60);
        for frame in 0..2000 {
            // Sweep the pointer across the surface to keep injecting impulses.
            let t = frame as f32;
            field.set_pointer(Vec2::new((t * 7.0) % 800.0, (t * 3.0) % 600.0));
            field.step();
            for p in field.particles() {
                assert!(p.pos.x >= 0.0 && p.pos.x < 800.0, "x = {}", p.pos.x);
                assert!(p.pos.y >= 0.0 && p.pos.y < 600.0, "y = {}", p.pos.y);
            }
        }
        assert_eq!(field.len(), 60);
    }

    #[test]
    fn reinitialize_replaces_particles() {
        let mut field = field(10);
        for p in field.particles_mut() {
            p.vel = Vec2::new(50.0, 50.0);
        }
        field.reinitialize(5);
        assert_eq!(field.len(), 5);
        assert!(field.particles().iter().all(|p| p.vel.length() < 0.3));
    }

    #[test]
    fn resize_keeps_particles_and_rewraps() {
        let mut field = field(20);
        let before: Vec<f32> = field.particles().iter().map(|p| p.opacity).collect();
        field.resize(100.0, 100.0);
        let after: Vec<f32> = field.particles().iter().map(|p| p.opacity).collect();
        assert_eq!(before, after);
        for p in field.particles() {
            assert!(p.pos.x < 100.0 && p.pos.y < 100.0);
        }
    }

    #[test]
    fn connection_threshold_is_strict() {
        let mut field = field(2);
        place(&mut field, &[Vec2::new(100.0, 100.0), Vec2::new(220.0, 100.0)]);
        let mut count = 0;
        field.for_each_connection(|_, _, _| count += 1);
        assert_eq!(count, 0);

        place(&mut field, &[Vec2::new(100.0, 100.0), Vec2::new(219.999, 100.0)]);
        let mut alphas = Vec::new();
        field.for_each_connection(|_, _, alpha| alphas.push(alpha));
        assert_eq!(alphas.len(), 1);
        assert!(alphas[0] > 0.0);
    }

    #[test]
    fn connection_alpha_scales_with_distance() {
        let mut field = field(2);
        place(&mut field, &[Vec2::new(0.0, 0.0), Vec2::new(60.0, 0.0)]);
        let mut alpha = 0.0;
        field.for_each_connection(|_, _, a| alpha = a);
        assert!((alpha - 0.5 * 0.15).abs() < 1e-6);
    }

    #[test]
    fn draw_clears_then_draws_circles_and_lines() {
        let mut field = field(3);
        place(
            &mut field,
            &[Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0), Vec2::new(500.0, 500.0)],
        );
        let mut list = DrawList::new();
        field.draw(&mut list);

        assert_eq!(
            list.commands()[0],
            DrawCommand::Clear { width: 800.0, height: 600.0 }
        );
        assert_eq!(list.circles().count(), 3);
        assert_eq!(list.lines().count(), 1);
        for (cmd, p) in list.circles().zip(field.particles()) {
            if let DrawCommand::Circle { radius, color, .. } = cmd {
                assert_eq!(*radius, p.radius);
                assert_eq!(color.a, p.opacity);
                assert_eq!((color.r, color.g, color.b), (249, 115, 22));
            }
        }
    }

    #[test]
    fn pairwise_pass_is_stable_at_desktop_count() {
        let mut field = field(60);
        let mut list = DrawList::new();
        for _ in 0..300 {
            field.step();
            list.clear_commands();
            field.draw(&mut list);
            let lines = list.lines().count();
            assert!(lines <= 60 * 59 / 2);
            for cmd in list.lines() {
                if let DrawCommand::Line { color, .. } = cmd {
                    assert!(color.a > 0.0 && color.a <= 0.15);
                }
            }
        }
        assert_eq!(list.circles().count(), 60);
    }

    #[test]
    fn input_updates_pointer_and_size_only() {
        let mut field = field(5);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
        field.handle_input(&InputEvent::PointerMove { x: 12.0, y: 34.0 });
        field.handle_input(&InputEvent::Resize { width: 900.0, height: 700.0 });
        assert_eq!(field.pointer(), Vec2::new(12.0, 34.0));
        assert_eq!(field.size(), Vec2::new(900.0, 700.0));
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }
}
