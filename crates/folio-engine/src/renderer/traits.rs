//! Drawing-surface contract.
//!
//! Rendering goes through a minimal immediate-mode surface: clear, filled
//! circle, stroked line. The web crate implements it on a Canvas2D context;
//! tests use the recording [`DrawList`](super::recorder::DrawList).

use glam::Vec2;

/// An RGB colour with an independent alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D immediate-mode drawing surface.
pub trait Surface {
    /// Clear the rectangle from the origin to (width, height).
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_notation() {
        let c = Rgba::rgb(249, 115, 22).with_alpha(0.25);
        assert_eq!(c.to_css(), "rgba(249, 115, 22, 0.25)");
    }
}
