use glam::Vec2;

/// An element's box in viewport pixels, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

/// Perspective tilt of a card toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees around the horizontal axis. Positive when the pointer is in the upper half.
    pub rotate_x: f32,
    /// Degrees around the vertical axis. Positive when the pointer is in the right half.
    pub rotate_y: f32,
}

impl Tilt {
    pub const MAX_DEGREES: f32 = 5.0;
    pub const PERSPECTIVE_PX: f32 = 800.0;
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer over `bounds`. An empty box stays at rest.
    pub fn at(bounds: Bounds, pointer: Vec2) -> Self {
        let half = bounds.size / 2.0;
        if half.x <= 0.0 || half.y <= 0.0 {
            return Self::REST;
        }
        let offset = (pointer - bounds.center()) / half;
        Self {
            rotate_x: -offset.y * Self::MAX_DEGREES,
            rotate_y: offset.x * Self::MAX_DEGREES,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            Self::PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y
        )
    }

    /// Accent shadow cast away from the raised edge.
    pub fn shadow(&self) -> String {
        format!(
            "{}px {}px 30px rgba(249, 115, 22, 0.12)",
            -self.rotate_y * 2.0,
            self.rotate_x * 2.0
        )
    }
}

/// How far an element follows the pointer, as a fraction of the offset from its centre.
pub const MAGNET_PULL: f32 = 0.15;

/// Translation that pulls an element toward the pointer.
pub fn magnetic_offset(bounds: Bounds, pointer: Vec2) -> Vec2 {
    (pointer - bounds.center()) * MAGNET_PULL
}
