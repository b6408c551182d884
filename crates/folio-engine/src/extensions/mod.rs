// extensions/mod.rs
//
// Small helpers shared by the UI animations.

pub mod easing;

pub use easing::{ease, lerp, lerp_vec2, Easing};
