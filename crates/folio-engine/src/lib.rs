pub mod api;
pub mod core;
pub mod extensions;
pub mod field;
pub mod input;
pub mod radar;
pub mod renderer;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::animator::Animator;
pub use crate::core::frame::{FrameLoop, FrameOutcome};
pub use crate::core::rng::Rng;
pub use crate::core::trigger::OnceTrigger;
pub use field::{FieldConfig, Particle, ParticleField};
pub use input::queue::{InputEvent, InputQueue};
pub use radar::{
    ChartFrame, LabelAnchor, LabelPlacement, RadarChart, RadarDomain, RadarLayout, Target,
    TooltipAnchor, TooltipContent, TooltipEvent, TooltipPosition, TooltipState,
};
pub use renderer::{DrawCommand, DrawList, Rgba, Surface};
pub use ui::{
    magnetic_offset, scroll_progress, Bounds, CounterAnimation, CursorFollower, NavAutoHide,
    StaggeredEntrance, Tilt,
};

pub use extensions::{ease, lerp, lerp_vec2, Easing};
