//! Multi-axis skill radar: geometry, entrance reveal and tooltip state.

pub mod chart;
pub mod domain;
pub mod layout;
pub mod tooltip;

pub use chart::RadarChart;
pub use domain::RadarDomain;
pub use layout::{points_attr, LabelAnchor, LabelPlacement, RadarLayout, Zone};
pub use tooltip::{
    ChartFrame, Target, TooltipAnchor, TooltipContent, TooltipEvent, TooltipPosition,
    TooltipState, LEVEL_MARKS,
};
