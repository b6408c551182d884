use glam::Vec2;

use super::domain::RadarDomain;
use super::layout::{RadarLayout, Zone};

/// Number of level marks in a tooltip.
pub const LEVEL_MARKS: usize = 10;

/// An element that can show a domain's tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Label(usize),
    Dot(usize),
}

impl Target {
    pub fn index(self) -> usize {
        match self {
            Target::Label(i) | Target::Dot(i) => i,
        }
    }
}

/// Pointer interactions the tooltip reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    Enter(Target),
    Leave(Target),
    Click(Target),
    /// A click anywhere outside the chart's labels and dots.
    ClickOutside,
}

/// The single shared tooltip: hidden, or showing exactly one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown(usize),
}

impl TooltipState {
    pub fn transition(self, event: TooltipEvent) -> Self {
        match event {
            TooltipEvent::Enter(target) => TooltipState::Shown(target.index()),
            TooltipEvent::Leave(_) | TooltipEvent::ClickOutside => TooltipState::Hidden,
            TooltipEvent::Click(Target::Label(i)) if self == TooltipState::Shown(i) => {
                TooltipState::Hidden
            }
            TooltipEvent::Click(target) => TooltipState::Shown(target.index()),
        }
    }

    pub fn shown(self) -> Option<usize> {
        match self {
            TooltipState::Hidden => None,
            TooltipState::Shown(i) => Some(i),
        }
    }
}

/// What the tooltip displays for one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub name: String,
    /// `true` for filled marks; the first `level` are filled.
    pub marks: [bool; LEVEL_MARKS],
    pub description: String,
}

impl TooltipContent {
    pub fn for_domain(domain: &RadarDomain) -> Self {
        let mut marks = [false; LEVEL_MARKS];
        for (i, mark) in marks.iter_mut().enumerate() {
            *mark = i < usize::from(domain.level);
        }
        Self {
            name: domain.name.clone(),
            marks,
            description: domain.description.clone(),
        }
    }

    pub fn filled(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }
}

/// Rendered size and position of the chart inside its container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    /// Top-left of the drawn view box relative to the container.
    pub offset: Vec2,
    /// Rendered width of the view box.
    pub width: f32,
    /// Width of the container the tooltip is positioned in.
    pub container_width: f32,
}

/// Which container edge the tooltip is measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipAnchor {
    /// CSS `left`, tooltip extends rightwards.
    Left(f32),
    /// CSS `right`, tooltip extends leftwards.
    Right(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub anchor: TooltipAnchor,
    pub top: f32,
}

impl TooltipPosition {
    /// Place the tooltip beside `vertex` (view-box coordinates), opening away
    /// from the nearer container edge.
    pub fn beside(layout: &RadarLayout, vertex: Vec2, frame: &ChartFrame) -> Self {
        let scale = if layout.view_box > 0.0 {
            frame.width / layout.view_box
        } else {
            1.0
        };
        let at = frame.offset + vertex * scale;
        let anchor = match layout.zone(vertex.x) {
            Zone::Right => TooltipAnchor::Left(at.x + layout.tooltip_gap),
            Zone::Left => TooltipAnchor::Right(frame.container_width - at.x + layout.tooltip_gap),
            Zone::Middle => TooltipAnchor::Left(at.x),
        };
        Self {
            anchor,
            top: at.y - layout.tooltip_lift,
        }
    }
}
