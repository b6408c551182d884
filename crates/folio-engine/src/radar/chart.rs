use glam::Vec2;

use super::domain::RadarDomain;
use super::layout::{LabelPlacement, RadarLayout};
use super::tooltip::{ChartFrame, TooltipContent, TooltipEvent, TooltipPosition, TooltipState};
use crate::core::trigger::OnceTrigger;

/// Radar chart state: static geometry, the one-shot data polygon and the tooltip.
///
/// The data polygon starts collapsed onto the centre. The first time the chart
/// is seen enough it jumps to its target vertices; the host animates the change
/// with its own transition mechanism.
pub struct RadarChart {
    layout: RadarLayout,
    domains: Vec<RadarDomain>,
    reveal: OnceTrigger,
    area: Vec<Vec2>,
    tooltip: TooltipState,
}

impl RadarChart {
    pub fn new(layout: RadarLayout, domains: Vec<RadarDomain>) -> Self {
        let area = vec![layout.center; domains.len()];
        let reveal = OnceTrigger::new(layout.reveal_threshold);
        Self {
            layout,
            domains,
            reveal,
            area,
            tooltip: TooltipState::Hidden,
        }
    }

    pub fn layout(&self) -> &RadarLayout {
        &self.layout
    }

    pub fn domains(&self) -> &[RadarDomain] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Target vertex of domain `index`.
    pub fn target(&self, index: usize) -> Option<Vec2> {
        let domain = self.domains.get(index)?;
        let radius = self.layout.level_radius(domain.level);
        Some(self.layout.point(index, self.domains.len(), radius))
    }

    pub fn targets(&self) -> Vec<Vec2> {
        (0..self.domains.len()).filter_map(|i| self.target(i)).collect()
    }

    pub fn grid_rings(&self) -> Vec<Vec<Vec2>> {
        self.layout.grid_rings(self.domains.len())
    }

    pub fn spokes(&self) -> Vec<(Vec2, Vec2)> {
        self.layout.spokes(self.domains.len())
    }

    pub fn labels(&self) -> Vec<LabelPlacement> {
        let n = self.domains.len();
        (0..n).map(|i| self.layout.label_placement(i, n)).collect()
    }

    /// Current data polygon vertices. Marker dots sit on the same points.
    pub fn area(&self) -> &[Vec2] {
        &self.area
    }

    /// Report the chart's visible fraction. Returns true on the one call that
    /// moves the polygon to its targets; later calls are no-ops.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if !self.reveal.offer(visible_fraction) {
            return false;
        }
        self.area = self.targets();
        log::debug!("radar: revealed {} domains", self.domains.len());
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.has_fired()
    }

    pub fn tooltip(&self) -> TooltipState {
        self.tooltip
    }

    /// Apply a pointer interaction. Events naming unknown domains are ignored.
    pub fn handle(&mut self, event: TooltipEvent) -> TooltipState {
        let in_range = match event {
            TooltipEvent::Enter(t) | TooltipEvent::Leave(t) | TooltipEvent::Click(t) => {
                t.index() < self.domains.len()
            }
            TooltipEvent::ClickOutside => true,
        };
        if in_range {
            let next = self.tooltip.transition(event);
            if next != self.tooltip {
                log::trace!("radar tooltip: {:?} -> {:?}", self.tooltip, next);
            }
            self.tooltip = next;
        }
        self.tooltip
    }

    /// Whether label `index` carries the active emphasis.
    pub fn is_label_active(&self, index: usize) -> bool {
        self.tooltip == TooltipState::Shown(index)
    }

    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        let index = self.tooltip.shown()?;
        self.domains.get(index).map(TooltipContent::for_domain)
    }

    /// Tooltip position for the shown domain, next to its target vertex.
    pub fn tooltip_position(&self, frame: &ChartFrame) -> Option<TooltipPosition> {
        let vertex = self.target(self.tooltip.shown()?)?;
        Some(TooltipPosition::beside(&self.layout, vertex, frame))
    }
}
