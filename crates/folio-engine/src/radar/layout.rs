//! Static radar geometry: vertex angles, grid rings, spokes and label placement.
//!
//! Coordinates live in a square view box with y pointing down, so index 0
//! sits due north of the centre and indices proceed clockwise.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

/// Layout constants for a radar chart.
#[derive(Debug, Clone)]
pub struct RadarLayout {
    pub center: Vec2,
    pub max_radius: f32,
    /// Side length of the square view box the chart is drawn in.
    pub view_box: f32,
    /// Distance beyond `max_radius` at which labels sit.
    pub label_offset: f32,
    /// Half-width of the vertical band around the centre treated as "middle".
    pub align_band: f32,
    pub ring_fractions: Vec<f32>,
    pub dot_radius: f32,
    /// Level that maps to `max_radius`.
    pub level_scale: f32,
    /// Visible fraction that triggers the entrance animation.
    pub reveal_threshold: f32,
    /// Horizontal gap between a vertex and its tooltip.
    pub tooltip_gap: f32,
    /// How far above a vertex the tooltip's top edge sits.
    pub tooltip_lift: f32,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            center: Vec2::new(250.0, 250.0),
            max_radius: 190.0,
            view_box: 500.0,
            label_offset: 28.0,
            align_band: 20.0,
            ring_fractions: vec![0.25, 0.5, 0.75, 1.0],
            dot_radius: 5.0,
            level_scale: 10.0,
            reveal_threshold: 0.3,
            tooltip_gap: 16.0,
            tooltip_lift: 20.0,
        }
    }
}

/// Which horizontal zone of the chart a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    Middle,
    Right,
}

/// How a label box is anchored to its placement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Box ends at the point, text right-aligned.
    End,
    /// Box starts at the point.
    Start,
    /// Box centred on the point, above it.
    Above,
    /// Box centred on the point, below it.
    Below,
}

impl LabelAnchor {
    /// CSS transform that anchors the box.
    pub fn transform(self) -> &'static str {
        match self {
            LabelAnchor::End => "translate(-100%, -50%)",
            LabelAnchor::Start => "translate(0%, -50%)",
            LabelAnchor::Above => "translate(-50%, -100%)",
            LabelAnchor::Below => "translate(-50%, 0%)",
        }
    }

    /// CSS text-align, if the anchor sets one.
    pub fn text_align(self) -> Option<&'static str> {
        match self {
            LabelAnchor::End => Some("right"),
            LabelAnchor::Start => None,
            LabelAnchor::Above | LabelAnchor::Below => Some("center"),
        }
    }
}

/// Where a domain label goes, relative to the view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub point: Vec2,
    /// Position as percentages of the view box, for size-independent placement.
    pub left_pct: f32,
    pub top_pct: f32,
    pub anchor: LabelAnchor,
}

impl RadarLayout {
    /// Angle of vertex `index` out of `count`, in radians. Index 0 is north.
    pub fn angle(&self, index: usize, count: usize) -> f32 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        TAU * index as f32 / count as f32 - FRAC_PI_2
    }

    pub fn point(&self, index: usize, count: usize, radius: f32) -> Vec2 {
        let angle = self.angle(index, count);
        self.center + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Regular polygon of `count` vertices at `radius`.
    pub fn polygon(&self, count: usize, radius: f32) -> Vec<Vec2> {
        (0..count).map(|i| self.point(i, count, radius)).collect()
    }

    /// Concentric grid rings, one per ring fraction.
    pub fn grid_rings(&self, count: usize) -> Vec<Vec<Vec2>> {
        self.ring_fractions
            .iter()
            .map(|f| self.polygon(count, self.max_radius * f))
            .collect()
    }

    /// Axis spokes from the centre to the outer ring.
    pub fn spokes(&self, count: usize) -> Vec<(Vec2, Vec2)> {
        (0..count)
            .map(|i| (self.center, self.point(i, count, self.max_radius)))
            .collect()
    }

    pub fn level_radius(&self, level: u8) -> f32 {
        f32::from(level) / self.level_scale * self.max_radius
    }

    /// Three-way split around the centre. The band edges belong to `Middle`.
    pub fn zone(&self, x: f32) -> Zone {
        if x < self.center.x - self.align_band {
            Zone::Left
        } else if x > self.center.x + self.align_band {
            Zone::Right
        } else {
            Zone::Middle
        }
    }

    pub fn label_placement(&self, index: usize, count: usize) -> LabelPlacement {
        let point = self.point(index, count, self.max_radius + self.label_offset);
        let anchor = match self.zone(point.x) {
            Zone::Left => LabelAnchor::End,
            Zone::Right => LabelAnchor::Start,
            Zone::Middle if point.y < self.center.y => LabelAnchor::Above,
            Zone::Middle => LabelAnchor::Below,
        };
        LabelPlacement {
            point,
            left_pct: point.x / self.view_box * 100.0,
            top_pct: point.y / self.view_box * 100.0,
            anchor,
        }
    }
}

/// SVG `points` attribute for a polygon, one decimal per coordinate.
pub fn points_attr(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn vertex_zero_is_due_north() {
        let layout = RadarLayout::default();
        assert!((layout.angle(0, 10).to_degrees() + 90.0).abs() < 1e-4);
        let p = layout.point(0, 10, 190.0);
        assert!(close(p, Vec2::new(250.0, 60.0)), "got {:?}", p);
    }

    #[test]
    fn ten_vertices_are_36_degrees_apart() {
        let layout = RadarLayout::default();
        for i in 1..10 {
            let step = (layout.angle(i, 10) - layout.angle(i - 1, 10)).to_degrees();
            assert!((step - 36.0).abs() < 1e-3, "step {} was {}", i, step);
        }
    }

    #[test]
    fn vertices_proceed_clockwise() {
        let layout = RadarLayout::default();
        // One quarter turn from north lands due east on screen.
        let p = layout.point(1, 4, 100.0);
        assert!(close(p, Vec2::new(350.0, 250.0)), "got {:?}", p);
    }

    #[test]
    fn grid_rings_scale_with_fractions() {
        let layout = RadarLayout::default();
        let rings = layout.grid_rings(10);
        assert_eq!(rings.len(), 4);
        for (ring, f) in rings.iter().zip([0.25, 0.5, 0.75, 1.0]) {
            assert_eq!(ring.len(), 10);
            for v in ring {
                assert!((v.distance(layout.center) - 190.0 * f).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn spokes_reach_outer_ring() {
        let layout = RadarLayout::default();
        let spokes = layout.spokes(6);
        assert_eq!(spokes.len(), 6);
        for (from, to) in spokes {
            assert_eq!(from, layout.center);
            assert!((to.distance(layout.center) - 190.0).abs() < 1e-3);
        }
    }

    #[test]
    fn zone_band_edges_are_middle() {
        let layout = RadarLayout::default();
        assert_eq!(layout.zone(230.0), Zone::Middle);
        assert_eq!(layout.zone(270.0), Zone::Middle);
        assert_eq!(layout.zone(229.9), Zone::Left);
        assert_eq!(layout.zone(270.1), Zone::Right);
    }

    #[test]
    fn label_anchors_around_the_chart() {
        let layout = RadarLayout::default();
        let top = layout.label_placement(0, 10);
        assert_eq!(top.anchor, LabelAnchor::Above);
        assert!((top.left_pct - 50.0).abs() < 1e-3);
        assert!((top.top_pct - (250.0 - 218.0) / 5.0).abs() < 1e-3);

        assert_eq!(layout.label_placement(2, 10).anchor, LabelAnchor::Start);
        assert_eq!(layout.label_placement(5, 10).anchor, LabelAnchor::Below);
        assert_eq!(layout.label_placement(7, 10).anchor, LabelAnchor::End);
        assert_eq!(LabelAnchor::End.text_align(), Some("right"));
        assert_eq!(LabelAnchor::Below.transform(), "translate(-50%, 0%)");
    }

    #[test]
    fn empty_domain_list_is_harmless() {
        let layout = RadarLayout::default();
        assert!(layout.polygon(0, 100.0).is_empty());
        assert!(layout.spokes(0).is_empty());
        assert!(layout.angle(0, 0).is_finite());
    }

    #[test]
    fn points_attr_formats_one_decimal() {
        let attr = points_attr(&[Vec2::new(250.0, 60.0), Vec2::new(1.26, 3.0)]);
        assert_eq!(attr, "250.0,60.0 1.3,3.0");
    }
}
