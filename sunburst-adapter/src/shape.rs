use kurbo::Point;
use sunburst::{ItemAngles, ItemsetArc, LinkGeometry, RingGeometry};

use crate::Lerp;

/// An annular sector in d3 angle convention: `0` points up and angles grow clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcShape {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcShape {
    /// Item sector, from the center out to the label radius.
    pub fn item(angles: ItemAngles, geometry: RingGeometry) -> Self {
        Self {
            start_angle: angles.start_angle,
            end_angle: angles.end_angle,
            inner_radius: geometry.inner_radius,
            outer_radius: geometry.label_radius,
        }
    }

    /// Zero-width arc along the label radius that carries the item label.
    pub fn item_label(angles: ItemAngles, geometry: RingGeometry) -> Self {
        Self {
            start_angle: angles.start_angle,
            end_angle: angles.end_angle,
            inner_radius: geometry.label_radius,
            outer_radius: geometry.label_radius,
        }
    }

    pub fn itemset(arc: ItemsetArc, geometry: RingGeometry) -> Self {
        Self {
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            inner_radius: geometry.label_radius,
            outer_radius: arc.outer_radius,
        }
    }

    /// Zero-width arc along the outer edge that carries the support label.
    pub fn itemset_label(arc: ItemsetArc) -> Self {
        Self {
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            inner_radius: arc.outer_radius,
            outer_radius: arc.outer_radius,
        }
    }

    /// No angular extent.
    pub fn is_collapsed(&self) -> bool {
        self.start_angle == self.end_angle
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Lerp for ArcShape {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            start_angle: Lerp::lerp(self.start_angle, to.start_angle, t),
            end_angle: Lerp::lerp(self.end_angle, to.end_angle, t),
            inner_radius: Lerp::lerp(self.inner_radius, to.inner_radius, t),
            outer_radius: Lerp::lerp(self.outer_radius, to.outer_radius, t),
        }
    }
}

/// Control points of one overview connector, drawn as a uniform B-spline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkCurve {
    pub points: [Point; 3],
}

impl LinkCurve {
    /// Upper and lower connectors.
    pub fn pair(links: &LinkGeometry) -> [Self; 2] {
        [Self { points: links.upper }, Self { points: links.lower }]
    }
}

impl Lerp for LinkCurve {
    fn lerp(self, to: Self, t: f64) -> Self {
        let [a, b, c] = self.points;
        let [x, y, z] = to.points;
        Self {
            points: [a.lerp(x, t), b.lerp(y, t), c.lerp(z, t)],
        }
    }
}
