/// Linear map from a support ratio in `[0, 1]` to a radius.
///
/// Not clamped: ratios outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusScale {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RadiusScale {
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        Self {
            min_radius,
            max_radius,
        }
    }

    pub fn scale(&self, ratio: f64) -> f64 {
        self.min_radius + (self.max_radius - self.min_radius) * ratio
    }
}

/// Radii of one ring.
///
/// Items occupy `inner_radius..label_radius`; itemset arcs grow from `label_radius` towards
/// `outer_radius` according to their relative support.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometry {
    pub inner_radius: f64,
    pub label_radius: f64,
    pub outer_radius: f64,
}

impl RingGeometry {
    pub fn new(diameter: f64, label_ratio: f64) -> Self {
        let outer_radius = diameter / 2.0;
        Self {
            inner_radius: 0.0,
            label_radius: label_ratio * outer_radius,
            outer_radius,
        }
    }

    pub fn radius_scale(&self) -> RadiusScale {
        RadiusScale::new(self.label_radius, self.outer_radius)
    }
}
