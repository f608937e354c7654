use kurbo::Point;

/// The two "scope" connectors drawn between the overview ring and the detail ring.
///
/// Each polyline has three control points. The lower polyline mirrors the upper one across the
/// horizontal axis. Coordinates are in the detail ring's frame (detail center at the origin).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkGeometry {
    pub upper: [Point; 3],
    pub lower: [Point; 3],
}

impl LinkGeometry {
    /// Builds both connectors.
    ///
    /// `overview_x` is the horizontal position of the overview center, `overview_y` the radius
    /// in the overview ring that corresponds to the detail ring's current scope, and `detail_y`
    /// the detail ring's boundary radius.
    pub fn new(overview_x: f64, overview_y: f64, detail_y: f64) -> Self {
        let polyline = |sign: f64| {
            [
                Point::new(overview_x, sign * overview_y),
                Point::new(overview_x / 3.0, sign * detail_y),
                Point::new(0.0, sign * detail_y),
            ]
        };
        Self {
            upper: polyline(1.0),
            lower: polyline(-1.0),
        }
    }

    pub fn polylines(&self) -> [[Point; 3]; 2] {
        [self.upper, self.lower]
    }
}
