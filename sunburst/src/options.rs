use alloc::sync::Arc;

use kurbo::{Rect, Size};

use crate::visualization::Visualization;
use crate::{Error, ScopeId};

/// A callback fired once per coordinated update (click, reset).
pub type OnChangeCallback = Arc<dyn Fn(&Visualization) + Send + Sync>;

/// Configuration for [`crate::Visualization`].
///
/// Lengths are in drawing units; the host maps the [`VisualizationOptions::view_box`] onto a
/// canvas of [`VisualizationOptions::canvas_size`] pixels.
#[derive(Clone)]
pub struct VisualizationOptions {
    /// Target pixel height of the widget. The width doubles when the overview is shown.
    pub size: u32,
    /// Whether the overview ring is rendered at all.
    pub context: bool,
    /// Diameter of the detail ring.
    pub diameter: f64,
    /// Overview diameter as a fraction of `diameter`.
    pub context_ratio: f64,
    pub margin: f64,
    /// Item ring radius as a fraction of the ring radius.
    pub label_ratio: f64,
    /// Prefix for element ids, unique per page.
    pub scope: ScopeId,
    pub on_change: Option<OnChangeCallback>,
}

impl VisualizationOptions {
    pub fn new() -> Self {
        Self {
            size: 800,
            context: true,
            diameter: 700.0,
            context_ratio: 2.0 / 3.0,
            margin: 80.0,
            label_ratio: 0.2,
            scope: ScopeId::default(),
            on_change: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_context(mut self, context: bool) -> Self {
        self.context = context;
        self
    }

    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_context_ratio(mut self, context_ratio: f64) -> Self {
        self.context_ratio = context_ratio;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_label_ratio(mut self, label_ratio: f64) -> Self {
        self.label_ratio = label_ratio;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<alloc::string::String>) -> Self {
        self.scope = ScopeId::new(scope);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Visualization) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn context_diameter(&self) -> f64 {
        self.context_ratio * self.diameter
    }

    /// Horizontal offset of the overview center relative to the detail center.
    pub fn context_position_x(&self) -> f64 {
        -(self.diameter + self.context_diameter()) / 2.0 - 2.0 * self.margin
    }

    /// Drawing-space extent that holds both rings and their margins.
    pub fn view_box(&self) -> Rect {
        let height = self.diameter + 2.0 * self.margin;
        let width = if self.context {
            self.diameter + self.context_diameter() + 4.0 * self.margin
        } else {
            self.diameter + 2.0 * self.margin
        };
        let x = (self.diameter / 2.0 + self.margin) - width;
        Rect::from_origin_size((x, -height / 2.0), (width, height))
    }

    /// Pixel size of the host canvas.
    pub fn canvas_size(&self) -> Size {
        let height = f64::from(self.size);
        let width = if self.context { 2.0 * height } else { height };
        Size::new(width, height)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.size == 0 {
            return Err(Error::InvalidOption {
                name: "size",
                reason: "must be positive",
            });
        }
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(Error::InvalidOption {
                name: "diameter",
                reason: "must be finite and positive",
            });
        }
        if !(self.context_ratio.is_finite() && self.context_ratio > 0.0) {
            return Err(Error::InvalidOption {
                name: "context_ratio",
                reason: "must be finite and positive",
            });
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(Error::InvalidOption {
                name: "margin",
                reason: "must be finite and non-negative",
            });
        }
        if !(self.label_ratio > 0.0 && self.label_ratio < 1.0) {
            return Err(Error::InvalidOption {
                name: "label_ratio",
                reason: "must lie strictly between 0 and 1",
            });
        }
        Ok(())
    }
}

impl Default for VisualizationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for VisualizationOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisualizationOptions")
            .field("size", &self.size)
            .field("context", &self.context)
            .field("diameter", &self.diameter)
            .field("context_ratio", &self.context_ratio)
            .field("margin", &self.margin)
            .field("label_ratio", &self.label_ratio)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
