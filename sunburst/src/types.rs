use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::PI;

/// Index of an item in [`crate::Dataset::items`].
pub type ItemIndex = usize;

/// Index of an itemset in [`crate::Dataset::itemsets`] (support-sorted order).
pub type ItemsetIndex = usize;

/// A single categorical value shown as a sector of the inner item ring.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub label: String,
    /// Icon key resolved by the host's glyph service. `"empty"` means no icon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A set of items with an associated support.
///
/// `items` keeps the order it was given in. Lookups treat it as a set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itemset {
    pub items: Vec<String>,
    pub support: f64,
}

impl Itemset {
    pub fn new<I, S>(items: I, support: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            support,
        }
    }
}

/// Construction-time input: `{ items, itemsets }`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizationData {
    pub items: Vec<Item>,
    pub itemsets: Vec<Itemset>,
}

/// Which of the two linked rings a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingKind {
    /// The zoomable main view.
    Detail,
    /// The always-zoomed-out context view.
    Overview,
}

/// Angular span of an item sector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAngles {
    pub start_angle: f64,
    pub mid_angle: f64,
    pub end_angle: f64,
}

impl ItemAngles {
    /// Zero-width sector parked at the bottom of the ring.
    pub const COLLAPSED: Self = Self {
        start_angle: -PI,
        mid_angle: -PI,
        end_angle: -PI,
    };

    pub fn is_hidden(&self) -> bool {
        self.start_angle == self.end_angle
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Default for ItemAngles {
    fn default() -> Self {
        Self::COLLAPSED
    }
}

/// Angular span and radius of an itemset arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsetArc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_radius: f64,
}

impl ItemsetArc {
    pub fn collapsed(outer_radius: f64) -> Self {
        Self {
            start_angle: -PI,
            end_angle: -PI,
            outer_radius,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.start_angle == self.end_angle
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}
