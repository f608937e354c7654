use sunburst::RingKind;

/// Which of the four arc families a shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    ItemArc,
    ItemLabelArc,
    ItemsetArc,
    ItemsetLabelArc,
}

impl ShapeKind {
    /// Item families are indexed by item, itemset families by itemset.
    pub fn is_item(self) -> bool {
        matches!(self, Self::ItemArc | Self::ItemLabelArc)
    }
}

/// Stable identity of a drawn arc across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeKey {
    pub ring: RingKind,
    pub kind: ShapeKind,
    pub index: usize,
}
