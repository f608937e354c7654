use alloc::vec::Vec;

use crate::{Dataset, ItemIndex, ItemsetIndex};

/// The itemset currently factored out as the center of a drill-down.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootItemset {
    /// `None` for the top-level root (no drill-down).
    pub itemset: Option<ItemsetIndex>,
    pub items: Vec<ItemIndex>,
    pub support: f64,
}

impl RootItemset {
    pub fn from_itemset(dataset: &Dataset, itemset: ItemsetIndex) -> Option<Self> {
        let support = dataset.itemset(itemset)?.support;
        Some(Self {
            itemset: Some(itemset),
            items: dataset.members(itemset).to_vec(),
            support,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemIndex) -> bool {
        self.items.contains(&item)
    }
}

impl Default for RootItemset {
    fn default() -> Self {
        Self {
            itemset: None,
            items: Vec::new(),
            support: 1.0,
        }
    }
}

/// Per-ring selection: the raw selected items plus the drill-down root.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub selected: Vec<ItemIndex>,
    pub root: RootItemset,
}

impl Selection {
    pub fn new(selected: Vec<ItemIndex>) -> Self {
        Self {
            selected,
            root: RootItemset::default(),
        }
    }

    /// Items drawn as the outer ring: the raw selection minus root members.
    pub fn effective(&self) -> Vec<ItemIndex> {
        self.selected
            .iter()
            .copied()
            .filter(|&i| !self.root.contains(i))
            .collect()
    }

    pub fn is_effectively_selected(&self, item: ItemIndex) -> bool {
        self.selected.contains(&item) && !self.root.contains(item)
    }

    /// Membership mask of the effective selection over `item_count` items.
    pub(crate) fn shown_mask(&self, item_count: usize) -> Vec<bool> {
        let mut shown = alloc::vec![false; item_count];
        for &i in &self.selected {
            if let Some(slot) = shown.get_mut(i) {
                *slot = !self.root.contains(i);
            }
        }
        shown
    }
}
