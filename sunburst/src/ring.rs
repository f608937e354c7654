use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::geometry::{assign_item_angles, assign_itemset_arcs};
use crate::{
    Dataset, ItemAngles, ItemIndex, ItemsetArc, ItemsetIndex, RingGeometry, RingKind,
    RootItemset, Selection,
};

/// A click resolved to the itemset it acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Click {
    /// Drill into the itemset (it has at most one item beyond the current root).
    Item(ItemsetIndex),
    /// Zoom the outer ring onto the itemset's members.
    Itemset(ItemsetIndex),
}

/// What the composition layer has to do after a ring accepted a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Only the clicked ring changed.
    Local,
    /// The overview ring should show exactly the itemset's members.
    SelectOverview(ItemsetIndex),
    /// The detail ring should drill into the itemset.
    RootDetail(ItemsetIndex),
}

/// Derived geometry of one ring, recomputed by [`Ring::update`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingLayout {
    pub items: Vec<ItemAngles>,
    pub itemsets: Vec<ItemsetArc>,
    /// Itemsets drawn with a best-effort span because their members are not contiguous.
    pub degenerate: Vec<ItemsetIndex>,
}

/// One circular view: its selection state and derived layout.
///
/// Both variants share this type; they differ only in how clicks are applied (see
/// [`Ring::apply`]). Rings never reference each other; cross-ring consequences are returned as
/// [`Effect`]s.
#[derive(Clone, Debug)]
pub struct Ring {
    kind: RingKind,
    dataset: Arc<Dataset>,
    geometry: RingGeometry,
    selection: Selection,
    layout: RingLayout,
}

impl Ring {
    /// Creates a ring in its reset state and lays it out.
    pub fn new(kind: RingKind, dataset: Arc<Dataset>, geometry: RingGeometry) -> Self {
        let layout = RingLayout {
            items: alloc::vec![ItemAngles::COLLAPSED; dataset.item_count()],
            itemsets: alloc::vec![
                ItemsetArc::collapsed(geometry.label_radius);
                dataset.itemset_count()
            ],
            degenerate: Vec::new(),
        };
        let mut ring = Self {
            kind,
            selection: Selection::new(Vec::new()),
            dataset,
            geometry,
            layout,
        };
        ring.reset();
        ring.update();
        ring
    }

    pub fn kind(&self) -> RingKind {
        self.kind
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn root(&self) -> &RootItemset {
        &self.selection.root
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn item_angles(&self, item: ItemIndex) -> Option<ItemAngles> {
        self.layout.items.get(item).copied()
    }

    pub fn itemset_arc(&self, itemset: ItemsetIndex) -> Option<ItemsetArc> {
        self.layout.itemsets.get(itemset).copied()
    }

    /// Ids of the items drawn as the outer ring (root members excluded).
    pub fn selected_item_ids(&self) -> Vec<&str> {
        let effective = self.selection.effective();
        self.dataset.ids(&effective).collect()
    }

    pub fn root_item_ids(&self) -> Vec<&str> {
        self.dataset.ids(&self.selection.root.items).collect()
    }

    /// Whether the ring is in the state it was constructed in.
    pub fn is_default(&self) -> bool {
        let expected = match self.kind {
            RingKind::Detail => self.dataset.item_count(),
            RingKind::Overview => 0,
        };
        self.selection.selected.len() == expected && self.selection.root.is_empty()
    }

    /// Itemset formed by the current root plus `item`, if the dataset has one.
    pub fn resolve_item_click(&self, item: ItemIndex) -> Option<ItemsetIndex> {
        let mut items = self.selection.root.items.clone();
        items.push(item);
        self.dataset.find_itemset(&items)
    }

    /// Itemsets with at most one item beyond the root act as item clicks.
    pub fn classify_itemset_click(&self, itemset: ItemsetIndex) -> Click {
        let len = self.dataset.members(itemset).len();
        if len <= self.selection.root.items.len() + 1 {
            Click::Item(itemset)
        } else {
            Click::Itemset(itemset)
        }
    }

    /// Applies a click to this ring's own state.
    ///
    /// Returns `None` when the click is rejected and nothing changed.
    pub fn apply(&mut self, click: Click) -> Option<Effect> {
        match (self.kind, click) {
            (RingKind::Detail, Click::Item(itemset)) => {
                // Drilling into the whole selection would leave nothing to draw.
                if self.dataset.members(itemset).len() == self.selection.selected.len() {
                    strace!(itemset, "detail item click covers the selection; ignored");
                    return None;
                }
                self.selection.root = RootItemset::from_itemset(&self.dataset, itemset)?;
                Some(Effect::SelectOverview(itemset))
            }
            (RingKind::Detail, Click::Itemset(itemset)) => {
                let members = self.dataset.members(itemset);
                if self.selection.selected.len() == members.len()
                    && members.iter().all(|m| self.selection.selected.contains(m))
                {
                    strace!(itemset, "detail itemset click equals the selection; ignored");
                    return None;
                }
                self.selection.selected = members.to_vec();
                Some(Effect::Local)
            }
            (RingKind::Overview, Click::Item(itemset) | Click::Itemset(itemset)) => {
                self.dataset.itemset(itemset)?;
                self.selection.selected = self.dataset.members(itemset).to_vec();
                Some(Effect::RootDetail(itemset))
            }
        }
    }

    /// Replaces the raw selection with an itemset's members.
    pub fn select_itemset(&mut self, itemset: ItemsetIndex) -> bool {
        if self.dataset.itemset(itemset).is_none() {
            return false;
        }
        self.selection.selected = self.dataset.members(itemset).to_vec();
        true
    }

    /// Makes an itemset the drill-down root.
    pub fn set_root(&mut self, itemset: ItemsetIndex) -> bool {
        match RootItemset::from_itemset(&self.dataset, itemset) {
            Some(root) => {
                self.selection.root = root;
                true
            }
            None => false,
        }
    }

    /// Returns the ring to its constructed state. Does not re-layout.
    pub fn reset(&mut self) {
        self.selection = match self.kind {
            RingKind::Detail => Selection::new((0..self.dataset.item_count()).collect()),
            RingKind::Overview => Selection::new(Vec::new()),
        };
    }

    /// Recomputes item angles, then itemset arcs.
    pub fn update(&mut self) {
        let shown = self.selection.shown_mask(self.dataset.item_count());
        assign_item_angles(&shown, &mut self.layout.items);
        self.layout.degenerate = assign_itemset_arcs(
            &self.dataset,
            &shown,
            &self.selection.root,
            &self.layout.items,
            &self.geometry.radius_scale(),
            &mut self.layout.itemsets,
        );
        strace!(
            kind = ?self.kind,
            selected = self.selection.selected.len(),
            root = self.selection.root.items.len(),
            "Ring::update"
        );
    }
}
