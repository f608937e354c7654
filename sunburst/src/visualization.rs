use alloc::sync::Arc;
use core::cell::Cell;

use kurbo::Point;

use crate::labels;
use crate::ring::{Click, Effect, Ring};
use crate::{
    Dataset, Error, ItemIndex, ItemsetIndex, LinkGeometry, RingGeometry, RingKind,
    VisualizationData, VisualizationOptions,
};

/// Owns the detail ring, the optional overview ring and everything that couples them.
///
/// Every accepted interaction results in one coordinated update: both rings are laid out
/// again, the connector links and the reset-control visibility are recomputed, and the
/// `on_change` callback fires once.
///
/// This type holds no UI objects. For animated transitions between successive layouts, see the
/// `sunburst-adapter` crate.
#[derive(Clone, Debug)]
pub struct Visualization {
    options: VisualizationOptions,
    dataset: Arc<Dataset>,
    detail: Ring,
    overview: Option<Ring>,
    links: Option<LinkGeometry>,
    reset_visible: bool,
    generation: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Visualization {
    /// Validates the input and lays out both rings in their initial state.
    pub fn new(data: VisualizationData, options: VisualizationOptions) -> Result<Self, Error> {
        options.validate()?;
        let dataset = Arc::new(Dataset::new(data)?);

        let detail = Ring::new(
            RingKind::Detail,
            Arc::clone(&dataset),
            RingGeometry::new(options.diameter, options.label_ratio),
        );
        let overview = options.context.then(|| {
            Ring::new(
                RingKind::Overview,
                Arc::clone(&dataset),
                RingGeometry::new(options.context_diameter(), options.label_ratio),
            )
        });

        sdebug!(
            items = dataset.item_count(),
            itemsets = dataset.itemset_count(),
            context = options.context,
            scope = options.scope.as_str(),
            "Visualization::new"
        );

        let mut v = Self {
            options,
            dataset,
            detail,
            overview,
            links: None,
            reset_visible: false,
            generation: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        v.refresh_composition();
        Ok(v)
    }

    pub fn options(&self) -> &VisualizationOptions {
        &self.options
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn detail(&self) -> &Ring {
        &self.detail
    }

    pub fn overview(&self) -> Option<&Ring> {
        self.overview.as_ref()
    }

    pub fn ring(&self, kind: RingKind) -> Option<&Ring> {
        match kind {
            RingKind::Detail => Some(&self.detail),
            RingKind::Overview => self.overview.as_ref(),
        }
    }

    fn ring_mut(&mut self, kind: RingKind) -> Option<&mut Ring> {
        match kind {
            RingKind::Detail => Some(&mut self.detail),
            RingKind::Overview => self.overview.as_mut(),
        }
    }

    /// Center of a ring in the detail ring's frame.
    pub fn ring_origin(&self, kind: RingKind) -> Point {
        match kind {
            RingKind::Detail => Point::ORIGIN,
            RingKind::Overview => Point::new(self.options.context_position_x(), 0.0),
        }
    }

    /// Connector geometry; `None` when the overview ring is not rendered.
    pub fn links(&self) -> Option<&LinkGeometry> {
        self.links.as_ref()
    }

    /// Whether the reset control should be shown (the detail ring is drilled or zoomed).
    pub fn is_reset_visible(&self) -> bool {
        self.reset_visible
    }

    /// Number of coordinated updates so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Click on an item sector, by id.
    ///
    /// Returns `true` if the click changed the visualization.
    pub fn click_item(&mut self, kind: RingKind, item_id: &str) -> bool {
        let Some(item) = self.dataset.item_index(item_id) else {
            strace!(item_id, "click on unknown item; ignored");
            return false;
        };
        self.click_item_at(kind, item)
    }

    /// Click on an item sector: drills into `root ∪ {item}` if that itemset exists.
    pub fn click_item_at(&mut self, kind: RingKind, item: ItemIndex) -> bool {
        let Some(ring) = self.ring(kind) else {
            return false;
        };
        if ring.item_angles(item).is_none_or(|a| a.is_hidden()) {
            strace!(item, "click on hidden item; ignored");
            return false;
        }
        let Some(itemset) = ring.resolve_item_click(item) else {
            strace!(item, "no itemset extends the root with this item; ignored");
            return false;
        };
        self.dispatch(kind, Click::Item(itemset))
    }

    /// Click on an itemset arc or its support label.
    pub fn click_itemset(&mut self, kind: RingKind, itemset: ItemsetIndex) -> bool {
        let Some(ring) = self.ring(kind) else {
            return false;
        };
        if ring.itemset_arc(itemset).is_none_or(|a| a.is_hidden()) {
            strace!(itemset, "click on hidden itemset; ignored");
            return false;
        }
        let click = ring.classify_itemset_click(itemset);
        self.dispatch(kind, click)
    }

    /// Click on the outer-edge item label of an itemset. Always acts as an item click.
    ///
    /// Only itemsets that add exactly one item to the root carry that label; for any other
    /// itemset the click is ignored.
    pub fn click_item_label(&mut self, kind: RingKind, itemset: ItemsetIndex) -> bool {
        let Some(ring) = self.ring(kind) else {
            return false;
        };
        if ring.itemset_arc(itemset).is_none_or(|a| a.is_hidden()) {
            return false;
        }
        if labels::single_item_label(&self.dataset, itemset, ring.root()).is_none() {
            strace!(itemset, "itemset has no outer-edge item label; ignored");
            return false;
        }
        self.dispatch(kind, Click::Item(itemset))
    }

    /// Returns both rings to their initial state in one coordinated update.
    pub fn reset(&mut self) {
        sdebug!("Visualization::reset");
        self.detail.reset();
        if let Some(overview) = &mut self.overview {
            overview.reset();
        }
        self.update_all();
    }

    /// Batches multiple interactions into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn dispatch(&mut self, kind: RingKind, click: Click) -> bool {
        let Some(effect) = self.ring_mut(kind).and_then(|ring| ring.apply(click)) else {
            return false;
        };
        sdebug!(kind = ?kind, click = ?click, effect = ?effect, "click applied");
        match effect {
            Effect::Local => {}
            Effect::SelectOverview(itemset) => {
                if let Some(overview) = &mut self.overview {
                    overview.select_itemset(itemset);
                }
            }
            Effect::RootDetail(itemset) => {
                self.detail.set_root(itemset);
            }
        }
        self.update_all();
        true
    }

    fn update_all(&mut self) {
        self.detail.update();
        if let Some(overview) = &mut self.overview {
            overview.update();
        }
        self.refresh_composition();
        self.generation = self.generation.wrapping_add(1);
        self.notify();
    }

    fn refresh_composition(&mut self) {
        self.reset_visible = !(self.detail.selection().selected.len()
            == self.dataset.item_count()
            && self.detail.root().is_empty());
        self.links = self.overview.as_ref().map(|overview| {
            LinkGeometry::new(
                self.options.context_position_x(),
                overview
                    .geometry()
                    .radius_scale()
                    .scale(self.detail.root().support),
                self.detail.geometry().outer_radius,
            )
        });
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}
