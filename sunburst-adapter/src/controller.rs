use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use sunburst::geometry::relative_support;
use sunburst::labels::{self, ArcFill, ItemGlyph};
use sunburst::{
    Error, ItemsetIndex, Ring, RingKind, Visualization, VisualizationData, VisualizationOptions,
};

use crate::{ArcShape, Easing, LinkCurve, Renderer, ShapeKey, ShapeKind, Track};

/// Timing shared by every shape of one coordinated transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionOptions {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TransitionOptions {
    pub const DEFAULT_DURATION_MS: u64 = 1000;

    pub fn new() -> Self {
        Self {
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill classes with weights that sum to 1. The host mixes their resolved colors.
#[derive(Clone, Debug, PartialEq)]
pub struct FillMix(Vec<(ArcFill, f64)>);

impl FillMix {
    pub fn solid(fill: ArcFill) -> Self {
        Self(alloc::vec![(fill, 1.0)])
    }

    pub fn weights(&self) -> &[(ArcFill, f64)] {
        &self.0
    }

    pub fn weight(&self, fill: &ArcFill) -> f64 {
        self.0
            .iter()
            .filter(|(f, _)| f == fill)
            .map(|(_, w)| *w)
            .sum()
    }

    /// This mix moved `t` of the way towards `to`.
    pub fn towards(&self, to: &ArcFill, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut weights: Vec<(ArcFill, f64)> = self
            .0
            .iter()
            .map(|(f, w)| (f.clone(), w * (1.0 - t)))
            .collect();
        match weights.iter_mut().find(|(f, _)| f == to) {
            Some((_, w)) => *w += t,
            None => weights.push((to.clone(), t)),
        }
        weights.retain(|(_, w)| *w > 0.0);
        Self(weights)
    }
}

/// An itemset fill on its way from a mix of fill classes to a single class.
///
/// A click mid-fade starts the next fade from the mix on screen, so the fill never jumps.
#[derive(Clone, Debug, PartialEq)]
pub struct FillBlend {
    pub from: FillMix,
    pub to: ArcFill,
    pub t: f64,
}

impl FillBlend {
    /// What is on screen: `from` moved `t` of the way towards `to`.
    pub fn mix(&self) -> FillMix {
        self.from.towards(&self.to, self.t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArcFrame {
    pub key: ShapeKey,
    /// Ring center in the drawing frame.
    pub origin: Point,
    pub shape: ArcShape,
    pub visible: bool,
    /// Only set for itemset arcs.
    pub fill: Option<FillBlend>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelKind {
    /// Item label text, along the item label arc.
    Item,
    /// Icon key for the host's glyph service, along the item label arc.
    Icon,
    /// Relative support, along the itemset label arc.
    Support,
    /// The one item an itemset adds to the root, along the itemset label arc.
    SingleItem,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelFrame {
    pub ring: RingKind,
    pub kind: LabelKind,
    /// Item index for item labels, itemset index otherwise.
    pub index: usize,
    pub text: String,
    /// Element id of the label arc the text follows.
    pub path_id: String,
    pub visible: bool,
}

/// Everything a host needs to draw one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub arcs: Vec<ArcFrame>,
    pub labels: Vec<LabelFrame>,
    /// Upper and lower connectors; `None` without an overview ring.
    pub links: Option<[LinkCurve; 2]>,
    pub reset_visible: bool,
}

impl Frame {
    pub fn arc(&self, key: ShapeKey) -> Option<&ArcFrame> {
        self.arcs.iter().find(|a| a.key == key)
    }

    pub fn visible_arcs(&self) -> impl Iterator<Item = &ArcFrame> + '_ {
        self.arcs.iter().filter(|a| a.visible)
    }
}

/// Rendered output of [`Controller::draw`].
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing<P> {
    pub arcs: Vec<(ShapeKey, P)>,
    pub links: Vec<P>,
}

#[derive(Clone, Debug, PartialEq)]
struct FillTrack {
    from: FillMix,
    to: ArcFill,
}

#[derive(Clone, Debug)]
struct RingTracks {
    kind: RingKind,
    items: Vec<Track<ArcShape>>,
    item_labels: Vec<Track<ArcShape>>,
    itemsets: Vec<Track<ArcShape>>,
    itemset_labels: Vec<Track<ArcShape>>,
    supports: Vec<Track<f64>>,
    fills: Vec<FillTrack>,
}

impl RingTracks {
    fn new(ring: &Ring) -> Self {
        let geometry = ring.geometry();
        let layout = ring.layout();
        let dataset = ring.dataset();
        let root = ring.root();
        Self {
            kind: ring.kind(),
            items: layout
                .items
                .iter()
                .map(|&a| Track::new(ArcShape::item(a, geometry)))
                .collect(),
            item_labels: layout
                .items
                .iter()
                .map(|&a| Track::new(ArcShape::item_label(a, geometry)))
                .collect(),
            itemsets: layout
                .itemsets
                .iter()
                .map(|&a| Track::new(ArcShape::itemset(a, geometry)))
                .collect(),
            itemset_labels: layout
                .itemsets
                .iter()
                .map(|&a| Track::new(ArcShape::itemset_label(a)))
                .collect(),
            supports: (0..dataset.itemset_count())
                .map(|i| Track::new(relative_support(dataset, i, root)))
                .collect(),
            fills: (0..dataset.itemset_count())
                .map(|i| {
                    let fill = ArcFill::of(dataset, i, root);
                    FillTrack {
                        from: FillMix::solid(fill.clone()),
                        to: fill,
                    }
                })
                .collect(),
        }
    }

    fn retarget(&mut self, ring: &Ring, now_ms: u64, t: TransitionOptions) {
        let geometry = ring.geometry();
        let layout = ring.layout();
        let dataset = ring.dataset();
        let root = ring.root();
        let (d, e) = (t.duration_ms, t.easing);

        for (i, &angles) in layout.items.iter().enumerate() {
            self.items[i].retarget(now_ms, ArcShape::item(angles, geometry), d, e);
            self.item_labels[i].retarget(now_ms, ArcShape::item_label(angles, geometry), d, e);
        }
        for (i, &arc) in layout.itemsets.iter().enumerate() {
            let fill = &self.fills[i];
            let shown = fill.from.towards(&fill.to, self.itemsets[i].progress(now_ms));
            self.fills[i] = FillTrack {
                from: shown,
                to: ArcFill::of(dataset, i, root),
            };
            self.itemsets[i].retarget(now_ms, ArcShape::itemset(arc, geometry), d, e);
            self.itemset_labels[i].retarget(now_ms, ArcShape::itemset_label(arc), d, e);
            self.supports[i].retarget(now_ms, relative_support(dataset, i, root), d, e);
        }
    }

    fn all_shapes_mut(&mut self) -> impl Iterator<Item = &mut Track<ArcShape>> {
        self.items
            .iter_mut()
            .chain(self.item_labels.iter_mut())
            .chain(self.itemsets.iter_mut())
            .chain(self.itemset_labels.iter_mut())
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        let mut animating = false;
        for (track, fill) in self.itemsets.iter().zip(&mut self.fills) {
            if !track.is_animating(now_ms) {
                fill.from = FillMix::solid(fill.to.clone());
            }
        }
        for track in self.all_shapes_mut() {
            animating |= track.tick(now_ms);
        }
        for track in &mut self.supports {
            animating |= track.tick(now_ms);
        }
        animating
    }

    fn finish(&mut self) {
        for track in self.all_shapes_mut() {
            track.finish();
        }
        for track in &mut self.supports {
            track.finish();
        }
        for fill in &mut self.fills {
            fill.from = FillMix::solid(fill.to.clone());
        }
    }

    fn shapes(&self, kind: ShapeKind) -> &[Track<ArcShape>] {
        match kind {
            ShapeKind::ItemArc => &self.items,
            ShapeKind::ItemLabelArc => &self.item_labels,
            ShapeKind::ItemsetArc => &self.itemsets,
            ShapeKind::ItemsetLabelArc => &self.itemset_labels,
        }
    }

    fn push_arcs(&self, origin: Point, now_ms: u64, out: &mut Vec<ArcFrame>) {
        for kind in [
            ShapeKind::ItemArc,
            ShapeKind::ItemLabelArc,
            ShapeKind::ItemsetArc,
            ShapeKind::ItemsetLabelArc,
        ] {
            for (index, track) in self.shapes(kind).iter().enumerate() {
                let fill = (kind == ShapeKind::ItemsetArc).then(|| FillBlend {
                    from: self.fills[index].from.clone(),
                    to: self.fills[index].to.clone(),
                    t: track.progress(now_ms),
                });
                out.push(ArcFrame {
                    key: ShapeKey {
                        ring: self.kind,
                        kind,
                        index,
                    },
                    origin,
                    shape: track.sample(now_ms),
                    visible: track.is_visible(now_ms),
                    fill,
                });
            }
        }
    }

    fn push_labels(&self, ring: &Ring, scope: &str, now_ms: u64, out: &mut Vec<LabelFrame>) {
        let dataset = ring.dataset();
        let root = ring.root();
        let prefix = match self.kind {
            RingKind::Detail => "detail",
            RingKind::Overview => "overview",
        };
        let scope = labels::ScopeId::new(format!("{scope}_{prefix}"));

        for (index, item) in dataset.items().iter().enumerate() {
            let (kind, text) = match ItemGlyph::of(item) {
                ItemGlyph::Icon(key) => (LabelKind::Icon, String::from(key)),
                ItemGlyph::Label(label) => {
                    (LabelKind::Item, String::from(labels::value_label(label)))
                }
            };
            out.push(LabelFrame {
                ring: self.kind,
                kind,
                index,
                text,
                path_id: scope.path_id(&item.id),
                visible: self.item_labels[index].is_visible(now_ms),
            });
        }

        for index in 0..dataset.itemset_count() {
            let path_id = scope.path_id(&labels::itemset_path_key(dataset, index));
            let visible = self.itemset_labels[index].is_visible(now_ms);
            out.push(LabelFrame {
                ring: self.kind,
                kind: LabelKind::Support,
                index,
                text: labels::support_label(index, self.supports[index].sample(now_ms), root),
                path_id: path_id.clone(),
                visible,
            });
            if let Some(single) = labels::single_item_label(dataset, index, root) {
                out.push(LabelFrame {
                    ring: self.kind,
                    kind: LabelKind::SingleItem,
                    index,
                    text: String::from(single),
                    path_id,
                    visible,
                });
            }
        }
    }
}

/// A framework-neutral controller that wraps a [`sunburst::Visualization`] and animates between
/// its successive layouts.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - the `click_*` methods and `reset` when UI events occur
/// - `tick(now_ms)` each frame while [`Controller::is_animating`]
/// - `frame(now_ms)` or `draw(renderer, now_ms)` to read what to display
///
/// Every accepted interaction starts one coordinated transition: all shapes of both rings, the
/// support labels and the links are retargeted at the same instant with the same timing.
#[derive(Clone, Debug)]
pub struct Controller {
    v: Visualization,
    transition: TransitionOptions,
    detail: RingTracks,
    overview: Option<RingTracks>,
    links: Option<[Track<LinkCurve>; 2]>,
    animating: bool,
}

impl Controller {
    pub fn new(
        data: VisualizationData,
        options: VisualizationOptions,
        transition: TransitionOptions,
    ) -> Result<Self, Error> {
        Ok(Self::from_visualization(
            Visualization::new(data, options)?,
            transition,
        ))
    }

    /// Starts settled at the visualization's current layout.
    pub fn from_visualization(v: Visualization, transition: TransitionOptions) -> Self {
        let detail = RingTracks::new(v.detail());
        let overview = v.overview().map(RingTracks::new);
        let links = v.links().map(|l| LinkCurve::pair(l).map(Track::new));
        Self {
            v,
            transition,
            detail,
            overview,
            links,
            animating: false,
        }
    }

    pub fn visualization(&self) -> &Visualization {
        &self.v
    }

    pub fn into_visualization(self) -> Visualization {
        self.v
    }

    pub fn transition(&self) -> TransitionOptions {
        self.transition
    }

    pub fn set_transition(&mut self, transition: TransitionOptions) {
        self.transition = transition;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Jumps every shape to its target.
    pub fn finish_animation(&mut self) {
        self.detail.finish();
        if let Some(o) = &mut self.overview {
            o.finish();
        }
        for track in self.links.iter_mut().flatten() {
            track.finish();
        }
        self.animating = false;
    }

    pub fn click_item(&mut self, ring: RingKind, item_id: &str, now_ms: u64) -> bool {
        let changed = self.v.click_item(ring, item_id);
        self.after_interaction(changed, now_ms)
    }

    pub fn click_itemset(&mut self, ring: RingKind, itemset: ItemsetIndex, now_ms: u64) -> bool {
        let changed = self.v.click_itemset(ring, itemset);
        self.after_interaction(changed, now_ms)
    }

    pub fn click_item_label(
        &mut self,
        ring: RingKind,
        itemset: ItemsetIndex,
        now_ms: u64,
    ) -> bool {
        let changed = self.v.click_item_label(ring, itemset);
        self.after_interaction(changed, now_ms)
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.v.reset();
        self.after_interaction(true, now_ms);
    }

    /// Drops finished tweens. Returns whether anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.animating {
            return false;
        }
        let mut animating = self.detail.tick(now_ms);
        if let Some(o) = &mut self.overview {
            animating |= o.tick(now_ms);
        }
        for track in self.links.iter_mut().flatten() {
            animating |= track.tick(now_ms);
        }
        if !animating {
            atrace!(now_ms, "transition settled");
        }
        self.animating = animating;
        animating
    }

    /// Samples every shape, label and link at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> Frame {
        let scope = self.v.options().scope.as_str();
        let mut frame = Frame {
            reset_visible: self.v.is_reset_visible(),
            links: self
                .links
                .as_ref()
                .map(|[upper, lower]| [upper.sample(now_ms), lower.sample(now_ms)]),
            ..Frame::default()
        };

        let rings = [
            Some((&self.detail, self.v.detail())),
            self.overview.as_ref().zip(self.v.overview()),
        ];
        for (tracks, ring) in rings.into_iter().flatten() {
            tracks.push_arcs(self.v.ring_origin(tracks.kind), now_ms, &mut frame.arcs);
            tracks.push_labels(ring, scope, now_ms, &mut frame.labels);
        }
        frame
    }

    /// Renders the visible arcs and the links at `now_ms`.
    pub fn draw<R: Renderer>(&self, renderer: &mut R, now_ms: u64) -> Drawing<R::Path> {
        let frame = self.frame(now_ms);
        let arcs = frame
            .visible_arcs()
            .map(|a| (a.key, renderer.arc(a.origin, &a.shape)))
            .collect();
        let links = frame
            .links
            .iter()
            .flatten()
            .map(|curve| renderer.link(curve))
            .collect();
        Drawing { arcs, links }
    }

    fn after_interaction(&mut self, changed: bool, now_ms: u64) -> bool {
        if !changed {
            return false;
        }
        let t = self.transition;
        self.detail.retarget(self.v.detail(), now_ms, t);
        if let (Some(tracks), Some(ring)) = (&mut self.overview, self.v.overview()) {
            tracks.retarget(ring, now_ms, t);
        }
        if let (Some(tracks), Some(links)) = (&mut self.links, self.v.links()) {
            for (track, target) in tracks.iter_mut().zip(LinkCurve::pair(links)) {
                track.retarget(now_ms, target, t.duration_ms, t.easing);
            }
        }
        self.animating = true;
        adebug!(
            now_ms,
            duration_ms = t.duration_ms,
            generation = self.v.generation(),
            "transition started"
        );
        true
    }
}
