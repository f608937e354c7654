use crate::geometry::{assign_item_angles, assign_itemset_arcs, contiguous_run};
use crate::labels::{itemset_key, single_item_label, support_label, value_label};
use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() >> 33) as usize % (end_exclusive - start)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 40) & 1 == 1
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn data(items: &[&str], itemsets: &[(&[&str], f64)]) -> VisualizationData {
    VisualizationData {
        items: items.iter().map(|id| Item::new(*id, *id)).collect(),
        itemsets: itemsets
            .iter()
            .map(|(ids, support)| Itemset::new(ids.iter().copied(), *support))
            .collect(),
    }
}

/// Items `[A, B, C]` with `{A}: .6`, `{B}: .5`, `{A, B}: .3`.
fn abc() -> VisualizationData {
    data(
        &["A", "B", "C"],
        &[(&["A"], 0.6), (&["B"], 0.5), (&["A", "B"], 0.3)],
    )
}

fn shown_span_sum(ring: &Ring) -> f64 {
    ring.layout()
        .items
        .iter()
        .filter(|a| !a.is_hidden())
        .map(ItemAngles::span)
        .sum()
}

fn visibility(ring: &Ring) -> (Vec<bool>, Vec<bool>) {
    (
        ring.layout().items.iter().map(|a| a.is_hidden()).collect(),
        ring.layout().itemsets.iter().map(|a| a.is_hidden()).collect(),
    )
}

fn itemset(v: &Visualization, ids: &[&str]) -> ItemsetIndex {
    v.dataset().find_itemset_by_ids(ids).unwrap()
}

#[test]
fn initial_detail_ring_splits_evenly() {
    let v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let detail = v.detail();
    let step = TAU / 3.0;

    assert_eq!(detail.selected_item_ids(), vec!["A", "B", "C"]);
    assert!(detail.root_item_ids().is_empty());
    for (k, angles) in detail.layout().items.iter().enumerate() {
        let k = k as f64;
        assert!(approx(angles.start_angle, -step / 2.0 + k * step));
        assert!(approx(angles.mid_angle, k * step));
        assert!(approx(angles.span(), step));
    }
    assert!(approx(shown_span_sum(detail), TAU));
}

#[test]
fn pair_spans_between_member_mid_angles() {
    let v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let detail = v.detail();
    let ab = itemset(&v, &["A", "B"]);
    let arc = detail.itemset_arc(ab).unwrap();
    let a = detail.item_angles(0).unwrap();
    let b = detail.item_angles(1).unwrap();

    assert!(approx(arc.start_angle, a.mid_angle));
    assert!(approx(arc.end_angle, b.mid_angle));
    assert!(detail.layout().degenerate.is_empty());

    // Singletons span their item; the radius follows support.
    let single_a = detail.itemset_arc(itemset(&v, &["A"])).unwrap();
    assert!(approx(single_a.start_angle, a.start_angle));
    assert!(approx(single_a.end_angle, a.end_angle));
    let g = detail.geometry();
    assert!(approx(g.outer_radius, 350.0));
    assert!(approx(g.label_radius, 70.0));
    assert!(approx(single_a.outer_radius, 70.0 + 280.0 * 0.6));
}

#[test]
fn itemsets_are_sorted_by_support_then_size() {
    let d = Dataset::new(data(
        &["A", "B", "C"],
        &[
            (&["A", "B"], 0.5),
            (&["C"], 0.2),
            (&["A"], 0.5),
            (&["B"], 0.9),
        ],
    ))
    .unwrap();
    let order: Vec<(usize, f64)> = d
        .itemsets()
        .iter()
        .map(|s| (s.items.len(), s.support))
        .collect();
    assert_eq!(order, vec![(1, 0.9), (1, 0.5), (2, 0.5), (1, 0.2)]);
}

#[test]
fn lookup_ignores_stored_order() {
    let d = Dataset::new(data(&["A", "B"], &[(&["B", "A"], 0.4), (&["A"], 0.7)])).unwrap();
    let found = d.find_itemset_by_ids(&["A", "B"]).unwrap();
    assert_eq!(d.itemset(found).unwrap().items, vec!["B", "A"]);
    assert_eq!(d.members(found), &[1, 0]);
    assert_eq!(d.find_itemset_by_ids(&["B"]), None);
    assert_eq!(d.find_itemset_by_ids(&["A", "Z"]), None);
}

#[test]
fn ids_outlive_the_index_slice() {
    let d = Dataset::new(abc()).unwrap();
    let ids: Vec<&str> = {
        let picked = vec![2, 0, 7];
        d.ids(&picked).collect()
    };
    assert_eq!(ids, vec!["C", "A"]);

    // Same shape as the ring accessor, which maps a temporary effective selection.
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(v.click_item(RingKind::Detail, "A"));
    let selected = v.detail().selected_item_ids();
    assert_eq!(selected, vec!["B", "C"]);
}

#[test]
fn item_click_drills_and_selects_in_overview() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(v.click_item(RingKind::Detail, "A"));

    let detail = v.detail();
    assert_eq!(detail.root_item_ids(), vec!["A"]);
    assert!(approx(detail.root().support, 0.6));
    assert_eq!(detail.selected_item_ids(), vec!["B", "C"]);
    for id in ["B", "C"] {
        let angles = detail.item_angles(v.dataset().item_index(id).unwrap()).unwrap();
        assert!(approx(angles.span(), PI));
    }
    assert!(detail.item_angles(0).unwrap().is_hidden());
    assert!(approx(shown_span_sum(detail), TAU));

    // The root itself becomes the full circle.
    let root = detail.itemset_arc(itemset(&v, &["A"])).unwrap();
    assert!(approx(root.start_angle, PI));
    assert!(approx(root.end_angle, 3.0 * PI));
    // {B} does not extend the root.
    assert!(detail.itemset_arc(itemset(&v, &["B"])).unwrap().is_hidden());
    // {A, B} adds one item: it spans B, renormalized to the root's support.
    let ab = detail.itemset_arc(itemset(&v, &["A", "B"])).unwrap();
    let b = detail.item_angles(1).unwrap();
    assert!(approx(ab.start_angle, b.start_angle));
    assert!(approx(ab.end_angle, b.end_angle));
    assert!(approx(ab.outer_radius, 70.0 + 280.0 * 0.5));

    let overview = v.overview().unwrap();
    assert_eq!(overview.selected_item_ids(), vec!["A"]);
    let a = overview.item_angles(0).unwrap();
    assert!(approx(a.start_angle, -PI));
    assert!(approx(a.mid_angle, 0.0));
    assert!(approx(a.end_angle, PI));
    assert!(v.is_reset_visible());
}

#[test]
fn links_follow_detail_root_support() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let cx = v.options().context_position_x();
    assert!(approx(cx, -(700.0 + 700.0 * 2.0 / 3.0) / 2.0 - 160.0));

    let links = *v.links().unwrap();
    assert!(approx(links.upper[0].x, cx));
    assert!(approx(links.upper[0].y, 700.0 / 3.0));
    assert!(approx(links.upper[1].x, cx / 3.0));
    assert!(approx(links.upper[2].x, 0.0));
    assert!(approx(links.upper[2].y, 350.0));
    assert!(approx(links.lower[0].y, -links.upper[0].y));

    assert!(v.click_item(RingKind::Detail, "A"));
    let overview = v.overview().unwrap().geometry();
    let expected = overview.label_radius + (overview.outer_radius - overview.label_radius) * 0.6;
    let links = *v.links().unwrap();
    assert!(approx(links.upper[0].y, expected));
    assert!(approx(links.lower[0].y, -expected));
    assert!(approx(links.upper[1].y, 350.0));
}

#[test]
fn itemset_click_then_reset_restores_initial_state() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let initial_detail = v.detail().selection().clone();
    let initial_overview = v.overview().unwrap().selection().clone();
    let initial_visibility = visibility(v.detail());

    assert!(v.click_itemset(RingKind::Detail, itemset(&v, &["A", "B"])));
    let detail = v.detail();
    assert_eq!(detail.selected_item_ids(), vec!["A", "B"]);
    assert!(detail.root().is_empty());
    assert!(detail.item_angles(2).unwrap().is_hidden());
    let ab = detail.itemset_arc(itemset(&v, &["A", "B"])).unwrap();
    assert!(approx(ab.start_angle, PI) && approx(ab.end_angle, 3.0 * PI));
    assert!(v.is_reset_visible());

    v.reset();
    assert_eq!(v.detail().selection(), &initial_detail);
    assert_eq!(v.overview().unwrap().selection(), &initial_overview);
    assert_eq!(visibility(v.detail()), initial_visibility);
    assert!(!v.is_reset_visible());
}

#[test]
fn drilling_into_the_whole_selection_is_rejected() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(v.click_itemset(RingKind::Detail, itemset(&v, &["A", "B"])));
    assert!(v.click_item(RingKind::Detail, "A"));
    assert_eq!(v.detail().selected_item_ids(), vec!["B"]);

    let generation = v.generation();
    // {A, B} would absorb every selected item.
    assert!(!v.click_item(RingKind::Detail, "B"));
    assert_eq!(v.generation(), generation);
    assert_eq!(v.detail().root_item_ids(), vec!["A"]);
    assert!(approx(shown_span_sum(v.detail()), TAU));
}

#[test]
fn itemset_click_equal_to_selection_is_noop() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let ab = itemset(&v, &["A", "B"]);
    assert!(v.click_itemset(RingKind::Detail, ab));
    let generation = v.generation();
    assert!(!v.click_itemset(RingKind::Detail, ab));
    assert_eq!(v.generation(), generation);
}

#[test]
fn unresolvable_clicks_are_ignored() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(!v.click_item(RingKind::Detail, "Z"));
    // No {C} itemset.
    assert!(!v.click_item(RingKind::Detail, "C"));
    // The overview starts fully collapsed.
    assert!(!v.click_item(RingKind::Overview, "A"));
    assert!(!v.click_itemset(RingKind::Overview, 0));
    assert!(!v.click_itemset(RingKind::Detail, 99));
    assert!(!v.click_item_at(RingKind::Detail, 99));
    assert_eq!(v.generation(), 0);
    assert!(!v.is_reset_visible());
}

#[test]
fn overview_click_reroots_detail() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(v.click_item(RingKind::Detail, "A"));
    assert!(v.click_item(RingKind::Detail, "B"));
    assert_eq!(v.detail().root_item_ids(), vec!["A", "B"]);
    assert_eq!(v.detail().selected_item_ids(), vec!["C"]);

    let overview = v.overview().unwrap();
    assert_eq!(overview.selected_item_ids(), vec!["A", "B"]);
    assert!(overview.root().is_empty());
    assert!(!overview.itemset_arc(itemset(&v, &["B"])).unwrap().is_hidden());

    // Going back through the overview.
    assert!(v.click_item(RingKind::Overview, "A"));
    assert_eq!(v.overview().unwrap().selected_item_ids(), vec!["A"]);
    assert_eq!(v.detail().root_item_ids(), vec!["A"]);
    assert_eq!(v.detail().selected_item_ids(), vec!["B", "C"]);
    assert!(approx(shown_span_sum(v.detail()), TAU));
}

#[test]
fn overview_itemset_click_selects_members() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(v.click_item(RingKind::Detail, "A"));
    assert!(v.click_item(RingKind::Detail, "B"));

    let ab = itemset(&v, &["A", "B"]);
    assert_eq!(v.overview().unwrap().classify_itemset_click(ab), Click::Itemset(ab));
    assert!(v.click_itemset(RingKind::Overview, ab));
    assert_eq!(v.overview().unwrap().selected_item_ids(), vec!["A", "B"]);
    assert_eq!(v.detail().root().itemset, Some(ab));
}

#[test]
fn item_label_click_acts_as_item_click() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let a = itemset(&v, &["A"]);
    assert!(v.click_item_label(RingKind::Detail, a));
    assert_eq!(v.detail().root().itemset, Some(a));
}

#[test]
fn item_label_click_needs_a_drawn_label() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let ab = itemset(&v, &["A", "B"]);

    // {A, B} is drawn but adds two items to the empty root, so it has no outer-edge label.
    assert!(!v.detail().itemset_arc(ab).unwrap().is_hidden());
    assert_eq!(single_item_label(v.dataset(), ab, v.detail().root()), None);
    assert!(!v.click_item_label(RingKind::Detail, ab));
    assert!(v.detail().root().is_empty());
    assert_eq!(v.generation(), 0);

    // Once A is the root, B is the single extra item and the label drills one level.
    assert!(v.click_item(RingKind::Detail, "A"));
    assert_eq!(single_item_label(v.dataset(), ab, v.detail().root()), Some("B"));
    assert!(v.click_item_label(RingKind::Detail, ab));
    assert_eq!(v.detail().root_item_ids(), vec!["A", "B"]);
}

#[test]
fn reset_control_hidden_only_in_default_state() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    assert!(!v.is_reset_visible());
    assert!(v.detail().is_default());
    assert!(v.overview().unwrap().is_default());

    assert!(v.click_item(RingKind::Detail, "B"));
    assert!(v.is_reset_visible());
    v.reset();
    assert!(!v.is_reset_visible());
    assert_eq!(
        v.detail().selection().selected.len(),
        v.dataset().item_count()
    );
    assert!(v.detail().root_item_ids().is_empty());
}

#[test]
fn on_change_fires_once_per_coordinated_update() {
    let calls = Arc::new(AtomicUsize::new(0));
    let options = VisualizationOptions::new().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Visualization| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut v = Visualization::new(abc(), options).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    assert!(v.click_item(RingKind::Detail, "A"));
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    assert!(!v.click_item(RingKind::Detail, "Z"));
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    v.reset();
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    let ab = itemset(&v, &["A", "B"]);
    v.batch_update(|v| {
        assert!(v.click_itemset(RingKind::Detail, ab));
        assert!(v.click_item(RingKind::Detail, "A"));
    });
    assert_eq!(calls.load(Ordering::Relaxed), 3);
    assert_eq!(v.generation(), 4);
}

#[test]
fn detail_only_has_no_overview_or_links() {
    let options = VisualizationOptions::new().with_context(false);
    let mut v = Visualization::new(abc(), options).unwrap();
    assert!(v.overview().is_none());
    assert!(v.links().is_none());
    assert!(!v.click_item(RingKind::Overview, "A"));
    assert!(v.click_item(RingKind::Detail, "A"));
    assert_eq!(v.detail().root_item_ids(), vec!["A"]);
    assert!(v.links().is_none());

    let view_box = v.options().view_box();
    assert!(approx(view_box.width(), 860.0));
    assert!(approx(view_box.x0, -430.0));
    assert!(approx(v.options().canvas_size().width, 800.0));
}

#[test]
fn view_box_holds_both_rings() {
    let options = VisualizationOptions::new();
    let view_box = options.view_box();
    let width = 700.0 + 700.0 * 2.0 / 3.0 + 320.0;
    assert!(approx(view_box.width(), width));
    assert!(approx(view_box.height(), 860.0));
    assert!(approx(view_box.x0, 430.0 - width));
    assert!(approx(view_box.y0, -430.0));
    let canvas = options.canvas_size();
    assert!(approx(canvas.width, 1600.0));
    assert!(approx(canvas.height, 800.0));
}

#[test]
fn invalid_input_fails_fast() {
    let err = |d: VisualizationData| Visualization::new(d, VisualizationOptions::new()).unwrap_err();

    assert_eq!(err(data(&[], &[(&[], 1.0)])), Error::NoItems);
    assert_eq!(err(data(&["A"], &[])), Error::NoItemsets);
    assert_eq!(err(data(&["A", ""], &[(&["A"], 1.0)])), Error::EmptyItemId { index: 1 });
    assert_eq!(
        err(data(&["A", "A"], &[(&["A"], 1.0)])),
        Error::DuplicateItem { id: "A".into() }
    );
    assert_eq!(
        err(data(&["A"], &[(&["A"], 1.0), (&["B"], 0.5)])),
        Error::UnknownItem {
            index: 1,
            id: "B".into()
        }
    );
    assert_eq!(
        err(data(&["A"], &[(&["A", "A"], 0.5)])),
        Error::RepeatedItem {
            index: 0,
            id: "A".into()
        }
    );
    assert_eq!(
        err(data(&["A"], &[(&["A"], 1.5)])),
        Error::InvalidSupport {
            index: 0,
            support: 1.5
        }
    );
    assert!(matches!(
        err(data(&["A"], &[(&["A"], f64::NAN)])),
        Error::InvalidSupport { index: 0, .. }
    ));

    let bad = VisualizationOptions::new().with_label_ratio(1.0);
    assert_eq!(
        Visualization::new(abc(), bad).unwrap_err(),
        Error::InvalidOption {
            name: "label_ratio",
            reason: "must lie strictly between 0 and 1"
        }
    );
    let bad = VisualizationOptions::new().with_diameter(f64::INFINITY);
    assert!(matches!(
        Visualization::new(abc(), bad),
        Err(Error::InvalidOption {
            name: "diameter",
            ..
        })
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let e = Error::UnknownItem {
        index: 2,
        id: "color=red".into(),
    };
    assert_eq!(
        format!("{e}"),
        "itemset 2 references unknown item `color=red`"
    );
}

#[test]
fn single_item_fills_the_circle() {
    let mut out = vec![ItemAngles::default(); 3];
    assign_item_angles(&[false, true, false], &mut out);
    assert_eq!(out[1].start_angle, -PI);
    assert_eq!(out[1].mid_angle, 0.0);
    assert_eq!(out[1].end_angle, PI);
    assert!(out[0].is_hidden() && out[2].is_hidden());
    assert_eq!(out[0], ItemAngles::COLLAPSED);

    assign_item_angles(&[false, false, false], &mut out);
    assert!(out.iter().all(|a| *a == ItemAngles::COLLAPSED));
}

#[test]
fn items_keep_dataset_order_not_selection_order() {
    let mut v = Visualization::new(
        data(
            &["A", "B", "C"],
            &[(&["C", "A"], 0.4), (&["A"], 0.6), (&["C"], 0.5)],
        ),
        VisualizationOptions::new(),
    )
    .unwrap();
    assert!(v.click_itemset(RingKind::Detail, itemset(&v, &["A", "C"])));
    let detail = v.detail();
    assert_eq!(detail.selected_item_ids(), vec!["C", "A"]);
    let a = detail.item_angles(0).unwrap();
    let c = detail.item_angles(2).unwrap();
    assert!(a.start_angle < c.start_angle);
    assert!(approx(a.mid_angle, 0.0));
    assert!(approx(c.mid_angle, PI));
}

#[test]
fn short_layout_inputs_are_tolerated() {
    let v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let ds = v.dataset();
    let scale = v.detail().geometry().radius_scale();

    // Only one item angle slot: the first mask entry alone is laid out.
    let shown = [true, true];
    let mut angles = [ItemAngles::COLLAPSED; 1];
    assign_item_angles(&shown, &mut angles);
    assert!(approx(angles[0].span(), TAU));

    let mut arcs = vec![ItemsetArc::collapsed(70.0); ds.itemset_count() + 1];
    let degenerate = assign_itemset_arcs(
        ds,
        &shown,
        &RootItemset::default(),
        &angles,
        &scale,
        &mut arcs,
    );
    assert!(degenerate.is_empty());

    let a = itemset(&v, &["A"]);
    let b = itemset(&v, &["B"]);
    let ab = itemset(&v, &["A", "B"]);
    assert!(approx(arcs[a].span(), TAU));
    // B has no angle to span, so its arc is hidden.
    assert!(arcs[b].is_hidden());
    assert!(approx(arcs[ab].start_angle, PI));
    assert!(approx(arcs[ab].end_angle, 3.0 * PI));
    assert_eq!(arcs[ds.itemset_count()], ItemsetArc::collapsed(70.0));
}

#[test]
fn contiguous_run_wraps_around() {
    let placed = [0, 1, 2, 3, 4];
    assert_eq!(contiguous_run(&[1, 2], &placed), Some((1, 2)));
    assert_eq!(contiguous_run(&[2, 1], &placed), Some((1, 2)));
    assert_eq!(contiguous_run(&[4, 0], &placed), Some((4, 0)));
    assert_eq!(contiguous_run(&[0, 3, 4], &placed), Some((3, 0)));
    assert_eq!(contiguous_run(&[0, 2], &placed), None);
    assert_eq!(contiguous_run(&[0, 5], &placed), None);
    assert_eq!(contiguous_run(&[], &placed), None);
}

#[test]
fn wrapped_arcs_are_repaired_to_a_positive_sweep() {
    let mut v = Visualization::new(
        data(
            &["A", "B", "C", "D"],
            &[(&["A", "C", "D"], 0.2), (&["A"], 0.5)],
        ),
        VisualizationOptions::new(),
    )
    .unwrap();
    let acd = itemset(&v, &["A", "C", "D"]);
    let arc = v.detail().itemset_arc(acd).unwrap();
    // Run C, D, A wraps past angle π.
    let c = v.detail().item_angles(2).unwrap();
    let a = v.detail().item_angles(0).unwrap();
    assert!(approx(arc.start_angle, c.mid_angle));
    assert!(approx(arc.end_angle, a.mid_angle + TAU));
    assert!(arc.end_angle >= arc.start_angle);

    // Below the root {A}, the extension {C, D} is a plain run again.
    assert!(v.click_item(RingKind::Detail, "A"));
    let arc = v.detail().itemset_arc(acd).unwrap();
    let c = v.detail().item_angles(2).unwrap();
    let d = v.detail().item_angles(3).unwrap();
    assert!(approx(arc.start_angle, c.mid_angle));
    assert!(approx(arc.end_angle, d.mid_angle));
    assert!(approx(arc.outer_radius, 70.0 + 280.0 * 0.4));
}

#[test]
fn hidden_itemsets_collapse_in_place() {
    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let b = itemset(&v, &["B"]);
    let before = v.detail().itemset_arc(b).unwrap();
    assert!(!before.is_hidden());

    assert!(v.click_item(RingKind::Detail, "A"));
    let after = v.detail().itemset_arc(b).unwrap();
    assert!(after.is_hidden());
    assert_eq!(after.start_angle, before.start_angle);
    assert_eq!(after.outer_radius, before.outer_radius);
}

#[test]
fn labels_and_keys() {
    assert_eq!(value_label("color=red"), "color=red");
    assert_eq!(
        value_label("a_rather_long_feature_name=value"),
        "value"
    );
    assert_eq!(itemset_key(&["a", "b"]), "itemset_a_b");
    assert_eq!(ScopeId::new("3").path_id("x"), "3_x");

    let plain = Item::new("x", "x=1");
    assert_eq!(ItemGlyph::of(&plain), ItemGlyph::Label("x=1"));
    assert_eq!(
        ItemGlyph::of(&plain.clone().with_icon("empty")),
        ItemGlyph::Label("x=1")
    );
    assert_eq!(
        ItemGlyph::of(&plain.with_icon("car")),
        ItemGlyph::Icon("car")
    );

    let mut v = Visualization::new(abc(), VisualizationOptions::new()).unwrap();
    let a = itemset(&v, &["A"]);
    let ab = itemset(&v, &["A", "B"]);
    let root = v.detail().root().clone();
    assert_eq!(ArcFill::of(v.dataset(), a, &root), ArcFill::Plain);
    assert_eq!(
        ArcFill::of(v.dataset(), ab, &root),
        ArcFill::Keyed(String::from("itemset_A_B"))
    );
    assert_eq!(support_label(ab, 0.3, &root), "0.30");
    assert_eq!(support_label(ab, 0.0, &root), "");
    assert_eq!(single_item_label(v.dataset(), a, &root), Some("A"));
    assert_eq!(single_item_label(v.dataset(), ab, &root), None);

    assert!(v.click_item(RingKind::Detail, "A"));
    let root = v.detail().root().clone();
    assert_eq!(support_label(a, 1.0, &root), "");
    assert_eq!(ArcFill::of(v.dataset(), ab, &root), ArcFill::Plain);
    assert_eq!(single_item_label(v.dataset(), ab, &root), Some("B"));
    assert_eq!(single_item_label(v.dataset(), a, &root), None);
}

fn random_data(rng: &mut Lcg) -> VisualizationData {
    let n = rng.gen_range_usize(2, 8);
    let ids: Vec<String> = (0..n).map(|i| format!("f{i}=v")).collect();
    let mut itemsets = Vec::new();
    for id in &ids {
        let support = rng.gen_range_usize(1, 1000) as f64 / 1000.0;
        itemsets.push(Itemset::new([id.clone()], support));
    }
    for _ in 0..rng.gen_range_usize(1, 3 * n) {
        let members: Vec<String> = ids.iter().filter(|_| rng.gen_bool()).cloned().collect();
        if members.is_empty() {
            continue;
        }
        let support = rng.gen_range_usize(0, 500) as f64 / 1000.0;
        itemsets.push(Itemset::new(members, support));
    }
    VisualizationData {
        items: ids.iter().map(|id| Item::new(id.clone(), id.clone())).collect(),
        itemsets,
    }
}

fn check_invariants(ring: &Ring) {
    let layout = ring.layout();
    for angles in &layout.items {
        assert!(angles.end_angle >= angles.start_angle);
    }
    for arc in &layout.itemsets {
        assert!(arc.end_angle >= arc.start_angle, "{arc:?}");
    }
    for (i, angles) in layout.items.iter().enumerate() {
        if !ring.selection().is_effectively_selected(i) {
            assert_eq!(angles.start_angle, angles.end_angle);
        }
    }
    if !ring.selection().effective().is_empty() {
        assert!(approx(shown_span_sum(ring), TAU));
    }
}

#[test]
fn random_interaction_sequences_keep_invariants() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let mut v = Visualization::new(random_data(&mut rng), VisualizationOptions::new()).unwrap();
        let initial_detail = v.detail().selection().clone();
        let initial_visibility = visibility(v.detail());
        let items = v.dataset().item_count();
        let itemsets = v.dataset().itemset_count();

        for _ in 0..12 {
            let kind = if rng.gen_bool() {
                RingKind::Detail
            } else {
                RingKind::Overview
            };
            let before = v.generation();
            let changed = if rng.gen_bool() {
                v.click_item_at(kind, rng.gen_range_usize(0, items))
            } else {
                v.click_itemset(kind, rng.gen_range_usize(0, itemsets))
            };
            assert_eq!(v.generation(), before + u64::from(changed));

            check_invariants(v.detail());
            check_invariants(v.overview().unwrap());
        }

        v.reset();
        assert_eq!(v.detail().selection(), &initial_detail);
        assert_eq!(visibility(v.detail()), initial_visibility);
        assert!(v.overview().unwrap().selection().selected.is_empty());
        assert!(!v.is_reset_visible());
    }
}
