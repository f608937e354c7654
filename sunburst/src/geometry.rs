//! Angle and radius assignment for one ring.
//!
//! These are pure functions over a [`Dataset`] and a selection. They never fail: clicks that
//! would produce an empty detail ring are rejected upstream, and an itemset whose members are
//! not contiguous in the current item order gets a best-effort span.

use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

use crate::{Dataset, ItemAngles, ItemIndex, ItemsetArc, ItemsetIndex, RadiusScale, RootItemset};

/// Assigns item sectors.
///
/// `shown[i]` marks item `i` as part of the effective selection. Shown items divide the circle
/// evenly in dataset order, with the first sector centered on angle 0. Everything else collapses
/// to a zero-width sector at `-π`.
///
/// Only the first `min(shown.len(), out.len())` entries take part; the rest of `out` is left
/// as is.
pub fn assign_item_angles(shown: &[bool], out: &mut [ItemAngles]) {
    let shown = &shown[..shown.len().min(out.len())];
    let count = shown.iter().filter(|&&s| s).count();
    if count == 0 {
        out[..shown.len()].fill(ItemAngles::COLLAPSED);
        return;
    }
    if count == 1 {
        for (angles, &is_shown) in out.iter_mut().zip(shown) {
            *angles = if is_shown {
                ItemAngles {
                    start_angle: -PI,
                    mid_angle: 0.0,
                    end_angle: PI,
                }
            } else {
                ItemAngles::COLLAPSED
            };
        }
        return;
    }

    let step = TAU / count as f64;
    let offset = -step / 2.0;
    let mut slot = 0usize;
    for (angles, &is_shown) in out.iter_mut().zip(shown) {
        if !is_shown {
            *angles = ItemAngles::COLLAPSED;
            continue;
        }
        let k = slot as f64;
        *angles = ItemAngles {
            start_angle: offset + k * step,
            mid_angle: offset + (k + 0.5) * step,
            end_angle: offset + (k + 1.0) * step,
        };
        slot += 1;
    }
}

/// Assigns itemset arcs from the current item angles.
///
/// `arcs` carries the previous layout: hidden itemsets keep their previous start angle so a
/// collapse animates in place. Returns the itemsets whose extra items are not contiguous in
/// the current order.
///
/// An item missing from `shown` counts as not shown, and an itemset that needs a missing
/// entry of `items` is hidden. Entries of `arcs` past the dataset's itemsets are left as is.
pub fn assign_itemset_arcs(
    dataset: &Dataset,
    shown: &[bool],
    root: &RootItemset,
    items: &[ItemAngles],
    scale: &RadiusScale,
    arcs: &mut [ItemsetArc],
) -> Vec<ItemsetIndex> {
    let is_shown = |i: ItemIndex| shown.get(i).copied().unwrap_or(false);
    let root_count = root.items.len();
    let total_visible = shown.iter().filter(|&&s| s).count() + root_count;
    let placed: Vec<ItemIndex> = (0..shown.len()).filter(|&i| is_shown(i)).collect();
    let mut degenerate = Vec::new();

    for (index, arc) in arcs.iter_mut().enumerate().take(dataset.itemset_count()) {
        let members = dataset.members(index);
        let len = members.len();

        // Only the full set, one-less-than-full, the root and root-plus-one are drawn.
        let displayable = len == total_visible
            || len + 1 == total_visible
            || len == root_count + 1
            || len == root_count;
        if !displayable
            || members
                .iter()
                .any(|&m| !is_shown(m) && !root.contains(m))
            || root.items.iter().any(|r| !members.contains(r))
        {
            hide(arc);
            continue;
        }

        let extra: Vec<ItemIndex> = members
            .iter()
            .copied()
            .filter(|&m| !root.contains(m))
            .collect();
        let angle = |i: ItemIndex| items.get(i).copied();
        let span = match extra.as_slice() {
            [] => Some((PI, 3.0 * PI)),
            [only] => angle(*only).map(|a| (a.start_angle, a.end_angle)),
            _ if len == total_visible => Some((PI, 3.0 * PI)),
            _ => contiguous_run(&extra, &placed)
                .or_else(|| {
                    swarn!(
                        itemset = index,
                        extra = extra.len(),
                        "itemset members are not contiguous in the current item order"
                    );
                    degenerate.push(index);
                    let mut in_order = placed.iter().copied().filter(|p| extra.contains(p));
                    let first = in_order.next().or_else(|| extra.first().copied())?;
                    Some((first, in_order.last().unwrap_or(first)))
                })
                .and_then(|(first, last)| angle(first).zip(angle(last)))
                .map(|(first, last)| (first.mid_angle, last.mid_angle)),
        };
        let Some((start_angle, end_angle)) = span else {
            hide(arc);
            continue;
        };

        arc.start_angle = start_angle;
        arc.end_angle = end_angle;
        arc.outer_radius = scale.scale(relative_support(dataset, index, root));

        // Arcs are drawn as the positive sweep from start to end.
        while arc.start_angle > arc.end_angle {
            arc.end_angle += TAU;
        }
    }

    strace!(
        total_visible,
        root_count,
        degenerate = degenerate.len(),
        "assign_itemset_arcs"
    );
    degenerate
}

/// Finds the cyclic run of `placed` items that equals `extra` as a set.
///
/// Candidate starts are tried in `extra` order. Returns the first and last item of the run.
pub fn contiguous_run(extra: &[ItemIndex], placed: &[ItemIndex]) -> Option<(ItemIndex, ItemIndex)> {
    let n = placed.len();
    if extra.is_empty() || extra.len() > n {
        return None;
    }
    for &start in extra {
        let Some(start_pos) = placed.iter().position(|&p| p == start) else {
            continue;
        };
        let closes = (1..extra.len()).all(|offset| extra.contains(&placed[(start_pos + offset) % n]));
        if closes {
            return Some((start, placed[(start_pos + extra.len() - 1) % n]));
        }
    }
    None
}

/// Support of an itemset renormalized to the current root (the root itself is 1).
pub fn relative_support(dataset: &Dataset, itemset: ItemsetIndex, root: &RootItemset) -> f64 {
    let support = dataset.itemset(itemset).map_or(0.0, |s| s.support);
    if root.support > 0.0 {
        support / root.support
    } else {
        0.0
    }
}

fn hide(arc: &mut ItemsetArc) {
    arc.end_angle = arc.start_angle;
}
