//! Text and identifier rules for labels, element ids and fills.
//!
//! Glyph lookup and color assignment are host services; this module only produces the stable
//! keys they are resolved by.

use alloc::format;
use alloc::string::String;

use crate::{Dataset, Item, ItemsetIndex, RootItemset};

/// Labels longer than this show only their value part.
pub const VALUE_LABEL_CUTOFF: usize = 25;

/// Icon key that means "no icon".
pub const EMPTY_ICON: &str = "empty";

/// Caller-provided identifier that keeps element ids unique across visualizations on a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScopeId(pub String);

impl ScopeId {
    pub fn new(scope: impl Into<String>) -> Self {
        Self(scope.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id for a label path: `"{scope}_{key}"`.
    pub fn path_id(&self, key: &str) -> String {
        format!("{}_{}", self.0, key)
    }
}

/// Shortens `feature=value` labels that do not fit.
pub fn value_label(label: &str) -> &str {
    if label.chars().count() > VALUE_LABEL_CUTOFF {
        label.rsplit('=').next().unwrap_or(label)
    } else {
        label
    }
}

/// Stable key for an itemset, used for colors and element ids.
pub fn itemset_key<S: AsRef<str>>(ids: &[S]) -> String {
    let mut key = String::from("itemset");
    for id in ids {
        key.push('_');
        key.push_str(id.as_ref());
    }
    key
}

/// What an item sector displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemGlyph<'a> {
    /// Icon key for the host's glyph service.
    Icon(&'a str),
    Label(&'a str),
}

impl<'a> ItemGlyph<'a> {
    pub fn of(item: &'a Item) -> Self {
        match item.icon.as_deref() {
            Some(icon) if icon != EMPTY_ICON => Self::Icon(icon),
            _ => Self::Label(&item.label),
        }
    }
}

/// Fill class of an itemset arc.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcFill {
    /// The root and single-item extensions are drawn plain.
    Plain,
    /// Colored by the host's palette, keyed by [`itemset_key`].
    Keyed(String),
}

impl ArcFill {
    pub fn of(dataset: &Dataset, itemset: ItemsetIndex, root: &RootItemset) -> Self {
        let members = dataset.members(itemset);
        if members.len() <= root.items.len() + 1 {
            Self::Plain
        } else {
            let ids: alloc::vec::Vec<&str> = dataset.ids(members).collect();
            Self::Keyed(itemset_key(&ids))
        }
    }
}

/// Element id key of an itemset (see [`ScopeId::path_id`]).
pub fn itemset_path_key(dataset: &Dataset, itemset: ItemsetIndex) -> String {
    let ids: alloc::vec::Vec<&str> = dataset.ids(dataset.members(itemset)).collect();
    itemset_key(&ids)
}

/// Support text shown on an itemset arc.
///
/// Empty for the root itemset itself and for non-positive values.
pub fn support_label(itemset: ItemsetIndex, value: f64, root: &RootItemset) -> String {
    if root.itemset == Some(itemset) || value <= 0.0 {
        String::new()
    } else {
        format!("{value:.2}")
    }
}

/// Outer-edge label for itemsets that add exactly one item to the root.
pub fn single_item_label<'a>(
    dataset: &'a Dataset,
    itemset: ItemsetIndex,
    root: &RootItemset,
) -> Option<&'a str> {
    let mut extra = dataset
        .members(itemset)
        .iter()
        .filter(|&&m| !root.contains(m));
    let only = *extra.next()?;
    if extra.next().is_some() {
        return None;
    }
    dataset.item(only).map(|item| value_label(&item.label))
}
