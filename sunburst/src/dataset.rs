use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::key::LookupMap;
use crate::{Error, Item, ItemIndex, Itemset, ItemsetIndex, VisualizationData};

/// Validated, immutable item and itemset collections shared by both rings.
///
/// Itemsets are stored sorted by descending support, ties broken by ascending item count.
/// Every [`ItemsetIndex`] handed out by this crate refers to that order.
#[derive(Clone, Debug)]
pub struct Dataset {
    items: Vec<Item>,
    itemsets: Vec<Itemset>,
    // Member indices per itemset, in stored order.
    members: Vec<Vec<ItemIndex>>,
    item_lookup: LookupMap<String, ItemIndex>,
    // Sorted member indices → first itemset (in sorted order) with that member set.
    set_lookup: LookupMap<Vec<ItemIndex>, ItemsetIndex>,
}

impl Dataset {
    /// Validates the input collections.
    ///
    /// Fails fast on empty collections, duplicate or empty item ids, itemsets naming unknown
    /// or repeated items, and supports outside `[0, 1]`.
    pub fn new(data: VisualizationData) -> Result<Self, Error> {
        let VisualizationData { items, itemsets } = data;
        if items.is_empty() {
            return Err(Error::NoItems);
        }
        if itemsets.is_empty() {
            return Err(Error::NoItemsets);
        }

        let mut item_lookup = LookupMap::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(Error::EmptyItemId { index });
            }
            if item_lookup.insert(item.id.clone(), index).is_some() {
                return Err(Error::DuplicateItem {
                    id: item.id.clone(),
                });
            }
        }

        let mut resolved = Vec::with_capacity(itemsets.len());
        for (index, itemset) in itemsets.into_iter().enumerate() {
            if !itemset.support.is_finite() || !(0.0..=1.0).contains(&itemset.support) {
                return Err(Error::InvalidSupport {
                    index,
                    support: itemset.support,
                });
            }
            let mut members = Vec::with_capacity(itemset.items.len());
            for id in &itemset.items {
                let Some(&item) = item_lookup.get(id.as_str()) else {
                    return Err(Error::UnknownItem {
                        index,
                        id: id.clone(),
                    });
                };
                if members.contains(&item) {
                    return Err(Error::RepeatedItem {
                        index,
                        id: id.clone(),
                    });
                }
                members.push(item);
            }
            resolved.push((itemset, members));
        }

        // Stable: equal keys keep their input order.
        resolved.sort_by(|(a, _), (b, _)| {
            b.support
                .partial_cmp(&a.support)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.items.len().cmp(&b.items.len()))
        });

        let mut set_lookup = LookupMap::new();
        let mut sorted_itemsets = Vec::with_capacity(resolved.len());
        let mut members = Vec::with_capacity(resolved.len());
        for (index, (itemset, m)) in resolved.into_iter().enumerate() {
            set_lookup.entry(set_key(&m)).or_insert(index);
            sorted_itemsets.push(itemset);
            members.push(m);
        }

        sdebug!(
            items = items.len(),
            itemsets = sorted_itemsets.len(),
            "Dataset::new"
        );

        Ok(Self {
            items,
            itemsets: sorted_itemsets,
            members,
            item_lookup,
            set_lookup,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn itemset_count(&self) -> usize {
        self.itemsets.len()
    }

    pub fn item(&self, index: ItemIndex) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn itemset(&self, index: ItemsetIndex) -> Option<&Itemset> {
        self.itemsets.get(index)
    }

    pub fn item_index(&self, id: &str) -> Option<ItemIndex> {
        self.item_lookup.get(id).copied()
    }

    /// Member item indices of an itemset, in stored order.
    pub fn members(&self, index: ItemsetIndex) -> &[ItemIndex] {
        self.members.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds the itemset whose members equal `items` as a set.
    pub fn find_itemset(&self, items: &[ItemIndex]) -> Option<ItemsetIndex> {
        self.set_lookup.get(set_key(items).as_slice()).copied()
    }

    /// Same as [`Dataset::find_itemset`], keyed by item ids.
    ///
    /// Returns `None` if any id is unknown.
    pub fn find_itemset_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Option<ItemsetIndex> {
        let items = ids
            .iter()
            .map(|id| self.item_index(id.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        self.find_itemset(&items)
    }

    /// Maps item indices back to ids. The ids borrow from the dataset only.
    pub fn ids<'s, 'i>(&'s self, items: &'i [ItemIndex]) -> impl Iterator<Item = &'s str> + 'i
    where
        's: 'i,
    {
        items
            .iter()
            .filter_map(|&i| self.items.get(i).map(|item| item.id.as_str()))
    }
}

fn set_key(items: &[ItemIndex]) -> Vec<ItemIndex> {
    let mut key = items.to_vec();
    key.sort_unstable();
    key.dedup();
    key
}
