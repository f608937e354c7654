#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Lookup table used for id → index and member-set → itemset resolution.
#[cfg(feature = "std")]
pub(crate) type LookupMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type LookupMap<K, V> = BTreeMap<K, V>;
