//! A headless circular drill-down layout engine for frequent itemsets.
//!
//! For animated transitions and path output, see the `sunburst-adapter` crate.
//!
//! Items are drawn as sectors of an inner ring; itemsets as arcs spanning their members, with a
//! radius proportional to their support. Clicking drills into an itemset (it becomes the *root*
//! of the detail ring) or zooms the outer ring onto its members. An optional overview ring keeps
//! a global map of the current scope.
//!
//! The crate is split along the data flow:
//! - [`geometry`]: pure angle/radius assignment for one ring
//! - [`Ring`]: per-ring selection state and click semantics
//! - [`Visualization`]: both rings, their cross-ring effects, links and reset control
//!
//! It is UI-agnostic. A rendering layer is expected to:
//! - forward clicks on item sectors, itemset arcs and labels
//! - read the derived layout after each update (or subscribe via `on_change`)
//! - resolve icon keys and itemset color keys with its own services
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dataset;
mod error;
pub mod geometry;
mod key;
pub mod labels;
mod links;
mod options;
mod ring;
mod scale;
mod selection;
mod types;
mod visualization;

#[cfg(test)]
mod tests;

pub use dataset::Dataset;
pub use error::Error;
pub use labels::{ArcFill, ItemGlyph, ScopeId};
pub use links::LinkGeometry;
pub use options::{OnChangeCallback, VisualizationOptions};
pub use ring::{Click, Effect, Ring, RingLayout};
pub use scale::{RadiusScale, RingGeometry};
pub use selection::{RootItemset, Selection};
pub use types::{
    Item, ItemAngles, ItemIndex, Itemset, ItemsetArc, ItemsetIndex, RingKind, VisualizationData,
};
pub use visualization::Visualization;
