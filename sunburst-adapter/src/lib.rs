//! Transition and path rendering utilities for the `sunburst` crate.
//!
//! The `sunburst` crate computes layouts but never animates. This crate provides the
//! framework-neutral pieces an adapter needs to show layout changes smoothly:
//!
//! - [`Tween`] and [`Easing`] over anything that implements [`Lerp`]
//! - [`Track`]: an explicit previous/target pair that re-bases when retargeted mid-flight
//! - [`Controller`]: runs one coordinated transition per click over both rings and the links
//! - [`Renderer`] and [`PathRenderer`]: arcs and connector curves as `kurbo` paths
//!
//! This crate is intentionally framework-agnostic (no SVG/DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod key;
mod render;
mod shape;
mod track;
mod tween;


pub use controller::{
    ArcFrame, Controller, Drawing, FillBlend, FillMix, Frame, LabelFrame, LabelKind,
    TransitionOptions,
};
pub use key::{ShapeKey, ShapeKind};
pub use render::{PathRenderer, Renderer, arc_path, basis_path};
pub use shape::{ArcShape, LinkCurve};
pub use track::Track;
pub use tween::{Easing, Lerp, Tween};
