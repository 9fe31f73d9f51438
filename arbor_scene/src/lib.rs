// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_scene --heading-base-level=0

//! Arbor Scene: the persistent description of a multi-subplot figure.
//!
//! A [`Figure`] owns a set of non-overlapping [`Subplot`]s, each with its own
//! NDC viewport, world-space window, and [`PlotKind`]. Subplots own
//! [`Series`] which reference coordinate arrays in a shared [`DataStore`]
//! through generational [`DataKey`] handles. An external renderer reads this
//! model; the interaction crates mutate it.
//!
//! ## Scene shape
//!
//! - [`Figure`]: pixel size plus subplots; resolves NDC points to subplots
//!   by viewport containment.
//! - [`Subplot`]: viewport/window rectangles, kind, orientation, optional 3D
//!   pose, cached axis limits, axis labels, pending pan/zoom descriptor, and
//!   the marginal-heatmap highlight indices.
//! - [`Series`]: per-dataset handles for the `x`/`y`/`z`/`u`/`v` roles and
//!   the contour-resampled `px`/`py`/`pz` roles.
//! - [`Legend`]: the ordered label list consulted by tooltip lookups.
//! - [`Panzoom`]: a pending pan/zoom instruction. Its presence on a subplot
//!   tells the renderer to recompute that subplot's viewport/window before
//!   the next draw and then clear it; it is never attached to a series.
//!
//! ## Data store
//!
//! [`DataStore`] is an arena of named numeric sequences. Handles are
//! generational: removing an entry invalidates outstanding keys to its slot,
//! and lookups through stale keys return `None` instead of aliasing newer
//! data. Sequences are shared by reference: every series naming the same
//! key reads the same slice, and reads never copy.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use arbor_scene::{DataStore, Figure, PlotKind, Series, Subplot};
//!
//! let mut store = DataStore::default();
//! let x = store.insert("x", vec![0.0, 1.0, 2.0]);
//! let y = store.insert("y", vec![1.0, 4.0, 9.0]);
//!
//! let mut figure = Figure::new(800.0, 600.0);
//! let mut subplot = Subplot::new(
//!     PlotKind::Line,
//!     Rect::new(0.1, 0.1, 0.9, 0.7),
//!     Rect::new(0.0, 0.0, 2.0, 9.0),
//! );
//! subplot.series.push(Series {
//!     x: Some(x),
//!     y: Some(y),
//!     ..Series::default()
//! });
//! let id = figure.add_subplot(subplot);
//!
//! assert_eq!(figure.subplot_at_ndc(Point::new(0.5, 0.5)), Some(id));
//! assert_eq!(figure.subplot_at_ndc(Point::new(0.95, 0.95)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod figure;
mod kind;

pub use data::{DataKey, DataStore};
pub use figure::{Figure, Legend, Panzoom, Pose3d, Series, Subplot, SubplotId};
pub use kind::{Orientation, PlotKind};
