// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_pick --heading-base-level=0

//! Arbor Pick: maps a pointer position to the nearest meaningful datum of a
//! figure, for tooltips.
//!
//! The single entry point is [`pick`]. It resolves the subplot under the
//! cursor, checks the kind against the supported set, and dispatches to the
//! inverse mapping that kind calls for:
//!
//! - **Grid kinds** (heatmap, marginal heatmap, contour, contourf, imshow,
//!   quiver): the cursor maps to a grid cell by linear interpolation between
//!   the first and last sample of each axis; the cell's stored value (or the
//!   `(u, v)` vector for quiver) becomes the tooltip label.
//! - **Pie**: the plot is a single circle; the wedge is found by walking
//!   cumulative sector boundaries clockwise from 12 o'clock.
//! - **Everything else** (line, scatter, stem, stairs, hexbin, shade): a
//!   nearest-Euclidean-distance search in device pixels over every point of
//!   every series, bounded by a ±50 px search window and a 50 px hit
//!   radius.
//!
//! A miss (unsupported kind, cursor on the figure background, cell index
//! off the grid, everything farther than the radius) is `None`; there is
//! no sentinel record to check. Labels are owned strings resolved against
//! the subplot's legend in series order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use arbor_scene::{DataStore, Figure, PlotKind, Series, Subplot};
//! use arbor_pick::pick;
//!
//! let mut store = DataStore::default();
//! let x = store.insert("x", vec![100.0, 200.0, 300.0]);
//! let y = store.insert("y", vec![300.0, 300.0, 300.0]);
//!
//! let mut figure = Figure::new(600.0, 600.0);
//! let mut subplot = Subplot::new(
//!     PlotKind::Scatter,
//!     Rect::new(0.0, 0.0, 1.0, 1.0),
//!     Rect::new(0.0, 0.0, 600.0, 600.0),
//! );
//! subplot.series.push(Series {
//!     x: Some(x),
//!     y: Some(y),
//!     ..Series::default()
//! });
//! figure.add_subplot(subplot);
//!
//! let tooltip = pick(&figure, &store, 205, 300).unwrap();
//! assert_eq!(tooltip.x, 200.0);
//! ```

mod grids;
mod nearest;
mod pick;
mod pie;
mod tooltip;

pub use pick::{pick, PICK_RADIUS_PX};
pub use tooltip::Tooltip;
