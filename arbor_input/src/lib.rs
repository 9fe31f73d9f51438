// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_input --heading-base-level=0

//! Arbor Input: turns decoded pointer/keyboard/gesture events into scene
//! mutations.
//!
//! The single mutating entry point is [`apply`]. It normalizes the event's
//! device-pixel payload into NDC, resolves the target subplot by viewport
//! containment, and dispatches on the payload shape, in priority order:
//!
//! 1. **Reset** (`key == "r"`): sets the reset-ranges flag on the resolved
//!    subplot, or on every subplot when the figure background was hit. Any
//!    key event is terminal.
//! 2. **Wheel zoom** (`angle_delta`): derives a factor from the wheel
//!    rotation and attaches a pan/zoom descriptor focused on the cursor.
//! 3. **Explicit-factor zoom** (`factor`): the same with a verbatim
//!    factor. When both are present the wheel branch wins by check order.
//! 4. **Shift** (`xshift`/`yshift`): pans 2D subplots by an NDC shift;
//!    rotates the pose of 3D subplots, clamping elevation to `[0, 180]`.
//! 5. **Box zoom** (`x1, y1, x2, y2`): resolves the subplot from the box
//!    itself via [`focus_and_factor_from_box`] and attaches the resulting
//!    descriptor.
//!
//! The return value reports what happened: [`InputOutcome::Applied`] for a
//! mutation, [`InputOutcome::Unsupported`] for gestures a kind cannot honor
//! (wheel/factor zoom and SHIFT-translate on 3D kinds), and
//! [`InputOutcome::Ignored`] when no gesture matched or no subplot was hit.
//! Partially present fields mean "this gesture is not present"; the
//! dispatcher falls through rather than erroring.
//!
//! Box-geometry queries ([`box_geometry`]) and the 3D probe ([`is_view3d`])
//! share the same resolution logic without mutating anything.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use arbor_scene::{DataStore, Figure, PlotKind, Subplot};
//! use arbor_input::{apply, InputEvent, InputOutcome};
//!
//! let mut figure = Figure::new(800.0, 600.0);
//! figure.add_subplot(Subplot::new(
//!     PlotKind::Line,
//!     Rect::new(0.1, 0.1, 0.9, 0.7),
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//! ));
//! let store = DataStore::default();
//!
//! // Wheel-zoom at a pixel inside the subplot.
//! let outcome = apply(&mut figure, &store, &InputEvent::wheel(400, 300, 120.0));
//! assert_eq!(outcome, InputOutcome::Applied);
//! assert!(figure.subplots()[0].panzoom.is_some());
//! ```

mod box_zoom;
mod event;
mod process;

pub use box_zoom::{box_geometry, focus_and_factor_from_box, BoxGeometry, BoxZoom};
pub use event::{InputEvent, Modifiers};
pub use process::{apply, is_view3d, InputOutcome};
