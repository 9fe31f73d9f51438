// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_coords --heading-base-level=0

//! Arbor Coords: coordinate transforms for multi-subplot figures.
//!
//! A figure shares one device surface between several subplots, each with its
//! own world coordinate system. This crate provides the pure conversions that
//! chain those spaces together:
//!
//! - [`DeviceMap`]: device pixels ↔ normalized device coordinates (NDC). The
//!   normalization divides by the larger figure dimension so aspect ratio is
//!   preserved, and flips Y (device origin is top-left, NDC origin is
//!   bottom-left).
//! - [`Frame`]: NDC ↔ world, parameterized by a subplot's viewport rectangle
//!   (the NDC region it occupies) and window rectangle (the world region that
//!   viewport currently displays).
//! - [`grid`]: device-space cursor position → grid cell index for regularly
//!   sampled data such as heatmaps.
//!
//! Every conversion is a pure function of its inputs. There is no shared
//! transform state to push, save, or restore; callers that juggle several
//! subplots simply hold several [`Frame`] values.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use arbor_coords::{DeviceMap, Frame};
//!
//! // An 800x600 figure; the subplot occupies the left half in NDC and
//! // currently displays the world region [0, 10] x [0, 5].
//! let map = DeviceMap::new(800.0, 600.0);
//! let frame = Frame::from_rects(
//!     Rect::new(0.0, 0.0, 0.5, 0.75),
//!     Rect::new(0.0, 0.0, 10.0, 5.0),
//! )
//! .unwrap();
//!
//! let world = frame.device_to_world(&map, Point::new(200.0, 300.0));
//! let back = frame.world_to_device(&map, world);
//! assert!((back.x - 200.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - All rectangles are assumed finite; [`Frame::from_rects`] rejects
//!   degenerate (zero width or height) rectangles once, so the per-axis
//!   linear maps are always invertible afterwards.
//! - Rotation between spaces is intentionally unsupported. Figures place
//!   subplots axis-aligned, and the inverse mappings stay per-axis linear.
//!
//! This crate is `no_std`.

#![no_std]

pub mod grid;

mod device;
mod frame;

pub use device::DeviceMap;
pub use frame::Frame;
