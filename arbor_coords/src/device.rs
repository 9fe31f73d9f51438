// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Mapping between device pixels and normalized device coordinates for one
/// figure surface.
///
/// NDC divides both axes by the **larger** figure dimension, so a square in
/// NDC is a square on screen regardless of the figure's aspect ratio. The
/// square figure maps onto `[0, 1] × [0, 1]`; a non-square figure covers
/// `[0, w/m] × [0, h/m]` with `m = max(w, h)`. Device Y grows downward while
/// NDC Y grows upward, so the conversion flips Y against the figure height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceMap {
    width: f64,
    height: f64,
}

impl DeviceMap {
    /// Creates a map for a figure surface of the given pixel size.
    ///
    /// Sizes are expected to be positive; a zero-sized figure has no
    /// meaningful pixel space and yields non-finite conversions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Figure width in device pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Figure height in device pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The normalization scale: the larger of the two figure dimensions.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.width.max(self.height)
    }

    /// The NDC rectangle covered by the whole figure surface.
    ///
    /// `[0, 1] × [0, 1]` for square figures, shortened on the smaller axis
    /// otherwise. This doubles as the workstation window of the figure.
    #[must_use]
    pub fn ndc_extent(&self) -> Rect {
        let m = self.scale();
        Rect::new(0.0, 0.0, self.width / m, self.height / m)
    }

    /// Converts a device-pixel position into NDC.
    #[must_use]
    pub fn device_to_ndc(&self, p: Point) -> Point {
        let m = self.scale();
        Point::new(p.x / m, (self.height - p.y) / m)
    }

    /// Converts an NDC position into device pixels.
    #[must_use]
    pub fn ndc_to_device(&self, p: Point) -> Point {
        let m = self.scale();
        Point::new(p.x * m, self.height - p.y * m)
    }

    /// Converts a device-pixel shift (a delta, not a position) into an NDC
    /// shift.
    ///
    /// Only the normalization scale applies; there is no origin flip for
    /// deltas. The Y sign still inverts because the axes point in opposite
    /// directions.
    #[must_use]
    pub fn device_shift_to_ndc(&self, dx: f64, dy: f64) -> Vec2 {
        let m = self.scale();
        Vec2::new(dx / m, -dy / m)
    }
}
