// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::DeviceMap;

/// A subplot's coordinate frame: the NDC viewport it occupies paired with the
/// world-space window that viewport currently displays.
///
/// Conversions are per-axis linear maps between the two rectangles. A `Frame`
/// is a plain value; constructing one does not touch any shared state, and a
/// caller working across several subplots holds one frame per subplot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    viewport: Rect,
    window: Rect,
}

impl Frame {
    /// Builds a frame from a viewport (NDC) and window (world) rectangle.
    ///
    /// Returns `None` when either rectangle is degenerate (zero width or
    /// height), since the linear maps would not be invertible. Both
    /// rectangles are normalized so `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    pub fn from_rects(viewport: Rect, window: Rect) -> Option<Self> {
        let viewport = viewport.abs();
        let window = window.abs();
        if viewport.width() == 0.0
            || viewport.height() == 0.0
            || window.width() == 0.0
            || window.height() == 0.0
        {
            return None;
        }
        Some(Self { viewport, window })
    }

    /// The NDC viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The world-space window rectangle.
    #[must_use]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Converts an NDC position into world coordinates.
    #[must_use]
    pub fn ndc_to_world(&self, p: Point) -> Point {
        let x = self.window.x0
            + (p.x - self.viewport.x0) * self.window.width() / self.viewport.width();
        let y = self.window.y0
            + (p.y - self.viewport.y0) * self.window.height() / self.viewport.height();
        Point::new(x, y)
    }

    /// Converts a world position into NDC.
    #[must_use]
    pub fn world_to_ndc(&self, p: Point) -> Point {
        let x = self.viewport.x0
            + (p.x - self.window.x0) * self.viewport.width() / self.window.width();
        let y = self.viewport.y0
            + (p.y - self.window.y0) * self.viewport.height() / self.window.height();
        Point::new(x, y)
    }

    /// Converts a device-pixel position into world coordinates.
    #[must_use]
    pub fn device_to_world(&self, map: &DeviceMap, p: Point) -> Point {
        self.ndc_to_world(map.device_to_ndc(p))
    }

    /// Converts a world position into device pixels.
    #[must_use]
    pub fn world_to_device(&self, map: &DeviceMap, p: Point) -> Point {
        map.ndc_to_device(self.world_to_ndc(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::from_rects(
            Rect::new(0.1, 0.1, 0.9, 0.9),
            Rect::new(-5.0, 0.0, 5.0, 20.0),
        )
        .unwrap()
    }

    #[test]
    fn ndc_world_roundtrip() {
        let f = frame();
        let p = Point::new(0.37, 0.62);
        let back = f.world_to_ndc(f.ndc_to_world(p));
        assert!((back.x - p.x).abs() < 1e-12);
        assert!((back.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn viewport_corners_map_to_window_corners() {
        let f = frame();
        let w = f.ndc_to_world(Point::new(0.1, 0.1));
        assert!((w.x + 5.0).abs() < 1e-12);
        assert!(w.y.abs() < 1e-12);
        let w = f.ndc_to_world(Point::new(0.9, 0.9));
        assert!((w.x - 5.0).abs() < 1e-12);
        assert!((w.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn device_world_roundtrip_through_map() {
        let f = frame();
        let map = DeviceMap::new(800.0, 600.0);
        let p = Point::new(321.0, 123.0);
        let back = f.world_to_device(&map, f.device_to_world(&map, p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn degenerate_rects_are_rejected() {
        let ok = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(Frame::from_rects(Rect::new(0.2, 0.0, 0.2, 1.0), ok).is_none());
        assert!(Frame::from_rects(ok, Rect::new(0.0, 3.0, 10.0, 3.0)).is_none());
        assert!(Frame::from_rects(ok, ok).is_some());
    }

    #[test]
    fn swapped_rect_edges_are_normalized() {
        let f = Frame::from_rects(
            Rect::new(0.9, 0.9, 0.1, 0.1),
            Rect::new(5.0, 20.0, -5.0, 0.0),
        )
        .unwrap();
        assert_eq!(f.viewport(), Rect::new(0.1, 0.1, 0.9, 0.9));
        assert_eq!(f.window(), Rect::new(-5.0, 0.0, 5.0, 20.0));
    }
}
