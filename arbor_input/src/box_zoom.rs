// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-zoom geometry: turning a dragged selection box into the focus/factor
//! pair a pan/zoom descriptor carries, plus the device-pixel preview
//! rectangle hosts draw while the drag is in progress.

use arbor_coords::DeviceMap;
use arbor_scene::{Figure, SubplotId};
use kurbo::{Point, Vec2};

/// Result of resolving a selection box against a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxZoom {
    /// The subplot the box resolved to.
    pub subplot: SubplotId,
    /// NDC focus offset from the subplot's viewport midpoint.
    pub focus: Vec2,
    /// Zoom factor along x.
    pub factor_x: f64,
    /// Zoom factor along y.
    pub factor_y: f64,
}

/// Device-pixel rectangle of the region a box zoom will display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxGeometry {
    /// Left edge in device pixels.
    pub x: i32,
    /// Top edge in device pixels.
    pub y: i32,
    /// Width in device pixels.
    pub width: i32,
    /// Height in device pixels.
    pub height: i32,
}

/// Computes the zoom focus and per-axis factors for a selection box.
///
/// `(x1, y1)` is the fixed corner of the drag. Factors are the box size
/// relative to the owning subplot's viewport size in device pixels. With
/// `keep_aspect_ratio` the smaller factor wins on both axes and the box edge
/// opposite the fixed corner is re-derived, so the zoomed region keeps the
/// window's proportions. The focus is the NDC offset between the (possibly
/// adjusted) box midpoint and the viewport midpoint.
///
/// Returns `None` when the box is degenerate or none of its corners lands
/// in a subplot.
#[must_use]
pub fn focus_and_factor_from_box(
    figure: &Figure,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    keep_aspect_ratio: bool,
) -> Option<BoxZoom> {
    if x1 == x2 || y1 == y2 {
        return None;
    }
    let map = DeviceMap::new(figure.width(), figure.height());
    let m = map.scale();
    let height = figure.height();

    let (x1, y1, x2, y2) = (f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2));
    let mut ndc_left = x1.min(x2) / m;
    let mut ndc_right = x1.max(x2) / m;
    let mut ndc_bottom = (height - y1.max(y2)) / m;
    let mut ndc_top = (height - y1.min(y2)) / m;

    let corners = [
        Point::new(ndc_left, ndc_bottom),
        Point::new(ndc_right, ndc_bottom),
        Point::new(ndc_left, ndc_top),
        Point::new(ndc_right, ndc_top),
    ];
    let id = figure.subplot_at_ndc_points(&corners)?;
    let viewport = figure.subplot(id)?.viewport;

    // Box size relative to the viewport's device-pixel size; the figure's
    // workstation window (its NDC extent) relates the two.
    let ws = map.ndc_extent();
    let mut factor_x = (x1 - x2).abs() / (figure.width() * viewport.width() / ws.width());
    let mut factor_y = (y1 - y2).abs() / (figure.height() * viewport.height() / ws.height());

    if keep_aspect_ratio {
        // Equalize on the smaller factor and re-derive the box edge opposite
        // the fixed corner (x1, y1) so the selection midpoint stays anchored
        // to the drag origin.
        if factor_x <= factor_y {
            factor_y = factor_x;
            if y1 < y2 {
                ndc_bottom = ndc_top - factor_y * viewport.height();
            } else {
                ndc_top = ndc_bottom + factor_y * viewport.height();
            }
        } else {
            factor_x = factor_y;
            if x1 < x2 {
                ndc_right = ndc_left + factor_x * viewport.width();
            } else {
                ndc_left = ndc_right - factor_x * viewport.width();
            }
        }
    }

    let center = viewport.center();
    Some(BoxZoom {
        subplot: id,
        focus: Vec2::new(
            (ndc_left + ndc_right) / 2.0 - center.x,
            (ndc_bottom + ndc_top) / 2.0 - center.y,
        ),
        factor_x,
        factor_y,
    })
}

/// Computes the device-pixel rectangle a box zoom will display.
///
/// This is the preview hosts draw during a drag: the region of the current
/// viewport that ends up filling it once the descriptor is applied. Derived
/// from the focus/factor pair, the subplot viewport, and the figure's
/// workstation window (the NDC extent of the figure surface).
#[must_use]
pub fn box_geometry(
    figure: &Figure,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    keep_aspect_ratio: bool,
) -> Option<BoxGeometry> {
    let zoom = focus_and_factor_from_box(figure, x1, y1, x2, y2, keep_aspect_ratio)?;
    let map = DeviceMap::new(figure.width(), figure.height());
    let ws = map.ndc_extent();
    let viewport = figure.subplot(zoom.subplot)?.viewport;
    let center = viewport.center();

    let focus_x = center.x + zoom.focus.x;
    let focus_y = center.y + zoom.focus.y;
    let width = zoom.factor_x * figure.width() * viewport.width() / ws.width();
    let height = zoom.factor_y * figure.height() * viewport.height() / ws.height();
    // Shrinking the viewport rect toward the focus point by the zoom factors
    // gives the top-left corner of the displayed region in NDC.
    let origin = map.ndc_to_device(Point::new(
        focus_x - (focus_x - viewport.x0) * zoom.factor_x,
        focus_y - (focus_y - viewport.y1) * zoom.factor_y,
    ));

    Some(BoxGeometry {
        x: origin.x.round() as i32,
        y: origin.y.round() as i32,
        width: width.round() as i32,
        height: height.round() as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_scene::{PlotKind, Subplot};
    use kurbo::Rect;

    // 800x600 figure with one subplot on the NDC rect [0.1, 0.6] x [0.1, 0.6].
    // In device pixels that viewport spans x in [80, 480] and y in [120, 520].
    fn figure() -> Figure {
        let mut figure = Figure::new(800.0, 600.0);
        figure.add_subplot(Subplot::new(
            PlotKind::Line,
            Rect::new(0.1, 0.1, 0.6, 0.6),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ));
        figure
    }

    #[test]
    fn keep_aspect_ratio_forces_equal_factors() {
        let figure = figure();
        let zoom = focus_and_factor_from_box(&figure, 100, 150, 300, 250, true).unwrap();
        assert_eq!(zoom.factor_x, zoom.factor_y);
        // The smaller factor wins: 100px of 400px viewport height.
        assert!((zoom.factor_x - 0.25).abs() < 1e-12);
    }

    #[test]
    fn free_aspect_keeps_per_axis_factors() {
        let figure = figure();
        let zoom = focus_and_factor_from_box(&figure, 100, 150, 300, 250, false).unwrap();
        assert!((zoom.factor_x - 0.5).abs() < 1e-12);
        assert!((zoom.factor_y - 0.25).abs() < 1e-12);
    }

    #[test]
    fn box_outside_every_subplot_fails() {
        let figure = figure();
        assert_eq!(
            focus_and_factor_from_box(&figure, 600, 10, 700, 100, true),
            None
        );
    }

    #[test]
    fn degenerate_box_fails() {
        let figure = figure();
        assert_eq!(
            focus_and_factor_from_box(&figure, 100, 150, 100, 250, true),
            None
        );
        assert_eq!(
            focus_and_factor_from_box(&figure, 100, 150, 300, 150, true),
            None
        );
    }

    #[test]
    fn centered_box_has_zero_focus() {
        let figure = figure();
        // Centered on the viewport midpoint (280, 320), half the size.
        let zoom = focus_and_factor_from_box(&figure, 180, 220, 380, 420, true).unwrap();
        assert!(zoom.focus.x.abs() < 1e-12);
        assert!(zoom.focus.y.abs() < 1e-12);
        assert!((zoom.factor_x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn identity_box_reproduces_viewport_rect() {
        let figure = figure();
        let geometry = box_geometry(&figure, 80, 120, 480, 520, true).unwrap();
        assert_eq!(
            geometry,
            BoxGeometry {
                x: 80,
                y: 120,
                width: 400,
                height: 400,
            }
        );
    }

    #[test]
    fn aspect_adjustment_anchors_the_fixed_corner() {
        let figure = figure();
        // Drag from the top-left fixed corner; x span 200px, y span 100px.
        // The y factor is the smaller one, so the x edge opposite the fixed
        // corner is re-derived while the fixed corner's edge stays put.
        let zoom = focus_and_factor_from_box(&figure, 100, 150, 300, 250, true).unwrap();
        // ndc_left stays at the fixed corner, ndc_right = left + 0.25 * 0.5.
        let expected_mid_x = 100.0 / 800.0 + 0.25 * 0.5 / 2.0;
        let center_x = 0.35;
        assert!((zoom.focus.x - (expected_mid_x - center_x)).abs() < 1e-12);
    }
}
