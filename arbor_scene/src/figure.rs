// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::data::DataKey;
use crate::kind::{Orientation, PlotKind};

/// Identifier for a subplot within a [`Figure`].
///
/// Subplot slots are stable for the lifetime of the figure's layout; when a
/// figure's content is rebuilt the whole subplot set is replaced and old
/// identifiers must be discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubplotId(pub(crate) u32);

impl SubplotId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A pending pan/zoom instruction attached to a subplot.
///
/// `focus` is an NDC offset relative to the subplot's viewport midpoint;
/// the factors scale the window per axis. Zero factors encode a pure pan.
/// The external renderer consumes the descriptor when it recomputes the
/// subplot's viewport/window and then clears it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panzoom {
    /// NDC focus offset from the viewport midpoint.
    pub focus: Vec2,
    /// Scale factor along the x axis; `0.0` means "pan only".
    pub factor_x: f64,
    /// Scale factor along the y axis; `0.0` means "pan only".
    pub factor_y: f64,
}

impl Panzoom {
    /// A zoom about `focus` with equal factors on both axes.
    #[must_use]
    pub fn zoom(focus: Vec2, factor: f64) -> Self {
        Self {
            focus,
            factor_x: factor,
            factor_y: factor,
        }
    }

    /// A pure pan by the given NDC shift.
    #[must_use]
    pub fn pan(shift: Vec2) -> Self {
        Self {
            focus: shift,
            factor_x: 0.0,
            factor_y: 0.0,
        }
    }
}

/// Orientation of a 3D projection: azimuth and elevation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose3d {
    /// Azimuth (rotation about the vertical axis) in degrees.
    pub phi: f64,
    /// Elevation/tilt in degrees, valid within `[0, 180]`.
    pub theta: f64,
}

impl Default for Pose3d {
    fn default() -> Self {
        Self {
            phi: 40.0,
            theta: 70.0,
        }
    }
}

/// One drawn dataset within a subplot.
///
/// Fields are handles into the shared [`DataStore`](crate::DataStore); the
/// roles a kind actually reads depend on that kind's inverse mapping. The
/// `px`/`py`/`pz` roles hold the resampled grids contour kinds are drawn
/// from, which is also what their tooltip lookups consult.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Series {
    /// X coordinates.
    pub x: Option<DataKey>,
    /// Y coordinates.
    pub y: Option<DataKey>,
    /// Grid values for image-like kinds, row-major over `y.len() * x.len()`.
    pub z: Option<DataKey>,
    /// Horizontal vector components (quiver).
    pub u: Option<DataKey>,
    /// Vertical vector components (quiver).
    pub v: Option<DataKey>,
    /// Resampled x grid (contour kinds).
    pub px: Option<DataKey>,
    /// Resampled y grid (contour kinds).
    pub py: Option<DataKey>,
    /// Resampled z grid (contour kinds).
    pub pz: Option<DataKey>,
}

/// A subplot's legend: the ordered label list for its series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    /// Labels in series order.
    pub labels: Vec<String>,
}

/// A rectangular region of the figure with its own coordinate system.
#[derive(Clone, Debug)]
pub struct Subplot {
    /// NDC rectangle this subplot occupies on the figure.
    pub viewport: Rect,
    /// World-space rectangle the viewport currently displays.
    pub window: Rect,
    /// Plot kind, governing interaction and tooltip rules.
    pub kind: PlotKind,
    /// Axis orientation; `Vertical` swaps series x/y roles.
    pub orientation: Orientation,
    /// 3D pose for 3D kinds. Ignored for 2D kinds.
    pub pose: Option<Pose3d>,
    /// Cached axis limits in world coordinates, when the renderer has
    /// computed them. Tooltip lookups clamp their search window to these.
    pub limits: Option<Rect>,
    /// X axis label. Tooltip records fall back to `"x"` when unset.
    pub x_label: Option<String>,
    /// Y axis label. Tooltip records fall back to `"y"` when unset.
    pub y_label: Option<String>,
    /// Set to ask the renderer to restore this subplot's initial ranges.
    pub reset_ranges: bool,
    /// Pending pan/zoom descriptor, if any.
    pub panzoom: Option<Panzoom>,
    /// Marginal-heatmap highlight cell `(xind, yind)`; `None` when the
    /// pointer is off the grid.
    pub marginal_index: Option<(usize, usize)>,
    /// Datasets drawn in this subplot.
    pub series: Vec<Series>,
    /// Legend with ordered series labels, if the subplot has one.
    pub legend: Option<Legend>,
}

impl Subplot {
    /// Creates a subplot of the given kind with its viewport and window
    /// rectangles. 3D kinds start with the default pose.
    #[must_use]
    pub fn new(kind: PlotKind, viewport: Rect, window: Rect) -> Self {
        Self {
            viewport,
            window,
            kind,
            orientation: Orientation::default(),
            pose: kind.is_3d().then(Pose3d::default),
            limits: None,
            x_label: None,
            y_label: None,
            reset_ranges: false,
            panzoom: None,
            marginal_index: None,
            series: Vec::new(),
            legend: None,
        }
    }

    /// Midpoint of the viewport rectangle in NDC.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        self.viewport.center()
    }

    /// Attaches a pending pan/zoom descriptor, replacing any previous one
    /// the renderer has not consumed yet.
    pub fn attach_panzoom(&mut self, panzoom: Panzoom) {
        self.panzoom = Some(panzoom);
    }
}

/// The whole drawable surface: pixel size plus owned subplots.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    width: f64,
    height: f64,
    subplots: Vec<Subplot>,
}

impl Figure {
    /// Creates a figure of the given device-pixel size with no subplots.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            subplots: Vec::new(),
        }
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

    /// Resizes the figure surface. Subplot viewports are NDC-relative and
    /// keep their values; the renderer re-derives pixel placement.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Appends a subplot and returns its identifier.
    pub fn add_subplot(&mut self, subplot: Subplot) -> SubplotId {
        let id = SubplotId(u32::try_from(self.subplots.len()).expect("subplot count exceeds u32"));
        self.subplots.push(subplot);
        id
    }

    /// All subplots in insertion order.
    #[must_use]
    pub fn subplots(&self) -> &[Subplot] {
        &self.subplots
    }

    /// Mutable access to all subplots.
    pub fn subplots_mut(&mut self) -> &mut [Subplot] {
        &mut self.subplots
    }

    /// The subplot behind `id`, if it is still valid for this figure.
    #[must_use]
    pub fn subplot(&self, id: SubplotId) -> Option<&Subplot> {
        self.subplots.get(id.idx())
    }

    /// Mutable access to the subplot behind `id`.
    pub fn subplot_mut(&mut self, id: SubplotId) -> Option<&mut Subplot> {
        self.subplots.get_mut(id.idx())
    }

    /// Resolves the subplot whose viewport contains the given NDC point.
    ///
    /// Containment is inclusive on all edges. Returns `None` when the point
    /// lands on the figure background; viewports do not overlap, so at most
    /// one subplot matches.
    #[must_use]
    pub fn subplot_at_ndc(&self, p: Point) -> Option<SubplotId> {
        self.subplots
            .iter()
            .position(|s| contains_inclusive(s.viewport, p))
            .map(|idx| SubplotId(idx as u32))
    }

    /// Resolves a subplot from several NDC points, using the first point
    /// that lands in any subplot as the representative.
    #[must_use]
    pub fn subplot_at_ndc_points(&self, points: &[Point]) -> Option<SubplotId> {
        points.iter().find_map(|&p| self.subplot_at_ndc(p))
    }

    /// Sets the reset-ranges flag on every subplot (the figure-background
    /// default for the reset gesture).
    pub fn reset_ranges_all(&mut self) {
        for subplot in &mut self.subplots {
            subplot.reset_ranges = true;
        }
    }
}

/// Inclusive rectangle containment.
///
/// `kurbo::Rect::contains` is half-open; resolution wants points on the
/// max edges (for example box-zoom corners flush with the viewport) to
/// count as inside.
fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_subplot_figure() -> (Figure, SubplotId, SubplotId) {
        let mut figure = Figure::new(800.0, 600.0);
        let left = figure.add_subplot(Subplot::new(
            PlotKind::Line,
            Rect::new(0.0, 0.0, 0.5, 0.75),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ));
        let right = figure.add_subplot(Subplot::new(
            PlotKind::Heatmap,
            Rect::new(0.5, 0.0, 1.0, 0.75),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ));
        (figure, left, right)
    }

    #[test]
    fn resolution_picks_containing_subplot() {
        let (figure, left, right) = two_subplot_figure();
        assert_eq!(figure.subplot_at_ndc(Point::new(0.25, 0.3)), Some(left));
        assert_eq!(figure.subplot_at_ndc(Point::new(0.75, 0.3)), Some(right));
        assert_eq!(figure.subplot_at_ndc(Point::new(0.25, 0.9)), None);
    }

    #[test]
    fn resolution_is_inclusive_on_edges() {
        let (figure, left, _) = two_subplot_figure();
        assert_eq!(figure.subplot_at_ndc(Point::new(0.0, 0.0)), Some(left));
        // The shared edge belongs to the first subplot in insertion order.
        assert_eq!(figure.subplot_at_ndc(Point::new(0.5, 0.75)), Some(left));
    }

    #[test]
    fn multi_point_resolution_uses_first_hit() {
        let (figure, _, right) = two_subplot_figure();
        let points = [Point::new(0.25, 0.9), Point::new(0.75, 0.3)];
        assert_eq!(figure.subplot_at_ndc_points(&points), Some(right));
        assert_eq!(
            figure.subplot_at_ndc_points(&[Point::new(0.25, 0.9)]),
            None
        );
    }

    #[test]
    fn reset_ranges_all_touches_every_subplot() {
        let (mut figure, _, _) = two_subplot_figure();
        figure.reset_ranges_all();
        assert!(figure.subplots().iter().all(|s| s.reset_ranges));
    }

    #[test]
    fn new_3d_subplot_gets_default_pose() {
        let subplot = Subplot::new(
            PlotKind::Surface,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(-1.0, -1.0, 1.0, 1.0),
        );
        assert!(subplot.pose.is_some());
        let subplot = Subplot::new(
            PlotKind::Line,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(-1.0, -1.0, 1.0, 1.0),
        );
        assert!(subplot.pose.is_none());
    }

    #[test]
    fn attach_panzoom_replaces_pending_descriptor() {
        let mut subplot = Subplot::new(
            PlotKind::Line,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        );
        subplot.attach_panzoom(Panzoom::zoom(Vec2::new(0.1, 0.1), 0.9));
        subplot.attach_panzoom(Panzoom::pan(Vec2::new(-0.2, 0.0)));
        let pz = subplot.panzoom.unwrap();
        assert_eq!(pz.factor_x, 0.0);
        assert_eq!(pz.factor_y, 0.0);
        assert_eq!(pz.focus, Vec2::new(-0.2, 0.0));
    }
}
