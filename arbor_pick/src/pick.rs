// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_coords::{DeviceMap, Frame};
use arbor_scene::{DataStore, Figure, PlotKind, Subplot};
use kurbo::{Point, Rect};
use tracing::debug;

use crate::grids;
use crate::nearest;
use crate::pie;
use crate::tooltip::Tooltip;

/// Hit radius in device pixels: both the half-extent of the world-space
/// search window and the maximum distance at which a datum still qualifies.
pub const PICK_RADIUS_PX: f64 = 50.0;

/// Everything the per-kind lookups need about the subplot under the cursor.
pub(crate) struct Lookup<'a> {
    pub(crate) subplot: &'a Subplot,
    pub(crate) store: &'a DataStore,
    pub(crate) map: DeviceMap,
    pub(crate) frame: Frame,
    pub(crate) cursor_px: Point,
    /// World-space search window around the cursor, clamped to the cached
    /// axis limits.
    pub(crate) search_window: Rect,
    pub(crate) x_label: String,
    pub(crate) y_label: String,
}

/// Maps a pointer position to the nearest meaningful datum.
///
/// Returns `None` when the cursor is on the figure background, the subplot
/// kind does not support tooltips, or no datum qualifies. See the
/// [crate docs](crate) for the per-kind rules.
#[must_use]
pub fn pick(figure: &Figure, store: &DataStore, mouse_x: i32, mouse_y: i32) -> Option<Tooltip> {
    let map = DeviceMap::new(figure.width(), figure.height());
    let cursor_px = Point::new(f64::from(mouse_x), f64::from(mouse_y));
    let ndc = map.device_to_ndc(cursor_px);

    let id = figure.subplot_at_ndc(ndc)?;
    let subplot = figure.subplot(id)?;
    if !subplot.kind.supports_picking() {
        debug!(kind = subplot.kind.name(), "kind does not support tooltips");
        return None;
    }
    let frame = Frame::from_rects(subplot.viewport, subplot.window)?;

    // ±radius around the cursor in world coordinates. Device y grows
    // downward, so the lower world corner comes from the larger device y.
    let mut low = frame.device_to_world(
        &map,
        Point::new(cursor_px.x - PICK_RADIUS_PX, cursor_px.y + PICK_RADIUS_PX),
    );
    let mut high = frame.device_to_world(
        &map,
        Point::new(cursor_px.x + PICK_RADIUS_PX, cursor_px.y - PICK_RADIUS_PX),
    );
    if let Some(limits) = subplot.limits {
        low.x = low.x.max(limits.x0);
        low.y = low.y.max(limits.y0);
        high.x = high.x.min(limits.x1);
        high.y = high.y.min(limits.y1);
    }

    let lookup = Lookup {
        subplot,
        store,
        map,
        frame,
        cursor_px,
        search_window: Rect::new(low.x, low.y, high.x, high.y),
        x_label: subplot.x_label.clone().unwrap_or_else(|| String::from("x")),
        y_label: subplot.y_label.clone().unwrap_or_else(|| String::from("y")),
    };

    let tooltip = match subplot.kind {
        PlotKind::Pie => pie::lookup(&lookup),
        kind if kind.grid_sampled() => grids::lookup(&lookup),
        _ => nearest::lookup(&lookup),
    };
    debug!(
        kind = subplot.kind.name(),
        hit = tooltip.is_some(),
        "tooltip lookup"
    );
    tooltip
}
